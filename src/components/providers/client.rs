use clubfinder_api::Client;
use yew::context::ContextProvider;
use yew::prelude::*;

use super::Provider;
use crate::statics::config;

/// Provides the API [`Client`] to all children.
pub struct ClientProvider {
    client: Client,
}

impl Component for ClientProvider {
    type Message = ();
    type Properties = Properties;

    fn create(_ctx: &Context<Self>) -> Self {
        let client = Client::new(config().api_base());

        log::debug!("Using api base {}", client.base_url());

        Self { client }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<Client> context={self.client.clone()}>
                { for ctx.props().children.iter() }
            </ContextProvider<Client>>
        }
    }
}

impl Provider<Client> for ClientProvider {
    fn get<C>(ctx: &Context<C>) -> Client
    where
        C: Component,
    {
        let (client, _) = ctx
            .link()
            .context::<Client>(Callback::noop())
            .expect("No ClientProvider given");

        client
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Properties {
    pub children: Children,
}
