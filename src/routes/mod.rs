pub mod home;

use crate::components::providers::ClientProvider;
use yew::prelude::*;

use home::Home;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ClientProvider>
                <div class="main-wrapper">
                    <Home />
                </div>
            </ClientProvider>
        }
    }
}
