use clubfinder_api::clubs::Club;
use clubfinder_api::Client;
use yew::{html, Component, Context, Html};

use crate::components::providers::{ClientProvider, Provider};
use crate::components::{Detail, HeroBanner, SearchClubs};
use crate::consts::CLUBS_ANCHOR;
use crate::utils::FetchData;

/// The landing page.
///
/// `Home` owns the displayed club list. It loads all clubs once and afterwards only replaces
/// the list with the results handed up by [`SearchClubs`].
#[derive(Debug)]
pub struct Home {
    clubs: FetchData<Vec<Club>>,
}

impl Component for Home {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let client: Client = ClientProvider::get(ctx);

        ctx.link().send_future(async move {
            let msg = FetchData::from(client.clubs().list().await);

            Message::Update(msg)
        });

        Self {
            clubs: FetchData::new(),
        }
    }

    #[inline]
    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Update(clubs) => self.clubs = clubs,
        }

        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_search = ctx
            .link()
            .callback(|clubs: Vec<Club>| Message::Update(FetchData::new_with_value(clubs)));

        let clubs = self.clubs.render(|clubs| {
            if clubs.is_empty() {
                return html! {
                    <p class="cf-clubs-empty">{ "No clubs found" }</p>
                };
            }

            clubs
                .iter()
                .map(|club| {
                    html! {
                        <Detail club={club.clone()} />
                    }
                })
                .collect()
        });

        html! {
            <>
                <HeroBanner />
                <SearchClubs {on_search} />
                <div id={CLUBS_ANCHOR} class="cf-clubs">
                    { clubs }
                </div>
            </>
        }
    }
}

#[derive(Debug)]
pub enum Message {
    Update(FetchData<Vec<Club>>),
}
