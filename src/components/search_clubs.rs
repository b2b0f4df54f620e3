use std::future::Future;

use clubfinder_api::clubs::Club;
use clubfinder_api::{Client, Result};
use yew::{html, Callback, Component, Context, Html, Properties};

use crate::components::button::Button;
use crate::components::input::Input;
use crate::components::providers::{ClientProvider, Provider};
use crate::search::{run_search, Query};

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    /// Receives the clubs matching a search.
    pub on_search: Callback<Vec<Club>>,
}

/// A search bar filtering the clubs of the backend by name and category.
///
/// Every search fetches the full club list and filters it locally. The input is cleared as soon
/// as a search starts. Searches are not cancelled, so with multiple searches in flight the last
/// response to arrive wins.
#[derive(Debug)]
pub struct SearchClubs {
    query: Query,
}

impl SearchClubs {
    /// Starts a search for the current query and clears it.
    ///
    /// `fetch` is only called if the query is not empty. Returns the search to drive to
    /// completion, or `None` if there is nothing to search for.
    fn begin_search<F, Fut>(
        &mut self,
        fetch: F,
        on_search: Callback<Vec<Club>>,
    ) -> Option<impl Future<Output = ()>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Club>>>,
    {
        let query = self.query.take()?;

        Some(run_search(fetch(), query, on_search))
    }
}

impl Component for SearchClubs {
    type Message = Message;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            query: Query::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Input(value) => {
                self.query = Query::new(&value);
                true
            }
            Message::Search => {
                let client: Client = ClientProvider::get(ctx);
                let on_search = ctx.props().on_search.clone();

                let search = match self.begin_search(
                    move || async move { client.clubs().list().await },
                    on_search,
                ) {
                    Some(search) => search,
                    None => return false,
                };

                ctx.link().send_future(async move {
                    search.await;
                    Message::Done
                });

                true
            }
            Message::Done => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(Message::Input);
        let onclick = ctx.link().callback(|_: ()| Message::Search);

        html! {
            <div class="cf-search">
                <h2 class="cf-search-title">
                    { "Awesome Clubs You" }
                    <br />
                    { "Should Join" }
                </h2>
                <div class="cf-search-bar">
                    <Input value={self.query.as_str().to_owned()} placeholder="Search Clubs" {oninput} />
                    <Button classes="search-btn" title="Search" {onclick}>
                        { "Search" }
                    </Button>
                </div>
            </div>
        }
    }
}

#[derive(Debug)]
pub enum Message {
    Input(String),
    Search,
    /// A search completed. The result was already handed to the parent.
    Done,
}
