//! Client-side club search.
//!
//! A search runs in two stages: the full club list is fetched, then filtered against the query.
//! The fetch is any future resolving to the list, so the filter and delivery logic can run
//! without a backend.
use std::future::Future;
use std::mem;

use clubfinder_api::clubs::Club;
use clubfinder_api::{Error, Result};
use yew::Callback;

/// A lowercase search query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Creates a new `Query` from raw user input. The input is lowercased but not trimmed.
    pub fn new(input: &str) -> Self {
        Self(input.to_lowercase())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Takes the query out, leaving an empty query in its place. Returns `None` and leaves
    /// `self` untouched if the query is empty.
    pub fn take(&mut self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(mem::take(self))
        }
    }
}

/// Returns all `clubs` matching `query`, keeping their order.
pub fn filter(clubs: Vec<Club>, query: &Query) -> Vec<Club> {
    clubs
        .into_iter()
        .filter(|club| club.matches(query.as_str()))
        .collect()
}

/// The result of a search.
#[derive(Debug)]
pub enum Outcome {
    /// The filtered clubs. May be empty if nothing matched.
    Deliver(Vec<Club>),
    /// The backend returned no clubs at all. The current list is kept.
    Skip,
    Failed(Error),
}

impl Outcome {
    pub fn resolve(result: Result<Vec<Club>>, query: &Query) -> Self {
        match result {
            Ok(clubs) if clubs.is_empty() => Self::Skip,
            Ok(clubs) => Self::Deliver(filter(clubs, query)),
            Err(err) => Self::Failed(err),
        }
    }

    /// Hands the clubs to `on_search`. Only [`Outcome::Deliver`] invokes the callback.
    pub fn deliver(self, on_search: &Callback<Vec<Club>>) {
        match self {
            Self::Deliver(clubs) => {
                log::debug!("Search matched {} clubs", clubs.len());
                on_search.emit(clubs);
            }
            Self::Skip => log::debug!("Backend returned no clubs, keeping current list"),
            Self::Failed(err) => log::error!("Failed to search clubs: {}", err),
        }
    }
}

/// Awaits `fetch`, filters the clubs against `query` and hands the matches to `on_search`.
///
/// Errors are only logged and never reach `on_search`.
pub async fn run_search<F>(fetch: F, query: Query, on_search: Callback<Vec<Club>>)
where
    F: Future<Output = Result<Vec<Club>>>,
{
    log::debug!("Searching clubs for {:?}", query.as_str());

    let result = fetch.await;
    Outcome::resolve(result, &query).deliver(&on_search);
}
