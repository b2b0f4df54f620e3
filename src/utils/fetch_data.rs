use clubfinder_api::Result;
use yew::{html, Html};

/// Data loaded from the backend.
///
/// Renders a loading placeholder until the data arrives, and an error line if loading failed.
#[derive(Debug)]
pub struct FetchData<T> {
    inner: Option<Result<T>>,
}

impl<T> FetchData<T> {
    /// Creates a new `FetchData` with an uninitialized state.
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Creates a new `FetchData` with an initialized `Ok` state.
    pub fn new_with_value(value: T) -> Self {
        Self {
            inner: Some(Ok(value)),
        }
    }

    pub fn render<F>(&self, f: F) -> Html
    where
        F: FnOnce(&T) -> Html,
    {
        match &self.inner {
            Some(Ok(value)) => f(value),
            Some(Err(err)) => {
                log::debug!("Failed to fetch data: {}", err);

                html! {
                    <div class="cf-error">
                        <span>{ "Failed to load clubs: " }</span>
                        <span>{ err.to_string() }</span>
                    </div>
                }
            }
            None => html! {
                <span class="cf-loader">{ "Loading.." }</span>
            },
        }
    }
}

impl<T> Default for FetchData<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Result<T>> for FetchData<T> {
    fn from(res: Result<T>) -> Self {
        Self { inner: Some(res) }
    }
}
