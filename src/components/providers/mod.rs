pub mod client;

pub use client::ClientProvider;

use yew::{Component, Context};

pub trait Provider<T>: Component {
    /// Takes the context `T` provided by `Self` from the component tree of `ctx`.
    ///
    /// # Panics
    ///
    /// Panics if the component is not a child of `Self`.
    fn get<C>(ctx: &Context<C>) -> T
    where
        C: Component;
}
