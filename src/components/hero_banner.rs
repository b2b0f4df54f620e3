use yew::{html, Component, Context, Html};

use crate::consts::{CLUBS_ANCHOR, HERO_BANNER_IMAGE, TITLE_BASE};

/// The static marketing banner at the top of the home page.
#[derive(Debug)]
pub struct HeroBanner;

impl Component for HeroBanner {
    type Message = ();
    type Properties = ();

    #[inline]
    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let explore = format!("#{}", CLUBS_ANCHOR);

        html! {
            <div class="cf-hero">
                <p class="cf-hero-brand">{ TITLE_BASE }</p>
                <h1 class="cf-hero-headline">
                    { "Discover, Connect" }
                    <br />
                    { "And Thrive" }
                </h1>
                <p class="cf-hero-tagline">{ "Check out the most interesting clubs on campus" }</p>
                <div>
                    <a class="cf-hero-explore" href={explore}>{ "Explore Clubs" }</a>
                </div>
                <img class="hero-banner-img" src={HERO_BANNER_IMAGE} alt="hero-banner" />
            </div>
        }
    }
}
