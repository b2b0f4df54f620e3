pub mod button;
pub mod detail;
pub mod hero_banner;
pub mod input;
pub mod providers;
pub mod search_clubs;

pub use detail::Detail;
pub use hero_banner::HeroBanner;
pub use search_clubs::SearchClubs;
