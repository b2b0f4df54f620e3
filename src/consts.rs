//! Compile-time constants for branding and static assets.

pub const TITLE_BASE: &str = "Gator ClubFinder";

pub const HERO_BANNER_IMAGE: &str = "/assets/images/home-page.png";
pub const CARD_IMAGE: &str = "/assets/images/cardholder.jpg";
pub const HUMAN_ICON: &str = "/assets/images/human_icon.png";
pub const CATEGORY_ICON: &str = "/assets/images/category_icon.png";

/// The id of the element containing the club list. The hero banner links to it.
pub const CLUBS_ANCHOR: &str = "clubs";
