#![deny(unused_crate_dependencies)]
// Fix for html! macro doing unit value assignments. (yew 0.19.3)
#![allow(clippy::let_unit_value)]

mod components;
mod consts;
mod logger;
mod routes;
mod search;
mod statics;
mod utils;

use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::start_app_in_element;

pub use statics::Config;

use routes::App;

use consts::TITLE_BASE;

#[wasm_bindgen]
pub fn run(config: JsValue) {
    match serde_wasm_bindgen::from_value(config) {
        Ok(config) => run_with_config(config),
        Err(err) => {
            logger::init(log::LevelFilter::Error);
            log::error!("Failed to parse config: {}", err);
        }
    }
}

pub fn run_with_config(config: Config) {
    logger::init(config.log_level());

    let element = match mountpoint(&config) {
        Some(element) => element,
        None => {
            log::error!(
                "Cannot find mountpoint {}",
                config.mountpoint().unwrap_or("<body>")
            );
            log::error!("Fatal error: Failed to mount app");

            return;
        }
    };

    if let Err(config) = statics::set_config(config) {
        log::warn!("Config already set, ignoring {:?}", config);
    }

    if let Some(document) = utils::document() {
        document.set_title(TITLE_BASE);
    }

    start_app_in_element::<App>(element);
}

/// Returns the element the app is mounted on. This is the element with the configured id or the
/// document body if no id is configured.
fn mountpoint(config: &Config) -> Option<Element> {
    let document = utils::document()?;

    match config.mountpoint() {
        Some(id) => document.get_element_by_id(id),
        None => document.body().map(Element::from),
    }
}
