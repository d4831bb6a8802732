use yew::prelude::*;
use log::{info, Level};

mod config;
mod error;
mod pages {
    pub mod landing;
}
mod behaviors {
    pub mod dom;
    pub mod flag;
    pub mod query;
    pub mod reveal;
    pub mod counter;
    pub mod modal;
    pub mod menu;
    pub mod scroll_effects;
    pub mod smooth_scroll;
    pub mod contact;
    pub mod decor;
    pub mod logo;
    pub mod page;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    info!("Rendering landing page");
    html! {
        <Landing />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
