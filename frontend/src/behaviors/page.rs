use wasm_bindgen_futures::spawn_local;

use super::{contact, counter, decor, logo, menu, modal, reveal, scroll_effects, smooth_scroll};
use crate::error::PageResult;

pub fn init_page() {
    spawn_local(logo::load_logo());

    let steps: [(&str, fn() -> PageResult<()>); 11] = [
        ("smooth scroll", smooth_scroll::init_smooth_scroll),
        ("mobile menu", menu::init_mobile_menu),
        ("navbar scroll", scroll_effects::init_navbar_scroll),
        ("scroll animations", reveal::init_scroll_animations),
        ("menu item effects", decor::init_menu_item_effects),
        ("contact copy", contact::init_contact_copy),
        ("stats counter", counter::init_stats_counter),
        ("scroll to top", scroll_effects::init_scroll_to_top),
        ("parallax", scroll_effects::init_parallax_effect),
        ("form modal", modal::init_form_modal),
        ("page loaded", decor::init_page_loaded),
    ];

    decor::update_footer_year();
    for (name, init) in steps {
        match init() {
            Ok(()) => log::debug!("{} ready", name),
            Err(e) => log::error!("{} failed to start: {}", name, e),
        }
    }
    log::info!("page behaviours attached");
}
