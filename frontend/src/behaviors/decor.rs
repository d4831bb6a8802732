use chrono::Datelike;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent};

use super::dom;
use crate::config;
use crate::error::PageResult;

const HOVER_STYLES: [(&str, &str); 2] = [("padding-left", "30px"), ("color", "var(--primary-color)")];
const REST_STYLES: [(&str, &str); 2] = [("padding-left", "25px"), ("color", "var(--text-dark)")];

pub fn init_menu_item_effects() -> PageResult<()> {
    for item in dom::query_all(config::MENU_ITEM_SELECTOR) {
        for (event, styles) in [("mouseenter", HOVER_STYLES), ("mouseleave", REST_STYLES)] {
            let target = item.clone();
            dom::listen(&item, event, move |_: MouseEvent| {
                for (property, value) in styles {
                    dom::set_style(&target, property, value);
                }
            })?;
        }
    }
    Ok(())
}

pub fn footer_text(year: i32) -> String {
    format!(
        "© {} {}. Made with ❤️ for everyone missing home.",
        year,
        config::SITE_NAME
    )
}

pub fn update_footer_year() {
    if let Some(footer) = dom::query(config::FOOTER_TEXT_SELECTOR) {
        let year = chrono::Local::now().year();
        footer.set_text_content(Some(&footer_text(year)));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadedAction {
    MarkNow,
    WaitForLoad,
}

impl LoadedAction {
    // `load` has already fired once the document is `complete`.
    pub fn for_ready_state(ready_state: &str) -> Self {
        if ready_state == "complete" {
            LoadedAction::MarkNow
        } else {
            LoadedAction::WaitForLoad
        }
    }
}

fn mark_loaded() {
    if let Ok(body) = dom::body() {
        dom::set_class(&body, "loaded", true);
    }
}

pub fn init_page_loaded() -> PageResult<()> {
    let document = dom::document()?;
    if let Some(root) = document.document_element() {
        if let Ok(root) = root.dyn_into::<HtmlElement>() {
            dom::set_style(&root, "visibility", "visible");
        }
    }
    match LoadedAction::for_ready_state(&document.ready_state()) {
        LoadedAction::MarkNow => {
            mark_loaded();
            Ok(())
        }
        LoadedAction::WaitForLoad => {
            let window = dom::window()?;
            dom::listen(&window, "load", |_: Event| mark_loaded())
        }
    }
}
