use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use super::dom;
use crate::config;
use crate::error::PageResult;

pub fn anchor_position(target_top: i32, nav_height: i32) -> f64 {
    f64::from(target_top - nav_height)
}

fn scroll_to_anchor(href: &str) {
    let Ok(document) = dom::document() else {
        return;
    };
    // `#` alone is not a valid selector; the lookup just fails.
    let Some(target) = document
        .query_selector(href)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let nav_height = dom::query(config::NAVBAR_SELECTOR)
        .map(|nav| nav.offset_height())
        .unwrap_or(0);
    dom::smooth_scroll_to(anchor_position(target.offset_top(), nav_height));
}

pub fn init_smooth_scroll() -> PageResult<()> {
    for anchor in dom::query_all("a[href^=\"#\"]") {
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |e: MouseEvent| {
            e.prevent_default();
            if let Some(href) = link.get_attribute("href") {
                scroll_to_anchor(&href);
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_by_navbar_height() {
        assert_eq!(anchor_position(1200, 80), 1120.0);
        assert_eq!(anchor_position(40, 80), -40.0);
    }
}
