use web_sys::{Event, MouseEvent};

use super::dom;
use crate::config;
use crate::error::PageResult;

pub fn navbar_shadow(offset: f64) -> &'static str {
    if offset > config::NAVBAR_SHADOW_THRESHOLD_PX {
        config::NAVBAR_SHADOW_SCROLLED
    } else {
        config::NAVBAR_SHADOW_RESTING
    }
}

pub fn parallax_transform(offset: f64, viewport_height: f64) -> Option<String> {
    (offset < viewport_height).then(|| format!("translateY({}px)", offset * config::PARALLAX_SPEED))
}

pub fn scroll_top_visible(offset: f64) -> bool {
    offset > config::SCROLL_TOP_THRESHOLD_PX
}

pub fn init_navbar_scroll() -> PageResult<()> {
    let Some(navbar) = dom::query(config::NAVBAR_SELECTOR) else {
        log::warn!("navbar missing, shadow effect disabled");
        return Ok(());
    };
    let window = dom::window()?;
    dom::listen(&window, "scroll", move |_: Event| {
        dom::set_style(&navbar, "box-shadow", navbar_shadow(dom::scroll_offset()));
    })
}

pub fn init_parallax_effect() -> PageResult<()> {
    let Some(hero) = dom::query(config::HERO_SELECTOR) else {
        return Ok(());
    };
    let window = dom::window()?;
    dom::listen(&window, "scroll", move |_: Event| {
        if let Some(transform) = parallax_transform(dom::scroll_offset(), dom::viewport_height()) {
            dom::set_style(&hero, "transform", &transform);
        }
    })
}

pub fn init_scroll_to_top() -> PageResult<()> {
    let Some(button) = dom::by_id(config::SCROLL_TOP_ID) else {
        return Ok(());
    };
    {
        let button = button.clone();
        let window = dom::window()?;
        dom::listen(&window, "scroll", move |_: Event| {
            dom::set_class(&button, config::VISIBLE_CLASS, scroll_top_visible(dom::scroll_offset()));
        })?;
    }
    dom::listen(&button, "click", |_: MouseEvent| dom::smooth_scroll_to(0.0))
}
