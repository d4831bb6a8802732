use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{describe_js, PageError, PageResult};

pub fn window() -> PageResult<Window> {
    web_sys::window().ok_or_else(|| PageError::missing("window"))
}

pub fn document() -> PageResult<Document> {
    window()?
        .document()
        .ok_or_else(|| PageError::missing("document"))
}

pub fn body() -> PageResult<HtmlElement> {
    document()?.body().ok_or_else(|| PageError::missing("body"))
}

pub fn query(selector: &str) -> Option<HtmlElement> {
    document()
        .ok()?
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn by_id(id: &str) -> Option<HtmlElement> {
    document()
        .ok()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    document()
        .ok()
        .and_then(|d| d.query_selector_all(selector).ok())
        .map(html_elements)
        .unwrap_or_default()
}

fn html_elements(nodes: NodeList) -> Vec<HtmlElement> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("failed to set {}: {}", property, describe_js(&e));
    }
}

// Removes the inline override so stylesheet rules apply again.
pub fn clear_style(el: &HtmlElement, property: &str) {
    if let Err(e) = el.style().remove_property(property) {
        log::warn!("failed to clear {}: {}", property, describe_js(&e));
    }
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(e) = result {
        log::warn!("failed to toggle class {}: {}", class, describe_js(&e));
    }
}

pub fn scroll_offset() -> f64 {
    window()
        .ok()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_width().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    let Ok(window) = window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// Attaches `handler` to `target` for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> PageResult<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let callback = Closure::wrap(Box::new(move |e: web_sys::Event| {
        if let Ok(e) = e.dyn_into::<E>() {
            handler(e);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    // Page-lifetime listener, never removed.
    callback.forget();
    Ok(())
}
