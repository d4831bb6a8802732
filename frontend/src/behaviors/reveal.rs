use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use super::flag::AnimationFlag;
use crate::config;
use crate::error::PageResult;

#[derive(Debug, Default)]
pub struct RevealTracker {
    flags: Vec<AnimationFlag>,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![AnimationFlag::default(); len],
        }
    }

    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        self.flags
            .get_mut(index)
            .map(|flag| flag.trigger())
            .unwrap_or(false)
    }

    pub fn revealed(&self) -> usize {
        self.flags.iter().filter(|f| f.is_seen()).count()
    }
}

fn hide(el: &HtmlElement) {
    dom::set_style(el, "opacity", "0");
    dom::set_style(el, "transform", config::REVEAL_HIDDEN_OFFSET);
    dom::set_style(el, "transition", config::REVEAL_TRANSITION);
}

fn show(el: &HtmlElement) {
    dom::set_style(el, "opacity", "1");
    dom::set_style(el, "transform", "translateY(0)");
}

pub fn init_scroll_animations() -> PageResult<()> {
    let elements = dom::query_all(config::REVEAL_SELECTOR);
    if elements.is_empty() {
        log::debug!("no reveal targets on page");
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
    let targets = Rc::new(elements);

    let callback = {
        let tracker = tracker.clone();
        let targets = targets.clone();
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = targets
                    .iter()
                    .position(|el| AsRef::<Element>::as_ref(el) == &target)
                else {
                    continue;
                };
                let mut tracker = tracker.borrow_mut();
                if tracker.on_intersection(index, entry.is_intersecting()) {
                    show(&targets[index]);
                    observer.unobserve(&target);
                    log::debug!("revealed {}/{}", tracker.revealed(), targets.len());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&config::REVEAL_THRESHOLD.into());
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for el in targets.iter() {
        hide(el);
        observer.observe(el);
    }
    log::debug!("observing {} reveal targets", targets.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_per_element() {
        let mut tracker = RevealTracker::new(3);
        assert!(tracker.on_intersection(1, true));
        assert!(!tracker.on_intersection(1, true));
        assert!(!tracker.on_intersection(1, false));
        assert!(!tracker.on_intersection(1, true));
        assert_eq!(tracker.revealed(), 1);
    }

    #[test]
    fn exit_before_entry_does_not_consume_flag() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.on_intersection(0, false));
        assert_eq!(tracker.revealed(), 0);
        assert!(tracker.on_intersection(0, true));
        assert!(tracker.on_intersection(1, true));
        assert_eq!(tracker.revealed(), 2);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.on_intersection(5, true));
        assert_eq!(tracker.revealed(), 0);
    }
}
