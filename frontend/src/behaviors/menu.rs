use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Event, HtmlElement, MouseEvent};

use super::dom;
use crate::config;
use crate::error::PageResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    Toggle,
    LinkClick,
    // Fired after the resize debounce settles.
    Resized { width: f64 },
}

#[derive(Debug, Default)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn handle(&mut self, event: MenuEvent) -> Option<MenuState> {
        let next = match (self.state, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (MenuState::Open, MenuEvent::LinkClick) => MenuState::Closed,
            (MenuState::Open, MenuEvent::Resized { width }) if width > config::MOBILE_BREAKPOINT_PX => {
                MenuState::Closed
            }
            _ => return None,
        };
        self.state = next;
        Some(next)
    }
}

pub fn layout_overrides(state: MenuState) -> impl Iterator<Item = (&'static str, Option<&'static str>)> {
    config::MENU_OPEN_STYLES
        .iter()
        .map(move |&(property, value)| (property, (state == MenuState::Open).then_some(value)))
}

struct MenuElements {
    toggle: HtmlElement,
    links: HtmlElement,
}

impl MenuElements {
    fn render(&self, state: MenuState) {
        let open = state == MenuState::Open;
        dom::set_class(&self.links, config::MENU_ACTIVE_CLASS, open);
        dom::set_class(&self.toggle, config::MENU_ACTIVE_CLASS, open);
        for (property, value) in layout_overrides(state) {
            match value {
                Some(value) => dom::set_style(&self.links, property, value),
                None => dom::clear_style(&self.links, property),
            }
        }
    }
}

fn dispatch(menu: &RefCell<MobileMenu>, elements: &MenuElements, event: MenuEvent) {
    let changed = menu.borrow_mut().handle(event).is_some();
    if changed {
        let state = menu.borrow().state();
        log::debug!("mobile menu {:?} after {:?}", state, event);
        elements.render(state);
    }
}

pub fn init_mobile_menu() -> PageResult<()> {
    let (Some(toggle), Some(links)) = (
        dom::query(config::MENU_TOGGLE_SELECTOR),
        dom::query(config::NAV_LINKS_SELECTOR),
    ) else {
        log::debug!("mobile menu markup missing");
        return Ok(());
    };

    let menu = Rc::new(RefCell::new(MobileMenu::default()));
    let elements = Rc::new(MenuElements { toggle, links });

    {
        let menu = menu.clone();
        let target = elements.clone();
        dom::listen(&elements.toggle, "click", move |_: MouseEvent| {
            dispatch(&menu, &target, MenuEvent::Toggle);
        })?;
    }

    for link in dom::query_all_in(&elements.links, "a") {
        let menu = menu.clone();
        let target = elements.clone();
        dom::listen(&link, "click", move |_: MouseEvent| {
            dispatch(&menu, &target, MenuEvent::LinkClick);
        })?;
    }

    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let window = dom::window()?;
    dom::listen(&window, "resize", move |_: Event| {
        let menu = menu.clone();
        let target = elements.clone();
        // Replacing the handle drops the previous timeout, which cancels it.
        *pending.borrow_mut() = Some(Timeout::new(config::RESIZE_DEBOUNCE_MS, move || {
            let width = dom::viewport_width();
            dispatch(&menu, &target, MenuEvent::Resized { width });
        }));
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.handle(MenuEvent::Toggle), Some(MenuState::Open));
        assert_eq!(menu.handle(MenuEvent::Toggle), Some(MenuState::Closed));
    }

    #[test]
    fn link_click_closes_only_when_open() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.handle(MenuEvent::LinkClick), None);
        menu.handle(MenuEvent::Toggle);
        assert_eq!(menu.handle(MenuEvent::LinkClick), Some(MenuState::Closed));
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn widening_past_breakpoint_forces_closed() {
        let mut menu = MobileMenu::default();
        menu.handle(MenuEvent::Toggle);
        assert_eq!(menu.handle(MenuEvent::Resized { width: 768.0 }), None);
        assert_eq!(menu.state(), MenuState::Open);
        assert_eq!(menu.handle(MenuEvent::Resized { width: 1024.0 }), Some(MenuState::Closed));
        assert_eq!(menu.handle(MenuEvent::Resized { width: 1024.0 }), None);
    }

    #[test]
    fn open_applies_every_override() {
        let overrides: Vec<_> = layout_overrides(MenuState::Open).collect();
        assert_eq!(overrides.len(), config::MENU_OPEN_STYLES.len());
        assert!(overrides.iter().all(|(_, v)| v.is_some()));
        assert!(overrides.contains(&("flex-direction", Some("column"))));
        assert!(overrides.contains(&("position", Some("absolute"))));
        assert!(overrides.contains(&("box-shadow", Some("0 4px 6px rgba(0, 0, 0, 0.1)"))));
        assert!(overrides.contains(&("gap", Some("15px"))));
    }

    #[test]
    fn closed_unsets_every_override() {
        let open: Vec<_> = layout_overrides(MenuState::Open).map(|(p, _)| p).collect();
        let closed: Vec<_> = layout_overrides(MenuState::Closed).collect();
        assert_eq!(closed.len(), open.len());
        for (property, value) in closed {
            assert!(open.contains(&property));
            assert_eq!(value, None);
        }
    }
}
