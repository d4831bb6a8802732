use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};

use super::dom;
use super::query::{self, RegistrationQuery};
use crate::config;
use crate::error::PageResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    Open,
    #[default]
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    DeepLink,
    CloseButton,
    // Click whose target is the backdrop itself.
    BackdropClick,
    ContentClick,
    Key(ModalKey),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    Other,
}

impl ModalKey {
    pub fn from_key(key: &str) -> Self {
        if key == "Escape" {
            ModalKey::Escape
        } else {
            ModalKey::Other
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEffect {
    Show,
    Hide,
}

#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn handle(&mut self, event: ModalEvent) -> Option<ModalEffect> {
        let next = match (self.state, event) {
            (ModalState::Closed, ModalEvent::DeepLink) => ModalState::Open,
            (
                ModalState::Open,
                ModalEvent::CloseButton | ModalEvent::BackdropClick | ModalEvent::Key(ModalKey::Escape),
            ) => ModalState::Closed,
            _ => return None,
        };
        self.state = next;
        Some(match next {
            ModalState::Open => ModalEffect::Show,
            ModalState::Closed => ModalEffect::Hide,
        })
    }
}

fn apply(modal: &HtmlElement, effect: ModalEffect) {
    match effect {
        ModalEffect::Show => {
            dom::set_class(modal, config::MODAL_ACTIVE_CLASS, true);
            if let Ok(body) = dom::body() {
                dom::set_style(&body, "overflow", "hidden");
            }
        }
        ModalEffect::Hide => {
            dom::set_class(modal, config::MODAL_ACTIVE_CLASS, false);
            if let Ok(body) = dom::body() {
                dom::clear_style(&body, "overflow");
            }
            if let Err(e) = clear_registration_params() {
                log::warn!("could not clean registration params: {}", e);
            }
        }
    }
}

fn clear_registration_params() -> PageResult<()> {
    let window = dom::window()?;
    let location = window.location();
    let search = location.search()?;
    let url = query::relative_url(
        &location.pathname()?,
        &RegistrationQuery::parse(&search).without_registration(),
        &location.hash()?,
    );
    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))?;
    Ok(())
}

fn dispatch(controller: &RefCell<ModalController>, modal: &HtmlElement, event: ModalEvent) {
    let effect = controller.borrow_mut().handle(event);
    if let Some(effect) = effect {
        apply(modal, effect);
        log::debug!("registration modal {:?} after {:?}", controller.borrow().state(), event);
    }
}

pub fn init_form_modal() -> PageResult<()> {
    let (Some(modal), Some(close_button)) = (
        dom::by_id(config::MODAL_ID),
        dom::by_id(config::MODAL_CLOSE_ID),
    ) else {
        log::debug!("registration modal not on page");
        return Ok(());
    };

    let controller = Rc::new(RefCell::new(ModalController::default()));

    let search = dom::window()?.location().search().unwrap_or_default();
    if RegistrationQuery::parse(&search).wants_registration() {
        dispatch(&controller, &modal, ModalEvent::DeepLink);
    }

    {
        let controller = controller.clone();
        let modal = modal.clone();
        dom::listen(&close_button, "click", move |_: MouseEvent| {
            dispatch(&controller, &modal, ModalEvent::CloseButton);
        })?;
    }

    {
        let controller = controller.clone();
        let backdrop = JsValue::from(modal.clone());
        let target = modal.clone();
        dom::listen(&modal, "click", move |e: MouseEvent| {
            let event = if e.target().map(JsValue::from) == Some(backdrop.clone()) {
                ModalEvent::BackdropClick
            } else {
                ModalEvent::ContentClick
            };
            dispatch(&controller, &target, event);
        })?;
    }

    let document = dom::document()?;
    dom::listen(&document, "keydown", move |e: KeyboardEvent| {
        dispatch(&controller, &modal, ModalEvent::Key(ModalKey::from_key(&e.key())));
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> ModalController {
        let mut modal = ModalController::default();
        assert_eq!(modal.handle(ModalEvent::DeepLink), Some(ModalEffect::Show));
        modal
    }

    #[test]
    fn starts_closed() {
        assert_eq!(ModalController::default().state(), ModalState::Closed);
    }

    #[test]
    fn deep_link_then_escape_closes() {
        let mut modal = opened();
        assert_eq!(modal.state(), ModalState::Open);
        assert_eq!(modal.handle(ModalEvent::Key(ModalKey::from_key("Escape"))), Some(ModalEffect::Hide));
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn content_click_and_other_keys_keep_it_open() {
        let mut modal = opened();
        assert_eq!(modal.handle(ModalEvent::ContentClick), None);
        assert_eq!(modal.handle(ModalEvent::Key(ModalKey::from_key("Enter"))), None);
        assert_eq!(modal.state(), ModalState::Open);
    }

    #[test]
    fn close_button_and_backdrop_close() {
        let mut modal = opened();
        assert_eq!(modal.handle(ModalEvent::CloseButton), Some(ModalEffect::Hide));

        let mut modal = opened();
        assert_eq!(modal.handle(ModalEvent::BackdropClick), Some(ModalEffect::Hide));
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn closed_modal_ignores_close_events() {
        let mut modal = ModalController::default();
        assert_eq!(modal.handle(ModalEvent::Key(ModalKey::Escape)), None);
        assert_eq!(modal.handle(ModalEvent::CloseButton), None);
        assert_eq!(modal.handle(ModalEvent::BackdropClick), None);
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn second_deep_link_is_ignored_while_open() {
        let mut modal = opened();
        assert_eq!(modal.handle(ModalEvent::DeepLink), None);
    }

    #[test]
    fn closing_a_deep_linked_page_strips_the_url() {
        let search = "?form=register&lang=fi";
        let query = RegistrationQuery::parse(search);
        let mut modal = ModalController::default();
        assert!(query.wants_registration());
        assert_eq!(modal.handle(ModalEvent::DeepLink), Some(ModalEffect::Show));
        assert_eq!(modal.handle(ModalEvent::Key(ModalKey::Escape)), Some(ModalEffect::Hide));
        let cleaned = query.without_registration();
        assert_eq!(cleaned, "?lang=fi");
        let after = RegistrationQuery::parse(&cleaned);
        assert_eq!(after.get("form"), None);
        assert_eq!(after.get("register"), None);
    }
}
