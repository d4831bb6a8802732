use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlElement, MouseEvent};

use super::dom;
use crate::config;
use crate::error::{describe_js, PageError, PageResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyAction {
    PassThrough,
    Copy,
}

impl CopyAction {
    pub fn for_href(href: &str) -> Self {
        if href.starts_with("mailto:") || href.starts_with("tel:") {
            CopyAction::PassThrough
        } else {
            CopyAction::Copy
        }
    }
}

#[derive(Debug, Default)]
pub struct CopyFeedback {
    original: Option<String>,
}

impl CopyFeedback {
    pub fn text_to_copy(&self, displayed: String) -> String {
        self.original.clone().unwrap_or(displayed)
    }

    pub fn start(&mut self, original: String) -> bool {
        if self.original.is_some() {
            return false;
        }
        self.original = Some(original);
        true
    }

    pub fn finish(&mut self) -> Option<String> {
        self.original.take()
    }
}

async fn write_clipboard(text: &str) -> PageResult<()> {
    let clipboard = dom::window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| PageError::Clipboard(describe_js(&e)))?;
    Ok(())
}

async fn copy_with_feedback(link: HtmlElement, feedback: Rc<RefCell<CopyFeedback>>) {
    let displayed = link.text_content().unwrap_or_default();
    let text = feedback.borrow().text_to_copy(displayed);

    if let Err(e) = write_clipboard(&text).await {
        gloo_console::error!(format!("Failed to copy: {}", e));
        return;
    }
    if !feedback.borrow_mut().start(text) {
        return;
    }
    link.set_text_content(Some(config::COPIED_LABEL));
    dom::set_style(&link, "color", config::COPIED_COLOR);

    TimeoutFuture::new(config::COPY_FEEDBACK_MS).await;

    let restored = feedback.borrow_mut().finish();
    if let Some(original) = restored {
        link.set_text_content(Some(&original));
        dom::clear_style(&link, "color");
    }
}

pub fn init_contact_copy() -> PageResult<()> {
    for link in dom::query_all(config::CONTACT_LINK_SELECTOR) {
        let feedback = Rc::new(RefCell::new(CopyFeedback::default()));
        let target = link.clone();
        dom::listen(&link, "click", move |e: MouseEvent| {
            let href = target.get_attribute("href").unwrap_or_default();
            if CopyAction::for_href(&href) == CopyAction::PassThrough {
                return;
            }
            e.prevent_default();
            spawn_local(copy_with_feedback(target.clone(), feedback.clone()));
        })?;
    }
    Ok(())
}
