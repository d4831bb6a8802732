use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use super::dom;
use crate::config;
use crate::error::{PageError, PageResult};

pub fn parse_logo_source(body: &str) -> PageResult<String> {
    let url = body.trim();
    if url.is_empty() {
        return Err(PageError::EmptyLogo);
    }
    Ok(url.to_string())
}

pub fn next_src(current: &str, logo: &str) -> Option<String> {
    (current != logo).then(|| logo.to_string())
}

async fn fetch_logo_source() -> PageResult<String> {
    let response = Request::get(config::get_logo_source_url()).send().await?;
    if !response.ok() {
        return Err(PageError::LogoStatus(response.status()));
    }
    parse_logo_source(&response.text().await?)
}

fn logo_images() -> Vec<HtmlImageElement> {
    [
        dom::by_id(config::FOOTER_LOGO_ID),
        dom::query(config::HERO_LOGO_SELECTOR),
    ]
    .into_iter()
    .flatten()
    .filter_map(|el| el.dyn_into::<HtmlImageElement>().ok())
    .collect()
}

pub async fn load_logo() {
    let logo = match fetch_logo_source().await {
        Ok(logo) => logo,
        Err(e) => {
            log::info!("Using default logo from HTML ({})", e);
            return;
        }
    };
    for img in logo_images() {
        if let Some(src) = next_src(&img.src(), &logo) {
            img.set_src(&src);
        }
    }
}
