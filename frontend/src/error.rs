use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("logo request failed: {0}")]
    LogoFetch(#[from] gloo_net::Error),

    #[error("logo source returned status {0}")]
    LogoStatus(u16),

    #[error("logo source was empty")]
    EmptyLogo,

    #[error("clipboard write rejected: {0}")]
    Clipboard(String),
}

impl PageError {
    pub fn missing(selector: &str) -> Self {
        PageError::MissingElement(selector.to_string())
    }
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(describe_js(&value))
    }
}

pub fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_selector() {
        let err = PageError::missing(".navbar");
        assert_eq!(err.to_string(), "element not found: .navbar");
    }

    #[test]
    fn logo_status_is_reported() {
        assert_eq!(
            PageError::LogoStatus(404).to_string(),
            "logo source returned status 404"
        );
        assert_eq!(PageError::EmptyLogo.to_string(), "logo source was empty");
    }
}
