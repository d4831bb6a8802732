use std::borrow::Cow;

use crate::config;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pair<'a> {
    raw: &'a str,
    key: String,
    value: String,
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .unwrap_or(spaced)
}

#[derive(Clone, Debug)]
pub struct RegistrationQuery<'a> {
    pairs: Vec<Pair<'a>>,
}

impl<'a> RegistrationQuery<'a> {
    pub fn parse(search: &'a str) -> Self {
        let pairs = search
            .strip_prefix('?')
            .unwrap_or(search)
            .split('&')
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                let (key, value) = raw.split_once('=').unwrap_or((raw, ""));
                Pair {
                    raw,
                    key: decode(key),
                    value: decode(value),
                }
            })
            .collect();
        Self { pairs }
    }

    // First value for `key`, like `URLSearchParams.get`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    pub fn wants_registration(&self) -> bool {
        config::REGISTRATION_PARAMS
            .iter()
            .any(|&(key, value)| self.get(key) == Some(value))
    }

    pub fn without_registration(&self) -> String {
        let kept: Vec<&str> = self
            .pairs
            .iter()
            .filter(|p| !config::REGISTRATION_PARAMS.iter().any(|&(key, _)| p.key == key))
            .map(|p| p.raw)
            .collect();
        if kept.is_empty() {
            String::new()
        } else {
            format!("?{}", kept.join("&"))
        }
    }
}

pub fn relative_url(pathname: &str, search: &str, hash: &str) -> String {
    format!("{}{}{}", pathname, search, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_registration_links() {
        assert!(RegistrationQuery::parse("?form=register").wants_registration());
        assert!(RegistrationQuery::parse("?register=kitchen").wants_registration());
        assert!(RegistrationQuery::parse("utm=x&register=kitchen").wants_registration());
        assert!(!RegistrationQuery::parse("?register=customer").wants_registration());
        assert!(!RegistrationQuery::parse("?form=contact").wants_registration());
        assert!(!RegistrationQuery::parse("").wants_registration());
    }

    #[test]
    fn get_returns_first_decoded_value() {
        let query = RegistrationQuery::parse("?name=Home+Cook&name=other&city=K%C3%B6ln&flag");
        assert_eq!(query.get("name"), Some("Home Cook"));
        assert_eq!(query.get("city"), Some("Köln"));
        assert_eq!(query.get("flag"), Some(""));
        assert_eq!(query.get("missing"), None);
    }

    #[test]
    fn strips_both_registration_params_regardless_of_value() {
        let query = RegistrationQuery::parse("?utm_source=mail&form=register&register=other&ref=7");
        assert_eq!(query.without_registration(), "?utm_source=mail&ref=7");
    }

    #[test]
    fn stripping_everything_leaves_empty_search() {
        let query = RegistrationQuery::parse("?register=kitchen&form=register");
        assert_eq!(query.without_registration(), "");
        assert_eq!(RegistrationQuery::parse("").without_registration(), "");
    }

    #[test]
    fn relative_url_keeps_path_and_hash() {
        assert_eq!(relative_url("/", "", "#menu"), "/#menu");
        assert_eq!(relative_url("/home", "?a=1", ""), "/home?a=1");
    }
}
