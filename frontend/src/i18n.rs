use serde::{Deserialize, Serialize};
use web_sys::window;

const LANG_KEY: &str = "atelier.lang";
const REDIRECTED_KEY: &str = "atelier.lang_redirected";
const SPANISH_PREFIX: &str = "/es";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Locale::En => Locale::Es,
            Locale::Es => Locale::En,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Es => "ES",
        }
    }
}

fn split_suffix(path: &str) -> (&str, &str) {
    let at = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    path.split_at(at)
}

/// Path with the Spanish prefix removed, or None if it was not a Spanish path.
fn strip_spanish(path: &str) -> Option<&str> {
    if path == SPANISH_PREFIX || path == "/es/" {
        Some("/")
    } else {
        path.strip_prefix(SPANISH_PREFIX).filter(|rest| rest.starts_with('/'))
    }
}

pub fn locale_from_path(path: &str) -> Locale {
    let (path, _) = split_suffix(path);
    if strip_spanish(path).is_some() {
        Locale::Es
    } else {
        Locale::En
    }
}

/// Maps `/es/...` to `/...` and back, keeping the rest of the path, the query
/// and the fragment.
pub fn switch_locale_path(path: &str, target: Locale) -> String {
    let (path, suffix) = split_suffix(path);
    let path = if path.is_empty() { "/" } else { path };
    let neutral = strip_spanish(path).unwrap_or(path);

    let switched = match (target, neutral) {
        (Locale::En, _) => neutral.to_string(),
        (Locale::Es, "/") => SPANISH_PREFIX.to_string(),
        (Locale::Es, _) => format!("{}{}", SPANISH_PREFIX, neutral),
    };
    format!("{}{}", switched, suffix)
}

/// First language tag we can serve decides; anything else is ignored.
pub fn detect_browser_locale<S: AsRef<str>>(languages: &[S]) -> Locale {
    languages
        .iter()
        .filter_map(|tag| {
            let primary = tag.as_ref().split(|c: char| c == '-' || c == '_').next()?;
            Locale::parse(primary)
        })
        .next()
        .unwrap_or_default()
}

/// Where a visitor should be sent, if anywhere. Only English pages redirect;
/// a Spanish URL is always honoured. Without a stored preference the browser
/// language is used, but only until the first such redirect has happened.
pub fn autodetect_redirect<S: AsRef<str>>(
    path: &str,
    stored: Option<Locale>,
    already_redirected: bool,
    languages: &[S],
) -> Option<String> {
    if locale_from_path(path) != Locale::En {
        return None;
    }
    let preferred = match stored {
        Some(locale) => locale,
        None if already_redirected => return None,
        None => detect_browser_locale(languages),
    };
    (preferred == Locale::Es).then(|| switch_locale_path(path, Locale::Es))
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn stored_preference() -> Option<Locale> {
    let value = local_storage()?.get_item(LANG_KEY).ok().flatten()?;
    Locale::parse(&value)
}

pub fn store_preference(locale: Locale) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(LANG_KEY, locale.code());
    }
}

pub fn was_redirected() -> bool {
    local_storage()
        .and_then(|storage| storage.get_item(REDIRECTED_KEY).ok().flatten())
        .is_some()
}

pub fn mark_redirected() {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(REDIRECTED_KEY, "1");
    }
}

pub fn browser_languages() -> Vec<String> {
    let Some(navigator) = window().map(|w| w.navigator()) else {
        return Vec::new();
    };
    let mut languages: Vec<String> = navigator
        .languages()
        .iter()
        .filter_map(|value| value.as_string())
        .collect();
    if languages.is_empty() {
        languages.extend(navigator.language());
    }
    languages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_follows_path_prefix() {
        assert_eq!(locale_from_path("/"), Locale::En);
        assert_eq!(locale_from_path("/services/branding"), Locale::En);
        assert_eq!(locale_from_path("/es"), Locale::Es);
        assert_eq!(locale_from_path("/es/"), Locale::Es);
        assert_eq!(locale_from_path("/es/privacy"), Locale::Es);
        assert_eq!(locale_from_path("/es?ref=x"), Locale::Es);
        // not a locale prefix, just a word starting with "es"
        assert_eq!(locale_from_path("/estudio"), Locale::En);
    }

    #[test]
    fn switching_to_spanish_prefixes_the_path() {
        assert_eq!(switch_locale_path("/", Locale::Es), "/es");
        assert_eq!(switch_locale_path("", Locale::Es), "/es");
        assert_eq!(switch_locale_path("/services/web-design", Locale::Es), "/es/services/web-design");
        assert_eq!(switch_locale_path("/cookies?x=1#top", Locale::Es), "/es/cookies?x=1#top");
    }

    #[test]
    fn switching_to_english_strips_the_prefix() {
        assert_eq!(switch_locale_path("/es", Locale::En), "/");
        assert_eq!(switch_locale_path("/es/", Locale::En), "/");
        assert_eq!(switch_locale_path("/es/services/branding", Locale::En), "/services/branding");
        assert_eq!(switch_locale_path("/es/privacy#data", Locale::En), "/privacy#data");
    }

    #[test]
    fn switching_to_the_current_locale_is_a_no_op() {
        assert_eq!(switch_locale_path("/es/privacy", Locale::Es), "/es/privacy");
        assert_eq!(switch_locale_path("/privacy", Locale::En), "/privacy");
        assert_eq!(switch_locale_path("/estudio", Locale::En), "/estudio");
    }

    #[test]
    fn round_trip_preserves_the_path() {
        for path in ["/", "/services/branding", "/privacy?utm=mail", "/cookies#prefs", "/estudio"] {
            let spanish = switch_locale_path(path, Locale::Es);
            assert_eq!(switch_locale_path(&spanish, Locale::En), path);
            assert_eq!(switch_locale_path(&spanish, Locale::Es), spanish);
        }
    }

    #[test]
    fn browser_locale_uses_first_supported_tag() {
        assert_eq!(detect_browser_locale(&["es-MX", "en-US"]), Locale::Es);
        assert_eq!(detect_browser_locale(&["fr-FR", "es"]), Locale::Es);
        assert_eq!(detect_browser_locale(&["en-GB", "es-ES"]), Locale::En);
        assert_eq!(detect_browser_locale(&["de", "fr"]), Locale::En);
        assert_eq!(detect_browser_locale::<&str>(&[]), Locale::En);
    }

    #[test]
    fn redirect_only_from_english_pages() {
        assert_eq!(autodetect_redirect("/privacy", None, false, &["es-ES"]), Some("/es/privacy".to_string()));
        assert_eq!(autodetect_redirect("/es/privacy", None, false, &["en-US"]), None);
        assert_eq!(autodetect_redirect("/", None, false, &["en-US"]), None);
    }

    #[test]
    fn stored_preference_wins_over_browser() {
        assert_eq!(autodetect_redirect("/", Some(Locale::En), false, &["es-ES"]), None);
        assert_eq!(autodetect_redirect("/", Some(Locale::Es), false, &["en-US"]), Some("/es".to_string()));
    }

    #[test]
    fn browser_language_redirects_only_once() {
        assert_eq!(autodetect_redirect("/", None, false, &["es-ES"]), Some("/es".to_string()));
        assert_eq!(autodetect_redirect("/", None, true, &["es-ES"]), None);
        assert_eq!(autodetect_redirect("/services/branding", None, true, &["es"]), None);
        // an explicit choice still applies after the first redirect
        assert_eq!(autodetect_redirect("/", Some(Locale::Es), true, &["en-US"]), Some("/es".to_string()));
    }

    #[test]
    fn labels_are_short_codes() {
        assert_eq!(Locale::En.label(), "EN");
        assert_eq!(Locale::Es.label(), "ES");
        assert_eq!(Locale::En.other().label(), "ES");
    }
}
