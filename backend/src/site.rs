//! Public page inventory, mirrored from the frontend router.

use crate::locale::Locale;

pub const LOCALES: [Locale; 2] = [Locale::En, Locale::Es];

pub const SERVICE_SLUGS: [&str; 4] = [
    "web-design",
    "branding",
    "product-development",
    "digital-strategy",
];

/// Locale-neutral page paths, as served to English visitors.
pub fn page_paths() -> Vec<String> {
    let mut paths = vec!["/".to_string()];
    paths.extend(SERVICE_SLUGS.iter().map(|slug| format!("/services/{}", slug)));
    paths.push("/privacy".to_string());
    paths.push("/cookies".to_string());
    paths
}

/// `/services/branding` -> `/es/services/branding`, `/` -> `/es`.
pub fn localized_path(path: &str, locale: Locale) -> String {
    match (locale, path) {
        (Locale::En, _) => path.to_string(),
        (Locale::Es, "/") => locale.path_prefix().to_string(),
        (Locale::Es, _) => format!("{}{}", locale.path_prefix(), path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_include_every_service() {
        let paths = page_paths();
        assert_eq!(paths.len(), 3 + SERVICE_SLUGS.len());
        assert!(paths.contains(&"/services/branding".to_string()));
    }

    #[test]
    fn spanish_paths_are_prefixed() {
        assert_eq!(localized_path("/", Locale::Es), "/es");
        assert_eq!(localized_path("/privacy", Locale::Es), "/es/privacy");
        assert_eq!(localized_path("/privacy", Locale::En), "/privacy");
    }
}
