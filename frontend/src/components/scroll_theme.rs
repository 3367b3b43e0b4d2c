use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Vertical extent of a themed section, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
    pub theme: Theme,
}

/// Theme of the section under `probe_y`. Later sections win when they overlap.
pub fn theme_at(sections: &[SectionBounds], probe_y: f64) -> Option<Theme> {
    sections
        .iter()
        .rev()
        .find(|s| s.top <= probe_y && probe_y < s.bottom)
        .map(|s| s.theme)
}

fn themed_sections() -> Vec<SectionBounds> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("[data-theme]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i)?.dyn_into::<Element>().ok())
        .filter_map(|element| {
            let theme = Theme::parse(&element.get_attribute("data-theme")?)?;
            let rect = element.get_bounding_client_rect();
            Some(SectionBounds { top: rect.top(), bottom: rect.bottom(), theme })
        })
        .collect()
}

fn apply_theme() {
    let Some(window) = window() else { return };
    let probe = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) / 2.0;
    let theme = theme_at(&themed_sections(), probe).unwrap_or(Theme::Dark);
    if let Some(body) = window.document().and_then(|d| d.body()) {
        let _ = body.set_attribute("data-site-theme", theme.as_str());
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollThemeProps {
    /// Current route path; sections are re-read when it changes.
    pub path: AttrValue,
}

/// Switches the body theme to match whichever `data-theme` section crosses
/// the middle of the viewport.
#[function_component(ScrollTheme)]
pub fn scroll_theme(props: &ScrollThemeProps) -> Html {
    use_effect_with_deps(
        move |_| {
            apply_theme();
            let callback = Closure::<dyn Fn()>::new(apply_theme);
            let window = window();
            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }
            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        },
        props.path.clone(),
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(top: f64, bottom: f64, theme: Theme) -> SectionBounds {
        SectionBounds { top, bottom, theme }
    }

    #[test]
    fn picks_section_under_probe() {
        let sections = [
            section(-400.0, 300.0, Theme::Dark),
            section(300.0, 900.0, Theme::Light),
        ];
        assert_eq!(theme_at(&sections, 200.0), Some(Theme::Dark));
        assert_eq!(theme_at(&sections, 300.0), Some(Theme::Light));
        assert_eq!(theme_at(&sections, 1000.0), None);
    }

    #[test]
    fn nested_section_wins() {
        let sections = [
            section(0.0, 1000.0, Theme::Dark),
            section(400.0, 600.0, Theme::Light),
        ];
        assert_eq!(theme_at(&sections, 500.0), Some(Theme::Light));
        assert_eq!(theme_at(&sections, 700.0), Some(Theme::Dark));
    }

    #[test]
    fn parse_theme_attribute() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }
}
