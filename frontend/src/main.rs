use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod copy;
mod i18n;
mod services;
mod contact {
    pub mod api;
    pub mod form;
    pub mod validation;
}
mod chat {
    pub mod machine;
    pub mod widget;
}
mod components {
    pub mod cursor_sparks;
    pub mod footer;
    pub mod marquee;
    pub mod particles;
    pub mod scroll_theme;
}
mod pages {
    pub mod home;
    pub mod legal;
    pub mod not_found;
    pub mod service;
}

use chat::widget::ChatWidget;
use components::{
    cursor_sparks::CursorSparks,
    footer::Footer,
    scroll_theme::ScrollTheme,
};
use i18n::Locale;
use pages::{
    home::Home,
    legal::{LegalKind, LegalPage},
    not_found::NotFound,
    service::ServicePage,
};

/// Every page exists twice: English at the root, Spanish under `/es`.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/es")]
    HomeEs,
    #[at("/services/:slug")]
    Service { slug: String },
    #[at("/es/services/:slug")]
    ServiceEs { slug: String },
    #[at("/privacy")]
    Privacy,
    #[at("/es/privacy")]
    PrivacyEs,
    #[at("/cookies")]
    Cookies,
    #[at("/es/cookies")]
    CookiesEs,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn home(locale: Locale) -> Self {
        match locale {
            Locale::En => Route::Home,
            Locale::Es => Route::HomeEs,
        }
    }

    pub fn service(locale: Locale, slug: &str) -> Self {
        let slug = slug.to_string();
        match locale {
            Locale::En => Route::Service { slug },
            Locale::Es => Route::ServiceEs { slug },
        }
    }

    pub fn privacy(locale: Locale) -> Self {
        match locale {
            Locale::En => Route::Privacy,
            Locale::Es => Route::PrivacyEs,
        }
    }

    pub fn cookies(locale: Locale) -> Self {
        match locale {
            Locale::En => Route::Cookies,
            Locale::Es => Route::CookiesEs,
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home locale={Locale::En} /> }
        },
        Route::HomeEs => {
            info!("Rendering Home page (es)");
            html! { <Home locale={Locale::Es} /> }
        },
        Route::Service { slug } => {
            info!("Rendering Service page {}", slug);
            html! { <ServicePage locale={Locale::En} slug={slug} /> }
        },
        Route::ServiceEs { slug } => {
            info!("Rendering Service page {} (es)", slug);
            html! { <ServicePage locale={Locale::Es} slug={slug} /> }
        },
        Route::Privacy => html! { <LegalPage locale={Locale::En} kind={LegalKind::Privacy} /> },
        Route::PrivacyEs => html! { <LegalPage locale={Locale::Es} kind={LegalKind::Privacy} /> },
        Route::Cookies => html! { <LegalPage locale={Locale::En} kind={LegalKind::Cookies} /> },
        Route::CookiesEs => html! { <LegalPage locale={Locale::Es} kind={LegalKind::Cookies} /> },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound locale={Locale::En} /> }
        },
    }
}

/// Navigates to `path` inside the app when the router knows it, otherwise
/// with a full page load.
fn go_to(navigator: &Option<Navigator>, path: &str) {
    match (navigator, Route::recognize(path)) {
        (Some(navigator), Some(route)) if route != Route::NotFound => navigator.push(&route),
        _ => {
            if let Some(window) = window() {
                let _ = window.location().set_href(path);
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub locale: Locale,
    pub path: AttrValue,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { locale, path } = props;
    let text = &copy::copy(*locale).nav;
    let navigator = use_navigator();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::<dyn Fn()>::new(move || {
                if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                    is_scrolled.set(scroll_y > 80.0);
                }
            });

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let switch_language = {
        let menu_open = menu_open.clone();
        let path = path.clone();
        let target = locale.other();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            i18n::store_preference(target);
            let next = i18n::switch_locale_path(&path, target);
            info!("Switching language to {} ({} -> {})", target.code(), path, next);
            go_to(&navigator, &next);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };
    let home = Route::home(*locale);
    let home_path = home.to_path();
    let section_link = |anchor: &str| {
        if home_path == "/" {
            format!("/#{}", anchor)
        } else {
            format!("{}#{}", home_path, anchor)
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={home} classes="nav-logo">
                    {"atelier"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href={section_link("services")} class="nav-link" onclick={close_menu.clone()}>{text.services}</a>
                    <a href={section_link("process")} class="nav-link" onclick={close_menu.clone()}>{text.process}</a>
                    <a href={section_link("contact")} class="nav-link" onclick={close_menu}>{text.contact}</a>
                    <a
                        href={i18n::switch_locale_path(path, locale.other())}
                        hreflang={locale.other().code()}
                        class="nav-lang"
                        onclick={switch_language}
                    >
                        <span class="nav-lang-code">{locale.other().label()}</span>
                        {text.switch_language}
                    </a>
                </div>
            </div>
        </nav>
    }
}

/// Everything that needs the router: locale from the URL, first-visit
/// language redirect and the page chrome.
#[function_component(Shell)]
fn shell() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let path = location.map(|l| l.path().to_string()).unwrap_or_else(|| "/".to_string());
    let locale = i18n::locale_from_path(&path);

    {
        let path = path.clone();
        use_effect_with_deps(move |_| {
            let stored = i18n::stored_preference();
            let redirected = i18n::was_redirected();
            if let Some(target) = i18n::autodetect_redirect(&path, stored, redirected, &i18n::browser_languages()) {
                info!("Redirecting to preferred language: {}", target);
                if stored.is_none() {
                    i18n::mark_redirected();
                }
                if let (Some(navigator), Some(route)) = (navigator, Route::recognize(&target)) {
                    navigator.replace(&route);
                }
            }
            || ()
        }, ());
    }

    use_effect_with_deps(move |locale: &Locale| {
        if let Some(root) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = root.set_attribute("lang", locale.code());
        }
        || ()
    }, locale);

    html! {
        <>
            <Nav locale={locale} path={path.clone()} />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer locale={locale} />
            <ChatWidget locale={locale} />
            <CursorSparks />
            <ScrollTheme path={path} />
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_route_in_both_locales() {
        for locale in [Locale::En, Locale::Es] {
            for route in [
                Route::home(locale),
                Route::service(locale, "branding"),
                Route::privacy(locale),
                Route::cookies(locale),
            ] {
                let path = route.to_path();
                assert_eq!(i18n::locale_from_path(&path), locale, "{}", path);
                assert_eq!(Route::recognize(&path), Some(route));
            }
        }
    }

    #[test]
    fn switched_paths_are_routable() {
        for slug in services::SERVICES.iter().map(|s| s.slug) {
            let en = Route::service(Locale::En, slug).to_path();
            let es = i18n::switch_locale_path(&en, Locale::Es);
            assert_eq!(Route::recognize(&es), Some(Route::service(Locale::Es, slug)));
        }
        assert_eq!(Route::recognize(&i18n::switch_locale_path("/", Locale::Es)), Some(Route::HomeEs));
        assert_eq!(Route::recognize(&i18n::switch_locale_path("/es/cookies", Locale::En)), Some(Route::Cookies));
    }
}
