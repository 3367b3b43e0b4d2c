use yew::prelude::*;
use yew_router::prelude::*;

use crate::copy::copy;
use crate::i18n::Locale;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub locale: Locale,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let text = &copy(props.locale).footer;
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer" data-theme="dark">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{"atelier"}</span>
                    <p>{text.tagline}</p>
                </div>
                <nav class="footer-links">
                    <Link<Route> to={Route::privacy(props.locale)}>{text.privacy}</Link<Route>>
                    <Link<Route> to={Route::cookies(props.locale)}>{text.cookies}</Link<Route>>
                    <a href="mailto:hello@atelier.studio">{"hello@atelier.studio"}</a>
                </nav>
                <p class="footer-legal">{format!("© {} Atelier Studio. {}", year, text.rights)}</p>
            </div>
        </footer>
    }
}
