use yew::prelude::*;
use yew_router::prelude::*;

use crate::copy::copy;
use crate::i18n::Locale;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub locale: Locale,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    let text = &copy(props.locale).not_found;
    html! {
        <section class="not-found" data-theme="dark">
            <h1>{"404"}</h1>
            <h2>{text.title}</h2>
            <p>{text.body}</p>
            <Link<Route> to={Route::home(props.locale)} classes="cta-button">{text.home}</Link<Route>>
        </section>
    }
}
