use yew::prelude::*;
use yew_router::prelude::*;

use crate::copy::{copy, LegalCopy};
use crate::i18n::Locale;
use crate::Route;

#[derive(Clone, Copy, PartialEq)]
pub enum LegalKind {
    Privacy,
    Cookies,
}

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub locale: Locale,
    pub kind: LegalKind,
}

#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let site = copy(props.locale);
    let (page, other, other_route): (&LegalCopy, &str, Route) = match props.kind {
        LegalKind::Privacy => (&site.privacy, site.footer.cookies, Route::cookies(props.locale)),
        LegalKind::Cookies => (&site.cookies, site.footer.privacy, Route::privacy(props.locale)),
    };

    html! {
        <div class="legal-content" data-theme="light">
            <div>
                <h1>{page.title}</h1>
                <p class="legal-updated">{page.updated}</p>
                { for page.sections.iter().map(|section| html! {
                    <section>
                        <h2>{section.heading}</h2>
                        { for section.paragraphs.iter().map(|p| html! { <p>{*p}</p> }) }
                    </section>
                }) }
                <div class="legal-links">
                    <Link<Route> to={other_route}>{other}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::home(props.locale)}>{site.not_found.home}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
