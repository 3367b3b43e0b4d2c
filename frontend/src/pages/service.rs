use yew::prelude::*;
use yew_router::prelude::*;

use crate::contact::form::ContactForm;
use crate::copy::copy;
use crate::i18n::Locale;
use crate::pages::not_found::NotFound;
use crate::services;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServicePageProps {
    pub locale: Locale,
    pub slug: String,
}

#[function_component(ServicePage)]
pub fn service_page(props: &ServicePageProps) -> Html {
    let locale = props.locale;
    let Some(service) = services::find(&props.slug) else {
        log::warn!("Unknown service slug: {}", props.slug);
        return html! { <NotFound locale={locale} /> };
    };
    let text = copy(locale);
    let service_text = service.text(locale);

    html! {
        <div class="service-page">
            <section class="service-hero" data-theme="dark">
                <Link<Route> to={Route::home(locale)} classes="back-link">
                    {"← "}{text.services.back}
                </Link<Route>>
                <h1>{service_text.title}</h1>
                <p class="hero-subtitle">{service_text.summary}</p>
            </section>
            <section class="service-body" data-theme="light">
                <p>{service_text.body}</p>
                <h2>{text.services.deliverables}</h2>
                <ul class="deliverables">
                    { for service_text.deliverables.iter().map(|item| html! { <li>{*item}</li> }) }
                </ul>
                <a href="#contact" class="cta-button">{text.services.cta}</a>
            </section>
            <ContactForm locale={locale} />
        </div>
    }
}
