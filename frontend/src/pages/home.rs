use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::marquee::Marquee;
use crate::components::particles::ParticleField;
use crate::contact::form::ContactForm;
use crate::copy::copy;
use crate::i18n::Locale;
use crate::services::SERVICES;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub locale: Locale,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let locale = props.locale;
    let text = copy(locale);

    // Back to the top whenever the language changes
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        locale,
    );

    html! {
        <div class="landing">
            <section class="hero" data-theme="dark">
                <ParticleField />
                <div class="hero-content">
                    <p class="hero-eyebrow">{text.hero.eyebrow}</p>
                    <h1>{text.hero.title}</h1>
                    <p class="hero-subtitle">{text.hero.subtitle}</p>
                    <a href="#contact" class="cta-button">
                        <span>{text.hero.cta}</span>
                        <i class="arrow">{"→"}</i>
                    </a>
                </div>
            </section>

            <Marquee items={text.marquee} />

            <section id="services" class="services" data-theme="light">
                <h2>{text.services.heading}</h2>
                <p class="section-intro">{text.services.intro}</p>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| {
                        let service_text = service.text(locale);
                        html! {
                            <article class="service-card">
                                <h3>{service_text.title}</h3>
                                <p>{service_text.summary}</p>
                                <Link<Route> to={Route::service(locale, service.slug)} classes="forward-link">
                                    {text.services.learn_more}
                                </Link<Route>>
                            </article>
                        }
                    }) }
                </div>
            </section>

            <section id="process" class="how-it-works" data-theme="dark">
                <h2>{text.process.heading}</h2>
                <ol class="steps-grid">
                    { for text.process.steps.iter().enumerate().map(|(i, (title, body))| html! {
                        <li class="step">
                            <span class="step-number">{format!("{:02}", i + 1)}</span>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </li>
                    }) }
                </ol>
            </section>

            <Marquee items={text.marquee} reverse={true} />

            <ContactForm locale={locale} />
        </div>
    }
}
