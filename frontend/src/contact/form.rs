use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::contact::api::submit_contact;
use crate::contact::validation::{validate, FieldError};
use crate::copy::copy;
use crate::i18n::Locale;

#[derive(Clone, PartialEq)]
enum FormStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub locale: Locale,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let text = &copy(props.locale).contact;
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let field_errors = use_state(Vec::<FieldError>::new);
    let status = use_state(|| FormStatus::Idle);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let field_errors = field_errors.clone();
        let status = status.clone();
        let locale = props.locale;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FormStatus::Sending {
                return;
            }
            let submission = match validate(&name, &email, &message, locale) {
                Ok(submission) => submission,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };
            field_errors.set(Vec::new());
            status.set(FormStatus::Sending);

            let status = status.clone();
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match submit_contact(&submission).await {
                    Ok(()) => {
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                        status.set(FormStatus::Sent);
                    }
                    Err(err) => {
                        log::error!("Contact form submission failed: {:?}", err);
                        status.set(FormStatus::Failed(err.user_message(&copy(locale).contact)));
                    }
                }
            });
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let error_for = |field: FieldError| -> Html {
        if field_errors.contains(&field) {
            html! { <p class="field-error">{field.message(text)}</p> }
        } else {
            html! {}
        }
    };

    let sending = *status == FormStatus::Sending;

    html! {
        <section id="contact" class="contact-section" data-theme="light">
            <h2>{text.heading}</h2>
            <p class="contact-intro">{text.intro}</p>
            <form class="contact-form" {onsubmit}>
                <label>
                    <span>{text.name_label}</span>
                    <input type="text" autocomplete="name" value={(*name).clone()} oninput={on_name} />
                </label>
                <label>
                    <span>{text.email_label}</span>
                    <input type="email" autocomplete="email" value={(*email).clone()} oninput={on_email} />
                </label>
                {error_for(FieldError::InvalidEmail)}
                <label>
                    <span>{text.message_label}</span>
                    <textarea rows="5" value={(*message).clone()} oninput={on_message} />
                </label>
                {error_for(FieldError::ShortMessage)}
                <button type="submit" class="cta-button" disabled={sending}>
                    { match &*status {
                        FormStatus::Sending => text.sending,
                        FormStatus::Failed(_) => text.retry,
                        _ => text.submit,
                    } }
                </button>
                { match &*status {
                    FormStatus::Sent => html! { <p class="form-success">{text.sent}</p> },
                    FormStatus::Failed(msg) => html! { <p class="form-error">{msg}</p> },
                    _ => html! {},
                } }
            </form>
        </section>
    }
}
