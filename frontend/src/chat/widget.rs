use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;
use web_sys::{window, HtmlInputElement};

use crate::chat::machine::{ChatError, ChatInput, LeadChat, Scope, Speaker, Step};
use crate::contact::api::submit_contact;
use crate::contact::validation::ContactSubmission;
use crate::copy::copy;
use crate::i18n::Locale;

const SEEN_KEY: &str = "atelier.chat_seen";

fn chat_seen() -> bool {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(SEEN_KEY).ok().flatten())
        .is_some()
}

fn mark_chat_seen() {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(SEEN_KEY, "1");
    }
}

#[derive(Clone, PartialEq)]
enum Delivery {
    Idle,
    Sending,
    Sent,
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    /// Locale of the page; the chat switches to the visitor's choice once made.
    pub locale: Locale,
}

/// Set while a submission is on the wire. Checked synchronously so a second
/// click before the next render cannot start another request.
#[derive(Clone, Default)]
struct InFlight(Rc<Cell<bool>>);

impl InFlight {
    fn try_begin(&self) -> bool {
        !self.0.replace(true)
    }

    fn finish(&self) {
        self.0.set(false);
    }
}

fn deliver(submission: ContactSubmission, delivery: UseStateHandle<Delivery>, in_flight: InFlight) {
    if !in_flight.try_begin() {
        log::warn!("Lead chat submission already in flight");
        return;
    }
    delivery.set(Delivery::Sending);
    wasm_bindgen_futures::spawn_local(async move {
        match submit_contact(&submission).await {
            Ok(()) => delivery.set(Delivery::Sent),
            Err(err) => {
                log::error!("Lead chat submission failed: {:?}", err);
                delivery.set(Delivery::Failed);
            }
        }
        in_flight.finish();
    });
}

#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let open = use_state(|| false);
    let seen = use_state(chat_seen);
    let chat = use_state(LeadChat::new);
    let draft = use_state(String::new);
    let hint = use_state(|| None::<&'static str>);
    let pending = use_state(|| None::<ContactSubmission>);
    let delivery = use_state(|| Delivery::Idle);
    let in_flight = (*use_mut_ref(InFlight::default)).borrow().clone();

    let locale = chat.locale().unwrap_or(props.locale);
    let text = &copy(locale).chat;

    let toggle = {
        let open = open.clone();
        let seen = seen.clone();
        Callback::from(move |_: MouseEvent| {
            if !*seen {
                mark_chat_seen();
                seen.set(true);
            }
            open.set(!*open);
        })
    };

    let answer = {
        let chat = chat.clone();
        let draft = draft.clone();
        let hint = hint.clone();
        let pending = pending.clone();
        let delivery = delivery.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |input: ChatInput| {
            let mut next = (*chat).clone();
            match next.advance(input) {
                Ok(submission) => {
                    hint.set(None);
                    draft.set(String::new());
                    if let Some(submission) = submission {
                        pending.set(Some(submission.clone()));
                        deliver(submission, delivery.clone(), in_flight.clone());
                    }
                    chat.set(next);
                }
                Err(ChatError::UnexpectedInput) | Err(ChatError::Finished) => {
                    log::warn!("Ignoring chat input outside of the current step");
                }
                Err(err) => hint.set(next.error_text(err)),
            }
        })
    };

    let retry = {
        let pending = pending.clone();
        let delivery = delivery.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |_: MouseEvent| {
            if *delivery != Delivery::Failed {
                return;
            }
            if let Some(submission) = (*pending).clone() {
                deliver(submission, delivery.clone(), in_flight.clone());
            }
        })
    };

    let on_draft = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let on_send = {
        let answer = answer.clone();
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            answer.emit(ChatInput::Text((*draft).clone()));
        })
    };

    let controls = match chat.step() {
        Step::Language => html! {
            <div class="chat-choices">
                { for [Locale::En, Locale::Es].into_iter().map(|choice| {
                    let answer = answer.clone();
                    html! {
                        <button class="chat-choice" onclick={Callback::from(move |_: MouseEvent| answer.emit(ChatInput::Language(choice)))}>
                            { if choice == Locale::En { "English" } else { "Español" } }
                        </button>
                    }
                }) }
            </div>
        },
        Step::Scope => html! {
            <div class="chat-choices">
                { for Scope::ALL.into_iter().map(|scope| {
                    let answer = answer.clone();
                    html! {
                        <button class="chat-choice" onclick={Callback::from(move |_: MouseEvent| answer.emit(ChatInput::Scope(scope)))}>
                            {scope.label(locale)}
                        </button>
                    }
                }) }
            </div>
        },
        Step::Detail | Step::Name | Step::Email => html! {
            <form class="chat-input" onsubmit={on_send}>
                <input
                    type={if chat.step() == Step::Email { "email" } else { "text" }}
                    placeholder={text.placeholder}
                    value={(*draft).clone()}
                    oninput={on_draft}
                />
                <button type="submit">{text.send}</button>
            </form>
        },
        Step::Done => match &*delivery {
            Delivery::Sending => html! { <p class="chat-status">{text.sending}</p> },
            Delivery::Sent => html! { <p class="chat-status sent">{text.sent}</p> },
            Delivery::Failed => html! {
                <div class="chat-status failed">
                    <p>{text.failed}</p>
                    <button onclick={retry}>{text.retry}</button>
                </div>
            },
            Delivery::Idle => html! {},
        },
    };

    html! {
        <div class={classes!("chat-widget", (*open).then(|| "open"))}>
            if *open {
                <div class="chat-panel" role="dialog" aria-label={text.title}>
                    <div class="chat-header">
                        <h3>{text.title}</h3>
                    </div>
                    <div class="chat-transcript">
                        { for chat.transcript().iter().map(|line| {
                            let class = match line.speaker {
                                Speaker::Bot => "chat-line bot",
                                Speaker::Visitor => "chat-line visitor",
                            };
                            html! { <p class={class}>{&line.text}</p> }
                        }) }
                    </div>
                    if let Some(message) = *hint {
                        <p class="chat-hint">{message}</p>
                    }
                    {controls}
                </div>
            }
            <button class="chat-launcher" onclick={toggle} aria-label={text.launcher}>
                { if *open { "✕" } else { "💬" } }
                if !*seen {
                    <span class="chat-badge">{"1"}</span>
                }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_delivery_at_a_time() {
        let in_flight = InFlight::default();
        let second_click = in_flight.clone();
        assert!(in_flight.try_begin());
        assert!(!second_click.try_begin());
        in_flight.finish();
        assert!(second_click.try_begin());
    }
}
