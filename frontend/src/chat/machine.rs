//! Lead chat as a plain state machine, kept free of DOM access so the widget
//! only renders whatever state this produces.

use crate::contact::validation::{is_valid_email, ContactSubmission};
use crate::copy::copy;
use crate::i18n::Locale;

/// Shown before a language is chosen, so it carries both.
pub const GREETING: &str = "Hi! ¡Hola! Which language do you prefer? ¿Qué idioma prefieres?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Language,
    Scope,
    Detail,
    Name,
    Email,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Website,
    Branding,
    Product,
    Other,
}

impl Scope {
    pub const ALL: [Scope; 4] = [Scope::Website, Scope::Branding, Scope::Product, Scope::Other];

    pub fn label(self, locale: Locale) -> &'static str {
        let chat = &copy(locale).chat;
        match self {
            Scope::Website => chat.scope_website,
            Scope::Branding => chat.scope_branding,
            Scope::Product => chat.scope_product,
            Scope::Other => chat.scope_other,
        }
    }

    /// Only the open-ended choice needs a follow-up question.
    fn needs_detail(self) -> bool {
        self == Scope::Other
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatInput {
    Language(Locale),
    Scope(Scope),
    Text(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatError {
    /// The input does not answer the current question.
    UnexpectedInput,
    EmptyAnswer,
    InvalidEmail,
    /// The conversation already ended.
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    Bot,
    Visitor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatLine {
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeadChat {
    step: Step,
    locale: Option<Locale>,
    scope: Option<Scope>,
    detail: Option<String>,
    name: Option<String>,
    email: Option<String>,
    transcript: Vec<ChatLine>,
}

impl Default for LeadChat {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadChat {
    pub fn new() -> Self {
        Self {
            step: Step::Language,
            locale: None,
            scope: None,
            detail: None,
            name: None,
            email: None,
            transcript: vec![ChatLine { speaker: Speaker::Bot, text: GREETING.to_string() }],
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn locale(&self) -> Option<Locale> {
        self.locale
    }

    pub fn transcript(&self) -> &[ChatLine] {
        &self.transcript
    }

    /// Feeds one answer. Returns the submission exactly once, on the
    /// transition into `Done`. A rejected input leaves the state untouched.
    pub fn advance(&mut self, input: ChatInput) -> Result<Option<ContactSubmission>, ChatError> {
        match (self.step, input) {
            (Step::Done, _) => Err(ChatError::Finished),

            (Step::Language, ChatInput::Language(locale)) => {
                self.locale = Some(locale);
                self.visitor_says(match locale {
                    Locale::En => "English",
                    Locale::Es => "Español",
                });
                self.move_to(Step::Scope);
                Ok(None)
            }

            (Step::Scope, ChatInput::Scope(scope)) => {
                self.scope = Some(scope);
                self.visitor_says(scope.label(self.current_locale()));
                self.move_to(if scope.needs_detail() { Step::Detail } else { Step::Name });
                Ok(None)
            }

            (Step::Detail, ChatInput::Text(text)) => {
                let detail = non_blank(&text).ok_or(ChatError::EmptyAnswer)?;
                self.visitor_says(&detail);
                self.detail = Some(detail);
                self.move_to(Step::Name);
                Ok(None)
            }

            (Step::Name, ChatInput::Text(text)) => {
                let name = non_blank(&text).ok_or(ChatError::EmptyAnswer)?;
                self.visitor_says(&name);
                self.name = Some(name);
                self.move_to(Step::Email);
                Ok(None)
            }

            (Step::Email, ChatInput::Text(text)) => {
                let email = non_blank(&text).ok_or(ChatError::EmptyAnswer)?;
                if !is_valid_email(&email) {
                    return Err(ChatError::InvalidEmail);
                }
                self.visitor_says(&email);
                self.email = Some(email);
                self.move_to(Step::Done);
                Ok(Some(self.submission()))
            }

            _ => Err(ChatError::UnexpectedInput),
        }
    }

    /// Localized hint for a rejected answer.
    pub fn error_text(&self, error: ChatError) -> Option<&'static str> {
        let chat = &copy(self.current_locale()).chat;
        match error {
            ChatError::EmptyAnswer => Some(chat.empty_answer),
            ChatError::InvalidEmail => Some(chat.invalid_email),
            ChatError::UnexpectedInput | ChatError::Finished => None,
        }
    }

    fn current_locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    fn visitor_says(&mut self, text: &str) {
        self.transcript.push(ChatLine { speaker: Speaker::Visitor, text: text.to_string() });
    }

    fn move_to(&mut self, step: Step) {
        self.step = step;
        let chat = &copy(self.current_locale()).chat;
        let prompt = match step {
            Step::Language => GREETING,
            Step::Scope => chat.ask_scope,
            Step::Detail => chat.ask_detail,
            Step::Name => chat.ask_name,
            Step::Email => chat.ask_email,
            Step::Done => chat.done,
        };
        self.transcript.push(ChatLine { speaker: Speaker::Bot, text: prompt.to_string() });
    }

    fn submission(&self) -> ContactSubmission {
        let locale = self.current_locale();
        let scope = self.scope.map(|s| s.label(locale)).unwrap_or_default();
        let mut message = match locale {
            Locale::En => format!("Lead chat request.\nNeed: {}", scope),
            Locale::Es => format!("Solicitud desde el chat.\nNecesidad: {}", scope),
        };
        if let Some(detail) = &self.detail {
            message.push_str("\n\n");
            message.push_str(detail);
        }
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone().unwrap_or_default(),
            message,
            locale,
        }
    }
}

fn non_blank(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> ChatInput {
        ChatInput::Text(s.to_string())
    }

    #[test]
    fn walks_every_step_in_order() {
        let mut chat = LeadChat::new();
        assert_eq!(chat.step(), Step::Language);
        assert_eq!(chat.advance(ChatInput::Language(Locale::En)), Ok(None));
        assert_eq!(chat.step(), Step::Scope);
        assert_eq!(chat.advance(ChatInput::Scope(Scope::Website)), Ok(None));
        assert_eq!(chat.step(), Step::Name);
        assert_eq!(chat.advance(text("Ana")), Ok(None));
        assert_eq!(chat.step(), Step::Email);

        let submission = chat.advance(text("ana@example.com")).unwrap().expect("submission on done");
        assert_eq!(chat.step(), Step::Done);
        assert_eq!(submission.name.as_deref(), Some("Ana"));
        assert_eq!(submission.email, "ana@example.com");
        assert_eq!(submission.locale, Locale::En);
        assert!(submission.message.contains("A website"));
    }

    #[test]
    fn other_scope_asks_for_detail() {
        let mut chat = LeadChat::new();
        chat.advance(ChatInput::Language(Locale::Es)).unwrap();
        chat.advance(ChatInput::Scope(Scope::Other)).unwrap();
        assert_eq!(chat.step(), Step::Detail);
        assert_eq!(chat.advance(text("   ")), Err(ChatError::EmptyAnswer));
        assert_eq!(chat.step(), Step::Detail);
        chat.advance(text("Una tienda online para cerámica")).unwrap();
        assert_eq!(chat.step(), Step::Name);
        chat.advance(text("Luis")).unwrap();
        let submission = chat.advance(text("luis@example.es")).unwrap().unwrap();
        assert_eq!(submission.locale, Locale::Es);
        assert!(submission.message.contains("Otra cosa"));
        assert!(submission.message.contains("Una tienda online para cerámica"));
    }

    #[test]
    fn steps_cannot_be_skipped() {
        let mut chat = LeadChat::new();
        assert_eq!(chat.advance(ChatInput::Scope(Scope::Branding)), Err(ChatError::UnexpectedInput));
        assert_eq!(chat.advance(text("Ana")), Err(ChatError::UnexpectedInput));
        assert_eq!(chat.step(), Step::Language);

        chat.advance(ChatInput::Language(Locale::En)).unwrap();
        assert_eq!(chat.advance(text("ana@example.com")), Err(ChatError::UnexpectedInput));
        assert_eq!(chat.advance(ChatInput::Language(Locale::Es)), Err(ChatError::UnexpectedInput));
        assert_eq!(chat.step(), Step::Scope);
        assert_eq!(chat.locale(), Some(Locale::En));
    }

    #[test]
    fn invalid_email_is_asked_again() {
        let mut chat = LeadChat::new();
        chat.advance(ChatInput::Language(Locale::En)).unwrap();
        chat.advance(ChatInput::Scope(Scope::Product)).unwrap();
        chat.advance(text("Ana")).unwrap();
        let before = chat.transcript().len();
        assert_eq!(chat.advance(text("ana@nowhere")), Err(ChatError::InvalidEmail));
        assert_eq!(chat.step(), Step::Email);
        assert_eq!(chat.transcript().len(), before);
        assert_eq!(chat.error_text(ChatError::InvalidEmail), Some(copy(Locale::En).chat.invalid_email));
    }

    #[test]
    fn submits_exactly_once() {
        let mut chat = LeadChat::new();
        chat.advance(ChatInput::Language(Locale::En)).unwrap();
        chat.advance(ChatInput::Scope(Scope::Branding)).unwrap();
        chat.advance(text("Ana")).unwrap();
        assert!(chat.advance(text("ana@example.com")).unwrap().is_some());
        assert_eq!(chat.advance(text("ana@example.com")), Err(ChatError::Finished));
        assert_eq!(chat.advance(ChatInput::Language(Locale::En)), Err(ChatError::Finished));
        assert_eq!(chat.step(), Step::Done);
    }

    #[test]
    fn transcript_alternates_prompts_and_answers() {
        let mut chat = LeadChat::new();
        chat.advance(ChatInput::Language(Locale::Es)).unwrap();
        chat.advance(ChatInput::Scope(Scope::Website)).unwrap();

        let lines = chat.transcript();
        assert_eq!(lines[0].text, GREETING);
        assert_eq!(lines[1], ChatLine { speaker: Speaker::Visitor, text: "Español".to_string() });
        assert_eq!(lines[2].text, copy(Locale::Es).chat.ask_scope);
        assert_eq!(lines[3].text, "Una web");
        assert_eq!(lines[4].text, copy(Locale::Es).chat.ask_name);
        assert_eq!(lines[4].speaker, Speaker::Bot);
    }

    #[test]
    fn chat_message_passes_contact_validation() {
        let mut chat = LeadChat::new();
        chat.advance(ChatInput::Language(Locale::En)).unwrap();
        chat.advance(ChatInput::Scope(Scope::Website)).unwrap();
        chat.advance(text("Ana")).unwrap();
        let submission = chat.advance(text("ana@example.com")).unwrap().unwrap();
        assert!(crate::contact::validation::validate(
            submission.name.as_deref().unwrap_or_default(),
            &submission.email,
            &submission.message,
            submission.locale,
        )
        .is_ok());
    }
}
