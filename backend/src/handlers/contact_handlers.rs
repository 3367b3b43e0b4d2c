use std::sync::Arc;
use axum::{
    Json,
    extract::{rejection::JsonRejection, State},
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use crate::AppState;
use crate::error::{ContactError, LocalizedError};
use crate::locale::Locale;
use crate::utils::email_templates;

// Same rule as the browser form: no whitespace, one `@`, dotted domain with
// non-empty labels.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email regex is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

/// A submission that passed validation and is ready to be emailed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: String,
    pub message: String,
    pub locale: Locale,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ContactRequest {
    pub fn validate(self) -> Result<ContactSubmission, LocalizedError> {
        let locale = Locale::parse(self.locale.as_deref());

        let email = non_blank(self.email)
            .ok_or_else(|| ContactError::MissingField("email").localized(locale))?;
        let message = non_blank(self.message)
            .ok_or_else(|| ContactError::MissingField("message").localized(locale))?;
        if !is_valid_email(&email) {
            return Err(ContactError::InvalidEmail.localized(locale));
        }

        Ok(ContactSubmission {
            name: non_blank(self.name),
            email,
            message,
            locale,
        })
    }
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, LocalizedError> {
    let Json(request) = payload
        .map_err(|e| ContactError::MalformedBody(e.body_text()).localized(Locale::default()))?;

    let submission = request.validate()?;
    let locale = submission.locale;

    let settings = state
        .settings
        .contact()
        .map_err(|e| ContactError::from(e).localized(locale))?;

    let email = email_templates::contact_email(&submission);
    state
        .mailer
        .send(&settings, &email)
        .await
        .map_err(|e| ContactError::Upstream(e.to_string()).localized(locale))?;

    tracing::info!(locale = locale.code(), has_name = submission.name.is_some(), "contact submission delivered");
    Ok(Json(json!({ "ok": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mailer::{MailError, Mailer, MockMailer, OutboundEmail};
    use crate::config::settings::{ConfigError, ContactSettings, SettingsSource};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct FixedSettings(Option<ContactSettings>);

    impl SettingsSource for FixedSettings {
        fn contact(&self) -> Result<ContactSettings, ConfigError> {
            self.0.clone().ok_or(ConfigError::Missing("RESEND_API_KEY"))
        }
    }

    fn configured() -> FixedSettings {
        FixedSettings(Some(ContactSettings {
            api_key: "re_test".to_string(),
            from_email: "site@atelier.studio".to_string(),
            to_email: "hello@atelier.studio".to_string(),
        }))
    }

    fn app(settings: FixedSettings, mailer: MockMailer) -> axum::Router {
        let state = Arc::new(AppState {
            settings: Arc::new(settings),
            mailer: Arc::new(mailer),
            site_url: "https://atelier.studio".to_string(),
        });
        crate::build_router(state, None)
    }

    async fn post(app: axum::Router, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn never_called() -> MockMailer {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();
        mailer
    }

    #[tokio::test]
    async fn valid_submission_sends_one_email() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|settings, email| {
                settings.to_email == "hello@atelier.studio"
                    && email.reply_to == "ana@example.com"
                    && email.html.contains("We would like a new brand identity.")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let (status, body) = post(
            app(configured(), mailer),
            r#"{"name":"Ana","email":"ana@example.com","message":"We would like a new brand identity.","locale":"en"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn missing_email_is_rejected_without_sending() {
        let (status, body) = post(
            app(configured(), never_called()),
            r#"{"message":"Hello there, we need help.","locale":"en"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please enter your email.");
    }

    #[tokio::test]
    async fn blank_message_is_rejected_without_sending() {
        let (status, body) = post(
            app(configured(), never_called()),
            r#"{"email":"ana@example.com","message":"   ","locale":"es"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Escribe un mensaje.");
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_without_sending() {
        let (status, _) = post(
            app(configured(), never_called()),
            r#"{"email":"not-an-email","message":"Hello there, we need help.","locale":"en"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_body_is_a_bad_request() {
        let (status, body) = post(app(configured(), never_called()), "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn missing_configuration_is_a_server_error() {
        let (status, body) = post(
            app(FixedSettings(None), never_called()),
            r#"{"email":"ana@example.com","message":"Hello there, we need help.","locale":"en"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body["error"].as_str().unwrap().contains("RESEND_API_KEY"));
    }

    #[tokio::test]
    async fn provider_failure_is_a_bad_gateway() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .times(1)
            .returning(|_, _| Err(MailError::Provider("domain is not verified".to_string())));

        let (status, body) = post(
            app(configured(), mailer),
            r#"{"email":"ana@example.com","message":"Hello there, we need help.","locale":"en"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].as_str().unwrap().contains("domain is not verified"));
    }

    struct PanickingMailer;

    #[async_trait::async_trait]
    impl Mailer for PanickingMailer {
        async fn send(&self, _: &ContactSettings, _: &OutboundEmail) -> Result<(), MailError> {
            panic!("mailer exploded")
        }
    }

    #[tokio::test]
    async fn panic_while_sending_is_a_server_error() {
        let state = Arc::new(AppState {
            settings: Arc::new(configured()),
            mailer: Arc::new(PanickingMailer),
            site_url: "https://atelier.studio".to_string(),
        });

        let (status, body) = post(
            crate::build_router(state, None),
            r#"{"email":"ana@example.com","message":"Hello there, we need help.","locale":"en"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Something went wrong. Please try again later.");
    }

    #[test]
    fn validation_trims_and_drops_blank_name() {
        let request = ContactRequest {
            name: Some("  ".to_string()),
            email: Some(" ana@example.com ".to_string()),
            message: Some(" Hi there, a question. ".to_string()),
            locale: Some("es".to_string()),
        };
        let submission = request.validate().unwrap();
        assert_eq!(submission.name, None);
        assert_eq!(submission.email, "ana@example.com");
        assert_eq!(submission.message, "Hi there, a question.");
        assert_eq!(submission.locale, Locale::Es);
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b+tag@sub.example.co"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@b..com"));
        assert!(!is_valid_email("ana@.example.com"));
        assert!(!is_valid_email("ana@example.com."));
        assert!(!is_valid_email("ana@@example.com"));
    }
}
