//! Contact endpoint errors and their mapping to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::config::settings::ConfigError;
use crate::locale::Locale;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("contact delivery is not configured: {0}")]
    NotConfigured(#[from] ConfigError),

    #[error("email provider error: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::MissingField(_)
            | ContactError::InvalidEmail
            | ContactError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ContactError::NotConfigured(_) | ContactError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ContactError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Short message shown to the visitor. Configuration details stay in the logs.
    pub fn user_message(&self, locale: Locale) -> String {
        let text = match (self, locale) {
            (ContactError::MissingField("email"), Locale::En) => "Please enter your email.",
            (ContactError::MissingField("email"), Locale::Es) => "Introduce tu email.",
            (ContactError::MissingField(_), Locale::En) => "Please write a message.",
            (ContactError::MissingField(_), Locale::Es) => "Escribe un mensaje.",
            (ContactError::InvalidEmail, Locale::En) => "That email address does not look right.",
            (ContactError::InvalidEmail, Locale::Es) => "Ese email no parece válido.",
            (ContactError::MalformedBody(_), Locale::En) => "Invalid request.",
            (ContactError::MalformedBody(_), Locale::Es) => "Solicitud no válida.",
            (ContactError::Upstream(detail), Locale::En) => {
                return format!("We could not send your message ({}).", detail)
            }
            (ContactError::Upstream(detail), Locale::Es) => {
                return format!("No pudimos enviar tu mensaje ({}).", detail)
            }
            (ContactError::NotConfigured(_) | ContactError::Internal(_), Locale::En) => {
                "Something went wrong. Please try again later."
            }
            (ContactError::NotConfigured(_) | ContactError::Internal(_), Locale::Es) => {
                "Algo salió mal. Inténtalo de nuevo más tarde."
            }
        };
        text.to_string()
    }

    pub fn localized(self, locale: Locale) -> LocalizedError {
        LocalizedError { locale, error: self }
    }
}

/// A contact error paired with the locale the visitor wrote in.
#[derive(Debug)]
pub struct LocalizedError {
    pub locale: Locale,
    pub error: ContactError,
}

impl IntoResponse for LocalizedError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        if status.is_server_error() {
            tracing::error!(error = %self.error, status = status.as_u16(), "contact submission failed");
        } else {
            tracing::warn!(error = %self.error, status = status.as_u16(), "contact submission rejected");
        }

        (status, Json(json!({ "error": self.error.user_message(self.locale) }))).into_response()
    }
}
