use gloo_net::http::Request;
use serde::Deserialize;

use crate::config;
use crate::contact::validation::ContactSubmission;
use crate::copy::ContactCopy;

#[derive(Deserialize)]
struct ApiError {
    error: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitError {
    Network(String),
    Rejected { status: u16, message: String },
}

impl SubmitError {
    /// What the visitor sees. The server already localizes its own messages.
    pub fn user_message(&self, copy: &ContactCopy) -> String {
        match self {
            SubmitError::Network(_) => copy.network_error.to_string(),
            SubmitError::Rejected { message, .. } => message.clone(),
        }
    }
}

pub async fn submit_contact(submission: &ContactSubmission) -> Result<(), SubmitError> {
    let response = Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .json(submission)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let message = match response.json::<ApiError>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", status),
    };
    log::warn!("Contact submission rejected with status {}: {}", status, message);
    Err(SubmitError::Rejected { status, message })
}
