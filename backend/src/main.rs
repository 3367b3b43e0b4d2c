use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::path::Path;
use std::sync::Arc;
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod locale;
mod site;
mod handlers {
    pub mod contact_handlers;
    pub mod seo_handlers;
}
mod api {
    pub mod mailer;
}
mod config {
    pub mod settings;
}
mod utils {
    pub mod email_templates;
}

use handlers::contact_handlers;
use handlers::seo_handlers;
use api::mailer::{Mailer, ResendMailer};
use config::settings::{missing_contact_settings, EnvSettings, ServerConfig, SettingsSource};
use error::ContactError;
use locale::Locale;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    pub settings: Arc<dyn SettingsSource>,
    pub mailer: Arc<dyn Mailer>,
    pub site_url: String,
}

/// Turns a panic inside a handler into the same `{error}` body the
/// contact endpoint uses for its own failures.
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ContactError::Internal(detail).localized(Locale::default()).into_response()
}

pub fn build_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .route("/sitemap.xml", get(seo_handlers::sitemap))
        .route("/robots.txt", get(seo_handlers::robots))
        .route("/manifest.webmanifest", get(seo_handlers::manifest));

    // Client-side routes deep-link into the bundle, so unknown paths fall back to index.html
    let app = match static_dir {
        Some(dir) => app.fallback_service(
            ServeDir::new(dir).not_found_service(ServeFile::new(dir.join("index.html"))),
        ),
        None => app,
    };

    app
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(cors::Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = ServerConfig::from_env();

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.environment.clone().into()),
            ..Default::default()
        }))
    });

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(sentry::integrations::tracing::layer())
        .init();

    let missing = missing_contact_settings(|key| std::env::var(key).ok());
    if !missing.is_empty() {
        tracing::warn!(?missing, "contact form is not configured; /api/contact will answer 500");
    }

    let state = Arc::new(AppState {
        settings: Arc::new(EnvSettings),
        mailer: Arc::new(ResendMailer),
        site_url: config.site_url.clone(),
    });

    let static_dir = config.static_dir.is_dir().then_some(config.static_dir.as_path());
    if static_dir.is_none() {
        tracing::warn!(dir = %config.static_dir.display(), "frontend bundle not found, serving API only");
    }
    let app = build_router(state, static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, environment = %config.environment, "server listening");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
