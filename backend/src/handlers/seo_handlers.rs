use std::io::Cursor;
use std::sync::Arc;
use axum::{
    Json,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::json;

use crate::AppState;
use crate::site::{self, LOCALES};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

fn write_text<W: std::io::Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> anyhow::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn write_alternate<W: std::io::Write>(writer: &mut Writer<W>, hreflang: &str, href: &str) -> anyhow::Result<()> {
    let mut link = BytesStart::new("xhtml:link");
    link.push_attribute(("rel", "alternate"));
    link.push_attribute(("hreflang", hreflang));
    link.push_attribute(("href", href));
    writer.write_event(Event::Empty(link))?;
    Ok(())
}

/// Every page in every locale, each entry pointing at its translations.
pub fn build_sitemap(site_url: &str, lastmod: &str) -> anyhow::Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    urlset.push_attribute(("xmlns:xhtml", XHTML_NS));
    writer.write_event(Event::Start(urlset))?;

    for path in site::page_paths() {
        for locale in LOCALES {
            writer.write_event(Event::Start(BytesStart::new("url")))?;
            write_text(&mut writer, "loc", &format!("{}{}", site_url, site::localized_path(&path, locale)))?;
            write_text(&mut writer, "lastmod", lastmod)?;
            for alternate in LOCALES {
                let href = format!("{}{}", site_url, site::localized_path(&path, alternate));
                write_alternate(&mut writer, alternate.code(), &href)?;
            }
            write_alternate(&mut writer, "x-default", &format!("{}{}", site_url, path))?;
            writer.write_event(Event::End(BytesEnd::new("url")))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

pub async fn sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let lastmod = chrono::Utc::now().format("%Y-%m-%d").to_string();
    match build_sitemap(&state.site_url, &lastmod) {
        Ok(xml) => (StatusCode::OK, [(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml).into_response(),
        Err(e) => {
            tracing::error!("Failed to build sitemap: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn robots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}/sitemap.xml\n",
        state.site_url
    );
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}

pub async fn manifest() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        Json(json!({
            "name": "Atelier Studio",
            "short_name": "Atelier",
            "description": "Boutique digital studio: web design, branding and product development.",
            "start_url": "/",
            "display": "standalone",
            "background_color": "#0d0d0d",
            "theme_color": "#0d0d0d",
            "icons": [
                { "src": "/assets/icon-192.png", "sizes": "192x192", "type": "image/png" },
                { "src": "/assets/icon-512.png", "sizes": "512x512", "type": "image/png" }
            ]
        })),
    )
}
