use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

pub mod categories;
pub mod forms;
pub mod joins;
pub mod main;
pub mod videos;

/// JSON error body carried by every failing API response.
#[derive(Serialize)]
struct ErrorDetail<'a> {
    detail: &'a str,
}

pub(crate) fn not_found(detail: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorDetail { detail })
}

pub(crate) fn forbidden(detail: &str) -> HttpResponse {
    HttpResponse::Forbidden().json(ErrorDetail { detail })
}

pub(crate) fn bad_request(detail: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorDetail { detail })
}

/// Redirect-on-success response used by the HTML form routes.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .append_header((header::LOCATION, location.to_string()))
        .finish()
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    HttpResponse::Ok().body(tera.render(template, context).unwrap_or_else(|e| {
        log::error!("Failed to render template '{template}': {e}");
        String::new()
    }))
}

pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Debug => "secondary",
        Level::Info => "info",
        Level::Success => "success",
        Level::Warning => "warning",
        Level::Error => "danger",
    }
}

pub fn base_context(flash_messages: &IncomingFlashMessages, page_title: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("page_title", page_title);
    context
}
