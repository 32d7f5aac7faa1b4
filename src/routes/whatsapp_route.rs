use actix_web::{http::header, post, web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::{
    domain::{locale::Language, recipient::Recipient},
    services::{InboundMessage, QueryOrchestrator},
};

const EMPTY_TWIML: &str = "<Response></Response>";

#[derive(Deserialize)]
pub struct WhatsAppWebhook {
    #[serde(rename = "Body")]
    body: Option<String>,
    #[serde(rename = "From")]
    from: Option<String>,
}

#[derive(Deserialize)]
struct LanguageQuery {
    lng: Option<String>,
}

#[post("/whatsapp")]
pub async fn receive_message(
    req: HttpRequest,
    form: web::Form<WhatsAppWebhook>,
    orchestrator: web::Data<QueryOrchestrator>,
) -> HttpResponse {
    let form = form.into_inner();

    let Some(recipient) = form.from.as_deref().and_then(Recipient::parse) else {
        log::error!("No chat ID found in the request");
        return HttpResponse::BadRequest().body("Bad Request: No chat ID found");
    };

    let language = detect_language(&req);
    let body = form.body.unwrap_or_default();
    log::info!(
        "Received message from {} (Language: {}): {:?}",
        recipient,
        language.map(|l| l.as_str()).unwrap_or("unknown"),
        body
    );

    orchestrator
        .handle(InboundMessage {
            recipient,
            body,
            language,
        })
        .await;

    HttpResponse::Ok()
        .content_type("text/xml")
        .body(EMPTY_TWIML)
}

/// Query string `lng`, then the `i18next` cookie, then `Accept-Language`.
pub fn detect_language(req: &HttpRequest) -> Option<Language> {
    let from_query = web::Query::<LanguageQuery>::from_query(req.query_string())
        .ok()
        .and_then(|q| q.into_inner().lng)
        .and_then(|lng| Language::from_tag(&lng));

    from_query
        .or_else(|| {
            req.cookie("i18next")
                .and_then(|cookie| Language::from_tag(cookie.value()))
        })
        .or_else(|| {
            req.headers()
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|value| value.to_str().ok())
                .and_then(Language::from_accept_language)
        })
}
