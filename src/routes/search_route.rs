use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        locale::{translate, MessageKey},
        query::Query,
        reply::SearchResult,
    },
    services::{QueryOrchestrator, Resolution},
};

#[derive(Deserialize)]
pub struct SearchBody {
    query: String,
}

#[derive(Serialize)]
#[serde(untagged)]
enum SearchResponse {
    Result(SearchResult),
    Message {
        source: &'static str,
        message: &'static str,
    },
}

#[post("/search")]
pub async fn search(
    body: web::Json<SearchBody>,
    orchestrator: web::Data<QueryOrchestrator>,
) -> HttpResponse {
    let query = Query::new(&body.query, None);
    let language = query.language();

    match orchestrator.resolve_in_task(query).await {
        Ok(Resolution::Found(result)) => HttpResponse::Ok().json(SearchResponse::Result(result)),
        Ok(Resolution::Welcome) => HttpResponse::Ok().json(SearchResponse::Message {
            source: "greeting",
            message: translate(MessageKey::Welcome, language),
        }),
        Ok(Resolution::Unclear) => HttpResponse::Ok().json(SearchResponse::Message {
            source: "unclear",
            message: translate(MessageKey::Clarify, language),
        }),
        Err(_) => HttpResponse::InternalServerError()
            .body("Internal Server Error: Could not process the search"),
    }
}
