use actix_web::{get, web, HttpResponse, Responder};

use crate::services::QueryOrchestrator;

#[get("/")]
pub async fn default() -> impl Responder {
    HttpResponse::Ok().body("Nuru is up and listening for messages.")
}

#[get("/stats")]
pub async fn stats(orchestrator: web::Data<QueryOrchestrator>) -> impl Responder {
    HttpResponse::Ok().json(orchestrator.failures().snapshot())
}
