use std::net::TcpListener;

use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{default_route, search_route, whatsapp_route},
    services::QueryOrchestrator,
};

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(default_route::default)
        .service(default_route::stats)
        .service(whatsapp_route::receive_message)
        .service(search_route::search);
}

pub fn run(
    listener: TcpListener,
    orchestrator: QueryOrchestrator,
) -> Result<Server, std::io::Error> {
    let orchestrator = web::Data::new(orchestrator);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(routes)
            .app_data(orchestrator.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
