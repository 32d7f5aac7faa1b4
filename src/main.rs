use std::{net::TcpListener, sync::Arc, time::Duration};

use anyhow::Context;
use env_logger::Env;
use nuru::{
    configuration::get_configuration,
    dal::place_db,
    domain::failure::FailureCounters,
    services::{
        DestinationRepository, GoogleSearchClient, MessageDispatcher, QueryOrchestrator,
        TwilioClient, TwilioOptions, WebSearchFallback,
    },
    startup::run,
};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;
    log::info!("All required configuration is loaded.");

    let connection_pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(15 * 60)) // 15 minutes
        .connect_lazy_with(configuration.database.with_db());

    log::info!("Checking database connection...");
    place_db::check_connection(&connection_pool)
        .await
        .context("Failed to connect to the database.")?;
    log::info!("Successfully connected to the database.");

    let failures = Arc::new(FailureCounters::default());

    let repository = DestinationRepository::new(Arc::new(connection_pool), failures.clone());
    let web_search = WebSearchFallback::new(
        Arc::new(GoogleSearchClient::new(
            configuration.google.base_url,
            configuration.google.api_key,
            configuration.google.cse_id,
        )),
        failures.clone(),
    );
    let dispatcher = MessageDispatcher::new(
        Arc::new(TwilioClient::new(TwilioOptions {
            base_url: configuration.twilio.base_url,
            account_sid: configuration.twilio.account_sid,
            auth_token: configuration.twilio.auth_token,
            whatsapp_number: configuration.twilio.whatsapp_number,
        })),
        failures.clone(),
    );
    let orchestrator = QueryOrchestrator::new(repository, web_search, dispatcher, failures);

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    log::info!("Server running on {}", address);

    run(listener, orchestrator)?.await?;

    Ok(())
}
