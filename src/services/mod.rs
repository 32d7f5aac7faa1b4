pub mod dispatcher;
pub mod google_search;
pub mod place_repository;
pub mod query_orchestrator;
pub mod twilio_client;

pub use dispatcher::*;
pub use google_search::*;
pub use place_repository::*;
pub use query_orchestrator::*;
pub use twilio_client::*;
