use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    dal::place_db,
    domain::{
        failure::{FailureCounters, FailureKind},
        place::Place,
    },
};

pub const RESULT_LIMIT: usize = 10;

/// Storage seam behind the repository. Implemented for the Postgres pool.
#[async_trait]
pub trait PlaceStore: Send + Sync {
    async fn find_places(&self, keywords: &[String], limit: usize)
        -> Result<Vec<Place>, sqlx::Error>;
}

#[async_trait]
impl PlaceStore for PgPool {
    async fn find_places(
        &self,
        keywords: &[String],
        limit: usize,
    ) -> Result<Vec<Place>, sqlx::Error> {
        let mut con = self.acquire().await?;
        place_db::search_places(&mut con, keywords, limit as i64).await
    }
}

#[derive(Clone)]
pub struct DestinationRepository {
    store: Arc<dyn PlaceStore>,
    failures: Arc<FailureCounters>,
}

impl DestinationRepository {
    pub fn new(store: Arc<dyn PlaceStore>, failures: Arc<FailureCounters>) -> Self {
        DestinationRepository { store, failures }
    }

    /// Never fails: a storage error is logged and looks exactly like "no results".
    pub async fn search(&self, keywords: &[String]) -> Vec<Place> {
        if keywords.is_empty() {
            return vec![];
        }

        match self.store.find_places(keywords, RESULT_LIMIT).await {
            Ok(mut places) => {
                places.truncate(RESULT_LIMIT);
                match places.is_empty() {
                    true => log::info!("No places found for keywords: {}", keywords.join(", ")),
                    false => log::info!("Place search returned {} results", places.len()),
                }
                places
            }
            Err(e) => {
                self.failures.record(FailureKind::RepositoryFailure);
                log::error!(
                    "[{}] Failed to search places for {:?}: {:?}",
                    FailureKind::RepositoryFailure,
                    keywords,
                    e
                );
                vec![]
            }
        }
    }
}
