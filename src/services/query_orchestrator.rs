use std::{fmt, sync::Arc};

use tokio::task::JoinError;

use crate::domain::{
    failure::{FailureCounters, FailureKind},
    locale::{translate, Language, MessageKey},
    query::Query,
    recipient::Recipient,
    reply::{decorate, render, Reply, SearchResult},
};

use super::{
    google_search::{NO_RESULTS_MESSAGE, SEARCH_ERROR_MESSAGE},
    DestinationRepository, MessageDispatcher, WebSearchFallback,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Received,
    Extracting,
    DbLookup,
    DbHit,
    DbMiss,
    WebLookup,
    WebHit,
    WebMiss,
    Formatting,
    Dispatched,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Welcome,
    Unclear,
    Found(SearchResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Dispatched,
    Failed,
}

#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub recipient: Recipient,
    pub body: String,
    pub language: Option<Language>,
}

#[derive(Clone)]
pub struct QueryOrchestrator {
    repository: DestinationRepository,
    web_search: WebSearchFallback,
    dispatcher: MessageDispatcher,
    failures: Arc<FailureCounters>,
}

impl QueryOrchestrator {
    pub fn new(
        repository: DestinationRepository,
        web_search: WebSearchFallback,
        dispatcher: MessageDispatcher,
        failures: Arc<FailureCounters>,
    ) -> Self {
        QueryOrchestrator {
            repository,
            web_search,
            dispatcher,
            failures,
        }
    }

    pub fn failures(&self) -> &FailureCounters {
        &self.failures
    }

    /// Greeting, then database, then web. The web is only consulted on an empty database result.
    pub async fn resolve(&self, query: &Query) -> Resolution {
        if query.is_greeting() {
            return Resolution::Welcome;
        }

        stage(Stage::Extracting, &query.raw_text);
        if query.keywords.is_empty() {
            self.failures.record(FailureKind::ExtractionEmpty);
            log::info!(
                "[{}] No usable keywords in {:?}",
                FailureKind::ExtractionEmpty,
                query.raw_text
            );
            return Resolution::Unclear;
        }

        stage(Stage::DbLookup, &query.raw_text);
        let places = self.repository.search(&query.keywords).await;
        if !places.is_empty() {
            stage(Stage::DbHit, &query.raw_text);
            return Resolution::Found(SearchResult::Db { places });
        }

        stage(Stage::DbMiss, &query.raw_text);
        stage(Stage::WebLookup, &query.raw_text);
        let summary = self.web_search.search(&query.raw_text).await;
        match summary.as_str() {
            NO_RESULTS_MESSAGE | SEARCH_ERROR_MESSAGE => {
                stage(Stage::WebMiss, &query.raw_text)
            }
            _ => stage(Stage::WebHit, &query.raw_text),
        }

        Resolution::Found(SearchResult::Web { summary })
    }

    /// Runs [`Self::resolve`] on its own task so a panicking collaborator cannot take the
    /// request down with it.
    pub async fn resolve_in_task(&self, query: Query) -> Result<Resolution, JoinError> {
        let orchestrator = self.clone();
        let raw_text = query.raw_text.clone();

        let resolution = tokio::spawn(async move { orchestrator.resolve(&query).await }).await;
        if let Err(e) = &resolution {
            self.failures.record(FailureKind::UnhandledPipelineFailure);
            log::error!(
                "[{}] Error during query handling for {:?}: {}",
                FailureKind::UnhandledPipelineFailure,
                raw_text,
                e
            );
        }

        resolution
    }

    pub async fn handle(&self, message: InboundMessage) -> Outcome {
        stage(Stage::Received, &message.body);
        let query = Query::new(&message.body, message.language);
        let language = query.language();

        let (reply, outcome) = match self.resolve_in_task(query.clone()).await {
            Ok(resolution) => {
                stage(Stage::Formatting, &query.raw_text);
                (compose(&resolution, language), Outcome::Dispatched)
            }
            Err(_) => (
                Reply::text(translate(MessageKey::Error, language)),
                Outcome::Failed,
            ),
        };

        for media in reply.media.iter() {
            self.dispatcher
                .send_media(&message.recipient, &media.url, &media.caption)
                .await;
        }
        self.dispatcher
            .send_text(&message.recipient, &decorate(&reply.text))
            .await;

        match outcome {
            Outcome::Dispatched => stage(Stage::Dispatched, &query.raw_text),
            Outcome::Failed => stage(Stage::Failed, &query.raw_text),
        }

        outcome
    }
}

pub fn compose(resolution: &Resolution, language: Language) -> Reply {
    match resolution {
        Resolution::Welcome => Reply::text(translate(MessageKey::Welcome, language)),
        Resolution::Unclear => Reply::text(translate(MessageKey::Clarify, language)),
        Resolution::Found(result) => render(result),
    }
}

fn stage(stage: Stage, raw_text: &str) {
    log::debug!("{} {:?}", stage, raw_text);
}
