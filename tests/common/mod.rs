// Shared in-memory doubles for storage, web search and the messaging transport.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nuru::{
    domain::{failure::FailureCounters, place::Place},
    services::{
        DestinationRepository, MessageDispatcher, MessageTransport, OutboundMessage, PlaceStore,
        QueryOrchestrator, SearchEngine, SearchError, SearchItem, TransportError,
        WebSearchFallback,
    },
};

pub enum StoreBehaviour {
    Places(Vec<Place>),
    ConnectionError,
    Panic,
}

pub struct FakeStore {
    behaviour: StoreBehaviour,
    pub calls: Mutex<Vec<Vec<String>>>,
}

#[async_trait]
impl PlaceStore for FakeStore {
    async fn find_places(
        &self,
        keywords: &[String],
        limit: usize,
    ) -> Result<Vec<Place>, sqlx::Error> {
        self.calls.lock().unwrap().push(keywords.to_vec());
        match &self.behaviour {
            StoreBehaviour::Places(places) => Ok(places.iter().take(limit).cloned().collect()),
            StoreBehaviour::ConnectionError => Err(sqlx::Error::PoolTimedOut),
            StoreBehaviour::Panic => panic!("storage client blew up"),
        }
    }
}

pub struct FakeEngine {
    items: Option<Vec<SearchItem>>,
    pub queries: Mutex<Vec<String>>,
}

#[async_trait]
impl SearchEngine for FakeEngine {
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        match &self.items {
            Some(items) => Ok(items.clone()),
            None => Err(SearchError::Status {
                status: reqwest::StatusCode::FORBIDDEN,
                body: "daily limit exceeded".to_string(),
            }),
        }
    }
}

#[derive(Default)]
pub struct FakeTransport {
    pub sent: Mutex<Vec<OutboundMessage>>,
}

#[async_trait]
impl MessageTransport for FakeTransport {
    async fn send(&self, message: &OutboundMessage) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

pub struct TestApp {
    pub orchestrator: QueryOrchestrator,
    pub store: Arc<FakeStore>,
    pub engine: Arc<FakeEngine>,
    pub transport: Arc<FakeTransport>,
    pub failures: Arc<FailureCounters>,
}

impl TestApp {
    pub fn new(behaviour: StoreBehaviour, items: Option<Vec<SearchItem>>) -> Self {
        let store = Arc::new(FakeStore {
            behaviour,
            calls: Mutex::new(vec![]),
        });
        let engine = Arc::new(FakeEngine {
            items,
            queries: Mutex::new(vec![]),
        });
        let transport = Arc::new(FakeTransport::default());
        let failures = Arc::new(FailureCounters::default());

        let orchestrator = QueryOrchestrator::new(
            DestinationRepository::new(store.clone(), failures.clone()),
            WebSearchFallback::new(engine.clone(), failures.clone()),
            MessageDispatcher::new(transport.clone(), failures.clone()),
            failures.clone(),
        );

        TestApp {
            orchestrator,
            store,
            engine,
            transport,
            failures,
        }
    }

    pub fn store_calls(&self) -> Vec<Vec<String>> {
        self.store.calls.lock().unwrap().clone()
    }

    pub fn engine_queries(&self) -> Vec<String> {
        self.engine.queries.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.transport.sent.lock().unwrap().clone()
    }

    /// Last text message with the trailing emoji removed.
    pub fn last_text(&self) -> String {
        let sent = self.sent();
        let message = sent
            .iter()
            .rev()
            .find(|m| m.media_url.is_none())
            .expect("no text message was sent");
        let (text, _emoji) = message
            .body
            .rsplit_once(' ')
            .expect("text should carry an emoji");
        text.to_string()
    }
}

pub fn place(name: &str, image_url: Option<&str>) -> Place {
    Place {
        name: name.to_string(),
        description: format!("{} on the Kenyan coast", name),
        contact_number: "+254 700 123456".to_string(),
        rating: 4.5,
        image_url: image_url.map(|u| u.to_string()),
    }
}

pub fn item(title: &str, snippet: &str, link: &str) -> SearchItem {
    SearchItem {
        title: title.to_string(),
        snippet: snippet.to_string(),
        link: link.to_string(),
    }
}
