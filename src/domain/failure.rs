use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    ExtractionEmpty,
    RepositoryFailure,
    FallbackFailure,
    DispatchFailure,
    UnhandledPipelineFailure,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::ExtractionEmpty => "extraction_empty",
            FailureKind::RepositoryFailure => "repository_failure",
            FailureKind::FallbackFailure => "fallback_failure",
            FailureKind::DispatchFailure => "dispatch_failure",
            FailureKind::UnhandledPipelineFailure => "unhandled_pipeline_failure",
        };
        f.write_str(name)
    }
}

/// Swallowed failures, counted so that degraded answers stay visible.
#[derive(Debug, Default)]
pub struct FailureCounters {
    extraction_empty: AtomicU64,
    repository_failure: AtomicU64,
    fallback_failure: AtomicU64,
    dispatch_failure: AtomicU64,
    unhandled_pipeline_failure: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FailureSnapshot {
    pub extraction_empty: u64,
    pub repository_failure: u64,
    pub fallback_failure: u64,
    pub dispatch_failure: u64,
    pub unhandled_pipeline_failure: u64,
}

impl FailureCounters {
    pub fn record(&self, kind: FailureKind) {
        self.counter(kind).fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self, kind: FailureKind) -> u64 {
        self.counter(kind).load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> FailureSnapshot {
        FailureSnapshot {
            extraction_empty: self.get(FailureKind::ExtractionEmpty),
            repository_failure: self.get(FailureKind::RepositoryFailure),
            fallback_failure: self.get(FailureKind::FallbackFailure),
            dispatch_failure: self.get(FailureKind::DispatchFailure),
            unhandled_pipeline_failure: self.get(FailureKind::UnhandledPipelineFailure),
        }
    }

    fn counter(&self, kind: FailureKind) -> &AtomicU64 {
        match kind {
            FailureKind::ExtractionEmpty => &self.extraction_empty,
            FailureKind::RepositoryFailure => &self.repository_failure,
            FailureKind::FallbackFailure => &self.fallback_failure,
            FailureKind::DispatchFailure => &self.dispatch_failure,
            FailureKind::UnhandledPipelineFailure => &self.unhandled_pipeline_failure,
        }
    }
}
