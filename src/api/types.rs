//! Shared state for the meeting API.

use std::sync::Arc;

use crate::pipeline::summarize::Summarizer;

/// Shared context for all API routes.
///
/// Holds the summarization backend behind its trait seam so tests can
/// swap in a stub without touching the router.
#[derive(Clone)]
pub struct ApiContext {
    pub summarizer: Arc<dyn Summarizer + Send + Sync>,
}

impl ApiContext {
    pub fn new(summarizer: Arc<dyn Summarizer + Send + Sync>) -> Self {
        Self { summarizer }
    }
}
