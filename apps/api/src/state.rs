use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
