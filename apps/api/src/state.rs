use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::profile::session::ProfileSessions;
use crate::subscribers::store::SubscriberStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable subscriber backend. Default: PgSubscriberStore.
    pub subscribers: Arc<dyn SubscriberStore>,
    /// Per-profile context: sections and the analyses cached for them.
    pub profiles: ProfileSessions,
}
