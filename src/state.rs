//! Shared application state.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::documents::cache::DocumentCache;
use crate::documents::generators::DiskTemplateSource;
use crate::documents::package::PackageOrchestrator;

/// Cached links never outlive a week.
const MAX_CACHE_TTL_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<PackageOrchestrator>,
    pub cache: Arc<DocumentCache>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State with every generator registered and templates read from
    /// `config.template_dir`.
    pub fn new(config: ServerConfig) -> Self {
        let templates = Arc::new(DiskTemplateSource::new(config.template_dir.clone()));
        let orchestrator = PackageOrchestrator::with_defaults(templates);
        let ttl = chrono::Duration::seconds(config.cache_ttl_secs.min(MAX_CACHE_TTL_SECS) as i64);
        Self::with_parts(orchestrator, DocumentCache::new(ttl), config)
    }

    pub fn with_parts(orchestrator: PackageOrchestrator, cache: DocumentCache, config: ServerConfig) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            cache: Arc::new(cache),
            config: Arc::new(config),
        }
    }
}
