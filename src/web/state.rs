//! Shared application state injected into handlers.

use crate::facilities::{FacilityGenerator, FacilityStore, StaticFacts};
use crate::web::config::WebConfig;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FacilityStore>,
    pub facts: Arc<StaticFacts>,
    pub analysis_delay: Duration,
}

impl AppState {
    pub fn new(store: FacilityStore, facts: StaticFacts, analysis_delay: Duration) -> Self {
        Self {
            store: Arc::new(store),
            facts: Arc::new(facts),
            analysis_delay,
        }
    }

    /// Generate a fresh fleet as described by `config`.
    pub fn from_config(config: &WebConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => FacilityGenerator::with_seed(seed),
            None => FacilityGenerator::new(),
        };
        let store = FacilityStore::bootstrap(generator, config.facility_count);

        Self::new(store, config.facts.clone(), config.analysis_delay())
    }
}
