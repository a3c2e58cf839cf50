//! Web server configuration.

use crate::facilities::StaticFacts;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the web server and the simulated fleet it serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Host to bind the server to
    pub host: String,
    /// Port to bind the server to
    pub port: u16,
    /// Whether to allow cross-origin requests from any origin
    pub enable_cors: bool,
    /// Number of facilities generated at startup
    pub facility_count: usize,
    /// Seed for reproducible fleets; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Artificial latency of the image analysis endpoint
    pub analysis_delay_ms: u64,
    /// Constant figures reported by the analytics endpoint
    pub facts: StaticFacts,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: crate::DEFAULT_WEB_PORT,
            enable_cors: true,
            facility_count: crate::DEFAULT_FACILITY_COUNT,
            seed: None,
            analysis_delay_ms: crate::DEFAULT_ANALYSIS_DELAY_MS,
            facts: StaticFacts::default(),
        }
    }
}

impl WebConfig {
    /// Create a new web configuration with custom host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Set the host for the web server.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port for the web server.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enable or disable CORS.
    pub fn with_cors(mut self, enable_cors: bool) -> Self {
        self.enable_cors = enable_cors;
        self
    }

    /// Set how many facilities are generated at startup.
    pub fn with_facility_count(mut self, count: usize) -> Self {
        self.facility_count = count;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the image analysis delay in milliseconds.
    pub fn with_analysis_delay_ms(mut self, delay_ms: u64) -> Self {
        self.analysis_delay_ms = delay_ms;
        self
    }

    pub fn with_facts(mut self, facts: StaticFacts) -> Self {
        self.facts = facts;
        self
    }

    /// Get the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}
