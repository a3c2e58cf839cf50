//! # Facility Sim - Highway Smart-Toilet Fleet Simulator
//!
//! A small mock HTTP API that simulates a fleet of smart-toilet facilities
//! along a highway network. Sensor readings are randomly generated, feedback
//! submissions are echoed back, and simple aggregate analytics are computed
//! over the in-memory fleet.
//!
//! ## Features
//!
//! - **Simulated fleet**: facilities with randomized sensors, status and alerts
//! - **Live readings**: reading a single facility refreshes its cleanliness and usage
//! - **Analytics**: computed aggregates plus configured constant figures
//! - **Deterministic mode**: seed or script the random source for reproducible output
//! - **Library + Binary**: Use as a crate or standalone application
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use facility_sim::{start_web_server, WebConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Serve 20 facilities on port 3000
//!     start_web_server(WebConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod facilities;
pub mod web;

// Re-export public API
pub use error::{FacilityError, Result};
pub use facilities::{
    Analytics, CycleRandom, Facility, FacilityGenerator, FacilityStatus, FacilityStore,
    ImageAnalysis, RandomSource, StaticFacts,
};
pub use web::{create_app, start_web_server, AppState, WebConfig};

/// Name reported by the index route.
pub const SERVICE_NAME: &str = "NHAI Smart Toilet Management System API";

/// API version reported by the index route.
pub const API_VERSION: &str = "1.0";

/// The default web server port
pub const DEFAULT_WEB_PORT: u16 = 3000;

/// Number of facilities generated at startup
pub const DEFAULT_FACILITY_COUNT: usize = 20;

/// Simulated latency of the image analysis endpoint in milliseconds
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2000;
