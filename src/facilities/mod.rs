//! Simulated facility fleet and the computations over it.
//!
//! This module owns everything that is not HTTP plumbing: the facility
//! record and its sensor block, the randomized generator, the shared
//! in-memory store, and the aggregates served by the analytics endpoint.

pub mod analytics;
pub mod data;
pub mod feedback;
pub mod generator;
pub mod inspection;
pub mod store;
pub mod traits;

// Re-export commonly used items
pub use analytics::{Analytics, StaticFacts};
pub use data::{Coordinates, Facility, FacilityStatus, Rating, SensorReadings};
pub use feedback::{FeedbackReceipt, FeedbackSubmission};
pub use generator::FacilityGenerator;
pub use inspection::ImageAnalysis;
pub use store::FacilityStore;
pub use traits::{CycleRandom, RandomSource};
