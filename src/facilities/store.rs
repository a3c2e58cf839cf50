//! Shared in-memory facility store.

use crate::error::{FacilityError, Result};
use crate::facilities::{
    analytics::{Analytics, StaticFacts},
    data::Facility,
    generator::FacilityGenerator,
};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// Ordered facility records plus the random source used to mutate them.
///
/// Records are populated once at construction and never added or removed.
/// The only mutation is [`FacilityStore::read_and_refresh`], which holds the
/// write lock for the whole read-modify-write so concurrent reads of the same
/// record observe each refresh atomically.
pub struct FacilityStore {
    facilities: RwLock<Vec<Facility>>,
    generator: Mutex<FacilityGenerator>,
}

impl FacilityStore {
    /// Populate a store with facilities `1..=count` drawn from `generator`.
    pub fn bootstrap(mut generator: FacilityGenerator, count: usize) -> Self {
        let facilities = generator.generate_fleet(count);
        debug!(count, "facility store populated");
        Self::from_parts(facilities, generator)
    }

    /// Build a store from existing records.
    pub fn from_parts(facilities: Vec<Facility>, generator: FacilityGenerator) -> Self {
        Self {
            facilities: RwLock::new(facilities),
            generator: Mutex::new(generator),
        }
    }

    /// Snapshot of every facility, in store order.
    pub async fn list(&self) -> Vec<Facility> {
        self.facilities.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.facilities.read().await.len()
    }

    /// Look up a facility, overwrite its live readings in place, and return
    /// the updated record.
    pub async fn read_and_refresh(&self, id: &str) -> Result<Facility> {
        let mut facilities = self.facilities.write().await;
        let facility = facilities
            .iter_mut()
            .find(|facility| facility.id == id)
            .ok_or_else(|| FacilityError::not_found(id))?;

        self.generator.lock().await.refresh_readings(facility);
        debug!(
            facility_id = id,
            cleanliness = facility.sensors.cleanliness_score,
            usage = facility.sensors.usage,
            "facility readings refreshed"
        );

        Ok(facility.clone())
    }

    /// Compute aggregates over the current contents.
    pub async fn analytics(&self, facts: &StaticFacts) -> Analytics {
        let facilities = self.facilities.read().await;
        Analytics::compute(&facilities, facts)
    }

    /// Draw a cleanliness score from the store's random source.
    pub async fn sample_cleanliness_score(&self) -> u8 {
        self.generator.lock().await.cleanliness_score()
    }
}
