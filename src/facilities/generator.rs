//! Randomized facility generation.

use crate::facilities::data::{
    now_millis, Coordinates, Facility, FacilityStatus, Rating, SensorReadings,
};
use crate::facilities::traits::RandomSource;
use chrono::Duration;
use rand::{rngs::StdRng, SeedableRng};

/// Prefix shared by every facility id.
pub const ID_PREFIX: &str = "NH";

/// Highway segments facilities are placed on, selected by `index % len`.
pub const LOCATIONS: [&str; 5] = [
    "Delhi-Mumbai Highway KM 145",
    "Bangalore-Chennai Highway KM 89",
    "Mumbai-Pune Highway KM 67",
    "Delhi-Jaipur Highway KM 123",
    "Hyderabad-Bangalore Highway KM 234",
];

/// Alerts raised on roughly 30% of facilities.
pub const STANDARD_ALERTS: [&str; 2] = ["Low soap level", "Maintenance required"];

const BASE_LAT: f64 = 28.6139;
const BASE_LNG: f64 = 77.2090;
const COORDINATE_SPREAD: f64 = 10.0;
const ACTIVE_THRESHOLD: f64 = 0.2;
const ALERT_THRESHOLD: f64 = 0.7;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Produces facility records from a pluggable random source.
pub struct FacilityGenerator {
    rng: Box<dyn RandomSource>,
}

impl FacilityGenerator {
    /// Create a generator backed by an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_source(StdRng::from_entropy())
    }

    /// Create a generator whose output is reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_source(StdRng::seed_from_u64(seed))
    }

    pub fn with_source(source: impl RandomSource + 'static) -> Self {
        Self {
            rng: Box::new(source),
        }
    }

    /// Generate the facility with the given 1-based index.
    pub fn generate(&mut self, index: usize) -> Facility {
        let now = now_millis();

        let coordinates = Coordinates {
            lat: BASE_LAT + (self.rng.next_unit() - 0.5) * COORDINATE_SPREAD,
            lng: BASE_LNG + (self.rng.next_unit() - 0.5) * COORDINATE_SPREAD,
        };
        let status = if self.rng.next_unit() > ACTIVE_THRESHOLD {
            FacilityStatus::Active
        } else {
            FacilityStatus::Maintenance
        };

        let sensors = SensorReadings {
            air_quality: self.scaled(100),
            usage: self.scaled(500),
            water_level: self.scaled(100),
            cleanliness_score: self.cleanliness_score(),
            temperature: 25 + self.scaled(15),
            last_cleaned: now
                - Duration::milliseconds((self.rng.next_unit() * MILLIS_PER_DAY) as i64),
        };

        let alerts = if self.rng.next_unit() > ALERT_THRESHOLD {
            STANDARD_ALERTS.iter().map(|alert| alert.to_string()).collect()
        } else {
            Vec::new()
        };

        // 3.0 + [0, 5) rounded to tenths
        let user_rating =
            Rating::from_tenths(30 + ((self.rng.next_unit() * 50.0).round() as u16).min(50));

        Facility {
            id: format!("{ID_PREFIX}{index}"),
            name: format!("Facility {index}"),
            location: LOCATIONS[index % LOCATIONS.len()].to_string(),
            coordinates,
            status,
            sensors,
            alerts,
            user_rating,
            daily_users: 100 + self.scaled(1000),
            last_updated: now,
        }
    }

    /// Generate `count` facilities with indices `1..=count`, in order.
    pub fn generate_fleet(&mut self, count: usize) -> Vec<Facility> {
        (1..=count).map(|index| self.generate(index)).collect()
    }

    /// Overwrite the live readings of a facility, as happens on every
    /// single-facility read.
    pub fn refresh_readings(&mut self, facility: &mut Facility) {
        facility.sensors.cleanliness_score = self.cleanliness_score();
        facility.sensors.usage = self.scaled(500);
        facility.last_updated = now_millis();
    }

    /// Draw a cleanliness score in `1..=10`.
    pub fn cleanliness_score(&mut self) -> u8 {
        self.scaled(10) as u8 + 1
    }

    /// Draw an integer in `0..span`.
    fn scaled(&mut self, span: u32) -> u32 {
        let draw = (self.rng.next_unit() * f64::from(span)).floor() as u32;
        draw.min(span.saturating_sub(1))
    }
}

impl Default for FacilityGenerator {
    fn default() -> Self {
        Self::new()
    }
}
