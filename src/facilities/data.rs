//! Data structures for simulated facilities.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single simulated smart-toilet installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    /// Identifier made of a prefix and the 1-based sequence number (e.g. "NH7")
    pub id: String,
    /// Display label derived from the sequence number
    pub name: String,
    /// Highway segment description
    pub location: String,
    /// Position perturbed around a fixed base point
    pub coordinates: Coordinates,
    /// Operational status
    pub status: FacilityStatus,
    /// Simulated sensor readings
    pub sensors: SensorReadings,
    /// Free-text conditions requiring attention
    pub alerts: Vec<String>,
    /// User rating in `[3.0, 8.0]`, serialized as a one-decimal string
    pub user_rating: Rating,
    /// Users per day
    pub daily_users: u32,
    /// Time of the last mutation of this record
    #[serde(with = "iso8601")]
    pub last_updated: DateTime<Utc>,
}

impl Facility {
    /// Whether the facility is currently in service.
    pub fn is_active(&self) -> bool {
        self.status == FacilityStatus::Active
    }
}

/// Latitude/longitude pair. No geographic validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityStatus {
    Active,
    Maintenance,
}

impl fmt::Display for FacilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Maintenance => write!(f, "maintenance"),
        }
    }
}

/// The sensor block attached to every facility.
///
/// Fields are drawn independently; no cross-field consistency is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReadings {
    /// Air quality index (0-99)
    pub air_quality: u32,
    /// Usage counter (0-499)
    pub usage: u32,
    /// Water tank level percentage (0-99)
    pub water_level: u32,
    /// Cleanliness score (1-10)
    pub cleanliness_score: u8,
    /// Temperature in Celsius (25-39)
    pub temperature: u32,
    /// When the facility was last cleaned, within the past 24 hours of creation
    #[serde(with = "iso8601")]
    pub last_cleaned: DateTime<Utc>,
}

/// A rating with one decimal of precision, stored in tenths.
///
/// On the wire it is a decimal string such as `"5.5"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating {
    tenths: u16,
}

impl Rating {
    pub const fn from_tenths(tenths: u16) -> Self {
        Self { tenths }
    }

    pub fn tenths(self) -> u16 {
        self.tenths
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

impl std::str::FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|e| format!("invalid rating {s:?}: {e}"))?;
        if !value.is_finite() || value < 0.0 {
            return Err(format!("rating out of range: {s:?}"));
        }
        Ok(Self::from_tenths((value * 10.0).round() as u16))
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Current time truncated to the millisecond precision used on the wire.
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix,
/// e.g. `2024-05-01T09:30:00.125Z`.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
