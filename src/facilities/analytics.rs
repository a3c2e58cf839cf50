//! Aggregate statistics over the facility fleet.
//!
//! The response mixes two honestly different sources: figures computed
//! from the current store contents, and [`StaticFacts`] which are fixed
//! configuration values never derived from the store.

use crate::facilities::data::{Facility, Rating};
use serde::{Deserialize, Serialize};

/// Aggregates served by the analytics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_facilities: usize,
    pub active_facilities: usize,
    /// Mean user rating with exactly one decimal digit
    pub average_rating: String,
    pub total_daily_users: u64,
    /// Number of alert entries across all facilities
    pub alert_count: usize,
    #[serde(flatten)]
    pub facts: StaticFacts,
}

impl Analytics {
    /// Compute the aggregates over `facilities` and attach `facts`.
    pub fn compute(facilities: &[Facility], facts: &StaticFacts) -> Self {
        let total = facilities.len();
        let tenths_sum: u64 = facilities
            .iter()
            .map(|f| u64::from(f.user_rating.tenths()))
            .sum();

        Self {
            total_facilities: total,
            active_facilities: facilities.iter().filter(|f| f.is_active()).count(),
            average_rating: mean_tenths(tenths_sum, total as u64).to_string(),
            total_daily_users: facilities.iter().map(|f| u64::from(f.daily_users)).sum(),
            alert_count: facilities.iter().map(|f| f.alerts.len()).sum(),
            facts: facts.clone(),
        }
    }
}

/// Mean of `count` ratings summing to `tenths_sum`, rounded half up to a tenth.
fn mean_tenths(tenths_sum: u64, count: u64) -> Rating {
    if count == 0 {
        return Rating::from_tenths(0);
    }
    let tenths = (2 * tenths_sum + count) / (2 * count);
    Rating::from_tenths(u16::try_from(tenths).unwrap_or(u16::MAX))
}

/// Hard-coded figures reported alongside the computed aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticFacts {
    pub cost_savings: CostSavings,
    pub maintenance_stats: MaintenanceStats,
}

impl Default for StaticFacts {
    fn default() -> Self {
        Self {
            cost_savings: CostSavings {
                monthly: "₹4,32,000".to_string(),
                annual: "₹51,84,000".to_string(),
            },
            maintenance_stats: MaintenanceStats {
                scheduled: 15,
                completed: 12,
                pending: 3,
            },
        }
    }
}

/// Preformatted currency figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSavings {
    pub monthly: String,
    pub annual: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceStats {
    pub scheduled: u32,
    pub completed: u32,
    pub pending: u32,
}
