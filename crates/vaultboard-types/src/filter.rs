use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use crate::vault::{RangeStrategyType, RiskScore};

/// TVL size bucket used by the catalog filter. Boundary values are part of
/// the contract: 10_000 and 100_000 both belong to `Medium`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, ToSchema, Eq, PartialEq, Display, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TvlBucket {
    Low,
    Medium,
    High,
}

impl TvlBucket {
    pub fn contains(self, tvl: f64) -> bool {
        match self {
            Self::Low => tvl < 10_000.0,
            Self::Medium => (10_000.0..=100_000.0).contains(&tvl),
            Self::High => tvl > 100_000.0,
        }
    }
}

/// Multi-field filter over a vault snapshot. Every field is independently
/// nullable; `None` means "no constraint from this field". Non-null fields
/// compose by logical AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub chain_id: Option<i64>,
    /// Exact, case-sensitive match against the principal token symbol.
    pub principal_token: Option<String>,
    pub risk_level: Option<RiskScore>,
    /// Inclusive lower bound on APR.
    pub min_apr: Option<f64>,
    /// Inclusive upper bound on APR.
    pub max_apr: Option<f64>,
    pub tvl_range: Option<TvlBucket>,
    pub range_strategy: Option<RangeStrategyType>,
    /// Only `Some(true)` constrains; `Some(false)` is deliberately a no-op,
    /// so an off deposit toggle keeps closed vaults visible.
    pub allow_deposit: Option<bool>,
    /// Case-insensitive substring over vault name, principal token symbol,
    /// and pool project names.
    pub search: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
