use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::owner::Owner;
use crate::vault::{RangeStrategyType, RiskScore, TvlStrategyType, Vault};

/// Per-builder risk histogram. MEDIUM vaults are counted under `moderate`,
/// the label the builder views display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct RiskDistribution {
    pub low: u32,
    pub moderate: u32,
    pub elevated: u32,
    pub high: u32,
    #[serde(skip_serializing_if = "is_zero", default)]
    pub unknown: u32,
}

impl RiskDistribution {
    pub fn record(&mut self, risk: RiskScore) {
        match risk {
            RiskScore::Low => self.low += 1,
            RiskScore::Medium => self.moderate += 1,
            RiskScore::Elevated => self.elevated += 1,
            RiskScore::High => self.high += 1,
            RiskScore::Unknown => self.unknown += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct RangeStrategyDistribution {
    pub wide_range: u32,
    pub narrow_range: u32,
    pub unset: u32,
}

impl RangeStrategyDistribution {
    pub fn record(&mut self, strategy: RangeStrategyType) {
        match strategy {
            RangeStrategyType::WideRange => self.wide_range += 1,
            RangeStrategyType::NarrowRange => self.narrow_range += 1,
            RangeStrategyType::Unset => self.unset += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TvlStrategyDistribution {
    pub unset: u32,
    pub low_tvl: u32,
    pub med_tvl: u32,
    pub high_tvl: u32,
    pub whitelisted_pools: u32,
}

impl TvlStrategyDistribution {
    /// Cross-field rule: a depositable vault with no TVL strategy counts as
    /// WHITELISTED_POOLS, not UNSET.
    pub fn record(&mut self, strategy: TvlStrategyType, allow_deposit: bool) {
        match strategy {
            TvlStrategyType::Unset if allow_deposit => self.whitelisted_pools += 1,
            TvlStrategyType::Unset => self.unset += 1,
            TvlStrategyType::LowTvl => self.low_tvl += 1,
            TvlStrategyType::MedTvl => self.med_tvl += 1,
            TvlStrategyType::HighTvl => self.high_tvl += 1,
            TvlStrategyType::WhitelistedPools => self.whitelisted_pools += 1,
        }
    }
}

/// Builder-level rollup of one owner's vaults, fully recomputed from the
/// snapshot on every change; never partially mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuilderMetrics {
    /// Grouping key: the owner address (empty string for defective records
    /// with no owner at all).
    pub owner: String,
    pub total_vaults: u32,
    pub total_tvl: f64,
    pub total_fee_generated: f64,
    /// Arithmetic mean of the owner's vault APRs. Deliberately unweighted:
    /// a dust vault counts as much as a whale vault.
    pub average_apr: f64,
    pub risk_profile: RiskDistribution,
    pub range_strategy: RangeStrategyDistribution,
    pub tvl_strategy_type: TvlStrategyDistribution,
    pub deposit_allowed_count: u32,
    /// Summed raw user counts; may be fractional, rounded at display time.
    pub total_users: f64,
    /// Distinct principal token symbols, first-appearance order.
    pub principal_tokens: Vec<String>,
    /// Social metadata of the first record seen for this owner.
    pub owner_info: Owner,
}

/// Leaderboard rollup of one builder over a windowed vault set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuilderStanding {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub fees_earned: f64,
    pub total_users: f64,
    pub vault_count: u32,
    /// Sum of 24h earnings across the builder's vaults.
    pub daily_yield: f64,
    pub total_tvl: f64,
}

impl BuilderStanding {
    pub fn seeded_from(vault: &Vault) -> Self {
        Self {
            address: vault.builder_address().to_owned(),
            twitter_username: vault.owner.twitter_username.clone(),
            avatar_url: vault.owner.avatar_url.clone(),
            ..Default::default()
        }
    }

    pub fn absorb(&mut self, vault: &Vault) {
        self.fees_earned += vault.fee_generated;
        self.total_users += vault.total_user;
        self.vault_count += 1;
        self.daily_yield += vault.earning24h;
        self.total_tvl += vault.tvl;
    }

    /// Daily yield as a fraction of TVL; 0 when the builder has no TVL.
    pub fn daily_yield_pct(&self) -> f64 {
        if self.total_tvl > 0.0 {
            self.daily_yield / self.total_tvl
        } else {
            0.0
        }
    }
}

/// An entry annotated with its 1-based position in a ranked view. Ranks are
/// recomputed from scratch on every input change and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry<T> {
    pub rank: u32,
    #[serde(flatten)]
    pub entry: T,
}

impl<T> RankedEntry<T> {
    /// Annotate a sorted sequence with contiguous 1-based ranks.
    pub fn sequence<I: IntoIterator<Item = T>>(items: I) -> Vec<Self> {
        items
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| Self {
                rank: idx as u32 + 1,
                entry,
            })
            .collect()
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(count: &u32) -> bool {
    *count == 0
}
