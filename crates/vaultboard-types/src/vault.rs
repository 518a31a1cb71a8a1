use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

use crate::owner::Owner;

/// Risk classification assigned to a vault by the upstream scorer.
///
/// The enumeration is closed; any other wire value decodes as [`RiskScore::Unknown`]
/// instead of failing the whole snapshot.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ToSchema,
    Hash,
    Eq,
    PartialEq,
    Display,
    AsRefStr,
    EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskScore {
    Low,
    Medium,
    Elevated,
    High,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RiskScore {
    /// Fixed ordinal used for sorting. Alphabetic ordering is wrong here:
    /// ELEVATED must sit between MEDIUM and HIGH.
    pub const fn ordinal(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::Elevated => 3,
            Self::High => 4,
            Self::Unknown => 0,
        }
    }
}

/// Range strategy of the vault's liquidity positions.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ToSchema,
    Hash,
    Eq,
    PartialEq,
    Display,
    AsRefStr,
    EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeStrategyType {
    WideRange,
    NarrowRange,
    #[default]
    #[serde(other)]
    Unset,
}

/// TVL strategy bucket reported by the upstream API.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ToSchema,
    Hash,
    Eq,
    PartialEq,
    Display,
    AsRefStr,
    EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TvlStrategyType {
    LowTvl,
    MedTvl,
    HighTvl,
    WhitelistedPools,
    #[default]
    #[serde(other)]
    Unset,
}

/// Which snapshot population a view operates on.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, Eq, PartialEq, Display, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VaultKind {
    #[default]
    Shared,
    Autofarm,
}

/// An ERC-20 token reference as carried on vault records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub decimals: u8,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub tag: String,
}

/// A single asset position inside a vault, with its share of the portfolio.
/// Percentages across a vault's asset list are expected to sum to ~1.0 but
/// this is display-only and never enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetHolding {
    #[serde(default)]
    pub token: Token,
    #[serde(default)]
    pub percentage: f64,
}

/// A pool the vault provides liquidity to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoolMembership {
    #[serde(default)]
    pub chain_id: i64,
    #[serde(default)]
    pub pool_address: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub tvl: f64,
}

/// One on-chain vault as it appears in a fetched snapshot.
///
/// A vault is uniquely identified by `(chain_id, vault_address)` within a
/// snapshot. Records are immutable for the lifetime of one snapshot; the
/// whole list is replaced wholesale on refetch.
///
/// Every numeric field defaults to 0 when absent upstream so downstream
/// arithmetic never sees a missing value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vault {
    #[serde(default)]
    pub chain_id: i64,
    #[serde(default)]
    pub chain_name: String,
    #[serde(default)]
    pub chain_logo: String,
    #[serde(default)]
    pub vault_address: String,
    #[serde(default)]
    pub owner_address: String,
    #[serde(default)]
    pub owner: Owner,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tvl: f64,
    #[serde(default)]
    pub apr: f64,
    #[serde(default)]
    pub pnl: f64,
    #[serde(default)]
    pub fee_generated: f64,
    /// Seconds since the vault was created.
    #[serde(default)]
    pub age_in_second: i64,
    #[serde(default)]
    pub risk_score: RiskScore,
    #[serde(default)]
    pub range_strategy_type: RangeStrategyType,
    #[serde(default)]
    pub tvl_strategy_type: TvlStrategyType,
    #[serde(default)]
    pub allow_deposit: bool,
    /// Distinct depositors. May be fractional due to upstream aggregation;
    /// rounded at display time, never at aggregation time.
    #[serde(default)]
    pub total_user: f64,
    #[serde(default)]
    pub earning24h: f64,
    #[serde(default)]
    pub earning30d: f64,
    #[serde(default)]
    pub principal_token: Option<Token>,
    #[serde(default)]
    pub assets: Vec<AssetHolding>,
    #[serde(default)]
    pub pools: Vec<PoolMembership>,
    #[serde(default)]
    pub is_auto_farm_vault: Option<bool>,
}

impl Vault {
    /// Address that groups this vault with its builder. Falls back to the
    /// flat `ownerAddress` field when the embedded owner is empty.
    pub fn builder_address(&self) -> &str {
        if self.owner.address.is_empty() {
            &self.owner_address
        } else {
            &self.owner.address
        }
    }

    pub fn principal_symbol(&self) -> Option<&str> {
        self.principal_token
            .as_ref()
            .map(|token| token.symbol.as_str())
    }

    pub fn is_autofarm(&self) -> bool {
        self.is_auto_farm_vault == Some(true)
    }
}
