use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use vaultboard_core::shorten_address;
use vaultboard_types::{RangeStrategyType, RiskScore, Vault};

/// Catalog/leaderboard row shape of a vault: the record trimmed to what the
/// tables render, with display-time rounding applied.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VaultRow {
    pub chain_id: i64,
    pub chain_name: String,
    pub vault_address: String,
    pub name: String,
    pub owner_address: String,
    /// Twitter handle when known, shortened address otherwise.
    pub owner_label: String,
    pub tvl: f64,
    pub apr: f64,
    pub pnl: f64,
    pub fee_generated: f64,
    /// Rounded here, at the display boundary; aggregation upstream keeps the
    /// fractional value.
    pub total_users: i64,
    pub daily_yield: f64,
    pub risk_score: RiskScore,
    pub range_strategy_type: RangeStrategyType,
    pub allow_deposit: bool,
    pub age_in_second: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_token: Option<String>,
}

impl From<&Vault> for VaultRow {
    fn from(vault: &Vault) -> Self {
        let owner_label = match vault.owner.handle() {
            handle if handle == vault.owner.address => {
                shorten_address(vault.builder_address())
            }
            handle => handle.to_owned(),
        };
        Self {
            chain_id: vault.chain_id,
            chain_name: vault.chain_name.clone(),
            vault_address: vault.vault_address.clone(),
            name: vault.name.clone(),
            owner_address: vault.builder_address().to_owned(),
            owner_label,
            tvl: vault.tvl,
            apr: vault.apr,
            pnl: vault.pnl,
            fee_generated: vault.fee_generated,
            total_users: vault.total_user.round() as i64,
            daily_yield: vault.earning24h,
            risk_score: vault.risk_score,
            range_strategy_type: vault.range_strategy_type,
            allow_deposit: vault.allow_deposit,
            age_in_second: vault.age_in_second,
            principal_token: vault.principal_symbol().map(str::to_owned),
        }
    }
}
