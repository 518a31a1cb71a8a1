use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::vault::Vault;

/// Pagination block returned by the upstream vaults endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPagination {
    #[serde(default)]
    pub total_data: u64,
    #[serde(default)]
    pub total_page: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
}

/// Aggregate stats block returned alongside the vault list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotStats {
    #[serde(default)]
    pub total_vault: u64,
    #[serde(default)]
    pub total_owned_vault: u64,
    #[serde(default)]
    pub total_joined_vault: u64,
    #[serde(default)]
    pub vault_total_value: f64,
    #[serde(default)]
    pub deposited_value: f64,
    #[serde(default)]
    pub daily_yield: f64,
    #[serde(default)]
    pub apy: f64,
}

/// One point-in-time fetch of the vault universe. The list is replaced
/// wholesale on every refetch; there are no incremental updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VaultSnapshot {
    #[serde(default)]
    pub data: Vec<Vault>,
    #[serde(default)]
    pub pagination: SnapshotPagination,
    #[serde(default)]
    pub stats: SnapshotStats,
}
