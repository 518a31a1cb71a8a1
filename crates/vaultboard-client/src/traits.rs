use vaultboard_types::{MigratedVault, VaultSnapshot};

use crate::error::SourceError;

pub const DEFAULT_PER_PAGE: u32 = 2_000;
pub const DEFAULT_CATEGORY: &str = "ALL_VAULT";

/// Query knobs of the upstream vaults endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultQuery {
    pub per_page: u32,
    pub category: String,
    pub user_address: Option<String>,
    pub is_auto_farm_vault: Option<bool>,
}

impl Default for VaultQuery {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            category: DEFAULT_CATEGORY.to_owned(),
            user_address: None,
            is_auto_farm_vault: None,
        }
    }
}

impl VaultQuery {
    pub fn autofarm(is_auto_farm: bool) -> Self {
        Self {
            is_auto_farm_vault: Some(is_auto_farm),
            ..Default::default()
        }
    }

    /// Stable key for response caching.
    pub fn cache_key(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.per_page,
            self.category,
            self.user_address.as_deref().unwrap_or(""),
            self.is_auto_farm_vault
                .map_or(String::new(), |flag| flag.to_string()),
        )
    }
}

/// Read-only provider of vault data. Implementations must always yield a
/// flat vault list or surface an explicit transport error; they never pass
/// malformed payloads downstream.
#[async_trait::async_trait]
pub trait VaultSource: Send + Sync {
    async fn fetch_vaults(&self, query: &VaultQuery) -> Result<VaultSnapshot, SourceError>;

    /// Shared and auto-farm populations merged into one snapshot.
    async fn fetch_all_vaults(&self) -> Result<VaultSnapshot, SourceError>;

    /// Migration fee-rebate records. A recognizable-but-empty or malformed
    /// body yields an empty list, not an error.
    async fn fetch_migrated_vaults(&self) -> Result<Vec<MigratedVault>, SourceError>;
}
