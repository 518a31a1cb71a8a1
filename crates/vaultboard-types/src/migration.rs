use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::owner::Owner;

/// A fee-rebate record for a vault migrated into the protocol, served by the
/// secondary `convertedVault/rebateFees` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MigratedVault {
    #[serde(default)]
    pub chain_id: i64,
    #[serde(default)]
    pub chain_name: String,
    #[serde(default)]
    pub chain_logo: String,
    #[serde(default)]
    pub vault_name: String,
    #[serde(default)]
    pub vault_address: String,
    #[serde(default)]
    pub owner_address: String,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub fee_token_address: String,
    #[serde(default)]
    pub fee_amount_usd: f64,
    #[serde(default)]
    pub txn_hash: String,
    #[serde(default)]
    pub block_time: i64,
}

impl MigratedVault {
    /// Name used for the alphabetic owner sort: twitter handle when the
    /// embedded owner carries one, otherwise the raw owner address.
    pub fn owner_handle(&self) -> &str {
        self.owner
            .as_ref()
            .and_then(|owner| owner.twitter_username.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.owner_address)
    }
}
