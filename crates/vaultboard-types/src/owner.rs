use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Social metadata for the address that created a set of vaults.
///
/// Owners are not fetched standalone: each vault record embeds one, and the
/// aggregation pass re-derives the builder-level view from those embeddings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Owner {
    /// Human-facing handle: the twitter username when present, otherwise the
    /// raw address.
    pub fn handle(&self) -> &str {
        self.twitter_username
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.address)
    }
}
