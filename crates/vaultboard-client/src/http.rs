use std::sync::LazyLock;
use std::time::Duration;

use moka::future::Cache;
use url::Url;
use vaultboard_types::{MigratedVault, SnapshotPagination, VaultSnapshot};

use crate::envelope::migrated_vaults_from_value;
use crate::error::SourceError;
use crate::traits::{DEFAULT_PER_PAGE, VaultQuery, VaultSource};

/// Upstream snapshots barely move between page loads; a short TTL collapses
/// concurrent handler fetches into one upstream call.
const CACHE_TTL: Duration = Duration::from_secs(30);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

static SNAPSHOT_CACHE: LazyLock<Cache<String, VaultSnapshot>> = LazyLock::new(|| {
    Cache::builder().time_to_live(CACHE_TTL).build()
});

static MIGRATIONS_CACHE: LazyLock<Cache<String, Vec<MigratedVault>>> = LazyLock::new(|| {
    Cache::builder().time_to_live(CACHE_TTL).build()
});

/// HTTP client for the Krystal vaults API.
pub struct KrystalClient {
    client: reqwest::Client,
    base_url: Url,
}

impl KrystalClient {
    /// `base_url` points at the API root, e.g. `https://api.krystal.app/all/v1`.
    pub fn new(base_url: &str) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = Url::parse(base_url.trim_end_matches('/'))?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    async fn fetch_snapshot_uncached(
        &self,
        query: &VaultQuery,
    ) -> Result<VaultSnapshot, SourceError> {
        let mut request = self
            .client
            .get(self.endpoint("vaults"))
            .query(&[("perPage", query.per_page.to_string())])
            .query(&[("category", query.category.as_str())]);
        if let Some(address) = query.user_address.as_deref() {
            request = request.query(&[("userAddress", address)]);
        }
        if let Some(flag) = query.is_auto_farm_vault {
            request = request.query(&[("isAutoFarmVault", flag.to_string())]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let snapshot: VaultSnapshot = response.json().await?;
        tracing::debug!(
            vaults = snapshot.data.len(),
            category = %query.category,
            auto_farm = ?query.is_auto_farm_vault,
            "fetched vault snapshot"
        );
        Ok(snapshot)
    }
}

#[async_trait::async_trait]
impl VaultSource for KrystalClient {
    async fn fetch_vaults(&self, query: &VaultQuery) -> Result<VaultSnapshot, SourceError> {
        let cache_key = format!("{}::{}", self.base_url, query.cache_key());
        if let Some(cached) = SNAPSHOT_CACHE.get(&cache_key).await {
            return Ok(cached);
        }

        let snapshot = self.fetch_snapshot_uncached(query).await?;
        SNAPSHOT_CACHE.insert(cache_key, snapshot.clone()).await;
        Ok(snapshot)
    }

    async fn fetch_all_vaults(&self) -> Result<VaultSnapshot, SourceError> {
        let shared_query = VaultQuery::autofarm(false);
        let autofarm_query = VaultQuery::autofarm(true);
        let (shared, autofarm) = futures::try_join!(
            self.fetch_vaults(&shared_query),
            self.fetch_vaults(&autofarm_query),
        )?;

        let mut data = shared.data;
        data.extend(autofarm.data);
        let total_data = shared.pagination.total_data + autofarm.pagination.total_data;

        Ok(VaultSnapshot {
            data,
            pagination: SnapshotPagination {
                total_data,
                total_page: 1,
                page: 1,
                per_page: DEFAULT_PER_PAGE,
            },
            stats: shared.stats,
        })
    }

    async fn fetch_migrated_vaults(&self) -> Result<Vec<MigratedVault>, SourceError> {
        let cache_key = self.base_url.to_string();
        if let Some(cached) = MIGRATIONS_CACHE.get(&cache_key).await {
            return Ok(cached);
        }

        let response = self
            .client
            .get(self.endpoint("vaults/convertedVault/rebateFees"))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let body: serde_json::Value = response.json().await?;
        let records = migrated_vaults_from_value(body);
        MIGRATIONS_CACHE.insert(cache_key, records.clone()).await;
        Ok(records)
    }
}
