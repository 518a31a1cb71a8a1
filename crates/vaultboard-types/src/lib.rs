pub mod builder;
pub mod filter;
pub mod migration;
pub mod owner;
pub mod snapshot;
pub mod sort;
pub mod vault;
pub mod window;

pub use builder::{
    BuilderMetrics, BuilderStanding, RangeStrategyDistribution, RankedEntry, RiskDistribution,
    TvlStrategyDistribution,
};
pub use filter::{FilterCriteria, TvlBucket};
pub use migration::MigratedVault;
pub use owner::Owner;
pub use snapshot::{SnapshotPagination, SnapshotStats, VaultSnapshot};
pub use sort::{
    BuilderRankField, BuilderSortField, MigrationSortField, SortDirection, SortSpec,
    VaultSortField,
};
pub use vault::{
    AssetHolding, PoolMembership, RangeStrategyType, RiskScore, Token, TvlStrategyType, Vault,
    VaultKind,
};
pub use window::{ChallengeMetric, ChallengeWindow, TimeWindow};
