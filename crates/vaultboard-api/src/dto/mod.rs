pub mod query;
pub mod response;
pub mod vault;

pub use query::{
    BuilderListQuery, ChallengeBoard, ChallengeQuery, LeaderboardBuildersQuery,
    LeaderboardVaultsQuery, MigrationsQuery, VaultListQuery,
};
pub use response::{ApiResponse, PageMeta, Paginated, ResponseStatus};
pub use vault::VaultRow;
