use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use vaultboard_types::{
    BuilderRankField, BuilderSortField, FilterCriteria, MigrationSortField, RangeStrategyType,
    RiskScore, SortDirection, SortSpec, TimeWindow, TvlBucket, VaultKind, VaultSortField,
};

/// Query parameters of the vault catalog endpoint. Filter fields mirror
/// [`FilterCriteria`]; absence means "no constraint".
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct VaultListQuery {
    pub page: usize,
    pub per_page: usize,
    pub sort: VaultSortField,
    pub direction: SortDirection,
    pub chain_id: Option<i64>,
    pub principal_token: Option<String>,
    pub risk_level: Option<RiskScore>,
    pub min_apr: Option<f64>,
    pub max_apr: Option<f64>,
    pub tvl_range: Option<TvlBucket>,
    pub range_strategy: Option<RangeStrategyType>,
    pub allow_deposit: Option<bool>,
    pub search: Option<String>,
}

impl Default for VaultListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: defaults::PER_PAGE,
            sort: VaultSortField::Apr,
            direction: SortDirection::Desc,
            chain_id: None,
            principal_token: None,
            risk_level: None,
            min_apr: None,
            max_apr: None,
            tvl_range: None,
            range_strategy: None,
            allow_deposit: None,
            search: None,
        }
    }
}

impl VaultListQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            chain_id: self.chain_id,
            principal_token: self.principal_token.clone(),
            risk_level: self.risk_level,
            min_apr: self.min_apr,
            max_apr: self.max_apr,
            tvl_range: self.tvl_range,
            range_strategy: self.range_strategy,
            allow_deposit: self.allow_deposit,
            search: self.search.clone(),
        }
    }

    pub const fn sort_spec(&self) -> SortSpec {
        SortSpec {
            field: self.sort,
            direction: self.direction,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderListQuery {
    pub page: usize,
    pub per_page: usize,
    pub sort: BuilderSortField,
}

impl Default for BuilderListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: defaults::PER_PAGE,
            sort: BuilderSortField::Tvl,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderboardVaultsQuery {
    pub page: usize,
    pub per_page: usize,
    pub period: TimeWindow,
    pub kind: VaultKind,
    pub sort: VaultSortField,
    pub direction: SortDirection,
}

impl Default for LeaderboardVaultsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: defaults::PER_PAGE,
            period: TimeWindow::AllTime,
            kind: VaultKind::Autofarm,
            sort: VaultSortField::Fees,
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderboardBuildersQuery {
    pub page: usize,
    pub per_page: usize,
    pub period: TimeWindow,
    pub kind: VaultKind,
    pub sort: BuilderRankField,
    pub direction: SortDirection,
}

impl Default for LeaderboardBuildersQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: defaults::PER_PAGE,
            period: TimeWindow::AllTime,
            kind: VaultKind::Autofarm,
            sort: BuilderRankField::Fees,
            direction: SortDirection::Desc,
        }
    }
}

/// Which challenge board to serve.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeBoard {
    #[default]
    All,
    Fees,
    Tvl,
    Users,
}

impl ChallengeBoard {
    /// Export filename prefix of each board.
    pub const fn filename_prefix(self) -> &'static str {
        match self {
            Self::All => "farm-earn-challenge-all",
            Self::Fees => "farm-earn-challenge-top-fees",
            Self::Tvl => "farm-earn-challenge-top-tvl",
            Self::Users => "farm-earn-challenge-top-users",
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengeQuery {
    pub page: usize,
    pub per_page: usize,
    pub board: ChallengeBoard,
    pub kind: VaultKind,
}

impl Default for ChallengeQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: defaults::PER_PAGE,
            board: ChallengeBoard::All,
            kind: VaultKind::Autofarm,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MigrationsQuery {
    pub page: usize,
    pub per_page: usize,
    pub sort: MigrationSortField,
    pub direction: SortDirection,
}

impl Default for MigrationsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: defaults::PER_PAGE,
            sort: MigrationSortField::FeeRebate,
            direction: SortDirection::Desc,
        }
    }
}

pub mod defaults {
    pub const PER_PAGE: usize = 10;
}
