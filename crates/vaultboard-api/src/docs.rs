use anyhow::Result;
use serde_json::to_string_pretty;
use std::path::PathBuf;
use utoipa::OpenApi;

use crate::dto::{ApiResponse, PageMeta, Paginated, VaultRow};
use vaultboard_types::{
    BuilderMetrics, BuilderStanding, MigratedVault, RangeStrategyDistribution, RankedEntry,
    RiskDistribution, TvlStrategyDistribution,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::vaults::list_vaults,
        crate::handlers::builders::list_builders,
        crate::handlers::leaderboard::builders_board,
        crate::handlers::leaderboard::vaults_board,
        crate::handlers::leaderboard::challenge_board,
        crate::handlers::leaderboard::export_challenge_board,
        crate::handlers::leaderboard::migrations_board,
    ),
    components(schemas(
        ApiResponse<Paginated<VaultRow>>,
        ApiResponse<Paginated<BuilderMetrics>>,
        ApiResponse<Paginated<RankedEntry<VaultRow>>>,
        ApiResponse<Paginated<RankedEntry<BuilderStanding>>>,
        ApiResponse<Paginated<RankedEntry<MigratedVault>>>,
        PageMeta,
        VaultRow,
        BuilderMetrics,
        BuilderStanding,
        MigratedVault,
        RiskDistribution,
        RangeStrategyDistribution,
        TvlStrategyDistribution,
    )),
    tags(
        (name = "Vaults", description = "Vault catalog endpoints"),
        (name = "Builders", description = "Builder aggregate endpoints"),
        (name = "Leaderboard", description = "Ranked views and CSV export"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn generate_openapi_json(output_path: PathBuf) -> Result<()> {
        let openapi = Self::openapi();
        let json = to_string_pretty(&openapi)?;

        let file_path = output_path.join("openapi.json");

        tracing::info!("Saving OpenAPI specs to {}...", file_path.display());

        std::fs::write(&file_path, json)?;
        tracing::info!("OpenAPI specs saved!");
        Ok(())
    }
}
