use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;

use vaultboard_core::{
    challenge_csv, challenge_vaults, export_filename, leaderboard::TOP_N, rank_builders,
    rank_vaults, sort_migrations, top_vaults_by, vaults_in_window, vaults_of_kind,
};
use vaultboard_types::{
    BuilderStanding, ChallengeMetric, ChallengeWindow, MigratedVault, RankedEntry, SortSpec, Vault,
    VaultSortField,
};

use crate::{
    AppState,
    dto::{
        ApiResponse, ChallengeBoard, ChallengeQuery, LeaderboardBuildersQuery,
        LeaderboardVaultsQuery, MigrationsQuery, Paginated, VaultRow,
    },
    errors::ApiError,
};

fn to_rows(ranked: Vec<RankedEntry<Vault>>) -> Vec<RankedEntry<VaultRow>> {
    ranked
        .into_iter()
        .map(|r| RankedEntry {
            rank: r.rank,
            entry: VaultRow::from(&r.entry),
        })
        .collect()
}

/// Builder leaderboard: per-owner rollups over the selected period and
/// vault population, ranked by the chosen metric.
#[utoipa::path(
    get,
    path = "/leaderboard/builders",
    tag = "Leaderboard",
    params(
        ("period" = Option<String>, Query, description = "this-week, last-week or all-time"),
        ("kind" = Option<String>, Query, description = "shared or autofarm"),
        ("sort" = Option<String>, Query, description = "fees, users, vaults, dailyYield or dailyYieldPct"),
        ("direction" = Option<String>, Query, description = "asc or desc"),
        ("page" = Option<usize>, Query, description = "1-based page number"),
        ("perPage" = Option<usize>, Query, description = "Page size"),
    ),
    responses(
        (status = 200, description = "Ranked builders", body = ApiResponse<Paginated<RankedEntry<BuilderStanding>>>),
        (status = 502, description = "Upstream vault API unavailable")
    )
)]
pub async fn builders_board(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardBuildersQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.source.fetch_all_vaults().await?;

    let cohort = vaults_in_window(&vaults_of_kind(&snapshot.data, query.kind), query.period);
    let ranked = rank_builders(&cohort, query.sort, query.direction);

    Ok(Json(ApiResponse::ok(Paginated::slice(
        &ranked,
        query.page,
        query.per_page,
    ))))
}

/// Per-vault leaderboard over the selected period and population.
#[utoipa::path(
    get,
    path = "/leaderboard/vaults",
    tag = "Leaderboard",
    params(
        ("period" = Option<String>, Query, description = "this-week, last-week or all-time"),
        ("kind" = Option<String>, Query, description = "shared or autofarm"),
        ("sort" = Option<String>, Query, description = "Sort field"),
        ("direction" = Option<String>, Query, description = "asc or desc"),
        ("page" = Option<usize>, Query, description = "1-based page number"),
        ("perPage" = Option<usize>, Query, description = "Page size"),
    ),
    responses(
        (status = 200, description = "Ranked vaults", body = ApiResponse<Paginated<RankedEntry<VaultRow>>>),
        (status = 502, description = "Upstream vault API unavailable")
    )
)]
pub async fn vaults_board(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardVaultsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.source.fetch_all_vaults().await?;

    let cohort = vaults_in_window(&vaults_of_kind(&snapshot.data, query.kind), query.period);
    let ranked = rank_vaults(
        &cohort,
        SortSpec {
            field: query.sort,
            direction: query.direction,
        },
    );

    Ok(Json(ApiResponse::ok(Paginated::slice(
        &to_rows(ranked),
        query.page,
        query.per_page,
    ))))
}

fn challenge_entries(
    vaults: &[Vault],
    board: ChallengeBoard,
    query_kind: vaultboard_types::VaultKind,
    now: i64,
) -> Vec<RankedEntry<Vault>> {
    let cohort = challenge_vaults(
        &vaults_of_kind(vaults, query_kind),
        &ChallengeWindow::default(),
        now,
    );
    match board {
        ChallengeBoard::All => rank_vaults(&cohort, SortSpec::descending(VaultSortField::Fees)),
        ChallengeBoard::Fees => top_vaults_by(&cohort, ChallengeMetric::Fees, TOP_N),
        ChallengeBoard::Tvl => top_vaults_by(&cohort, ChallengeMetric::Tvl, TOP_N),
        ChallengeBoard::Users => top_vaults_by(&cohort, ChallengeMetric::Users, TOP_N),
    }
}

/// Farm & Earn challenge boards: the full cohort or a per-owner-deduplicated
/// top 10 by fees, TVL or users.
#[utoipa::path(
    get,
    path = "/leaderboard/challenge",
    tag = "Leaderboard",
    params(
        ("board" = Option<String>, Query, description = "all, fees, tvl or users"),
        ("kind" = Option<String>, Query, description = "shared or autofarm"),
        ("page" = Option<usize>, Query, description = "1-based page number"),
        ("perPage" = Option<usize>, Query, description = "Page size"),
    ),
    responses(
        (status = 200, description = "Challenge board", body = ApiResponse<Paginated<RankedEntry<VaultRow>>>),
        (status = 502, description = "Upstream vault API unavailable")
    )
)]
pub async fn challenge_board(
    State(state): State<AppState>,
    Query(query): Query<ChallengeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.source.fetch_all_vaults().await?;

    let now = Utc::now().timestamp();
    let entries = challenge_entries(&snapshot.data, query.board, query.kind, now);

    Ok(Json(ApiResponse::ok(Paginated::slice(
        &to_rows(entries),
        query.page,
        query.per_page,
    ))))
}

/// CSV download of a challenge board, in rank order, with an export-time
/// timestamp in the attachment filename.
#[utoipa::path(
    get,
    path = "/leaderboard/challenge/export",
    tag = "Leaderboard",
    params(
        ("board" = Option<String>, Query, description = "all, fees, tvl or users"),
        ("kind" = Option<String>, Query, description = "shared or autofarm"),
    ),
    responses(
        (status = 200, description = "CSV attachment", content_type = "text/csv"),
        (status = 502, description = "Upstream vault API unavailable")
    )
)]
pub async fn export_challenge_board(
    State(state): State<AppState>,
    Query(query): Query<ChallengeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.source.fetch_all_vaults().await?;

    let now = Utc::now();
    let entries = challenge_entries(&snapshot.data, query.board, query.kind, now.timestamp());
    let body = challenge_csv(&entries, now);
    let filename = export_filename(query.board.filename_prefix(), now);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

/// Migration fee-rebate leaderboard, from the secondary upstream endpoint.
#[utoipa::path(
    get,
    path = "/leaderboard/migrations",
    tag = "Leaderboard",
    params(
        ("sort" = Option<String>, Query, description = "feeRebate or owner"),
        ("direction" = Option<String>, Query, description = "asc or desc"),
        ("page" = Option<usize>, Query, description = "1-based page number"),
        ("perPage" = Option<usize>, Query, description = "Page size"),
    ),
    responses(
        (status = 200, description = "Ranked migration rebates", body = ApiResponse<Paginated<RankedEntry<MigratedVault>>>),
        (status = 502, description = "Upstream vault API unavailable")
    )
)]
pub async fn migrations_board(
    State(state): State<AppState>,
    Query(query): Query<MigrationsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let migrations = state.source.fetch_migrated_vaults().await?;

    let ranked = sort_migrations(&migrations, query.sort, query.direction);

    Ok(Json(ApiResponse::ok(Paginated::slice(
        &ranked,
        query.page,
        query.per_page,
    ))))
}
