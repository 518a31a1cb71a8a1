use axum::{Json, extract::Query, extract::State, response::IntoResponse};

use vaultboard_core::{filter_vaults, sort_vaults};

use crate::{
    AppState,
    dto::{ApiResponse, Paginated, VaultListQuery, VaultRow},
    errors::ApiError,
};

/// Vault catalog: the full snapshot narrowed by the query's filter
/// criteria, ordered by the sort spec and paginated.
#[utoipa::path(
    get,
    path = "/vaults",
    tag = "Vaults",
    params(
        ("page" = Option<usize>, Query, description = "1-based page number"),
        ("perPage" = Option<usize>, Query, description = "Page size"),
        ("sort" = Option<String>, Query, description = "Sort field (apr, tvl, pnl, fees, users, dailyYield, risk)"),
        ("direction" = Option<String>, Query, description = "asc or desc"),
        ("search" = Option<String>, Query, description = "Free-text search over name, token and pool project"),
    ),
    responses(
        (status = 200, description = "Filtered vault page", body = ApiResponse<Paginated<VaultRow>>),
        (status = 502, description = "Upstream vault API unavailable")
    )
)]
pub async fn list_vaults(
    State(state): State<AppState>,
    Query(query): Query<VaultListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.source.fetch_all_vaults().await?;

    let filtered = filter_vaults(&snapshot.data, &query.criteria());
    let ordered = sort_vaults(&filtered, query.sort_spec());
    let rows: Vec<VaultRow> = ordered.iter().map(VaultRow::from).collect();

    Ok(Json(ApiResponse::ok(Paginated::slice(
        &rows,
        query.page,
        query.per_page,
    ))))
}
