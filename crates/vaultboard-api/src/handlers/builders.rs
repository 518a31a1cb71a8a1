use axum::{Json, extract::Query, extract::State, response::IntoResponse};

use vaultboard_core::{aggregate_by_owner, sort_builders};
use vaultboard_types::BuilderMetrics;

use crate::{
    AppState,
    dto::{ApiResponse, BuilderListQuery, Paginated},
    errors::ApiError,
};

/// Builder catalog: every owner in the snapshot rolled up into its
/// aggregate metrics, descending by the chosen field.
#[utoipa::path(
    get,
    path = "/builders",
    tag = "Builders",
    params(
        ("page" = Option<usize>, Query, description = "1-based page number"),
        ("perPage" = Option<usize>, Query, description = "Page size"),
        ("sort" = Option<String>, Query, description = "Sort field (tvl, apr, fees, users); always descending"),
    ),
    responses(
        (status = 200, description = "Builder aggregate page", body = ApiResponse<Paginated<BuilderMetrics>>),
        (status = 502, description = "Upstream vault API unavailable")
    )
)]
pub async fn list_builders(
    State(state): State<AppState>,
    Query(query): Query<BuilderListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.source.fetch_all_vaults().await?;

    let builders = aggregate_by_owner(&snapshot.data);
    let ordered = sort_builders(&builders, query.sort);

    Ok(Json(ApiResponse::ok(Paginated::slice(
        &ordered,
        query.page,
        query.per_page,
    ))))
}
