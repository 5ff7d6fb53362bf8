//! Handlers for `/portfolios/{portfolio_id}/open-source-contributions`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::open_source_contribution::{
    OpenSourceContribution, OpenSourceContributionInput,
};
use folio_db::repositories::OpenSourceContributionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_portfolio_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "OpenSourceContribution",
        id,
    })
}

/// POST /api/v1/portfolios/{portfolio_id}/open-source-contributions
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(portfolio_id): AppPath<DbId>,
    AppJson(input): AppJson<OpenSourceContributionInput>,
) -> AppResult<(StatusCode, Json<DataResponse<OpenSourceContribution>>)> {
    input.validate()?;
    ensure_portfolio_exists(&state.pool, portfolio_id).await?;
    let contribution = OpenSourceContributionRepo::create(&state.pool, portfolio_id, &input).await?;

    tracing::info!(
        open_source_contribution_id = contribution.id,
        portfolio_id,
        subject = %auth.subject,
        "OpenSourceContribution created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: contribution })))
}

/// GET /api/v1/portfolios/{portfolio_id}/open-source-contributions
pub async fn list_by_portfolio(
    State(state): State<AppState>,
    AppPath(portfolio_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<OpenSourceContribution>>>> {
    ensure_portfolio_exists(&state.pool, portfolio_id).await?;
    let contributions =
        OpenSourceContributionRepo::list_by_portfolio(&state.pool, portfolio_id).await?;
    Ok(Json(DataResponse { data: contributions }))
}

/// GET /api/v1/portfolios/{portfolio_id}/open-source-contributions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<OpenSourceContribution>>> {
    let contribution = OpenSourceContributionRepo::find_in_portfolio(&state.pool, portfolio_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: contribution }))
}

/// PUT /api/v1/portfolios/{portfolio_id}/open-source-contributions/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<OpenSourceContributionInput>,
) -> AppResult<Json<DataResponse<OpenSourceContribution>>> {
    input.validate()?;
    let contribution = OpenSourceContributionRepo::update(&state.pool, portfolio_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        open_source_contribution_id = id,
        portfolio_id,
        subject = %auth.subject,
        "OpenSourceContribution updated"
    );

    Ok(Json(DataResponse { data: contribution }))
}

/// DELETE /api/v1/portfolios/{portfolio_id}/open-source-contributions/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if OpenSourceContributionRepo::delete(&state.pool, portfolio_id, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(
        open_source_contribution_id = id,
        portfolio_id,
        subject = %auth.subject,
        "OpenSourceContribution deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
