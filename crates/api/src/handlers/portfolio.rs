//! Handlers for the `/portfolios` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::portfolio::{Portfolio, PortfolioDetail, PortfolioInput};
use folio_db::repositories::PortfolioRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Portfolio",
        id,
    })
}

/// POST /api/v1/portfolios
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<PortfolioInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Portfolio>>)> {
    input.validate()?;
    let portfolio = PortfolioRepo::create(&state.pool, &input).await?;

    tracing::info!(portfolio_id = portfolio.id, subject = %auth.subject, "Portfolio created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: portfolio })))
}

/// GET /api/v1/portfolios
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Portfolio>>>> {
    let portfolios = PortfolioRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: portfolios }))
}

/// GET /api/v1/portfolios/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Portfolio>>> {
    let portfolio = PortfolioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: portfolio }))
}

/// GET /api/v1/portfolios/{id}/detail
///
/// The portfolio with every child collection and nested reference resolved,
/// as rendered by the public portfolio page.
pub async fn get_detail(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<PortfolioDetail>>> {
    let detail = PortfolioRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/portfolios/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<PortfolioInput>,
) -> AppResult<Json<DataResponse<Portfolio>>> {
    input.validate()?;
    let portfolio = PortfolioRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(portfolio_id = id, subject = %auth.subject, "Portfolio updated");

    Ok(Json(DataResponse { data: portfolio }))
}

/// DELETE /api/v1/portfolios/{id}
///
/// Cascades to every record scoped to the portfolio.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if PortfolioRepo::delete(&state.pool, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(portfolio_id = id, subject = %auth.subject, "Portfolio deleted");

    Ok(StatusCode::NO_CONTENT)
}
