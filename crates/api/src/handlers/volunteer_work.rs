//! Handlers for `/portfolios/{portfolio_id}/volunteer-works`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::volunteer_work::{VolunteerWork, VolunteerWorkInput};
use folio_db::repositories::VolunteerWorkRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_portfolio_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "VolunteerWork",
        id,
    })
}

/// POST /api/v1/portfolios/{portfolio_id}/volunteer-works
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(portfolio_id): AppPath<DbId>,
    AppJson(input): AppJson<VolunteerWorkInput>,
) -> AppResult<(StatusCode, Json<DataResponse<VolunteerWork>>)> {
    input.validate()?;
    ensure_portfolio_exists(&state.pool, portfolio_id).await?;
    let volunteer_work = VolunteerWorkRepo::create(&state.pool, portfolio_id, &input).await?;

    tracing::info!(
        volunteer_work_id = volunteer_work.id,
        portfolio_id,
        subject = %auth.subject,
        "VolunteerWork created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: volunteer_work })))
}

/// GET /api/v1/portfolios/{portfolio_id}/volunteer-works
pub async fn list_by_portfolio(
    State(state): State<AppState>,
    AppPath(portfolio_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<VolunteerWork>>>> {
    ensure_portfolio_exists(&state.pool, portfolio_id).await?;
    let volunteer_works = VolunteerWorkRepo::list_by_portfolio(&state.pool, portfolio_id).await?;
    Ok(Json(DataResponse { data: volunteer_works }))
}

/// GET /api/v1/portfolios/{portfolio_id}/volunteer-works/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<VolunteerWork>>> {
    let volunteer_work = VolunteerWorkRepo::find_in_portfolio(&state.pool, portfolio_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: volunteer_work }))
}

/// PUT /api/v1/portfolios/{portfolio_id}/volunteer-works/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<VolunteerWorkInput>,
) -> AppResult<Json<DataResponse<VolunteerWork>>> {
    input.validate()?;
    let volunteer_work = VolunteerWorkRepo::update(&state.pool, portfolio_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        volunteer_work_id = id,
        portfolio_id,
        subject = %auth.subject,
        "VolunteerWork updated"
    );

    Ok(Json(DataResponse { data: volunteer_work }))
}

/// DELETE /api/v1/portfolios/{portfolio_id}/volunteer-works/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if VolunteerWorkRepo::delete(&state.pool, portfolio_id, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(
        volunteer_work_id = id,
        portfolio_id,
        subject = %auth.subject,
        "VolunteerWork deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
