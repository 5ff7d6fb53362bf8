//! Handlers for `/portfolios/{portfolio_id}/credentials`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::credential::{Credential, CredentialInput};
use folio_db::repositories::CredentialRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_portfolio_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Credential",
        id,
    })
}

/// POST /api/v1/portfolios/{portfolio_id}/credentials
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(portfolio_id): AppPath<DbId>,
    AppJson(input): AppJson<CredentialInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Credential>>)> {
    input.validate()?;
    ensure_portfolio_exists(&state.pool, portfolio_id).await?;
    let credential = CredentialRepo::create(&state.pool, portfolio_id, &input).await?;

    tracing::info!(
        credential_id = credential.id,
        portfolio_id,
        subject = %auth.subject,
        "Credential created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: credential })))
}

/// GET /api/v1/portfolios/{portfolio_id}/credentials
pub async fn list_by_portfolio(
    State(state): State<AppState>,
    AppPath(portfolio_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<Credential>>>> {
    ensure_portfolio_exists(&state.pool, portfolio_id).await?;
    let credentials = CredentialRepo::list_by_portfolio(&state.pool, portfolio_id).await?;
    Ok(Json(DataResponse { data: credentials }))
}

/// GET /api/v1/portfolios/{portfolio_id}/credentials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Credential>>> {
    let credential = CredentialRepo::find_in_portfolio(&state.pool, portfolio_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: credential }))
}

/// PUT /api/v1/portfolios/{portfolio_id}/credentials/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<CredentialInput>,
) -> AppResult<Json<DataResponse<Credential>>> {
    input.validate()?;
    let credential = CredentialRepo::update(&state.pool, portfolio_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(credential_id = id, portfolio_id, subject = %auth.subject, "Credential updated");

    Ok(Json(DataResponse { data: credential }))
}

/// DELETE /api/v1/portfolios/{portfolio_id}/credentials/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if CredentialRepo::delete(&state.pool, portfolio_id, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(credential_id = id, portfolio_id, subject = %auth.subject, "Credential deleted");

    Ok(StatusCode::NO_CONTENT)
}
