//! Nested-reference resolution.
//!
//! Rows fetched from parent tables carry nullable foreign keys into the leaf
//! tables (`images`, `websites`, `skills`). Turning such a row into its API
//! model means fetching each referenced entity through the repository that
//! owns it and attaching the result.
//!
//! - [`ReferenceLookup`] is implemented by the leaf repositories.
//! - [`ResolveReferences`] is implemented by every parent `*Row` type.
//!
//! Nothing is cached: every fetch re-resolves every reference, so a list of
//! `n` rows with `k` references costs `n * k` extra queries.

use std::future::Future;

use folio_core::types::DbId;
use sqlx::PgPool;

/// A repository that can look up one of its entities by primary key.
pub trait ReferenceLookup {
    /// The entity attached to the parent model.
    type Entity: Send;

    /// Entity name used in log output.
    const ENTITY: &'static str;

    /// Fetch the entity with the given id, `None` if no such row exists.
    fn lookup(
        pool: &PgPool,
        id: DbId,
    ) -> impl Future<Output = Result<Option<Self::Entity>, sqlx::Error>> + Send;
}

/// Resolve an optional foreign key through the repository `L`.
///
/// `None` short-circuits without touching the database. An id that no longer
/// matches a row resolves to `None` as well; only storage failures are errors.
pub async fn resolve_reference<L: ReferenceLookup>(
    pool: &PgPool,
    id: Option<DbId>,
) -> Result<Option<L::Entity>, sqlx::Error> {
    let Some(id) = id else {
        return Ok(None);
    };
    let entity = L::lookup(pool, id).await?;
    if entity.is_none() {
        tracing::debug!(entity = L::ENTITY, id, "Dangling reference resolved to none");
    }
    Ok(entity)
}

/// A fetched row whose foreign keys still need to be resolved.
pub trait ResolveReferences: Sized + Send {
    /// The fully populated model.
    type Output: Send;

    fn resolve(self, pool: &PgPool)
        -> impl Future<Output = Result<Self::Output, sqlx::Error>> + Send;
}

/// Resolve every row in order. Stops at the first storage error.
pub async fn resolve_all<R: ResolveReferences>(
    pool: &PgPool,
    rows: Vec<R>,
) -> Result<Vec<R::Output>, sqlx::Error> {
    let mut resolved = Vec::with_capacity(rows.len());
    for row in rows {
        resolved.push(row.resolve(pool).await?);
    }
    Ok(resolved)
}

/// Resolve a row returned by `fetch_optional`.
pub async fn resolve_optional<R: ResolveReferences>(
    pool: &PgPool,
    row: Option<R>,
) -> Result<Option<R::Output>, sqlx::Error> {
    match row {
        Some(row) => Ok(Some(row.resolve(pool).await?)),
        None => Ok(None),
    }
}
