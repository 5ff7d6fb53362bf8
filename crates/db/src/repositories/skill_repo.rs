//! Repository for the `skills` table and its two join tables
//! (`portfolio_skills`, `side_project_skills`).

use folio_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::skill::{Skill, SkillInput, SkillOwner};
use crate::references::ReferenceLookup;

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Column list qualified with the `s` alias, for JOIN queries.
const JOINED_COLUMNS: &str = "s.id, s.name, s.created_at, s.updated_at";

/// Provides CRUD operations for skills and their associations.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill. Fails with a `uq_skills_name` violation on a duplicate name.
    pub async fn create(pool: &PgPool, input: &SkillInput) -> Result<Skill, sqlx::Error> {
        let query = format!("INSERT INTO skills (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a skill by its unique name. Accepts any executor so it can run
    /// inside a transaction.
    pub async fn find_by_name<'e, E>(executor: E, name: &str) -> Result<Option<Skill>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE name = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// List every skill ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY id");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Rename a skill. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SkillInput,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("UPDATE skills SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a skill and, by cascade, every association to it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    // -----------------------------------------------------------------------
    // Associations
    // -----------------------------------------------------------------------

    /// List the skills associated with `owner`, ordered by skill ID.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner: SkillOwner,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM skills s \
             JOIN {table} j ON j.skill_id = s.id \
             WHERE j.{column} = $1 \
             ORDER BY s.id",
            table = owner.join_table(),
            column = owner.owner_column(),
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(owner.id())
            .fetch_all(pool)
            .await
    }

    /// Whether the owner row exists.
    pub async fn owner_exists(pool: &PgPool, owner: SkillOwner) -> Result<bool, sqlx::Error> {
        let query = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", owner.table());
        sqlx::query_scalar::<_, bool>(&query)
            .bind(owner.id())
            .fetch_one(pool)
            .await
    }

    /// Associate an existing skill with `owner`.
    ///
    /// Idempotent: returns `true` if a new association was created, `false`
    /// if it already existed.
    pub async fn attach(
        pool: &PgPool,
        owner: SkillOwner,
        skill_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} ({column}, skill_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            table = owner.join_table(),
            column = owner.owner_column(),
        );
        let result = sqlx::query(&query)
            .bind(owner.id())
            .bind(skill_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove the association between `owner` and a skill. The skill itself is kept.
    pub async fn detach(
        pool: &PgPool,
        owner: SkillOwner,
        skill_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "DELETE FROM {table} WHERE {column} = $1 AND skill_id = $2",
            table = owner.join_table(),
            column = owner.owner_column(),
        );
        let result = sqlx::query(&query)
            .bind(owner.id())
            .bind(skill_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Find the skill named `input.name` (creating it if needed) and associate
    /// it with `owner`, in a single transaction.
    pub async fn create_and_attach(
        pool: &PgPool,
        owner: SkillOwner,
        input: &SkillInput,
    ) -> Result<Skill, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // A name committed by a concurrent insert is invisible to this
        // statement's snapshot, so the lookup runs as its own statement.
        let insert = format!(
            "INSERT INTO skills (name) VALUES ($1) \
             ON CONFLICT (name) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Skill>(&insert)
            .bind(&input.name)
            .fetch_optional(&mut *tx)
            .await?;
        let skill = match inserted {
            Some(skill) => skill,
            None => Self::find_by_name(&mut *tx, &input.name)
                .await?
                .ok_or(sqlx::Error::RowNotFound)?,
        };

        let link = format!(
            "INSERT INTO {table} ({column}, skill_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            table = owner.join_table(),
            column = owner.owner_column(),
        );
        sqlx::query(&link)
            .bind(owner.id())
            .bind(skill.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(skill)
    }
}

impl ReferenceLookup for SkillRepo {
    type Entity = Skill;
    const ENTITY: &'static str = "Skill";

    async fn lookup(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        Self::find_by_id(pool, id).await
    }
}
