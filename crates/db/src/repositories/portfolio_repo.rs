//! Repository for the `portfolios` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::achievement::AchievementOwner;
use crate::models::portfolio::{
    Portfolio, PortfolioDetail, PortfolioInput, PortfolioRow, SideProjectDetail, WithAchievements,
};
use crate::models::skill::SkillOwner;
use crate::references::{
    resolve_all, resolve_optional, resolve_reference, ResolveReferences,
};
use crate::repositories::{
    AchievementRepo, ApiServiceRepo, ContributorRepo, CredentialRepo, DependencyLibraryRepo,
    EducationRepo, GoalRepo, HobbyRepo, ImageRepo, OpenSourceContributionRepo, SideProjectRepo,
    SkillRepo, VolunteerWorkRepo, WebsiteRepo, WorkExperienceRepo,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, tagline, description, location, email, \
    profile_image_id, github_website_id, linkedin_website_id, created_at, updated_at";

/// Provides CRUD operations for portfolios and assembles the full detail view.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// Insert a new portfolio, returning it with references resolved.
    pub async fn create(pool: &PgPool, input: &PortfolioInput) -> Result<Portfolio, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolios
                (name, tagline, description, location, email,
                 profile_image_id, github_website_id, linkedin_website_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PortfolioRow>(&query)
            .bind(&input.name)
            .bind(&input.tagline)
            .bind(&input.description)
            .bind(&input.location)
            .bind(&input.email)
            .bind(input.profile_image_id)
            .bind(input.github_website_id)
            .bind(input.linkedin_website_id)
            .fetch_one(pool)
            .await?;
        row.resolve(pool).await
    }

    /// Find a portfolio by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Portfolio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolios WHERE id = $1");
        let row = sqlx::query_as::<_, PortfolioRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    /// Cheap existence check used to validate parent IDs in request paths.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM portfolios WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all portfolios ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Portfolio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolios ORDER BY id");
        let rows = sqlx::query_as::<_, PortfolioRow>(&query)
            .fetch_all(pool)
            .await?;
        resolve_all(pool, rows).await
    }

    /// Overwrite every mutable column. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PortfolioInput,
    ) -> Result<Option<Portfolio>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolios SET
                name = $2,
                tagline = $3,
                description = $4,
                location = $5,
                email = $6,
                profile_image_id = $7,
                github_website_id = $8,
                linkedin_website_id = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PortfolioRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.tagline)
            .bind(&input.description)
            .bind(&input.location)
            .bind(&input.email)
            .bind(input.profile_image_id)
            .bind(input.github_website_id)
            .bind(input.linkedin_website_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    /// Delete a portfolio and, by cascade, everything scoped to it.
    /// Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolios WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Assemble the portfolio with every child collection resolved.
    ///
    /// Issues one query per collection per parent; intended for the public
    /// portfolio page, not for bulk export. The queries run independently on
    /// the pool, so the result is not a single snapshot.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PortfolioDetail>, sqlx::Error> {
        let Some(portfolio) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let skills = SkillRepo::list_by_owner(pool, SkillOwner::Portfolio(id)).await?;

        let mut side_projects = Vec::new();
        for side_project in SideProjectRepo::list_by_portfolio(pool, id).await? {
            let sp_id = side_project.id;
            side_projects.push(SideProjectDetail {
                goals: GoalRepo::list_by_side_project(pool, sp_id).await?,
                contributors: ContributorRepo::list_by_side_project(pool, sp_id).await?,
                api_services: ApiServiceRepo::list_by_side_project(pool, sp_id).await?,
                dependency_libraries: DependencyLibraryRepo::list_by_side_project(pool, sp_id)
                    .await?,
                skills: SkillRepo::list_by_owner(pool, SkillOwner::SideProject(sp_id)).await?,
                side_project,
            });
        }

        let mut work_experiences = Vec::new();
        for item in WorkExperienceRepo::list_by_portfolio(pool, id).await? {
            let achievements =
                AchievementRepo::list_by_owner(pool, AchievementOwner::WorkExperience(item.id))
                    .await?;
            work_experiences.push(WithAchievements { item, achievements });
        }

        let mut educations = Vec::new();
        for item in EducationRepo::list_by_portfolio(pool, id).await? {
            let achievements =
                AchievementRepo::list_by_owner(pool, AchievementOwner::Education(item.id)).await?;
            educations.push(WithAchievements { item, achievements });
        }

        let mut volunteer_works = Vec::new();
        for item in VolunteerWorkRepo::list_by_portfolio(pool, id).await? {
            let achievements =
                AchievementRepo::list_by_owner(pool, AchievementOwner::VolunteerWork(item.id))
                    .await?;
            volunteer_works.push(WithAchievements { item, achievements });
        }

        let mut open_source_contributions = Vec::new();
        for item in OpenSourceContributionRepo::list_by_portfolio(pool, id).await? {
            let achievements = AchievementRepo::list_by_owner(
                pool,
                AchievementOwner::OpenSourceContribution(item.id),
            )
            .await?;
            open_source_contributions.push(WithAchievements { item, achievements });
        }

        Ok(Some(PortfolioDetail {
            portfolio,
            skills,
            side_projects,
            work_experiences,
            educations,
            volunteer_works,
            open_source_contributions,
            credentials: CredentialRepo::list_by_portfolio(pool, id).await?,
            hobbies: HobbyRepo::list_by_portfolio(pool, id).await?,
        }))
    }
}

impl ResolveReferences for PortfolioRow {
    type Output = Portfolio;

    async fn resolve(self, pool: &PgPool) -> Result<Portfolio, sqlx::Error> {
        let profile_image = resolve_reference::<ImageRepo>(pool, self.profile_image_id).await?;
        let github_website = resolve_reference::<WebsiteRepo>(pool, self.github_website_id).await?;
        let linkedin_website =
            resolve_reference::<WebsiteRepo>(pool, self.linkedin_website_id).await?;

        Ok(Portfolio {
            id: self.id,
            name: self.name,
            tagline: self.tagline,
            description: self.description,
            location: self.location,
            email: self.email,
            profile_image_id: self.profile_image_id,
            profile_image,
            github_website_id: self.github_website_id,
            github_website,
            linkedin_website_id: self.linkedin_website_id,
            linkedin_website,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
