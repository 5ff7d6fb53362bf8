//! Integration tests for repository CRUD operations.
//!
//! Exercises the repository layer against a real database:
//! - Create / fetch / update / delete for leaf and scoped entities
//! - Child operations scoped by parent
//! - Cascade delete behaviour
//! - Unique and foreign key violations

use assert_matches::assert_matches;
use chrono::NaiveDate;
use sqlx::PgPool;

use folio_db::models::achievement::{AchievementInput, AchievementOwner};
use folio_db::models::goal::GoalInput;
use folio_db::models::hobby::HobbyInput;
use folio_db::models::image::ImageInput;
use folio_db::models::portfolio::PortfolioInput;
use folio_db::models::side_project::SideProjectInput;
use folio_db::models::skill::SkillInput;
use folio_db::models::website::WebsiteInput;
use folio_db::models::work_experience::WorkExperienceInput;
use folio_db::repositories::{
    AchievementRepo, GoalRepo, HobbyRepo, ImageRepo, PortfolioRepo, SideProjectRepo, SkillRepo,
    WebsiteRepo, WorkExperienceRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_portfolio(name: &str) -> PortfolioInput {
    PortfolioInput {
        name: name.to_string(),
        tagline: None,
        description: None,
        location: None,
        email: None,
        profile_image_id: None,
        github_website_id: None,
        linkedin_website_id: None,
    }
}

fn new_side_project(name: &str) -> SideProjectInput {
    SideProjectInput {
        name: name.to_string(),
        description: None,
        start_date: None,
        finish_date: None,
        logo_image_id: None,
        website_id: None,
        repository_website_id: None,
    }
}

fn new_work_experience(company: &str) -> WorkExperienceInput {
    WorkExperienceInput {
        company_name: company.to_string(),
        position: "Engineer".to_string(),
        location: None,
        description: None,
        start_date: NaiveDate::from_ymd_opt(2021, 3, 1),
        end_date: None,
        company_logo_id: None,
        company_website_id: None,
    }
}

fn new_hobby(description: &str, image_id: Option<i64>) -> HobbyInput {
    HobbyInput {
        description: description.to_string(),
        image_id,
    }
}

// ---------------------------------------------------------------------------
// Leaf entities
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_image_crud(pool: PgPool) {
    let input = ImageInput {
        name: "Avatar".into(),
        path: "/img/avatar.png".into(),
    };
    let created = ImageRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.name, "Avatar");

    let fetched = ImageRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(fetched, Some(created.clone()));

    let renamed = ImageInput {
        name: "Headshot".into(),
        path: "/img/headshot.png".into(),
    };
    let updated = ImageRepo::update(&pool, created.id, &renamed)
        .await
        .unwrap()
        .expect("image should exist");
    assert_eq!(updated.name, "Headshot");
    assert_eq!(updated.path, "/img/headshot.png");

    assert_eq!(ImageRepo::delete(&pool, created.id).await.unwrap(), 1);
    assert_eq!(ImageRepo::delete(&pool, created.id).await.unwrap(), 0);
    assert!(ImageRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_returns_none(pool: PgPool) {
    let input = WebsiteInput {
        name: "Blog".into(),
        url: "https://blog.example.com".into(),
    };
    assert!(WebsiteRepo::update(&pool, 999_999, &input).await.unwrap().is_none());
    assert!(PortfolioRepo::update(&pool, 999_999, &new_portfolio("Nobody"))
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_ordered_by_id(pool: PgPool) {
    for name in ["Go", "Rust", "Elm"] {
        SkillRepo::create(&pool, &SkillInput { name: name.into() })
            .await
            .unwrap();
    }
    let skills = SkillRepo::list(&pool).await.unwrap();
    let names: Vec<_> = skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Go", "Rust", "Elm"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_skill_name_violates_unique(pool: PgPool) {
    let input = SkillInput { name: "Rust".into() };
    SkillRepo::create(&pool, &input).await.unwrap();

    let err = SkillRepo::create(&pool, &input).await.unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.constraint(), Some("uq_skills_name"));
}

// ---------------------------------------------------------------------------
// Scoped entities
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hobby_chess_scenario(pool: PgPool) {
    let portfolio = PortfolioRepo::create(&pool, &new_portfolio("Ada")).await.unwrap();
    let image = ImageRepo::create(
        &pool,
        &ImageInput {
            name: "Chess board".into(),
            path: "/img/chess.png".into(),
        },
    )
    .await
    .unwrap();

    let hobby = HobbyRepo::create(&pool, portfolio.id, &new_hobby("Chess", Some(image.id)))
        .await
        .unwrap();
    assert_eq!(hobby.portfolio_id, portfolio.id);
    assert_eq!(hobby.image_id, Some(image.id));
    assert_eq!(hobby.image, Some(image.clone()));

    let fetched = HobbyRepo::find_in_portfolio(&pool, portfolio.id, hobby.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched, hobby);

    let updated = HobbyRepo::update(&pool, portfolio.id, hobby.id, &new_hobby("Go", None))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.description, "Go");
    assert_eq!(updated.image, None);

    assert_eq!(HobbyRepo::delete(&pool, portfolio.id, hobby.id).await.unwrap(), 1);
    assert!(HobbyRepo::find_in_portfolio(&pool, portfolio.id, hobby.id)
        .await
        .unwrap()
        .is_none());
    // The referenced image is untouched.
    assert!(ImageRepo::find_by_id(&pool, image.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_child_operations_are_scoped_by_parent(pool: PgPool) {
    let ada = PortfolioRepo::create(&pool, &new_portfolio("Ada")).await.unwrap();
    let grace = PortfolioRepo::create(&pool, &new_portfolio("Grace")).await.unwrap();

    let ada_job = WorkExperienceRepo::create(&pool, ada.id, &new_work_experience("Acme"))
        .await
        .unwrap();
    WorkExperienceRepo::create(&pool, grace.id, &new_work_experience("Globex"))
        .await
        .unwrap();

    let ada_jobs = WorkExperienceRepo::list_by_portfolio(&pool, ada.id).await.unwrap();
    assert_eq!(ada_jobs.len(), 1);
    assert_eq!(ada_jobs[0].company_name, "Acme");

    // Addressing Ada's job through Grace's portfolio finds nothing.
    assert!(WorkExperienceRepo::find_in_portfolio(&pool, grace.id, ada_job.id)
        .await
        .unwrap()
        .is_none());
    assert!(WorkExperienceRepo::update(&pool, grace.id, ada_job.id, &new_work_experience("Hijack"))
        .await
        .unwrap()
        .is_none());
    assert_eq!(
        WorkExperienceRepo::delete(&pool, grace.id, ada_job.id).await.unwrap(),
        0
    );
    assert!(WorkExperienceRepo::find_in_portfolio(&pool, ada.id, ada_job.id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_goal_defaults_and_update(pool: PgPool) {
    let portfolio = PortfolioRepo::create(&pool, &new_portfolio("Ada")).await.unwrap();
    let project = SideProjectRepo::create(&pool, portfolio.id, &new_side_project("Engine"))
        .await
        .unwrap();

    let goal = GoalRepo::create(
        &pool,
        project.id,
        &GoalInput {
            description: "Ship v1".into(),
            is_complete: false,
        },
    )
    .await
    .unwrap();
    assert!(!goal.is_complete);

    let done = GoalRepo::update(
        &pool,
        project.id,
        goal.id,
        &GoalInput {
            description: "Ship v1".into(),
            is_complete: true,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(done.is_complete);
    assert_eq!(
        GoalRepo::list_by_side_project(&pool, project.id).await.unwrap(),
        vec![done]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_achievements_are_scoped_by_owner(pool: PgPool) {
    let portfolio = PortfolioRepo::create(&pool, &new_portfolio("Ada")).await.unwrap();
    let job = WorkExperienceRepo::create(&pool, portfolio.id, &new_work_experience("Acme"))
        .await
        .unwrap();
    let owner = AchievementOwner::WorkExperience(job.id);

    assert!(AchievementRepo::owner_exists(&pool, owner).await.unwrap());
    assert!(!AchievementRepo::owner_exists(&pool, AchievementOwner::Education(job.id))
        .await
        .unwrap());

    let input = AchievementInput {
        description: "Cut build times in half".into(),
        icon_image_id: None,
    };
    let achievement = AchievementRepo::create(&pool, owner, &input).await.unwrap();
    assert_eq!(achievement.work_experience_id, Some(job.id));
    assert_eq!(achievement.education_id, None);
    assert_eq!(achievement.volunteer_work_id, None);
    assert_eq!(achievement.open_source_contribution_id, None);

    // Same numeric id under a different owner kind does not match.
    let wrong = AchievementOwner::VolunteerWork(job.id);
    assert!(AchievementRepo::find_for_owner(&pool, wrong, achievement.id)
        .await
        .unwrap()
        .is_none());
    assert_eq!(AchievementRepo::delete(&pool, wrong, achievement.id).await.unwrap(), 0);

    let listed = AchievementRepo::list_by_owner(&pool, owner).await.unwrap();
    assert_eq!(listed, vec![achievement.clone()]);

    // Deleting the owner cascades to its achievements.
    assert_eq!(
        WorkExperienceRepo::delete(&pool, portfolio.id, job.id).await.unwrap(),
        1
    );
    assert!(AchievementRepo::find_for_owner(&pool, owner, achievement.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_portfolio_delete_cascades(pool: PgPool) {
    let portfolio = PortfolioRepo::create(&pool, &new_portfolio("Ada")).await.unwrap();
    let project = SideProjectRepo::create(&pool, portfolio.id, &new_side_project("Engine"))
        .await
        .unwrap();
    let hobby = HobbyRepo::create(&pool, portfolio.id, &new_hobby("Chess", None))
        .await
        .unwrap();

    assert_eq!(PortfolioRepo::delete(&pool, portfolio.id).await.unwrap(), 1);
    assert!(SideProjectRepo::find_in_portfolio(&pool, portfolio.id, project.id)
        .await
        .unwrap()
        .is_none());
    assert!(HobbyRepo::find_in_portfolio(&pool, portfolio.id, hobby.id)
        .await
        .unwrap()
        .is_none());
    let orphans: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM side_projects) + (SELECT COUNT(*) FROM hobbies)",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(orphans, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_missing_parent_is_fk_violation(pool: PgPool) {
    let err = HobbyRepo::create(&pool, 424_242, &new_hobby("Chess", None))
        .await
        .unwrap_err();
    assert_matches!(
        err.as_database_error().and_then(|e| e.code()).as_deref(),
        Some("23503")
    );
}
