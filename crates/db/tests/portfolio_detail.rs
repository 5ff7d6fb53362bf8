//! Skill associations and the assembled portfolio detail view.

use assert_matches::assert_matches;
use sqlx::PgPool;

use folio_db::models::achievement::{AchievementInput, AchievementOwner};
use folio_db::models::education::EducationInput;
use folio_db::models::goal::GoalInput;
use folio_db::models::hobby::HobbyInput;
use folio_db::models::portfolio::PortfolioInput;
use folio_db::models::side_project::SideProjectInput;
use folio_db::models::skill::{SkillInput, SkillOwner};
use folio_db::repositories::{
    AchievementRepo, EducationRepo, GoalRepo, HobbyRepo, PortfolioRepo, SideProjectRepo,
    SkillRepo,
};

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

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_attach_is_idempotent(pool: PgPool) {
    let portfolio = PortfolioRepo::create(&pool, &new_portfolio("Ada")).await.unwrap();
    let rust = SkillRepo::create(&pool, &SkillInput { name: "Rust".into() })
        .await
        .unwrap();
    let owner = SkillOwner::Portfolio(portfolio.id);

    assert!(SkillRepo::attach(&pool, owner, rust.id).await.unwrap());
    assert!(!SkillRepo::attach(&pool, owner, rust.id).await.unwrap());
    assert_eq!(SkillRepo::list_by_owner(&pool, owner).await.unwrap(), vec![rust.clone()]);

    assert_eq!(SkillRepo::detach(&pool, owner, rust.id).await.unwrap(), 1);
    assert_eq!(SkillRepo::detach(&pool, owner, rust.id).await.unwrap(), 0);
    assert!(SkillRepo::list_by_owner(&pool, owner).await.unwrap().is_empty());
    // Detaching keeps the skill itself.
    assert!(SkillRepo::find_by_id(&pool, rust.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_attach_reuses_existing_skill(pool: PgPool) {
    let portfolio = PortfolioRepo::create(&pool, &new_portfolio("Ada")).await.unwrap();
    let project = SideProjectRepo::create(&pool, portfolio.id, &new_side_project("Engine"))
        .await
        .unwrap();
    let input = SkillInput { name: "SQL".into() };

    let first = SkillRepo::create_and_attach(&pool, SkillOwner::Portfolio(portfolio.id), &input)
        .await
        .unwrap();
    let second = SkillRepo::create_and_attach(&pool, SkillOwner::SideProject(project.id), &input)
        .await
        .unwrap();
    let again = SkillRepo::create_and_attach(&pool, SkillOwner::SideProject(project.id), &input)
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.id, again.id);
    assert_eq!(SkillRepo::list(&pool).await.unwrap().len(), 1);
    assert_eq!(
        SkillRepo::list_by_owner(&pool, SkillOwner::SideProject(project.id))
            .await
            .unwrap()
            .len(),
        1
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_attach_rolls_back_on_missing_owner(pool: PgPool) {
    let input = SkillInput {
        name: "Haskell".into(),
    };
    let err = SkillRepo::create_and_attach(&pool, SkillOwner::Portfolio(55_555), &input)
        .await
        .unwrap_err();
    assert_matches!(
        err.as_database_error().and_then(|e| e.code()).as_deref(),
        Some("23503")
    );
    // The skill insert was rolled back with the failed association.
    assert!(SkillRepo::find_by_name(&pool, "Haskell").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_attach_waits_for_concurrent_insert(pool: PgPool) {
    let portfolio = PortfolioRepo::create(&pool, &new_portfolio("Ada")).await.unwrap();
    let owner = SkillOwner::Portfolio(portfolio.id);

    // Another writer holds an uncommitted insert of the same name.
    let mut other = pool.begin().await.unwrap();
    let other_id: i64 = sqlx::query_scalar("INSERT INTO skills (name) VALUES ('Rust') RETURNING id")
        .fetch_one(&mut *other)
        .await
        .unwrap();

    let racing_pool = pool.clone();
    let racer = tokio::spawn(async move {
        SkillRepo::create_and_attach(&racing_pool, owner, &SkillInput { name: "Rust".into() })
            .await
    });

    tokio::time::sleep(std::time::Duration::from_millis(300)).await;
    other.commit().await.unwrap();

    let skill = racer.await.unwrap().expect("find-or-create should see the committed row");
    assert_eq!(skill.id, other_id);
    assert_eq!(SkillRepo::list_by_owner(&pool, owner).await.unwrap(), vec![skill]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_detail_missing_portfolio(pool: PgPool) {
    assert!(PortfolioRepo::find_detail(&pool, 1).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_detail_assembles_children(pool: PgPool) {
    let portfolio = PortfolioRepo::create(&pool, &new_portfolio("Ada")).await.unwrap();
    let other = PortfolioRepo::create(&pool, &new_portfolio("Grace")).await.unwrap();

    let project = SideProjectRepo::create(&pool, portfolio.id, &new_side_project("Engine"))
        .await
        .unwrap();
    GoalRepo::create(
        &pool,
        project.id,
        &GoalInput {
            description: "Print a table".into(),
            is_complete: false,
        },
    )
    .await
    .unwrap();
    SkillRepo::create_and_attach(
        &pool,
        SkillOwner::SideProject(project.id),
        &SkillInput {
            name: "Mechanics".into(),
        },
    )
    .await
    .unwrap();
    SkillRepo::create_and_attach(
        &pool,
        SkillOwner::Portfolio(portfolio.id),
        &SkillInput {
            name: "Mathematics".into(),
        },
    )
    .await
    .unwrap();

    let school = EducationRepo::create(
        &pool,
        portfolio.id,
        &EducationInput {
            institution_name: "Home tutoring".into(),
            degree: None,
            field_of_study: Some("Mathematics".into()),
            location: None,
            description: None,
            start_date: None,
            graduation_date: None,
            institution_logo_id: None,
            institution_website_id: None,
        },
    )
    .await
    .unwrap();
    AchievementRepo::create(
        &pool,
        AchievementOwner::Education(school.id),
        &AchievementInput {
            description: "Notes on the Analytical Engine".into(),
            icon_image_id: None,
        },
    )
    .await
    .unwrap();

    HobbyRepo::create(
        &pool,
        portfolio.id,
        &HobbyInput {
            description: "Chess".into(),
            image_id: None,
        },
    )
    .await
    .unwrap();
    HobbyRepo::create(
        &pool,
        other.id,
        &HobbyInput {
            description: "Not Ada's".into(),
            image_id: None,
        },
    )
    .await
    .unwrap();

    let detail = PortfolioRepo::find_detail(&pool, portfolio.id)
        .await
        .unwrap()
        .expect("portfolio exists");

    assert_eq!(detail.portfolio.id, portfolio.id);
    assert_eq!(detail.skills.len(), 1);
    assert_eq!(detail.skills[0].name, "Mathematics");

    assert_eq!(detail.side_projects.len(), 1);
    let sp = &detail.side_projects[0];
    assert_eq!(sp.side_project.id, project.id);
    assert_eq!(sp.goals.len(), 1);
    assert_eq!(sp.skills[0].name, "Mechanics");
    assert!(sp.contributors.is_empty());

    assert_eq!(detail.educations.len(), 1);
    assert_eq!(detail.educations[0].achievements.len(), 1);
    assert!(detail.work_experiences.is_empty());

    assert_eq!(detail.hobbies.len(), 1);
    assert_eq!(detail.hobbies[0].description, "Chess");

    // Flattened serialization keeps the portfolio fields at the top level.
    let json = serde_json::to_value(&detail).unwrap();
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["side_projects"][0]["name"], "Engine");
    assert_eq!(
        json["educations"][0]["achievements"][0]["description"],
        "Notes on the Analytical Engine"
    );
}
