//! The PostgreSQL repositories behind the same service layer as the
//! in-memory stores. Each test gets a fresh database from `sqlx::test`,
//! so these only run when `DATABASE_URL` points at a server.

use assert_matches::assert_matches;
use shotify_core::canvas::{CanvasConfig, Configuration, LayerConfig, LayerKind};
use shotify_core::error::CoreError;
use shotify_core::platform::Platform;
use shotify_core::seed::DEFAULT_TEMPLATE_COUNT;
use shotify_db::models::project::{CreateProject, UpdateProject};
use shotify_db::models::template::CreateTemplate;
use shotify_db::services::{ProjectService, SeedOutcome, TemplateCatalog};
use shotify_db::store::Stores;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn services(pool: PgPool) -> (TemplateCatalog, ProjectService) {
    let stores = Stores::postgres(pool);
    let catalog = TemplateCatalog::new(stores.templates);
    let projects = ProjectService::new(stores.projects, catalog.clone());
    (catalog, projects)
}

fn new_template(name: &str, platform: Platform) -> CreateTemplate {
    let mut config = Configuration::blank(CanvasConfig {
        width: 1080,
        height: 1920,
        background_color: "#FFFFFF".to_string(),
    });
    config
        .layers
        .push(LayerConfig::new("title", LayerKind::Text, "Title").z_index(2));
    CreateTemplate {
        name: name.to_string(),
        platform,
        category: "test".to_string(),
        thumbnail: String::new(),
        json_config: config,
    }
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL server at DATABASE_URL"]
async fn template_config_round_trips_through_jsonb(pool: PgPool) {
    let (catalog, _) = services(pool);
    let created = catalog
        .create(new_template("jsonb", Platform::Ios))
        .await
        .unwrap();

    let fetched = catalog
        .get_by_id(&created.id.to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.json_config, created.json_config);
    assert_eq!(fetched.platform, Platform::Ios);
    assert!(fetched.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL server at DATABASE_URL"]
async fn platform_filter_and_soft_delete(pool: PgPool) {
    let (catalog, _) = services(pool);
    catalog.create(new_template("ios", Platform::Ios)).await.unwrap();
    let android = catalog
        .create(new_template("android", Platform::Android))
        .await
        .unwrap();
    catalog.create(new_template("both", Platform::Both)).await.unwrap();

    let mut ios: Vec<String> = catalog
        .list("ios")
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    ios.sort();
    assert_eq!(ios, ["both", "ios"]);

    catalog.delete(&android.id.to_string()).await.unwrap();
    catalog.delete(&android.id.to_string()).await.unwrap();
    assert_eq!(catalog.list("all").await.unwrap().len(), 2);
    assert!(catalog
        .get_by_id(&android.id.to_string())
        .await
        .unwrap()
        .is_none());
    assert_matches!(
        catalog.delete(&Uuid::now_v7().to_string()).await,
        Err(CoreError::NotFound { .. })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL server at DATABASE_URL"]
async fn seeding_is_transactional_and_skips_when_populated(pool: PgPool) {
    let (catalog, _) = services(pool);

    assert_eq!(
        catalog.seed(false).await.unwrap(),
        SeedOutcome::Seeded {
            inserted: DEFAULT_TEMPLATE_COUNT
        }
    );
    assert_eq!(
        catalog.seed(false).await.unwrap(),
        SeedOutcome::Skipped {
            existing: DEFAULT_TEMPLATE_COUNT as u64
        }
    );
    catalog.seed(true).await.unwrap();
    assert_eq!(catalog.list("all").await.unwrap().len(), DEFAULT_TEMPLATE_COUNT);
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL server at DATABASE_URL"]
async fn owner_scoped_project_lifecycle(pool: PgPool) {
    let (catalog, projects) = services(pool);
    let template = catalog
        .create(new_template("base", Platform::Both))
        .await
        .unwrap();
    let owner = Uuid::now_v7();
    let other = Uuid::now_v7();

    let project = projects
        .create(
            owner,
            &CreateProject {
                template_id: template.id.to_string(),
                name: "P".to_string(),
            },
        )
        .await
        .unwrap();
    let id = project.id.to_string();
    assert_eq!(project.project_config, template.json_config);

    assert_eq!(projects.list(owner).await.unwrap().len(), 1);
    assert!(projects.list(other).await.unwrap().is_empty());
    assert_matches!(projects.get(other, &id).await, Err(CoreError::NotFound { .. }));

    let patch = UpdateProject {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    assert_matches!(
        projects.update(other, &id, &patch).await,
        Err(CoreError::NotFound { .. })
    );
    let renamed = projects.update(owner, &id, &patch).await.unwrap();
    assert_eq!(renamed.name, "Renamed");
    assert_eq!(renamed.project_config, project.project_config);

    assert_matches!(projects.delete(other, &id).await, Err(CoreError::NotFound { .. }));
    projects.delete(owner, &id).await.unwrap();
    assert_matches!(projects.get(owner, &id).await, Err(CoreError::NotFound { .. }));
}
