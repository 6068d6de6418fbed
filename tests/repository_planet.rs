mod common;

use interplanetary_booking::domain::entities::NewPlanet;
use interplanetary_booking::domain::repositories::PlanetRepository;
use interplanetary_booking::error::AppError;
use interplanetary_booking::infrastructure::persistence::SqlitePlanetRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_planet(pool: SqlitePool) {
    let repo = SqlitePlanetRepository::new(Arc::new(pool));

    let result = repo
        .create(NewPlanet {
            name: "Mars".to_string(),
            description: "The red planet".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let planet = result.unwrap();
    assert!(planet.id > 0);
    assert_eq!(planet.name, "Mars");
    assert_eq!(planet.description, "The red planet");
}

#[sqlx::test]
async fn test_create_planet_duplicate_name_conflicts(pool: SqlitePool) {
    let repo = SqlitePlanetRepository::new(Arc::new(pool.clone()));

    common::insert_planet(&pool, "Mars", "The red planet").await;

    let result = repo
        .create(NewPlanet {
            name: "Mars".to_string(),
            description: "Another red planet".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
    assert_eq!(common::count_planets(&pool).await, 1);
}

#[sqlx::test]
async fn test_find_by_id(pool: SqlitePool) {
    let id = common::insert_planet(&pool, "Mars", "The red planet").await;
    let repo = SqlitePlanetRepository::new(Arc::new(pool));

    let found = repo.find_by_id(id).await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().name, "Mars");

    let missing = repo.find_by_id(id + 1).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_list_is_ordered_by_id(pool: SqlitePool) {
    common::insert_planet(&pool, "Venus", "Shrouded in clouds").await;
    common::insert_planet(&pool, "Mars", "The red planet").await;

    let repo = SqlitePlanetRepository::new(Arc::new(pool));
    let planets = repo.list().await.unwrap();

    assert_eq!(planets.len(), 2);
    assert_eq!(planets[0].name, "Venus");
    assert_eq!(planets[1].name, "Mars");
}

#[sqlx::test]
async fn test_delete_planet_cascades_missions(pool: SqlitePool) {
    let mars = common::insert_planet(&pool, "Mars", "The red planet").await;
    let venus = common::insert_planet(&pool, "Venus", "Shrouded in clouds").await;
    let ada = common::insert_scientist(&pool, "Ada", "Physics").await;
    common::insert_mission(&pool, mars, ada, common::future_date(), 14).await;
    common::insert_mission(&pool, mars, ada, common::future_date(), 30).await;
    common::insert_mission(&pool, venus, ada, common::future_date(), 7).await;

    let repo = SqlitePlanetRepository::new(Arc::new(pool.clone()));

    let deleted = repo.delete(mars).await.unwrap();
    assert!(deleted);

    // Only the deleted planet's missions go with it.
    assert_eq!(common::count_missions(&pool).await, 1);
    assert_eq!(common::count_scientists(&pool).await, 1);

    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM missions WHERE planet_id = ?")
            .bind(mars)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(remaining, 0);
}

#[sqlx::test]
async fn test_delete_missing_planet_returns_false(pool: SqlitePool) {
    let repo = SqlitePlanetRepository::new(Arc::new(pool));

    let deleted = repo.delete(42).await.unwrap();
    assert!(!deleted);
}
