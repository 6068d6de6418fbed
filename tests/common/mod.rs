#![allow(dead_code)]

use chrono::NaiveDate;
use interplanetary_booking::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub async fn insert_planet(pool: &SqlitePool, name: &str, description: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO planets (name, description) VALUES (?, ?) RETURNING id",
    )
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_scientist(pool: &SqlitePool, name: &str, field_of_study: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO scientists (name, field_of_study) VALUES (?, ?) RETURNING id",
    )
    .bind(name)
    .bind(field_of_study)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_mission(
    pool: &SqlitePool,
    planet_id: i64,
    scientist_id: i64,
    mission_date: NaiveDate,
    duration_days: i64,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO missions (planet_id, scientist_id, mission_date, duration_days)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(planet_id)
    .bind(scientist_id)
    .bind(mission_date)
    .bind(duration_days)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_planets(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM planets")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_scientists(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM scientists")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_missions(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM missions")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn future_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2999, 1, 15).unwrap()
}

pub fn past_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 15).unwrap()
}
