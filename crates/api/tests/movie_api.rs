//! HTTP-level integration tests for the catalog endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use common::{body_bytes, body_json, get};
use marquee_core::seed::SeedDataset;
use marquee_db::models::movie::CreateMovie;
use marquee_db::models::record::MovieRecord;
use marquee_db::repositories::MovieRepo;
use marquee_db::seed::reset_and_seed;
use sqlx::SqlitePool;

async fn seed(pool: &SqlitePool, dataset: SeedDataset) {
    reset_and_seed(pool, &dataset).await.unwrap();
}

// ---------------------------------------------------------------------------
// Collection and single-item records
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_movies_returns_records(pool: SqlitePool) {
    seed(&pool, SeedDataset::development()).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/movies").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let movies = json.as_array().unwrap();
    assert_eq!(movies.len(), 1);

    let movie = &movies[0];
    assert_eq!(movie["title"], "Evil Dead");
    assert_eq!(movie["director"], "Raimi");
    assert!(movie["director_id"].is_i64());
    assert_eq!(movie["release_date"], "1981-10-15T00:00:00Z");
    let actors = movie["actors"].as_array().unwrap();
    assert_eq!(actors.len(), 5);
    assert!(actors.iter().any(|a| a["name"] == "Campbell" && a["id"].is_i64()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_movies_empty_catalog(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movies").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_movie_record_round_trips(pool: SqlitePool) {
    seed(&pool, SeedDataset::filmography()).await;

    let app = common::build_test_app(pool.clone());
    let listed = body_json(get(app, "/api/v1/movies").await).await;
    let id = listed[1]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let record: MovieRecord = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.title, "Crimewave");
    assert_eq!(record.director_id, listed[1]["director_id"].as_i64().unwrap());
    let ids: HashSet<i64> = record.actors.iter().map(|a| a.id).collect();
    let expected: HashSet<i64> = listed[1]["actors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, expected);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_movie_returns_empty_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movies/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_numeric_id_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movies/evil-dead").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_movie_without_director_is_500(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let movie = MovieRepo::create(
        &mut conn,
        &CreateMovie {
            title: "Untitled".to_string(),
            release_date: None,
            director_id: None,
        },
    )
    .await
    .unwrap();
    drop(conn);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/movies/{}", movie.id)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INCOMPLETE_ENTITY");
}

// ---------------------------------------------------------------------------
// Render-ready featured movie
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_featured_movie_is_render_ready(pool: SqlitePool) {
    seed(&pool, SeedDataset::development()).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/movies/featured").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Evil Dead");
    assert_eq!(json["release_year"], "1981");
    assert_eq!(json["director"]["first_name"], "Sam");
    assert_eq!(json["director"]["last_name"], "Raimi");
    assert_eq!(json["actors"].as_array().unwrap().len(), 5);
    assert!(json["actors"]
        .as_array()
        .unwrap()
        .iter()
        .any(|a| a["first_name"] == "Bruce" && a["last_name"] == "Campbell"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_featured_movie_on_empty_catalog_is_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movies/featured").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_director_movies(pool: SqlitePool) {
    seed(&pool, SeedDataset::filmography()).await;

    let app = common::build_test_app(pool.clone());
    let listed = body_json(get(app, "/api/v1/movies").await).await;
    let director_id = listed[0]["director_id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/directors/{director_id}/movies")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let titles: HashSet<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        HashSet::from([
            "Evil Dead",
            "Crimewave",
            "Evil Dead II",
            "Army of Darkness",
            "Spider-Man 2",
        ])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_actor_movies_and_guild(pool: SqlitePool) {
    seed(&pool, SeedDataset::filmography()).await;

    let app = common::build_test_app(pool.clone());
    let listed = body_json(get(app, "/api/v1/movies").await).await;
    let campbell_id = listed[0]["actors"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["name"] == "Campbell")
        .and_then(|a| a["id"].as_i64())
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/actors/{campbell_id}/movies")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 5);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/actors/{campbell_id}/guild")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["guild"], "Campbell SAG");
    assert_eq!(json["owner"], serde_json::json!({"kind": "actor", "id": campbell_id}));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_director_guild(pool: SqlitePool) {
    seed(&pool, SeedDataset::development()).await;

    let app = common::build_test_app(pool.clone());
    let listed = body_json(get(app, "/api/v1/movies").await).await;
    let director_id = listed[0]["director_id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/directors/{director_id}/guild")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["guild"], "Raimi DGA");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_people_return_404(pool: SqlitePool) {
    for uri in [
        "/api/v1/directors/4040/movies",
        "/api/v1/directors/4040/guild",
        "/api/v1/actors/4040/movies",
        "/api/v1/actors/4040/guild",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}
