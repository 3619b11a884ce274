use marquee_db::catalog::{Catalog, CatalogHealth};
use sqlx::SqlitePool;

/// Full bootstrap test: migrate, health check, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: SqlitePool) {
    marquee_db::health_check(&pool).await.unwrap();

    let tables = [
        "directors",
        "actors",
        "movies",
        "movie_actors",
        "guild_memberships",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Foreign keys must be enforced on pooled connections.
#[sqlx::test(migrations = "./migrations")]
async fn test_foreign_keys_enabled(pool: SqlitePool) {
    let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(enabled, 1);
}

/// Reverting the migrations drops every catalog table; reapplying restores them.
#[sqlx::test(migrations = false)]
async fn test_drop_and_recreate_schema(pool: SqlitePool) {
    marquee_db::run_migrations(&pool).await.unwrap();
    marquee_db::drop_schema(&pool).await.unwrap();

    let (remaining,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN \
         ('directors', 'actors', 'movies', 'movie_actors', 'guild_memberships')",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(remaining, 0);

    marquee_db::run_migrations(&pool).await.unwrap();
    marquee_db::health_check(&pool).await.unwrap();
    sqlx::query("SELECT COUNT(*) FROM movies")
        .execute(&pool)
        .await
        .unwrap();
}

/// The catalog reports an unmigrated database as reachable but not ready.
#[sqlx::test(migrations = false)]
async fn test_catalog_health_tracks_schema(pool: SqlitePool) {
    let catalog = Catalog::new(pool.clone());

    let health = catalog.health().await;
    assert!(health.reachable);
    assert!(!health.schema_applied);
    assert!(!health.is_ready());

    marquee_db::run_migrations(&pool).await.unwrap();
    let health = catalog.health().await;
    assert_eq!(
        health,
        CatalogHealth {
            reachable: true,
            schema_applied: true,
        }
    );
    assert!(health.is_ready());

    sqlx::query("DROP TABLE guild_memberships")
        .execute(&pool)
        .await
        .unwrap();
    assert!(!catalog.health().await.schema_applied);
}
