use assert_matches::assert_matches;
use marquee_core::error::CoreError;
use marquee_core::seed::SeedDataset;
use marquee_db::repositories::{ActorRepo, MovieRepo};
use marquee_db::seed::{reset_and_seed, SeedSummary};
use marquee_db::DbError;
use sqlx::SqlitePool;

async fn count(pool: &SqlitePool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

#[sqlx::test(migrations = "./migrations")]
async fn test_development_summary(pool: SqlitePool) {
    let summary = reset_and_seed(&pool, &SeedDataset::development())
        .await
        .unwrap();
    assert_eq!(
        summary,
        SeedSummary {
            directors: 1,
            actors: 5,
            movies: 1,
            attachments: 5,
            memberships: 1,
        }
    );
    assert_eq!(count(&pool, "movie_actors").await, 5);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reseed_replaces_catalog_and_restarts_ids(pool: SqlitePool) {
    reset_and_seed(&pool, &SeedDataset::filmography()).await.unwrap();
    assert_eq!(count(&pool, "movies").await, 5);

    reset_and_seed(&pool, &SeedDataset::development()).await.unwrap();
    assert_eq!(count(&pool, "movies").await, 1);
    assert_eq!(count(&pool, "actors").await, 5);
    assert_eq!(count(&pool, "guild_memberships").await, 1);

    let movies = MovieRepo::list(&pool).await.unwrap();
    assert_eq!(movies[0].id, 1);
    let actors = ActorRepo::list(&pool).await.unwrap();
    assert_eq!(actors.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_invalid_dataset_leaves_catalog_untouched(pool: SqlitePool) {
    reset_and_seed(&pool, &SeedDataset::development()).await.unwrap();

    let mut broken = SeedDataset::filmography();
    broken.movies[2].actors.push("Nobody Atall");
    let result = reset_and_seed(&pool, &broken).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));

    assert_eq!(count(&pool, "movies").await, 1);
    assert_eq!(count(&pool, "actors").await, 5);
}
