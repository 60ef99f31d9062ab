use sqlx::sqlite::SqlitePool;

use crate::models::PlayerRow;

/// Create the championship table if it does not exist. A pre-existing
/// table (rows inserted out-of-band) is left as-is.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS club_championship (
               name   TEXT    NOT NULL UNIQUE,
               rating INTEGER NOT NULL,
               points INTEGER NOT NULL DEFAULT 0
           )"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_all_players(pool: &SqlitePool) -> Result<Vec<PlayerRow>, sqlx::Error> {
    sqlx::query_as::<_, PlayerRow>(
        r#"SELECT name, rating, points FROM club_championship"#
    )
    .fetch_all(pool)
    .await
}

// Exact-match lookup, case-sensitive
pub async fn find_player_by_name(pool: &SqlitePool, name: &str) -> Result<Option<PlayerRow>, sqlx::Error> {
    sqlx::query_as::<_, PlayerRow>(
        r#"SELECT name, rating, points FROM club_championship WHERE name = ?"#
    )
    .bind(name)
    .fetch_optional(pool)
    .await
}

pub async fn insert_player(pool: &SqlitePool, name: &str, rating: i64) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO club_championship (name, rating) VALUES (?, ?)"#
    )
    .bind(name)
    .bind(rating)
    .execute(pool)
    .await?;

    Ok(())
}
