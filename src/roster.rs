use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::ApiError;
use crate::models::Player;

pub const MIN_RATING: i64 = 0;
pub const MAX_RATING: i64 = 3000;

/// Validate a registration, reject duplicates, insert into the store.
pub async fn register_player(
    pool: &SqlitePool,
    name: &str,
    rating: i64,
) -> Result<Player, ApiError> {
    if name.is_empty() || !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ApiError::InvalidPlayer);
    }

    // Exact-match duplicate check before inserting
    if db::find_player_by_name(pool, name).await?.is_some() {
        return Err(ApiError::DuplicatePlayer);
    }

    match db::insert_player(pool, name, rating).await {
        Ok(()) => Ok(Player {
            name: name.to_string(),
            rating,
            points: 0,
        }),
        // Two registrations can race past the check above; the UNIQUE
        // constraint on name catches the loser
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(ApiError::DuplicatePlayer)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn list_players(pool: &SqlitePool) -> Result<Vec<Player>, ApiError> {
    let rows = db::get_all_players(pool).await?;
    Ok(rows.iter().map(|row| row.to_player()).collect())
}
