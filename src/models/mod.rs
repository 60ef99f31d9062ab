use serde::{Deserialize, Serialize};

/// Row from the club_championship table
#[derive(Debug, sqlx::FromRow)]
pub struct PlayerRow {
    pub name: String,
    pub rating: i64,
    pub points: i64,
}

impl PlayerRow {
    pub fn to_player(&self) -> Player {
        Player {
            name: self.name.clone(),
            rating: self.rating,
            points: self.points,
        }
    }
}

/// Player as returned by the API
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub rating: i64,
    pub points: i64,
}

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub rating: i64,
}
