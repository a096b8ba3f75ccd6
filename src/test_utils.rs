/// # Test Utilities Module
///
/// Isolated in-memory database fixtures shared by the unit tests.

use crate::core::db::{Crud, Database, Record};

/// Schema of the illustrative `players` table
pub const PLAYERS_SCHEMA: &str = "
    CREATE TABLE players (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        photo TEXT,
        nationality TEXT,
        position TEXT,
        club TEXT
    );
";

/// Isolated database test fixture holding a `players` table
pub struct PlayersFixture {
    pub db: Database,
}

impl PlayersFixture {
    /// Create a fresh in-memory database with an empty `players` table
    pub fn new() -> Self {
        let db = Database::open_in_memory().expect("Failed to open in-memory database");
        db.connection()
            .execute_batch(PLAYERS_SCHEMA)
            .expect("Failed to create players table");
        PlayersFixture { db }
    }

    /// Create fixture with three players; Bob has no photo
    pub fn with_sample_players() -> Self {
        let fixture = Self::new();
        let players = fixture.players();
        for player in sample_players() {
            assert!(players.create(&player).expect("Failed to insert sample player"));
        }
        fixture
    }

    pub fn players(&self) -> Crud<'_> {
        self.db.table("players")
    }
}

pub fn sample_players() -> Vec<Record> {
    vec![
        Record::new()
            .with("id", 1)
            .with("name", "Alice")
            .with("photo", "alice.jpg")
            .with("nationality", "ma")
            .with("position", "gk")
            .with("club", "Team A"),
        Record::new()
            .with("id", 2)
            .with("name", "Bob")
            .with("photo", None::<String>)
            .with("nationality", "fr")
            .with("position", "cb")
            .with("club", "Team A"),
        Record::new()
            .with("id", 3)
            .with("name", "Carla")
            .with("photo", "carla.jpg")
            .with("nationality", "es")
            .with("position", "st")
            .with("club", "Team B"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_fixture_is_populated() {
        let fixture = PlayersFixture::with_sample_players();
        let mut rows = fixture.players().read_all().unwrap();
        rows.sort_by_key(|r| r.get("id").map(|v| v.to_string()));

        let expected = sample_players();
        assert_eq!(rows, expected);
    }
}
