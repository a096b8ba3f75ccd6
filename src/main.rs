use std::path::PathBuf;
use tablecrud::config::{self, Config};
use tablecrud::core::db::{Database, Record};
use tablecrud::core::Result;
use tracing::info;

const PLAYERS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS players (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        photo TEXT,
        nationality TEXT,
        position TEXT,
        club TEXT
    );
";

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let level = match config.log_level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tablecrud demo...");

    if let Err(e) = run(&config) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Uses the config file named on the command line, else the per-user one
/// if it exists, else built-in defaults.
fn load_config() -> Result<Config> {
    let args: Vec<String> = std::env::args().collect();
    if let Some(path) = args.get(1) {
        return config::load_config(PathBuf::from(path));
    }
    match config::default_config_path() {
        Some(path) if path.exists() => config::load_config(path),
        _ => Ok(Config::default()),
    }
}

fn run(config: &Config) -> Result<()> {
    let db = Database::connect(&config.database)?;
    db.connection().execute_batch(PLAYERS_TABLE)?;

    let players = db.table("players");

    // Create
    let new_player = Record::new()
        .with("name", "ilyass marghine")
        .with("photo", "phtoo.cdn")
        .with("nationality", "gk")
        .with("position", "gk")
        .with("club", "Team A");
    if players.create(&new_player)? {
        println!("Player created successfully.");
    } else {
        println!("Failed to create player.");
    }

    // Read
    println!("Players:");
    for player in players.read_all()? {
        println!("{}", serde_json::to_string(&player)?);
    }

    // Update
    let update_data = Record::new().with("name", "imran").with("photo", "imra.jpg");
    if players.update(&update_data, &Record::from([("id", 1)]))? {
        println!("Player updated successfully.");
    } else {
        println!("Failed to update player.");
    }

    // Delete
    if players.delete(&Record::from([("id", 8)]))? {
        println!("Player deleted successfully.");
    } else {
        println!("Failed to delete player.");
    }

    Ok(())
}
