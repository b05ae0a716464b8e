use tracing::{error, info};

use hunmin_board::{BoardRepository, Config, Database};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = hunmin_board::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        hunmin_board::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("{e}");
        std::process::exit(1);
    }

    info!("hunmin-board - board data access");

    let db = match Database::open(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to open database: {e}");
            std::process::exit(1);
        }
    };

    match BoardRepository::new(db.pool()).count().await {
        Ok(count) => info!(
            "Database {} ready (schema v{}, {} boards)",
            config.database.path,
            db.schema_version().await.unwrap_or(0),
            count
        ),
        Err(e) => error!("Failed to read board count: {e}"),
    }

    db.close().await;
}
