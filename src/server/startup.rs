use bson::doc;
use docstore::MongoStore;
use mongodb::Client;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::Error};

/// Install the global `tracing` subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Calling this more than once is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load `.env` if present, then read the configuration from the environment
pub fn load_config() -> Result<Config, Error> {
    dotenvy::dotenv().ok();

    Ok(Config::from_env()?)
}

/// Connect to MongoDB and verify the database answers a ping
pub async fn connect_to_database(config: &Config) -> Result<MongoStore, Error> {
    let client = Client::with_uri_str(&config.mongodb_url).await?;
    let db = client.database(&config.mongodb_database);

    db.run_command(doc! { "ping": 1 }).await?;

    tracing::info!(
        database = %config.mongodb_database,
        "Connected to MongoDB"
    );

    Ok(MongoStore::new(db))
}
