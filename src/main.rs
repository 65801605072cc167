//! Society Hub server
//!
//! Reads its YAML configuration from the path in `SOCIETY_CONFIG`, or runs
//! with defaults (in-memory storage on 127.0.0.1:5000).

use anyhow::Result;
use society::config::{AppConfig, StorageBackend};
use society::dashboard;
use society::server::ServerBuilder;
use society::storage::{InMemoryBillService, InMemoryNotificationService};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "SOCIETY_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("society=info,tower_http=info")),
        )
        .init();

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            tracing::info!(%path, "loading configuration");
            AppConfig::from_yaml_file(&path)?
        }
        Err(_) => AppConfig::default(),
    };

    let addr = config.server.bind.clone();
    let builder = with_storage(ServerBuilder::new(), &config).await?;

    builder
        .with_config(config)
        .with_custom_routes(dashboard::routes())
        .serve(&addr)
        .await
}

async fn with_storage(builder: ServerBuilder, config: &AppConfig) -> Result<ServerBuilder> {
    match config.storage.backend {
        StorageBackend::InMemory => {
            tracing::info!("using in-memory storage");
            Ok(builder
                .with_notification_service(InMemoryNotificationService::new())
                .with_bill_service(InMemoryBillService::new()))
        }
        #[cfg(feature = "mongodb_backend")]
        StorageBackend::Mongodb => {
            use society::core::error::StorageError;
            use society::storage::{MongoBillService, MongoNotificationService};

            let mongo = &config.storage.mongodb;
            let client = mongodb::Client::with_uri_str(&mongo.uri)
                .await
                .map_err(|e| StorageError::ConnectionError {
                    backend: "mongodb".to_string(),
                    message: e.to_string(),
                })?;
            let database = client.database(&mongo.database);
            tracing::info!(database = %mongo.database, "using MongoDB storage");

            let notifications = MongoNotificationService::new(database.clone());
            notifications.ensure_indexes().await?;
            let bills = MongoBillService::new(database);
            bills.ensure_indexes().await?;

            Ok(builder
                .with_notification_service(notifications)
                .with_bill_service(bills))
        }
        #[cfg(not(feature = "mongodb_backend"))]
        StorageBackend::Mongodb => Err(anyhow::anyhow!(
            "storage.backend is mongodb but the server was built without the mongodb_backend feature"
        )),
    }
}
