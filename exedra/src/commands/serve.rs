use exedra_api_rest::RestServer;
use exedra_config::Config;
use exedra_core_contact_impl::ContactFeatureServiceImpl;
use exedra_core_health_impl::{HealthFeatureConfig, HealthFeatureServiceImpl};
use exedra_persistence_contracts::Database;
use exedra_persistence_postgres::contact::PostgresContactRepository;
use exedra_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use tracing::info;

use crate::database;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to database");
    let database = database::connect(&config.database).await?;
    database.ping().await?;

    info!("Applying pending migrations");
    let mut applied = false;
    for name in database.run_migrations(None).await? {
        info!("Applied {name}");
        applied = true;
    }
    if !applied {
        info!("No migrations pending");
    }

    let health = HealthFeatureServiceImpl::new(
        TimeServiceImpl,
        database.clone(),
        HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    );
    let contact = ContactFeatureServiceImpl {
        db: database,
        id: IdServiceImpl,
        time: TimeServiceImpl,
        contact_repo: PostgresContactRepository,
    };

    let server = RestServer { health, contact };
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
