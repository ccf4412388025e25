use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use exedra_core_health_contracts::{HealthFeatureService, HealthStatus};
use exedra_persistence_contracts::Database;
use exedra_shared_contracts::time::TimeService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Time, Db> {
    time: Time,
    db: Db,
    config: HealthFeatureConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, Db> HealthFeatureServiceImpl<Time, Db> {
    pub fn new(time: Time, db: Db, config: HealthFeatureConfig) -> Self {
        Self {
            time,
            db,
            config,
            state: Default::default(),
        }
    }
}

impl<Time, Db> HealthFeatureService for HealthFeatureServiceImpl<Time, Db>
where
    Time: TimeService,
    Db: Database,
{
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }

        let database = self
            .db
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping database: {err}"))
            .is_ok();

        let status = HealthStatus { database };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: now,
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, TimeDelta};
    use exedra_persistence_contracts::MockDatabase;
    use exedra_shared_contracts::time::MockTimeService;

    use super::*;

    type Sut = HealthFeatureServiceImpl<MockTimeService, MockDatabase>;

    fn config() -> HealthFeatureConfig {
        HealthFeatureConfig {
            cache_ttl: Duration::from_secs(10),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let time = MockTimeService::new().with_now(now());

        let mut db = MockDatabase::new();
        db.expect_ping()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(()))));

        let sut: Sut = HealthFeatureServiceImpl::new(time, db, config());

        // Act
        let status = sut.get_status().await;

        // Assert
        assert_eq!(status, HealthStatus { database: true });
    }

    #[tokio::test]
    async fn database_unreachable() {
        // Arrange
        let time = MockTimeService::new().with_now(now());

        let mut db = MockDatabase::new();
        db.expect_ping().once().return_once(|| {
            Box::pin(std::future::ready(Err(anyhow::anyhow!(
                "connection refused"
            ))))
        });

        let sut: Sut = HealthFeatureServiceImpl::new(time, db, config());

        // Act
        let status = sut.get_status().await;

        // Assert
        assert_eq!(status, HealthStatus { database: false });
    }

    #[tokio::test]
    async fn cached() {
        // Arrange
        let mut time = MockTimeService::new();
        time.expect_now().times(2).return_const(now());

        let mut db = MockDatabase::new();
        db.expect_ping()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(()))));

        let sut: Sut = HealthFeatureServiceImpl::new(time, db, config());

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn cache_expired() {
        // Arrange
        let mut time = MockTimeService::new();
        let mut times = [now(), now() + TimeDelta::seconds(11)].into_iter();
        time.expect_now().times(2).returning(move || {
            times.next().unwrap()
        });

        let mut db = MockDatabase::new();
        db.expect_ping()
            .times(2)
            .returning(|| Box::pin(std::future::ready(Ok(()))));

        let sut: Sut = HealthFeatureServiceImpl::new(time, db, config());

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, second);
    }
}
