mod shared;
mod shop;
mod timer;

use shop::{IShopRepo, InMemoryShopRepo, PostgresShopRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use timer::{ITimerRepo, InMemoryTimerRepo, PostgresTimerRepo};
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub timers: Arc<dyn ITimerRepo>,
    pub shops: Arc<dyn IShopRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            timers: Arc::new(PostgresTimerRepo::new(pool.clone())),
            shops: Arc::new(PostgresShopRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            timers: Arc::new(InMemoryTimerRepo::new()),
            shops: Arc::new(InMemoryShopRepo::new()),
        }
    }
}
