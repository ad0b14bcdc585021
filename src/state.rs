use crate::config::AppConfig;
use crate::store::{NutritionStore, PgStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn NutritionStore>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = sqlx::postgres::PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await?;

        let store = Arc::new(PgStore::new(db.clone())) as Arc<dyn NutritionStore>;

        Ok(Self { db, config, store })
    }
}
