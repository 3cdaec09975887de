use std::sync::Arc;

use crate::auth::{jwt::JwtKeys, repo::UserRepo};
use crate::config::AppConfig;
use crate::db::PgStore;
use crate::posts::repo::PostRepo;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub jwt: JwtKeys,
    pub users: Arc<dyn UserRepo>,
    pub posts: Arc<dyn PostRepo>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let store = PgStore::connect(&config).await?;
        store.ensure_schema().await?;
        Ok(Self::from_parts(
            config,
            Arc::new(store.clone()),
            Arc::new(store),
        ))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        users: Arc<dyn UserRepo>,
        posts: Arc<dyn PostRepo>,
    ) -> Self {
        let jwt = JwtKeys::new(&config.jwt);
        Self {
            config,
            jwt,
            users,
            posts,
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        crate::testing::fake_state().0
    }
}
