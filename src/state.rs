use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AuthService, FactService, InMemoryAuthService, InMemoryFactService, TokenSigner,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub auth_service: Arc<dyn AuthService>,

    pub fact_service: Arc<dyn FactService>,
}

impl SharedState {
    /// State backed by the seeded demo store.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Self::with_store(config, Store::seeded())
    }

    pub fn with_store(config: Config, store: Store) -> anyhow::Result<Self> {
        let signer = TokenSigner::from_config(&config.auth)?;

        let auth_service = Arc::new(InMemoryAuthService::new(store.clone(), signer))
            as Arc<dyn AuthService>;

        let fact_service = Arc::new(InMemoryFactService::new(store.clone()))
            as Arc<dyn FactService>;

        Ok(Self {
            config: Arc::new(config),
            store,
            auth_service,
            fact_service,
        })
    }
}
