use crate::{di::DependenciesInject, service::CardServiceImpl};
use anyhow::Result;
use shared::config::ConnectionPool;

#[derive(Clone)]
pub struct AppState {
    pub db: ConnectionPool,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(db: ConnectionPool) -> Result<Self> {
        let di_container = DependenciesInject::new(db.clone()).await;

        Ok(Self { db, di_container })
    }

    pub fn card_service(&self) -> CardServiceImpl {
        CardServiceImpl::from_container(&self.di_container)
    }
}
