use shared::{
    abstract_trait::card::{
        repository::{DynCardCommandRepository, DynCardQueryRepository},
        service::{DynCardCommandService, DynCardQueryService},
    },
    config::ConnectionPool,
    repository::card::{CardCommandRepository, CardQueryRepository},
    service::card::{CardCommandService, CardQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct CardQueryDeps {
    pub query: DynCardQueryRepository,
    pub service: DynCardQueryService,
}

impl CardQueryDeps {
    pub async fn new(query: DynCardQueryRepository) -> Self {
        let service = Arc::new(CardQueryService::new(query.clone()).await) as DynCardQueryService;
        Self { query, service }
    }
}

#[derive(Clone)]
pub struct CardCommandDeps {
    pub command: DynCardCommandRepository,
    pub service: DynCardCommandService,
}

impl CardCommandDeps {
    pub async fn new(query: DynCardQueryRepository, command: DynCardCommandRepository) -> Self {
        let service = Arc::new(CardCommandService::new(query, command.clone()).await)
            as DynCardCommandService;
        Self { command, service }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub card_query: CardQueryDeps,
    pub card_command: CardCommandDeps,
}

impl DependenciesInject {
    pub async fn new(db: ConnectionPool) -> Self {
        let query = Arc::new(CardQueryRepository::new(db.clone())) as DynCardQueryRepository;
        let command = Arc::new(CardCommandRepository::new(db)) as DynCardCommandRepository;

        Self::from_repositories(query, command).await
    }

    /// Wires the services over any store implementation.
    pub async fn from_repositories(
        query: DynCardQueryRepository,
        command: DynCardCommandRepository,
    ) -> Self {
        let card_query = CardQueryDeps::new(query.clone()).await;
        let card_command = CardCommandDeps::new(query, command).await;

        Self {
            card_query,
            card_command,
        }
    }
}
