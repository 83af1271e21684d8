use crate::di::DependenciesInject;
use shared::{
    abstract_trait::card::service::{DynCardCommandService, DynCardQueryService},
    domain::{
        requests::{CreateCardRequest, UpdateCardStatusRequest},
        responses::CardResponse,
    },
    errors::ServiceError,
};
use tracing::instrument;

/// Entry point the hosting request layer calls into. Bundles the query and
/// command services behind one handle.
#[derive(Clone)]
pub struct CardServiceImpl {
    pub query: DynCardQueryService,
    pub command: DynCardCommandService,
}

impl CardServiceImpl {
    pub fn new(query: DynCardQueryService, command: DynCardCommandService) -> Self {
        Self { query, command }
    }

    pub fn from_container(container: &DependenciesInject) -> Self {
        Self::new(
            container.card_query.service.clone(),
            container.card_command.service.clone(),
        )
    }

    #[instrument(skip_all, fields(customer_id = %req.customer_id))]
    pub async fn create_card(
        &self,
        req: &CreateCardRequest,
    ) -> Result<CardResponse, ServiceError> {
        self.command.create_card(req).await
    }

    #[instrument(skip_all)]
    pub async fn update_card_status(
        &self,
        card_number: &str,
        req: &UpdateCardStatusRequest,
    ) -> Result<(), ServiceError> {
        self.command.update_card_status(card_number, req).await
    }

    #[instrument(skip_all)]
    pub async fn find_by_card_number(
        &self,
        card_number: &str,
    ) -> Result<CardResponse, ServiceError> {
        self.query.find_by_card_number(card_number).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_customer_id(
        &self,
        customer_id: &str,
    ) -> Result<Vec<CardResponse>, ServiceError> {
        self.query.find_by_customer_id(customer_id).await
    }
}
