use crate::{
    domain::{
        requests::{CreateCardRequest, UpdateCardStatusRequest},
        responses::CardResponse,
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardCommandService = Arc<dyn CardCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardCommandServiceTrait {
    async fn create_card(&self, req: &CreateCardRequest) -> Result<CardResponse, ServiceError>;
    async fn update_card_status(
        &self,
        card_number: &str,
        req: &UpdateCardStatusRequest,
    ) -> Result<(), ServiceError>;
}
