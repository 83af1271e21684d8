use crate::{domain::responses::CardResponse, errors::ServiceError};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardQueryService = Arc<dyn CardQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardQueryServiceTrait {
    async fn find_by_card_number(&self, card_number: &str) -> Result<CardResponse, ServiceError>;
    async fn find_by_customer_id(
        &self,
        customer_id: &str,
    ) -> Result<Vec<CardResponse>, ServiceError>;
}
