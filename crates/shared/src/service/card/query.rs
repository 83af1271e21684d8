use crate::{
    abstract_trait::card::{repository::DynCardQueryRepository, service::CardQueryServiceTrait},
    domain::responses::CardResponse,
    errors::ServiceError,
    utils::mask_card_number,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct CardQueryService {
    query: DynCardQueryRepository,
}

impl CardQueryService {
    pub async fn new(query: DynCardQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CardQueryServiceTrait for CardQueryService {
    async fn find_by_card_number(&self, card_number: &str) -> Result<CardResponse, ServiceError> {
        let masked = mask_card_number(card_number);

        info!("🔍 Fetching card {masked}");

        let card = self
            .query
            .find_by_card_number(card_number)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch card {masked}: {e:?}");
                ServiceError::Repo(e)
            })?
            .ok_or_else(|| {
                warn!("🔍 Card {masked} not found");
                ServiceError::CardNotFound(card_number.to_string())
            })?;

        Ok(CardResponse::from(card))
    }

    async fn find_by_customer_id(
        &self,
        customer_id: &str,
    ) -> Result<Vec<CardResponse>, ServiceError> {
        info!("🔍 Fetching cards for customer_id={customer_id}");

        let cards = self
            .query
            .find_by_customer_id(customer_id)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch cards for customer_id {customer_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        info!("✅ Found {} cards for customer_id={customer_id}", cards.len());

        Ok(cards.into_iter().map(CardResponse::from).collect())
    }
}
