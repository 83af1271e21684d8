use crate::{
    abstract_trait::card::{
        repository::{DynCardCommandRepository, DynCardQueryRepository},
        service::CardCommandServiceTrait,
    },
    domain::{
        requests::{CreateCardRequest, UpdateCardStatusRequest},
        responses::CardResponse,
    },
    errors::{RepositoryError, ServiceError, VerificationField, format_validation_errors},
    model::card::{CardModel, CardStatus, CardType},
    utils::{current_timestamp, mask_card_number},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};
use validator::Validate;

pub struct CardCommandService {
    query: DynCardQueryRepository,
    command: DynCardCommandRepository,
}

impl CardCommandService {
    pub async fn new(query: DynCardQueryRepository, command: DynCardCommandRepository) -> Self {
        Self { query, command }
    }

    async fn find_existing(&self, card_number: &str) -> Result<Option<CardModel>, ServiceError> {
        self.query.find_by_card_number(card_number).await.map_err(|e| {
            error!(
                "💥 Failed to look up card {}: {e:?}",
                mask_card_number(card_number)
            );
            ServiceError::Repo(e)
        })
    }
}

fn validate<T: Validate>(req: &T) -> Result<(), ServiceError> {
    req.validate().map_err(|validation_errors| {
        let errors = format_validation_errors(&validation_errors);
        warn!("📝 Validation failed: {errors:?}");
        ServiceError::Validation(errors)
    })
}

#[async_trait]
impl CardCommandServiceTrait for CardCommandService {
    async fn create_card(&self, req: &CreateCardRequest) -> Result<CardResponse, ServiceError> {
        validate(req)?;

        let card_type = CardType::from_code(&req.card_type).ok_or_else(|| {
            warn!("📝 Unknown card type code {}", req.card_type);
            ServiceError::Validation(vec![format!(
                "card_type: unknown card type code {}",
                req.card_type
            )])
        })?;

        let masked = mask_card_number(&req.card_number);

        info!("🆕 Creating card {masked} for customer_id={}", req.customer_id);

        if self.find_existing(&req.card_number).await?.is_some() {
            warn!("📦 Card {masked} already exists");
            return Err(ServiceError::DuplicateCard(req.card_number.clone()));
        }

        let now = current_timestamp();
        let card = CardModel {
            id: None,
            card_id: req.card_id.clone(),
            card_number: req.card_number.clone(),
            cvv: req.cvv.clone(),
            card_type,
            card_status: CardStatus::default(),
            exp_month: req.exp_month.clone(),
            exp_year: req.exp_year.clone(),
            card_name: req.card_name.clone(),
            card_company: req.card_company.clone(),
            customer_id: req.customer_id.clone(),
            created_date: now,
            modified_date: now,
        };

        let saved = self.command.save(&card).await.map_err(|e| match e {
            RepositoryError::AlreadyExists(_) => {
                warn!("📦 Card {masked} was created concurrently");
                ServiceError::DuplicateCard(req.card_number.clone())
            }
            other => {
                error!("💥 Failed to save card {masked}: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        info!("✅ Card {masked} created with id={:?}", saved.id);

        Ok(CardResponse::from(saved))
    }

    async fn update_card_status(
        &self,
        card_number: &str,
        req: &UpdateCardStatusRequest,
    ) -> Result<(), ServiceError> {
        validate(req)?;

        let card_status = req.card_status.parse::<CardStatus>().map_err(|e| {
            warn!("📝 {e}");
            ServiceError::Validation(vec![format!("card_status: {e}")])
        })?;

        let masked = mask_card_number(card_number);

        info!("🔄 Updating card {masked} status to {card_status}");

        let mut card = self.find_existing(card_number).await?.ok_or_else(|| {
            warn!("🔍 Card {masked} not found");
            ServiceError::CardNotFound(card_number.to_string())
        })?;

        if card.cvv != req.cvv {
            warn!("🔐 CVV mismatch for card {masked}");
            return Err(ServiceError::VerificationFailed(VerificationField::Cvv));
        }

        if card.customer_id != req.customer_id {
            warn!("🔐 Customer mismatch for card {masked}");
            return Err(ServiceError::VerificationFailed(VerificationField::Customer));
        }

        card.card_status = card_status;
        card.modified_date = current_timestamp();

        self.command.save(&card).await.map_err(|e| {
            error!("💥 Failed to save status of card {masked}: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Card {masked} is now {card_status}");

        Ok(())
    }
}
