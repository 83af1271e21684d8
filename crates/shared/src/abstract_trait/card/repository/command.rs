use crate::{errors::RepositoryError, model::card::CardModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardCommandRepository = Arc<dyn CardCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CardCommandRepositoryTrait {
    /// Inserts the card when it has no id yet. Otherwise writes its
    /// `card_status` and `modified_date` onto the stored record with that id,
    /// failing with `RepositoryError::NotFound` if there is none. Returns the
    /// persisted representation.
    async fn save(&self, card: &CardModel) -> Result<CardModel, RepositoryError>;
}
