use crate::{
    abstract_trait::card::repository::{CardCommandRepositoryTrait, CardQueryRepositoryTrait},
    errors::RepositoryError,
    model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::RwLock;

#[derive(Default)]
struct State {
    cards: Vec<CardModel>,
    last_id: i64,
    saved: Vec<CardModel>,
}

/// Card store kept in process memory, with the same `save` contract as the
/// PostgreSQL repository.
///
/// Implements both repository seams over one shared state, so cloning it into
/// the query and command slots gives services a single consistent store. Every
/// trait call is counted and each argument passed to `save` is recorded, which
/// lets tests assert how a service used the store.
#[derive(Default, Clone)]
pub struct InMemoryCardRepository {
    state: Arc<RwLock<State>>,
    find_by_card_number_calls: Arc<AtomicUsize>,
    find_by_customer_id_calls: Arc<AtomicUsize>,
    save_calls: Arc<AtomicUsize>,
}

impl InMemoryCardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a card without touching the call counters. Cards without an id
    /// get the next free one.
    pub async fn seed(&self, mut card: CardModel) -> CardModel {
        let mut state = self.state.write().await;
        match card.id {
            Some(id) => state.last_id = state.last_id.max(id),
            None => {
                state.last_id += 1;
                card.id = Some(state.last_id);
            }
        }
        state.cards.push(card.clone());
        card
    }

    pub async fn cards(&self) -> Vec<CardModel> {
        self.state.read().await.cards.clone()
    }

    /// Arguments of every `save` call, in call order.
    pub async fn saved(&self) -> Vec<CardModel> {
        self.state.read().await.saved.clone()
    }

    pub fn find_by_card_number_calls(&self) -> usize {
        self.find_by_card_number_calls.load(Ordering::SeqCst)
    }

    pub fn find_by_customer_id_calls(&self) -> usize {
        self.find_by_customer_id_calls.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CardQueryRepositoryTrait for InMemoryCardRepository {
    async fn find_by_card_number(
        &self,
        card_number: &str,
    ) -> Result<Option<CardModel>, RepositoryError> {
        self.find_by_card_number_calls.fetch_add(1, Ordering::SeqCst);

        let state = self.state.read().await;
        Ok(state
            .cards
            .iter()
            .find(|c| c.card_number == card_number)
            .cloned())
    }

    async fn find_by_customer_id(
        &self,
        customer_id: &str,
    ) -> Result<Vec<CardModel>, RepositoryError> {
        self.find_by_customer_id_calls.fetch_add(1, Ordering::SeqCst);

        let state = self.state.read().await;
        Ok(state
            .cards
            .iter()
            .filter(|c| c.customer_id == customer_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CardCommandRepositoryTrait for InMemoryCardRepository {
    async fn save(&self, card: &CardModel) -> Result<CardModel, RepositoryError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        let mut state = self.state.write().await;
        state.saved.push(card.clone());

        let Some(id) = card.id else {
            if state.cards.iter().any(|c| c.card_number == card.card_number) {
                return Err(RepositoryError::AlreadyExists(format!(
                    "card_number {}",
                    card.card_number
                )));
            }

            let mut stored = card.clone();
            state.last_id += 1;
            stored.id = Some(state.last_id);
            state.cards.push(stored.clone());
            return Ok(stored);
        };

        let existing = state
            .cards
            .iter_mut()
            .find(|c| c.id == Some(id))
            .ok_or(RepositoryError::NotFound)?;

        existing.card_status = card.card_status;
        existing.modified_date = card.modified_date;

        Ok(existing.clone())
    }
}
