mod common;

use common::*;
use shared::{
    abstract_trait::card::service::CardQueryServiceTrait,
    errors::ServiceError,
    model::card::{CardModel, CardType},
    repository::card::InMemoryCardRepository,
};

fn customer_card(id: i64, card_number: &str, card_type: CardType) -> CardModel {
    CardModel {
        id: Some(id),
        card_id: format!("{CARD_ID}{id}"),
        card_number: card_number.into(),
        card_type,
        ..card()
    }
}

#[tokio::test]
async fn find_by_card_number_maps_stored_card() {
    let store = InMemoryCardRepository::new();
    let stored = store.seed(card()).await;
    let service = query_service(&store).await;

    let response = service.find_by_card_number(CARD_NUMBER).await.unwrap();

    assert_eq!(response.card_id, stored.card_id);
    assert_eq!(response.card_number, stored.card_number);
    assert_eq!(response.cvv, stored.cvv);
    assert_eq!(response.card_type, stored.card_type.name());
    assert_ne!(response.card_type, stored.card_type.code());
    assert_eq!(response.exp_year, stored.exp_year);
    assert_eq!(response.exp_month, stored.exp_month);
    assert_eq!(response.modified_date, stored.modified_date);
    assert_eq!(store.find_by_card_number_calls(), 1);
}

#[tokio::test]
async fn find_by_card_number_reports_missing_card() {
    let store = InMemoryCardRepository::new();
    let service = query_service(&store).await;

    let err = service.find_by_card_number(CARD_NUMBER).await.unwrap_err();

    assert!(matches!(err, ServiceError::CardNotFound(n) if n == CARD_NUMBER));
}

#[tokio::test]
async fn find_by_customer_id_keeps_store_order() {
    let store = InMemoryCardRepository::new();
    store
        .seed(customer_card(1, "5541710500064352", CardType::Visa))
        .await;
    store
        .seed(customer_card(2, "5541710500064353", CardType::Mastercard))
        .await;
    let mut other = customer_card(3, "5541710500064354", CardType::Visa);
    other.customer_id = "987654321".into();
    store.seed(other).await;
    let service = query_service(&store).await;

    let responses = service.find_by_customer_id(CUSTOMER_ID).await.unwrap();

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].card_number, "5541710500064352");
    assert_eq!(responses[0].card_type, "VISA");
    assert_eq!(responses[1].card_number, "5541710500064353");
    assert_eq!(responses[1].card_type, "MASTERCARD");
    assert_eq!(responses[1].card_id, format!("{CARD_ID}2"));
    assert_eq!(store.find_by_customer_id_calls(), 1);
}

#[tokio::test]
async fn find_by_customer_id_without_cards_is_empty() {
    let store = InMemoryCardRepository::new();
    store.seed(card()).await;
    let service = query_service(&store).await;

    let responses = service.find_by_customer_id("000000000").await.unwrap();

    assert!(responses.is_empty());
}
