#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use shared::{
    abstract_trait::card::repository::{DynCardCommandRepository, DynCardQueryRepository},
    domain::requests::{CreateCardRequest, UpdateCardStatusRequest},
    model::card::{CardModel, CardStatus, CardType},
    repository::card::InMemoryCardRepository,
    service::card::{CardCommandService, CardQueryService},
};
use std::sync::Arc;

pub const CARD_ID: &str = "942844931049980509";
pub const CARD_NUMBER: &str = "5541710500064352";
pub const CVV: &str = "999";
pub const EXP_MONTH: &str = "12";
pub const EXP_YEAR: &str = "2020";
pub const CUSTOMER_ID: &str = "123456789";
pub const CARD_NAME: &str = "SIRIMONGKOL PANWA";
pub const CARD_COMPANY: &str = "SCB";

pub fn fixed_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 15)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

pub fn card() -> CardModel {
    CardModel {
        id: Some(1),
        card_id: CARD_ID.into(),
        card_number: CARD_NUMBER.into(),
        cvv: CVV.into(),
        card_type: CardType::Visa,
        card_status: CardStatus::Inactive,
        exp_month: EXP_MONTH.into(),
        exp_year: EXP_YEAR.into(),
        card_name: CARD_NAME.into(),
        card_company: CARD_COMPANY.into(),
        customer_id: CUSTOMER_ID.into(),
        created_date: fixed_date(),
        modified_date: fixed_date(),
    }
}

pub fn create_card_request() -> CreateCardRequest {
    CreateCardRequest {
        card_id: CARD_ID.into(),
        card_number: CARD_NUMBER.into(),
        cvv: CVV.into(),
        card_type: CardType::Visa.code().into(),
        exp_month: EXP_MONTH.into(),
        exp_year: EXP_YEAR.into(),
        customer_id: CUSTOMER_ID.into(),
        card_company: CARD_COMPANY.into(),
        card_name: CARD_NAME.into(),
    }
}

pub fn update_card_status_request(status: CardStatus) -> UpdateCardStatusRequest {
    UpdateCardStatusRequest {
        card_number: CARD_NUMBER.into(),
        cvv: CVV.into(),
        customer_id: CUSTOMER_ID.into(),
        card_status: status.name().into(),
    }
}

pub async fn command_service(store: &InMemoryCardRepository) -> CardCommandService {
    let query = Arc::new(store.clone()) as DynCardQueryRepository;
    let command = Arc::new(store.clone()) as DynCardCommandRepository;
    CardCommandService::new(query, command).await
}

pub async fn query_service(store: &InMemoryCardRepository) -> CardQueryService {
    let query = Arc::new(store.clone()) as DynCardQueryRepository;
    CardQueryService::new(query).await
}
