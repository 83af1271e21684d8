use crate::model::card::CardModel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResponse {
    #[serde(rename = "card_id")]
    pub card_id: String,
    #[serde(rename = "card_number")]
    pub card_number: String,
    pub cvv: String,
    /// Card type name, e.g. `VISA`.
    #[serde(rename = "card_type")]
    pub card_type: String,
    #[serde(rename = "exp_year")]
    pub exp_year: String,
    #[serde(rename = "exp_month")]
    pub exp_month: String,
    #[serde(rename = "modified_date")]
    pub modified_date: NaiveDateTime,
}

// model to response
impl From<CardModel> for CardResponse {
    fn from(model: CardModel) -> Self {
        Self {
            card_id: model.card_id,
            card_number: model.card_number,
            cvv: model.cvv,
            card_type: model.card_type.name().to_string(),
            exp_year: model.exp_year,
            exp_month: model.exp_month,
            modified_date: model.modified_date,
        }
    }
}
