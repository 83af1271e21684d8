use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Visa,
    Mastercard,
}

impl CardType {
    pub const ALL: [CardType; 2] = [CardType::Visa, CardType::Mastercard];

    /// Code sent by clients in `CreateCardRequest::card_type`.
    pub fn code(&self) -> &'static str {
        match self {
            CardType::Visa => "001",
            CardType::Mastercard => "002",
        }
    }

    /// Name rendered in responses and stored in the `card_type` column.
    pub fn name(&self) -> &'static str {
        match self {
            CardType::Visa => "VISA",
            CardType::Mastercard => "MASTERCARD",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code.trim())
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "card type",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Active,
    #[default]
    Inactive,
}

impl CardStatus {
    pub fn name(&self) -> &'static str {
        match self {
            CardStatus::Active => "ACTIVE",
            CardStatus::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(CardStatus::Active),
            "INACTIVE" => Ok(CardStatus::Inactive),
            _ => Err(UnknownVariant {
                kind: "card status",
                value: s.to_string(),
            }),
        }
    }
}

/// A prepaid card record. `id` stays `None` until the store assigns it on
/// the first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardModel {
    pub id: Option<i64>,
    pub card_id: String,
    pub card_number: String,
    pub cvv: String,
    pub card_type: CardType,
    pub card_status: CardStatus,
    pub exp_month: String,
    pub exp_year: String,
    pub card_name: String,
    pub card_company: String,
    pub customer_id: String,
    pub created_date: NaiveDateTime,
    pub modified_date: NaiveDateTime,
}
