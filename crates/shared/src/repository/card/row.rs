use crate::{
    errors::RepositoryError,
    model::card::{CardModel, CardStatus, CardType},
};
use chrono::NaiveDateTime;
use sqlx::FromRow;

pub(super) const CARD_COLUMNS: &str = "id, card_id, card_number, cvv, card_type, card_status, \
     exp_month, exp_year, card_name, card_company, customer_id, created_date, modified_date";

/// Row shape of the `cards` table. Enum columns are stored by name.
#[derive(Debug, FromRow)]
pub(super) struct CardRow {
    pub id: i64,
    pub card_id: String,
    pub card_number: String,
    pub cvv: String,
    pub card_type: String,
    pub card_status: String,
    pub exp_month: String,
    pub exp_year: String,
    pub card_name: String,
    pub card_company: String,
    pub customer_id: String,
    pub created_date: NaiveDateTime,
    pub modified_date: NaiveDateTime,
}

impl TryFrom<CardRow> for CardModel {
    type Error = RepositoryError;

    fn try_from(row: CardRow) -> Result<Self, Self::Error> {
        let card_type = row
            .card_type
            .parse::<CardType>()
            .map_err(|e| RepositoryError::Custom(format!("card {}: {e}", row.id)))?;
        let card_status = row
            .card_status
            .parse::<CardStatus>()
            .map_err(|e| RepositoryError::Custom(format!("card {}: {e}", row.id)))?;

        Ok(Self {
            id: Some(row.id),
            card_id: row.card_id,
            card_number: row.card_number,
            cvv: row.cvv,
            card_type,
            card_status,
            exp_month: row.exp_month,
            exp_year: row.exp_year,
            card_name: row.card_name,
            card_company: row.card_company,
            customer_id: row.customer_id,
            created_date: row.created_date,
            modified_date: row.modified_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(card_type: &str, card_status: &str) -> CardRow {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        CardRow {
            id: 3,
            card_id: "942844931049980509".into(),
            card_number: "5541710500064352".into(),
            cvv: "999".into(),
            card_type: card_type.into(),
            card_status: card_status.into(),
            exp_month: "12".into(),
            exp_year: "2020".into(),
            card_name: "SIRIMONGKOL PANWA".into(),
            card_company: "SCB".into(),
            customer_id: "123456789".into(),
            created_date: ts,
            modified_date: ts,
        }
    }

    #[test]
    fn converts_stored_names_to_enums() {
        let card = CardModel::try_from(row("VISA", "ACTIVE")).unwrap();
        assert_eq!(card.id, Some(3));
        assert_eq!(card.card_type, CardType::Visa);
        assert_eq!(card.card_status, CardStatus::Active);
    }

    #[test]
    fn unknown_stored_type_is_an_error() {
        let err = CardModel::try_from(row("AMEX", "ACTIVE")).unwrap_err();
        assert_eq!(err.to_string(), "Custom error: card 3: unknown card type: AMEX");
    }
}
