use super::row::{CARD_COLUMNS, CardRow};
use crate::{
    abstract_trait::card::repository::CardCommandRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct CardCommandRepository {
    db: ConnectionPool,
}

impl CardCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl CardCommandRepositoryTrait for CardCommandRepository {
    async fn save(&self, card: &CardModel) -> Result<CardModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let row = match card.id {
            None => {
                let sql = format!(
                    r#"
                    INSERT INTO cards (
                        card_id,
                        card_number,
                        cvv,
                        card_type,
                        card_status,
                        exp_month,
                        exp_year,
                        card_name,
                        card_company,
                        customer_id,
                        created_date,
                        modified_date
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                    RETURNING {CARD_COLUMNS}
                    "#
                );

                sqlx::query_as::<_, CardRow>(&sql)
                    .bind(&card.card_id)
                    .bind(&card.card_number)
                    .bind(&card.cvv)
                    .bind(card.card_type.name())
                    .bind(card.card_status.name())
                    .bind(&card.exp_month)
                    .bind(&card.exp_year)
                    .bind(&card.card_name)
                    .bind(&card.card_company)
                    .bind(&card.customer_id)
                    .bind(card.created_date)
                    .bind(card.modified_date)
                    .fetch_one(&mut *conn)
                    .await
                    .map_err(|e| {
                        error!("❌ Failed to insert card: {e:?}");
                        RepositoryError::from(e)
                    })?
            }
            Some(id) => {
                // Only the status moves after creation.
                let sql = format!(
                    r#"
                    UPDATE cards
                    SET
                        card_status = $2,
                        modified_date = $3
                    WHERE id = $1
                    RETURNING {CARD_COLUMNS}
                    "#
                );

                sqlx::query_as::<_, CardRow>(&sql)
                    .bind(id)
                    .bind(card.card_status.name())
                    .bind(card.modified_date)
                    .fetch_optional(&mut *conn)
                    .await
                    .map_err(|e| {
                        error!("❌ Failed to update card id {id}: {e:?}");
                        RepositoryError::from(e)
                    })?
                    .ok_or(RepositoryError::NotFound)?
            }
        };

        CardModel::try_from(row)
    }
}
