use super::row::{CARD_COLUMNS, CardRow};
use crate::{
    abstract_trait::card::repository::CardQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct CardQueryRepository {
    db: ConnectionPool,
}

impl CardQueryRepository {
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
impl CardQueryRepositoryTrait for CardQueryRepository {
    async fn find_by_card_number(
        &self,
        card_number: &str,
    ) -> Result<Option<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("SELECT {CARD_COLUMNS} FROM cards WHERE card_number = $1");

        let row = sqlx::query_as::<_, CardRow>(&sql)
            .bind(card_number)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to find card by number: {e:?}");
                RepositoryError::from(e)
            })?;

        row.map(CardModel::try_from).transpose()
    }

    async fn find_by_customer_id(
        &self,
        customer_id: &str,
    ) -> Result<Vec<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("SELECT {CARD_COLUMNS} FROM cards WHERE customer_id = $1 ORDER BY id");

        let rows = sqlx::query_as::<_, CardRow>(&sql)
            .bind(customer_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to find cards for customer_id {customer_id}: {e:?}");
                RepositoryError::from(e)
            })?;

        rows.into_iter().map(CardModel::try_from).collect()
    }
}
