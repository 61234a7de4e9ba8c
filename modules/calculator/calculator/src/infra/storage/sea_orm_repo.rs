use async_trait::async_trait;
use calculator_sdk::models::{CalculationRecord, NewCalculation};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect,
};

use crate::domain::repo::HistoryRepository;

use super::entity::{self, Entity as CalculationEntity};

pub struct SeaOrmHistoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmHistoryRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HistoryRepository for SeaOrmHistoryRepository {
    async fn insert(&self, calculation: NewCalculation) -> anyhow::Result<CalculationRecord> {
        let active_model = entity::ActiveModel {
            id: ActiveValue::NotSet,
            operation: ActiveValue::Set(calculation.operation.symbol().to_owned()),
            first_value: ActiveValue::Set(calculation.first_value),
            second_value: ActiveValue::Set(calculation.second_value),
            result: ActiveValue::Set(calculation.result),
            created_at: ActiveValue::Set(calculation.timestamp),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(CalculationRecord::try_from(model)?)
    }

    async fn recent(&self, limit: u64) -> anyhow::Result<Vec<CalculationRecord>> {
        let models = CalculationEntity::find()
            .order_by_desc(entity::Column::CreatedAt)
            .order_by_desc(entity::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;

        models
            .into_iter()
            .map(|m| CalculationRecord::try_from(m).map_err(anyhow::Error::from))
            .collect()
    }
}
