use calculator_sdk::errors::ParseOperationError;
use calculator_sdk::models::CalculationRecord;

use super::entity;

impl TryFrom<entity::Model> for CalculationRecord {
    type Error = ParseOperationError;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: i64::from(entity.id),
            operation: entity.operation.parse()?,
            first_value: entity.first_value,
            second_value: entity.second_value,
            result: entity.result,
            timestamp: entity.created_at,
        })
    }
}
