use async_trait::async_trait;
use calculator_sdk::models::{CalculationRecord, NewCalculation};

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Store one calculation and return it with its assigned id.
    async fn insert(&self, calculation: NewCalculation) -> anyhow::Result<CalculationRecord>;

    /// Up to `limit` records, newest first.
    async fn recent(&self, limit: u64) -> anyhow::Result<Vec<CalculationRecord>>;
}
