use std::sync::Arc;

use calculator_sdk::models::{CalculationRecord, NewCalculation, Operation};
use tracing::{debug, instrument};

use super::clock::MonotonicClock;
use super::error::DomainError;
use super::input::CalculateCommand;
use super::repo::HistoryRepository;
use crate::config::CalculatorConfig;

pub struct ServiceConfig {
    pub history_limit: u64,
    pub reject_zero_operands: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from(&CalculatorConfig::default())
    }
}

impl From<&CalculatorConfig> for ServiceConfig {
    fn from(cfg: &CalculatorConfig) -> Self {
        Self {
            history_limit: cfg.history_limit,
            reject_zero_operands: cfg.reject_zero_operands,
        }
    }
}

pub struct Service {
    repo: Arc<dyn HistoryRepository>,
    config: ServiceConfig,
    clock: MonotonicClock,
}

impl Service {
    #[must_use]
    pub fn new(repo: Arc<dyn HistoryRepository>, config: ServiceConfig) -> Self {
        Self {
            repo,
            config,
            clock: MonotonicClock::new(),
        }
    }

    /// Validate, compute and store one calculation.
    ///
    /// # Errors
    /// Validation variants of `DomainError` when the input is rejected, in
    /// which case nothing is stored; `DomainError::Persistence` when the
    /// insert fails.
    #[instrument(skip_all, fields(operation = tracing::field::Empty))]
    pub async fn calculate(&self, cmd: CalculateCommand) -> Result<CalculationRecord, DomainError> {
        let (first_value, second_value, operation) = self.validate(&cmd)?;
        tracing::Span::current().record("operation", operation.symbol());

        let result = operation.apply(first_value, second_value)?;
        let record = self
            .repo
            .insert(NewCalculation {
                operation,
                first_value,
                second_value,
                result,
                timestamp: self.clock.now(),
            })
            .await?;

        debug!(id = record.id, result, "calculation stored");
        Ok(record)
    }

    /// The most recent calculations, newest first.
    ///
    /// # Errors
    /// `DomainError::Persistence` when the history cannot be read.
    #[instrument(skip_all, fields(limit = self.config.history_limit))]
    pub async fn history(&self) -> Result<Vec<CalculationRecord>, DomainError> {
        let records = self.repo.recent(self.config.history_limit).await?;
        Ok(records)
    }

    fn validate(&self, cmd: &CalculateCommand) -> Result<(f64, f64, Operation), DomainError> {
        let missing = if self.config.reject_zero_operands {
            cmd.fields().iter().any(|f| f.is_falsy())
        } else {
            cmd.fields().iter().any(|f| f.is_missing())
        };
        if missing {
            return Err(DomainError::MissingParameters);
        }

        let (Some(first_value), Some(second_value)) =
            (cmd.first_value.as_number(), cmd.second_value.as_number())
        else {
            return Err(DomainError::InvalidNumber);
        };

        let operation = cmd
            .operation
            .as_text()
            .and_then(Operation::from_symbol)
            .ok_or(DomainError::InvalidOperation)?;

        if operation == Operation::Divide && second_value == 0.0 {
            return Err(DomainError::DivisionByZero);
        }

        Ok((first_value, second_value, operation))
    }
}
