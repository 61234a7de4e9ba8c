use calculator_sdk::models::{CalculationRecord, Operation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::input::{CalculateCommand, FieldValue};

/// Calculate request. Fields stay raw JSON so validation can tell a missing
/// value from one of the wrong type.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    #[serde(default)]
    #[schema(value_type = f64, example = 7)]
    pub first_value: Option<Value>,
    #[serde(default)]
    #[schema(value_type = f64, example = 5)]
    pub second_value: Option<Value>,
    #[serde(default)]
    #[schema(value_type = String, example = "+")]
    pub operation: Option<Value>,
}

impl From<CalculateRequest> for CalculateCommand {
    fn from(req: CalculateRequest) -> Self {
        Self {
            first_value: field_value(req.first_value),
            second_value: field_value(req.second_value),
            operation: field_value(req.operation),
        }
    }
}

fn field_value(value: Option<Value>) -> FieldValue {
    match value {
        None | Some(Value::Null) => FieldValue::Missing,
        Some(Value::Number(n)) => n.as_f64().map_or(FieldValue::Composite, FieldValue::Number),
        Some(Value::String(s)) => FieldValue::Text(s),
        Some(Value::Bool(b)) => FieldValue::Bool(b),
        Some(Value::Array(_) | Value::Object(_)) => FieldValue::Composite,
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    pub result: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculationDto {
    pub id: i64,
    #[schema(value_type = String, example = "+")]
    pub operation: Operation,
    pub first_value: f64,
    pub second_value: f64,
    pub result: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<CalculationRecord> for CalculationDto {
    fn from(record: CalculationRecord) -> Self {
        Self {
            id: record.id,
            operation: record.operation,
            first_value: record.first_value,
            second_value: record.second_value,
            result: record.result,
            timestamp: record.timestamp,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HelloResponse {
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn command(body: Value) -> CalculateCommand {
        serde_json::from_value::<CalculateRequest>(body).unwrap().into()
    }

    #[test]
    fn absent_and_null_are_missing() {
        let cmd = command(json!({"firstValue": null, "operation": "+"}));
        assert_eq!(cmd.first_value, FieldValue::Missing);
        assert_eq!(cmd.second_value, FieldValue::Missing);
        assert_eq!(cmd.operation, FieldValue::Text("+".to_owned()));
    }

    #[test]
    fn json_types_are_preserved() {
        let cmd = command(json!({"firstValue": "7", "secondValue": [1], "operation": false}));
        assert_eq!(cmd.first_value, FieldValue::Text("7".to_owned()));
        assert_eq!(cmd.second_value, FieldValue::Composite);
        assert_eq!(cmd.operation, FieldValue::Bool(false));
    }

    #[test]
    fn integers_and_floats_are_numbers() {
        let cmd = command(json!({"firstValue": 7, "secondValue": -2.5, "operation": "*"}));
        assert_eq!(cmd.first_value, FieldValue::Number(7.0));
        assert_eq!(cmd.second_value, FieldValue::Number(-2.5));
    }

    #[test]
    fn history_item_uses_camel_case() {
        let dto = CalculationDto {
            id: 3,
            operation: Operation::Divide,
            first_value: 1.0,
            second_value: 4.0,
            result: 0.25,
            timestamp: DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let value = serde_json::to_value(dto).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "operation": "/",
                "firstValue": 1.0,
                "secondValue": 4.0,
                "result": 0.25,
                "timestamp": "2026-01-01T00:00:00Z"
            })
        );
    }
}
