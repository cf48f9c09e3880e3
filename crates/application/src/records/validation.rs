use edi_core::entities::edi_records::NewEdiRecord;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use super::dtos::CreateRecordRequest;
use crate::{AppError, AppResult};

/// Required insert fields as `(camelCase name, struct field)`, in the order
/// they are reported.
const REQUIRED_FIELDS: [(&str, &str); 4] = [
    ("clientCode", "client_code"),
    ("productCode", "product_code"),
    ("date", "date"),
    ("quantity", "quantity"),
];

fn required_field_names() -> String {
    REQUIRED_FIELDS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `field_errors()` is unordered; report in `REQUIRED_FIELDS` order.
fn missing_fields_error(errors: &ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .filter(|(camel, field)| {
            field_errors.contains_key(*field) || field_errors.contains_key(*camel)
        })
        .map(|(camel, _)| *camel)
        .collect();

    AppError::Validation(format!("Missing required fields: {}", missing.join(", ")))
}

/// Turns a raw JSON body into a record ready for storage.
///
/// `None` stands for a body that was empty or not JSON at all.
pub fn parse_new_record(payload: Option<Value>) -> AppResult<NewEdiRecord> {
    let map = match payload {
        Some(Value::Object(map)) => map,
        _ => {
            return Err(AppError::Validation(format!(
                "Invalid payload. Required fields are: {}",
                required_field_names()
            )))
        }
    };

    let request: CreateRecordRequest = serde_json::from_value(Value::Object(map))
        .map_err(|e| AppError::Validation(format!("Invalid payload: {}", e)))?;
    request.validate().map_err(|e| missing_fields_error(&e))?;

    let (Some(client_code), Some(product_code), Some(date), Some(quantity)) = (
        request.client_code,
        request.product_code,
        request.date,
        request.quantity,
    ) else {
        return Err(anyhow::anyhow!("validated record payload is missing a required field").into());
    };

    Ok(NewEdiRecord {
        client_code,
        product_code,
        date,
        quantity,
        edi_week_number: request.edi_week_number,
        expected_delivery_date: request.expected_delivery_date,
        delivery_nature: request.delivery_nature,
        delivered_quantity: request.delivered_quantity,
    })
}
