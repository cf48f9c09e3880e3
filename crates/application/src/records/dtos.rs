use edi_core::entities::edi_records::Model as EdiRecord;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const RECORD_ADDED_MESSAGE: &str = "Record added successfully";
pub const SERVICE_RUNNING_MESSAGE: &str = "EDI Records API is running. Use /records to interact.";

// ============ Records ============

/// Insert payload. Keys are camelCase; the legacy PascalCase spelling is
/// accepted too. Required fields are `Option` so an absent key and `null`
/// both surface as a `required` validation error.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    #[serde(alias = "ClientCode")]
    #[validate(required)]
    pub client_code: Option<String>,
    #[serde(alias = "ProductCode")]
    #[validate(required)]
    pub product_code: Option<String>,
    #[serde(alias = "Date")]
    #[validate(required)]
    pub date: Option<String>,
    #[serde(alias = "Quantity")]
    #[validate(required)]
    pub quantity: Option<i32>,
    #[serde(default, alias = "EDIWeekNumber")]
    pub edi_week_number: Option<i32>,
    #[serde(default, alias = "ExpectedDeliveryDate")]
    pub expected_delivery_date: Option<String>,
    #[serde(default, alias = "DeliveryNature")]
    pub delivery_nature: Option<String>,
    #[serde(default, alias = "DeliveredQuantity")]
    pub delivered_quantity: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRecordResponse {
    pub message: String,
    pub record: EdiRecord,
}

// ============ Status ============

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatusResponse {
    pub message: String,
    pub mode: String,
    pub database_connected: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
