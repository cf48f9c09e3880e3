use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// One EDI shipment line.
///
/// Column and JSON names keep the legacy `EDITunisia` spelling so existing
/// tables and clients keep working. `date` and `expected_delivery_date` are
/// free text and are never parsed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "EDITunisia")]
#[serde(rename_all = "PascalCase")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    #[serde(rename = "ID")]
    pub id: i32,
    #[sea_orm(column_name = "ClientCode")]
    pub client_code: String,
    #[sea_orm(column_name = "ProductCode")]
    pub product_code: String,
    #[sea_orm(column_name = "Date")]
    pub date: String,
    #[sea_orm(column_name = "Quantity")]
    pub quantity: i32,
    #[sea_orm(column_name = "EDIWeekNumber")]
    #[serde(rename = "EDIWeekNumber")]
    pub edi_week_number: Option<i32>,
    #[sea_orm(column_name = "ExpectedDeliveryDate")]
    pub expected_delivery_date: Option<String>,
    #[sea_orm(column_name = "DeliveryNature")]
    pub delivery_nature: Option<String>,
    #[sea_orm(column_name = "DeliveredQuantity")]
    pub delivered_quantity: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A record as accepted from a caller, before the store assigns its id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEdiRecord {
    pub client_code: String,
    pub product_code: String,
    pub date: String,
    pub quantity: i32,
    pub edi_week_number: Option<i32>,
    pub expected_delivery_date: Option<String>,
    pub delivery_nature: Option<String>,
    pub delivered_quantity: Option<i32>,
}

impl NewEdiRecord {
    /// Active model with `id` left unset so the database sequence assigns it.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            client_code: Set(self.client_code),
            product_code: Set(self.product_code),
            date: Set(self.date),
            quantity: Set(self.quantity),
            edi_week_number: Set(self.edi_week_number),
            expected_delivery_date: Set(self.expected_delivery_date),
            delivery_nature: Set(self.delivery_nature),
            delivered_quantity: Set(self.delivered_quantity),
            ..Default::default()
        }
    }

    pub fn with_id(self, id: i32) -> Model {
        Model {
            id,
            client_code: self.client_code,
            product_code: self.product_code,
            date: self.date,
            quantity: self.quantity,
            edi_week_number: self.edi_week_number,
            expected_delivery_date: self.expected_delivery_date,
            delivery_nature: self.delivery_nature,
            delivered_quantity: self.delivered_quantity,
        }
    }
}
