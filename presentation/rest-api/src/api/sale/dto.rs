use poem_openapi::Object;
use serde_json::{Map, Value};

use business::domain::sale::model::{
    KEY_DATE, KEY_EMPLOYEE, KEY_PRODUCT, KEY_STORE, NET_AMOUNT, SaleRecord, TICKETS,
};
use business::domain::sale::value_objects::{DATE_FORMAT, SalesSummary};

/// Renders a sale as the datamart row it was read from.
///
/// Uninterpreted columns are echoed back next to the key columns.
pub fn sale_record_json(record: SaleRecord) -> Value {
    let mut ticket = record.ticket.extra;
    ticket.insert(NET_AMOUNT.to_string(), Value::from(record.ticket.net_amount));

    let mut row: Map<String, Value> = record.extra;
    row.insert(
        KEY_DATE.to_string(),
        Value::String(record.key_date.format(DATE_FORMAT).to_string()),
    );
    row.insert(KEY_EMPLOYEE.to_string(), Value::String(record.key_employee));
    row.insert(KEY_PRODUCT.to_string(), Value::String(record.key_product));
    row.insert(KEY_STORE.to_string(), Value::String(record.key_store));
    row.insert(TICKETS.to_string(), Value::Object(ticket));

    Value::Object(row)
}

#[derive(Debug, Clone, Object)]
pub struct SalesSummaryResponse {
    /// Sum of ticket net amounts, e.g. `$1,234.56`
    pub total_sales: String,
    /// Mean ticket net amount, e.g. `$411.52`
    pub average_sales: String,
}

impl From<SalesSummary> for SalesSummaryResponse {
    fn from(summary: SalesSummary) -> Self {
        Self {
            total_sales: summary.total.to_string(),
            average_sales: summary.average.to_string(),
        }
    }
}
