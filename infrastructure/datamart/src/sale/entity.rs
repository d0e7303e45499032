use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};

use business::domain::sale::model::{SaleRecord, Ticket};
use business::domain::sale::value_objects::DATE_FORMAT;

/// Raw datamart row as stored in the chunk files.
#[derive(Debug, Deserialize)]
pub struct SaleEntity {
    #[serde(rename = "KeyDate")]
    pub key_date: String,
    #[serde(rename = "KeyEmployee")]
    pub key_employee: String,
    #[serde(rename = "KeyProduct")]
    pub key_product: String,
    #[serde(rename = "KeyStore")]
    pub key_store: String,
    #[serde(rename = "Tickets")]
    pub tickets: TicketEntity,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct TicketEntity {
    #[serde(rename = "NetAmount")]
    pub net_amount: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SaleEntity {
    /// Converts the row into the domain model.
    ///
    /// `KeyDate` may be a plain date or a full timestamp; only the leading
    /// `YYYY-MM-DD` is kept.
    pub fn into_domain(self) -> Option<SaleRecord> {
        let date_part = self.key_date.get(..10).unwrap_or(self.key_date.as_str());
        let key_date = NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()?;

        Some(SaleRecord {
            key_date,
            key_employee: self.key_employee,
            key_product: self.key_product,
            key_store: self.key_store,
            ticket: Ticket {
                net_amount: self.tickets.net_amount,
                extra: self.tickets.extra,
            },
            extra: self.extra,
        })
    }
}
