use chrono::NaiveDate;
use serde_json::{Map, Value};

pub const KEY_DATE: &str = "KeyDate";
pub const KEY_EMPLOYEE: &str = "KeyEmployee";
pub const KEY_PRODUCT: &str = "KeyProduct";
pub const KEY_STORE: &str = "KeyStore";
pub const TICKETS: &str = "Tickets";
pub const NET_AMOUNT: &str = "NetAmount";

/// Key column a sale can be searched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalesDimension {
    Employee,
    Product,
    Store,
}

impl SalesDimension {
    /// Name of the datamart column holding this dimension's key.
    pub fn column(&self) -> &'static str {
        match self {
            SalesDimension::Employee => KEY_EMPLOYEE,
            SalesDimension::Product => KEY_PRODUCT,
            SalesDimension::Store => KEY_STORE,
        }
    }
}

impl std::fmt::Display for SalesDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SalesDimension::Employee => write!(f, "employee"),
            SalesDimension::Product => write!(f, "product"),
            SalesDimension::Store => write!(f, "store"),
        }
    }
}

impl std::str::FromStr for SalesDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(SalesDimension::Employee),
            "product" => Ok(SalesDimension::Product),
            "store" => Ok(SalesDimension::Store),
            _ => Err(format!("Invalid sales dimension: {}", s)),
        }
    }
}

/// Ticket attached to a sale. Only `NetAmount` is interpreted; every other
/// field is carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub net_amount: f64,
    pub extra: Map<String, Value>,
}

/// One row of the sales datamart.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub key_date: NaiveDate,
    pub key_employee: String,
    pub key_product: String,
    pub key_store: String,
    pub ticket: Ticket,
    /// Columns the API does not interpret, echoed back as-is.
    pub extra: Map<String, Value>,
}

impl SaleRecord {
    pub fn key(&self, dimension: SalesDimension) -> &str {
        match dimension {
            SalesDimension::Employee => &self.key_employee,
            SalesDimension::Product => &self.key_product,
            SalesDimension::Store => &self.key_store,
        }
    }

    pub fn net_amount(&self) -> f64 {
        self.ticket.net_amount
    }
}
