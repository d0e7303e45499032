use chrono::NaiveDate;

use super::errors::SaleError;
use super::model::SaleRecord;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive date window used to filter sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Parses both bounds as `YYYY-MM-DD`.
    ///
    /// A start after the end is accepted and simply matches nothing.
    pub fn parse(start_date: &str, end_date: &str) -> Result<Self, SaleError> {
        let start = NaiveDate::parse_from_str(start_date, DATE_FORMAT)
            .map_err(|_| SaleError::InvalidDateFormat)?;
        let end = NaiveDate::parse_from_str(end_date, DATE_FORMAT)
            .map_err(|_| SaleError::InvalidDateFormat)?;
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Dollar amount rendered as `$1,234.56`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money(pub f64);

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fixed = format!("{:.2}", self.0.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if self.0.is_sign_negative() { "-" } else { "" };
        write!(f, "${}{}.{}", sign, grouped, cents)
    }
}

/// Total and mean net amount over a set of sales.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    pub total: Money,
    pub average: Money,
    pub count: usize,
}

impl SalesSummary {
    /// Returns `None` when there is nothing to average.
    pub fn from_records(records: &[SaleRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let total: f64 = records.iter().map(SaleRecord::net_amount).sum();
        let count = records.len();
        Some(Self {
            total: Money(total),
            average: Money(total / count as f64),
            count,
        })
    }
}
