use std::fmt;
use std::str::FromStr;

/// One of the queries the dashboard can send to the sales API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    SearchByEmployee,
    SearchByProduct,
    SearchByStore,
    StoreTotals,
    ProductTotals,
    EmployeeTotals,
    FirstRecord,
}

impl DashboardAction {
    pub const ALL: [DashboardAction; 7] = [
        DashboardAction::SearchByEmployee,
        DashboardAction::SearchByProduct,
        DashboardAction::SearchByStore,
        DashboardAction::StoreTotals,
        DashboardAction::ProductTotals,
        DashboardAction::EmployeeTotals,
        DashboardAction::FirstRecord,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            DashboardAction::SearchByEmployee => "employee_sales",
            DashboardAction::SearchByProduct => "product_sales",
            DashboardAction::SearchByStore => "store_sales",
            DashboardAction::StoreTotals => "store_totals",
            DashboardAction::ProductTotals => "product_totals",
            DashboardAction::EmployeeTotals => "employee_totals",
            DashboardAction::FirstRecord => "first_record",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardAction::SearchByEmployee => "Search sales by employee",
            DashboardAction::SearchByProduct => "Search sales by product",
            DashboardAction::SearchByStore => "Search sales by store",
            DashboardAction::StoreTotals => "Total and average sales by store",
            DashboardAction::ProductTotals => "Total and average sales by product",
            DashboardAction::EmployeeTotals => "Total and average sales by employee",
            DashboardAction::FirstRecord => "First record",
        }
    }

    /// API route answering this action.
    pub fn path(&self) -> &'static str {
        match self {
            DashboardAction::SearchByEmployee => "/sales/employee",
            DashboardAction::SearchByProduct => "/sales/product",
            DashboardAction::SearchByStore => "/sales/store",
            DashboardAction::StoreTotals => "/sales/store/total_avg",
            DashboardAction::ProductTotals => "/sales/product/total_avg",
            DashboardAction::EmployeeTotals => "/sales/employee/total_avg",
            DashboardAction::FirstRecord => "/sales/first_record",
        }
    }

    /// Query parameter carrying the key, with the column name shown as its label.
    pub fn key_param(&self) -> Option<(&'static str, &'static str)> {
        match self {
            DashboardAction::SearchByEmployee | DashboardAction::EmployeeTotals => {
                Some(("key_employee", "KeyEmployee"))
            }
            DashboardAction::SearchByProduct | DashboardAction::ProductTotals => {
                Some(("key_product", "KeyProduct"))
            }
            DashboardAction::SearchByStore | DashboardAction::StoreTotals => {
                Some(("key_store", "KeyStore"))
            }
            DashboardAction::FirstRecord => None,
        }
    }

    pub fn needs_dates(&self) -> bool {
        matches!(
            self,
            DashboardAction::SearchByEmployee
                | DashboardAction::SearchByProduct
                | DashboardAction::SearchByStore
        )
    }
}

impl fmt::Display for DashboardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DashboardAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DashboardAction::ALL
            .into_iter()
            .find(|action| action.slug() == s)
            .ok_or_else(|| format!("Invalid dashboard action: {}", s))
    }
}
