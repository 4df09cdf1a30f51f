//! Sales/profit report endpoints (admin panel).

use chrono::NaiveDate;
use mayan_core::{ProductReport, ProfitLossReport, TopCustomer, TopProduct};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Optional reporting window, applied as `?from=&to=` (ISO dates).
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportWindow {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ReportWindow {
    fn to_query(self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(from) = self.from {
            query.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            query.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        query
    }
}

/// Accessor for `/reports` endpoints.
#[derive(Debug)]
pub struct ReportsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ReportsApi<'_> {
    /// `GET /reports/top-products`.
    pub async fn top_products(&self, window: ReportWindow) -> ApiResult<Vec<TopProduct>> {
        self.client
            .get_with_query("/reports/top-products", &window.to_query())
            .await
    }

    /// `GET /reports/top-customers`.
    pub async fn top_customers(&self, window: ReportWindow) -> ApiResult<Vec<TopCustomer>> {
        self.client
            .get_with_query("/reports/top-customers", &window.to_query())
            .await
    }

    /// `GET /reports/profit-loss`.
    pub async fn profit_loss(&self, window: ReportWindow) -> ApiResult<ProfitLossReport> {
        self.client
            .get_with_query("/reports/profit-loss", &window.to_query())
            .await
    }

    /// `GET /reports/product/:id`.
    pub async fn product(&self, id: &str, window: ReportWindow) -> ApiResult<ProductReport> {
        self.client
            .get_with_query(&format!("/reports/product/{id}"), &window.to_query())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_query_format() {
        let window = ReportWindow {
            from: NaiveDate::from_ymd_opt(2024, 1, 1),
            to: NaiveDate::from_ymd_opt(2024, 6, 30),
        };
        assert_eq!(
            window.to_query(),
            vec![
                ("from", "2024-01-01".to_string()),
                ("to", "2024-06-30".to_string())
            ]
        );
    }
}
