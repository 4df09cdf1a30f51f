//! # Procurement Administration
//!
//! Stock-in entry: an admin records a supplier batch purchase with per-line
//! cost prices. The form total is derived client-side for display and
//! submitted with the order; the server recomputes it authoritatively.

use mayan_api::resources::procurement::{CreateProcurement, UpdateProcurement};
use mayan_api::ApiClient;
use mayan_core::{validation, Money, ProcurementItem, ProcurementOrder};
use tracing::info;

use crate::error::StorefrontResult;

/// Sum of line costs for the entry form's running total.
pub fn batch_total(items: &[ProcurementItem]) -> Money {
    items
        .iter()
        .fold(Money::zero(), |acc, item| acc + item.line_cost())
}

/// The procurement administration flow.
#[derive(Debug, Clone)]
pub struct ProcurementAdmin {
    api: ApiClient,
}

impl ProcurementAdmin {
    pub fn new(api: ApiClient) -> Self {
        ProcurementAdmin { api }
    }

    /// `GET /procurement`.
    pub async fn list(&self) -> StorefrontResult<Vec<ProcurementOrder>> {
        Ok(self.api.procurement().list().await?)
    }

    /// `GET /procurement/:id`.
    pub async fn get(&self, id: &str) -> StorefrontResult<ProcurementOrder> {
        Ok(self.api.procurement().get(id).await?)
    }

    /// Records a batch purchase, then returns the re-fetched list.
    pub async fn create(
        &self,
        request: &CreateProcurement,
    ) -> StorefrontResult<Vec<ProcurementOrder>> {
        validation::validate_name("supplier", &request.supplier)
            .map_err(mayan_core::CoreError::from)?;
        for item in &request.items {
            validation::validate_quantity(item.quantity)
                .map_err(mayan_core::CoreError::from)?;
            validation::validate_price_units(item.unit_cost.units())
                .map_err(mayan_core::CoreError::from)?;
        }

        let created = self.api.procurement().create(request).await?;
        info!(procurement = %created.id, total = %created.total_cost, "stock-in recorded");
        self.list().await
    }

    /// Amends a batch purchase, then returns the re-fetched list.
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateProcurement,
    ) -> StorefrontResult<Vec<ProcurementOrder>> {
        self.api.procurement().update(id, request).await?;
        self.list().await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_total_sums_lines() {
        let items = vec![
            ProcurementItem {
                product_id: "p1".to_string(),
                quantity: 10,
                unit_cost: Money::from_units(700),
            },
            ProcurementItem {
                product_id: "p2".to_string(),
                quantity: 3,
                unit_cost: Money::from_units(2500),
            },
        ];
        assert_eq!(batch_total(&items).units(), 7000 + 7500);
    }

    #[test]
    fn test_batch_total_empty_is_zero() {
        assert_eq!(batch_total(&[]).units(), 0);
    }
}
