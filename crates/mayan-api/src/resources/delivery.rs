//! Delivery-zone endpoints.
//!
//! These exist alongside the flat checkout fee but are not consulted by the
//! checkout flow - the two were never wired together in the original system.
//! They remain available for the screens that do use them.

use mayan_core::{DeliveryZone, Money};
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// `GET /delivery-zones/price` response.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonePrice {
    pub price: Money,
}

/// Accessor for `/delivery-zones` endpoints.
#[derive(Debug)]
pub struct DeliveryApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl DeliveryApi<'_> {
    /// `GET /delivery-zones`.
    pub async fn zones(&self) -> ApiResult<Vec<DeliveryZone>> {
        self.client.get("/delivery-zones").await
    }

    /// `GET /delivery-zones/price?country=&state=`.
    pub async fn zone_price(&self, country: &str, state: Option<&str>) -> ApiResult<ZonePrice> {
        let mut query = vec![("country", country.to_string())];
        if let Some(state) = state {
            query.push(("state", state.to_string()));
        }
        self.client.get_with_query("/delivery-zones/price", &query).await
    }
}
