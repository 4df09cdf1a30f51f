//! Product catalog endpoints.

use mayan_core::{Money, Product};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Optional filters for `GET /products`.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Free-text search over names.
    pub search: Option<String>,
    /// Restrict to one category.
    pub category_id: Option<String>,
    /// Include inactive products (admin screens).
    pub include_inactive: bool,
}

impl ProductFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(category_id) = &self.category_id {
            query.push(("categoryId", category_id.clone()));
        }
        if self.include_inactive {
            query.push(("includeInactive", "true".to_string()));
        }
        query
    }
}

/// `POST /products` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    pub name_ar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_ar: Option<String>,
    pub price: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loyalty_points_rate: Option<i64>,
}

/// `PUT /products/:id` body. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loyalty_points_rate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Accessor for `/products` endpoints.
#[derive(Debug)]
pub struct ProductsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ProductsApi<'_> {
    /// `GET /products` with optional filters.
    pub async fn list(&self, filter: &ProductFilter) -> ApiResult<Vec<Product>> {
        self.client
            .get_with_query("/products", &filter.to_query())
            .await
    }

    /// `GET /products/:id`.
    pub async fn get(&self, id: &str) -> ApiResult<Product> {
        self.client.get(&format!("/products/{id}")).await
    }

    /// `POST /products`.
    pub async fn create(&self, request: &CreateProduct) -> ApiResult<Product> {
        self.client.post("/products", request).await
    }

    /// `PUT /products/:id`.
    pub async fn update(&self, id: &str, request: &UpdateProduct) -> ApiResult<Product> {
        self.client.put(&format!("/products/{id}"), request).await
    }

    /// `DELETE /products/:id`.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&format!("/products/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query_shape() {
        let filter = ProductFilter {
            search: Some("serum".to_string()),
            category_id: Some("c1".to_string()),
            include_inactive: false,
        };
        assert_eq!(
            filter.to_query(),
            vec![
                ("search", "serum".to_string()),
                ("categoryId", "c1".to_string())
            ]
        );
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let update = UpdateProduct {
            price: Some(Money::from_units(9000)),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "price": 9000 }));
    }
}
