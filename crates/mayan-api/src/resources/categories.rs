//! Category endpoints.
//!
//! The API serves categories in two shapes and the admin screen needs both:
//! hierarchical (children populated, for the tree view) and flat
//! (`?flat=true`, for the parent dropdown). Both are preserved here.

use mayan_core::Category;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// `POST /categories` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    pub name_en: String,
    pub name_ar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// `PUT /categories/:id` body.
///
/// `parent_id` is always sent: clearing the parent (moving a category to the
/// root) is expressed as an explicit `null`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parent_id: Option<String>,
}

/// Accessor for `/categories` endpoints.
#[derive(Debug)]
pub struct CategoriesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl CategoriesApi<'_> {
    /// `GET /categories` - hierarchical shape, children populated.
    pub async fn list(&self) -> ApiResult<Vec<Category>> {
        self.client.get("/categories").await
    }

    /// `GET /categories?flat=true` - flat shape for the parent dropdown.
    pub async fn list_flat(&self) -> ApiResult<Vec<Category>> {
        self.client
            .get_with_query("/categories", &[("flat", "true".to_string())])
            .await
    }

    /// `GET /categories/:id`.
    pub async fn get(&self, id: &str) -> ApiResult<Category> {
        self.client.get(&format!("/categories/{id}")).await
    }

    /// `POST /categories`.
    pub async fn create(&self, request: &CreateCategory) -> ApiResult<Category> {
        self.client.post("/categories", request).await
    }

    /// `PUT /categories/:id`.
    pub async fn update(&self, id: &str, request: &UpdateCategory) -> ApiResult<Category> {
        self.client.put(&format!("/categories/{id}"), request).await
    }

    /// `DELETE /categories/:id`. Rejected by the server when the category
    /// still has children or products.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&format!("/categories/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_sends_explicit_null_parent() {
        let update = UpdateCategory {
            name_en: Some("Skincare".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "nameEn": "Skincare", "parentId": null })
        );
    }
}
