//! Recipe endpoints - products assembled from component products.

use mayan_core::{Product, Recipe, RecipeCheck, RecipeComponent};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// `POST /recipes` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipe {
    pub name: String,
    pub name_ar: String,
    pub product_id: String,
    pub components: Vec<RecipeComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// `PUT /recipes/:id` body.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<RecipeComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Accessor for `/recipes` endpoints.
#[derive(Debug)]
pub struct RecipesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl RecipesApi<'_> {
    /// `GET /recipes`.
    pub async fn list(&self) -> ApiResult<Vec<Recipe>> {
        self.client.get("/recipes").await
    }

    /// `POST /recipes`.
    pub async fn create(&self, request: &CreateRecipe) -> ApiResult<Recipe> {
        self.client.post("/recipes", request).await
    }

    /// `PUT /recipes/:id`.
    pub async fn update(&self, id: &str, request: &UpdateRecipe) -> ApiResult<Recipe> {
        self.client.put(&format!("/recipes/{id}"), request).await
    }

    /// `DELETE /recipes/:id`.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&format!("/recipes/{id}")).await
    }

    /// `GET /recipes/product/:id` - the recipe behind a sellable product.
    pub async fn for_product(&self, product_id: &str) -> ApiResult<Recipe> {
        self.client
            .get(&format!("/recipes/product/{product_id}"))
            .await
    }

    /// `GET /recipes/product/:id/check` - component stock check.
    pub async fn check(&self, product_id: &str) -> ApiResult<RecipeCheck> {
        self.client
            .get(&format!("/recipes/product/{product_id}/check"))
            .await
    }

    /// `GET /recipes/products-with-recipes`.
    pub async fn products_with_recipes(&self) -> ApiResult<Vec<Product>> {
        self.client.get("/recipes/products-with-recipes").await
    }
}
