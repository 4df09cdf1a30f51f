//! # Catalog Service
//!
//! Storefront browsing: the homepage aggregate, product lists and search.
//!
//! The homepage needs four independent resources; they are fetched
//! concurrently and the page renders only once all of them resolve, with no
//! ordering guarantee between the requests themselves.

use mayan_api::resources::products::ProductFilter;
use mayan_api::ApiClient;
use mayan_core::{validation, Category, Product, Recipe, SiteSettings};
use tracing::debug;

use crate::error::StorefrontResult;

/// Everything the homepage renders.
#[derive(Debug, Clone)]
pub struct HomePage {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub recipes: Vec<Recipe>,
    pub settings: SiteSettings,
}

/// Storefront browsing flow.
#[derive(Debug, Clone)]
pub struct CatalogService {
    api: ApiClient,
}

impl CatalogService {
    pub fn new(api: ApiClient) -> Self {
        CatalogService { api }
    }

    /// Fetches the homepage aggregate: products, categories, recipes and
    /// site settings, concurrently. All four must resolve.
    pub async fn home(&self) -> StorefrontResult<HomePage> {
        let (products, categories, recipes, settings) = tokio::try_join!(
            self.api.products().list(&ProductFilter::default()),
            self.api.categories().list(),
            self.api.recipes().list(),
            self.api.settings().get(),
        )?;

        debug!(
            products = products.len(),
            categories = categories.len(),
            "homepage loaded"
        );

        Ok(HomePage {
            products,
            categories,
            recipes,
            settings,
        })
    }

    /// Product list for one category.
    pub async fn by_category(&self, category_id: &str) -> StorefrontResult<Vec<Product>> {
        Ok(self
            .api
            .products()
            .list(&ProductFilter {
                category_id: Some(category_id.to_string()),
                ..Default::default()
            })
            .await?)
    }

    /// Free-text product search.
    pub async fn search(&self, query: &str) -> StorefrontResult<Vec<Product>> {
        let query = validation::validate_search_query(query)
            .map_err(mayan_core::CoreError::from)?;

        let filter = if query.is_empty() {
            ProductFilter::default()
        } else {
            ProductFilter {
                search: Some(query),
                ..Default::default()
            }
        };

        Ok(self.api.products().list(&filter).await?)
    }

    /// A single product detail page.
    pub async fn product(&self, id: &str) -> StorefrontResult<Product> {
        Ok(self.api.products().get(id).await?)
    }
}
