//! # Category Administration
//!
//! The category screen works on both category shapes at once: the
//! hierarchical forest drives the tree view, the flat list drives the parent
//! dropdown. The dropdown excludes the edited node and all its descendants,
//! which is how the client keeps a node from becoming its own ancestor.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Category Screen Data Flow                             │
//! │                                                                         │
//! │  load() ──► GET /categories  +  GET /categories?flat=true  (joined)     │
//! │                 │                      │                                │
//! │                 ▼                      ▼                                │
//! │             tree view            parent dropdown                        │
//! │          (expand/collapse      (minus exclusion set                     │
//! │           per node id)          of the edited node)                     │
//! │                                                                         │
//! │  create/update/delete ──► API call ──► load() again                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use mayan_api::resources::categories::{CreateCategory, UpdateCategory};
use mayan_api::{ApiClient, ApiError};
use mayan_core::category::{self, TreeRow};
use mayan_core::{validation, Category};
use tracing::info;

use crate::error::{StorefrontError, StorefrontResult};

// =============================================================================
// Workspace (screen state)
// =============================================================================

/// The category screen's working state: both list shapes plus the
/// per-node expand/collapse set (collapsed by default).
#[derive(Debug, Clone, Default)]
pub struct CategoryWorkspace {
    /// Hierarchical forest (children populated).
    pub forest: Vec<Category>,
    /// Flat list for the parent dropdown.
    pub flat: Vec<Category>,
    expanded: HashSet<String>,
}

impl CategoryWorkspace {
    /// Display rows for the tree view, honoring expand/collapse state.
    pub fn rows(&self) -> Vec<TreeRow<'_>> {
        category::flatten(&self.forest, &self.expanded)
    }

    /// Toggles one node's expansion.
    pub fn toggle(&mut self, category_id: &str) {
        if !self.expanded.remove(category_id) {
            self.expanded.insert(category_id.to_string());
        }
    }

    /// Whether a node is currently expanded.
    pub fn is_expanded(&self, category_id: &str) -> bool {
        self.expanded.contains(category_id)
    }

    /// Valid parent choices when editing `category_id`: every category
    /// except the node itself and its descendants.
    pub fn parent_options(&self, category_id: &str) -> Vec<&Category> {
        category::parent_options(&self.flat, &self.forest, category_id)
    }

    /// Parent choices for a brand-new category: everything.
    pub fn all_parents(&self) -> Vec<&Category> {
        self.flat.iter().collect()
    }
}

// =============================================================================
// Service
// =============================================================================

/// The category administration flow.
#[derive(Debug, Clone)]
pub struct CategoryAdmin {
    api: ApiClient,
}

impl CategoryAdmin {
    pub fn new(api: ApiClient) -> Self {
        CategoryAdmin { api }
    }

    /// Fetches both category shapes concurrently. Expansion state resets to
    /// all-collapsed, as on first render.
    pub async fn load(&self) -> StorefrontResult<CategoryWorkspace> {
        let (forest, flat) =
            tokio::try_join!(self.api.categories().list(), self.api.categories().list_flat())?;

        Ok(CategoryWorkspace {
            forest,
            flat,
            expanded: HashSet::new(),
        })
    }

    /// Creates a category and returns the re-fetched workspace.
    pub async fn create(
        &self,
        request: &CreateCategory,
    ) -> StorefrontResult<CategoryWorkspace> {
        validation::validate_name("nameEn", &request.name_en)
            .map_err(mayan_core::CoreError::from)?;
        validation::validate_name("nameAr", &request.name_ar)
            .map_err(mayan_core::CoreError::from)?;

        let created = self.api.categories().create(request).await?;
        info!(category = %created.id, "category created");
        self.load().await
    }

    /// Updates a category and returns the re-fetched workspace.
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateCategory,
    ) -> StorefrontResult<CategoryWorkspace> {
        self.api.categories().update(id, request).await?;
        info!(category = %id, "category updated");
        self.load().await
    }

    /// Deletes a category and returns the re-fetched workspace.
    ///
    /// The server rejects deleting a category that still has children or
    /// products; the rejection surfaces as the generic bilingual message -
    /// no finer-grained diagnosis is attempted.
    pub async fn delete(&self, id: &str) -> StorefrontResult<CategoryWorkspace> {
        match self.api.categories().delete(id).await {
            Ok(()) => {
                info!(category = %id, "category deleted");
                self.load().await
            }
            Err(ApiError::Status { status, .. }) if (400..500).contains(&status) => {
                Err(StorefrontError::CategoryNotDeletable)
            }
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mayan_core::category::build_tree;

    fn cat(id: &str, parent: Option<&str>) -> Category {
        Category {
            id: id.to_string(),
            name_en: format!("Category {}", id),
            name_ar: format!("فئة {}", id),
            description: None,
            parent_id: parent.map(str::to_string),
            children: Vec::new(),
            counts: None,
        }
    }

    fn workspace() -> CategoryWorkspace {
        let flat = vec![
            cat("A", None),
            cat("B", Some("A")),
            cat("C", Some("B")),
            cat("D", None),
        ];
        CategoryWorkspace {
            forest: build_tree(flat.clone()),
            flat,
            expanded: HashSet::new(),
        }
    }

    #[test]
    fn test_parent_options_exclude_self_and_descendants() {
        let ws = workspace();
        let ids: Vec<&str> = ws
            .parent_options("A")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["D"]);
    }

    #[test]
    fn test_parent_options_for_leaf_exclude_only_self() {
        let ws = workspace();
        let ids: Vec<&str> = ws
            .parent_options("C")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["A", "B", "D"]);
    }

    #[test]
    fn test_rows_default_collapsed() {
        let ws = workspace();
        assert_eq!(ws.rows().len(), 2); // A and D only
    }

    #[test]
    fn test_toggle_expands_and_collapses() {
        let mut ws = workspace();

        ws.toggle("A");
        assert!(ws.is_expanded("A"));
        assert_eq!(ws.rows().len(), 3); // A, B, D

        ws.toggle("A");
        assert!(!ws.is_expanded("A"));
        assert_eq!(ws.rows().len(), 2);
    }
}
