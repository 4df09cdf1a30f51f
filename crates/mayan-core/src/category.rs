//! # Category Tree Composer
//!
//! Category administration works on a forest of categories linked by
//! `parent_id`. The remote API serves the forest in two shapes - hierarchical
//! (children populated) and flat (`?flat=true`) - and this module bridges the
//! two for the admin screens:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Category Tree Operations                              │
//! │                                                                         │
//! │  flat list ───► build_tree() ────► forest (children populated)          │
//! │                                                                         │
//! │  forest ──────► exclusion_set() ─► {edited node + all descendants}      │
//! │                                     (kept out of the parent dropdown,   │
//! │                                      so a node can't become its own     │
//! │                                      ancestor)                          │
//! │                                                                         │
//! │  forest ──────► flatten() ───────► (category, level) rows honoring      │
//! │                                     per-node expand/collapse state      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Real catalogs are shallow (2-3 levels), so plain recursion is fine; the
//! walks terminate because the source forest is finite and acyclic. The
//! authoritative cycle prevention lives server-side - the exclusion set is
//! the client's edit-time heuristic, nothing more.

use std::collections::HashSet;

use crate::types::Category;

// =============================================================================
// Tree Composition
// =============================================================================

/// Groups a flat `parent_id`-linked list into a forest.
///
/// Children end up under their parent's `children`; categories whose
/// `parent_id` doesn't resolve to anything in the list are attached at the
/// root rather than dropped. Sibling order follows the input order.
pub fn build_tree(flat: Vec<Category>) -> Vec<Category> {
    let known_ids: HashSet<String> = flat.iter().map(|c| c.id.clone()).collect();

    let (children, roots): (Vec<Category>, Vec<Category>) = flat.into_iter().partition(|c| {
        c.parent_id
            .as_ref()
            .is_some_and(|p| known_ids.contains(p))
    });

    let mut roots: Vec<Category> = roots;
    let mut remaining = children;

    // Repeatedly attach nodes whose parent is already placed. Each pass
    // places at least one node for acyclic input, so this terminates.
    while !remaining.is_empty() {
        let mut unplaced = Vec::with_capacity(remaining.len());
        let mut placed_any = false;

        for node in remaining {
            let parent_id = node.parent_id.clone().unwrap_or_default();
            if attach_under(&mut roots, &parent_id, node.clone()) {
                placed_any = true;
            } else {
                unplaced.push(node);
            }
        }

        if !placed_any {
            // Defensive: a parent cycle slipped past the server. Surface the
            // nodes at the root instead of looping forever.
            roots.extend(unplaced);
            break;
        }
        remaining = unplaced;
    }

    roots
}

fn attach_under(nodes: &mut [Category], parent_id: &str, child: Category) -> bool {
    for node in nodes.iter_mut() {
        if node.id == parent_id {
            node.children.push(child);
            return true;
        }
        if attach_under(&mut node.children, parent_id, child.clone()) {
            return true;
        }
    }
    false
}

// =============================================================================
// Descendant Exclusion
// =============================================================================

/// Collects the id of the category being edited plus every descendant id,
/// depth-first. Any category in this set must not be offered as a parent -
/// that is how the edit form prevents a node from becoming its own ancestor.
///
/// The set always contains the edited id itself, even when the id is absent
/// from the forest (a freshly created category can't parent itself either).
pub fn exclusion_set(forest: &[Category], edited_id: &str) -> HashSet<String> {
    let mut excluded = HashSet::new();
    excluded.insert(edited_id.to_string());

    if let Some(node) = find(forest, edited_id) {
        collect_descendants(node, &mut excluded);
    }

    excluded
}

fn find<'a>(nodes: &'a [Category], id: &str) -> Option<&'a Category> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find(&node.children, id) {
            return Some(found);
        }
    }
    None
}

fn collect_descendants(node: &Category, out: &mut HashSet<String>) {
    for child in &node.children {
        out.insert(child.id.clone());
        collect_descendants(child, out);
    }
}

/// Filters a flat category list down to the valid parent options for the
/// category being edited.
pub fn parent_options<'a>(
    flat: &'a [Category],
    forest: &[Category],
    edited_id: &str,
) -> Vec<&'a Category> {
    let excluded = exclusion_set(forest, edited_id);
    flat.iter().filter(|c| !excluded.contains(&c.id)).collect()
}

// =============================================================================
// Flattening for Display
// =============================================================================

/// One row of the rendered category list.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow<'a> {
    pub category: &'a Category,
    /// Nesting depth; roots are level 0, children render at parent + 1.
    pub level: usize,
    /// Whether this node has children (drives the expand/collapse affordance).
    pub has_children: bool,
}

/// Depth-first flattening of the forest into display rows.
///
/// Children of a node are emitted only when its id is in `expanded` -
/// expand/collapse is independent per-node state keyed by category id,
/// defaulting to collapsed.
pub fn flatten<'a>(forest: &'a [Category], expanded: &HashSet<String>) -> Vec<TreeRow<'a>> {
    let mut rows = Vec::new();
    for node in forest {
        flatten_into(node, 0, expanded, &mut rows);
    }
    rows
}

fn flatten_into<'a>(
    node: &'a Category,
    level: usize,
    expanded: &HashSet<String>,
    rows: &mut Vec<TreeRow<'a>>,
) {
    rows.push(TreeRow {
        category: node,
        level,
        has_children: !node.children.is_empty(),
    });

    if expanded.contains(&node.id) {
        for child in &node.children {
            flatten_into(child, level + 1, expanded, rows);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

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

    /// A ── B ── C, plus an unrelated root D.
    fn sample_forest() -> Vec<Category> {
        build_tree(vec![
            cat("A", None),
            cat("B", Some("A")),
            cat("C", Some("B")),
            cat("D", None),
        ])
    }

    #[test]
    fn test_build_tree_nests_children() {
        let forest = sample_forest();
        assert_eq!(forest.len(), 2);
        let a = &forest[0];
        assert_eq!(a.id, "A");
        assert_eq!(a.children.len(), 1);
        assert_eq!(a.children[0].id, "B");
        assert_eq!(a.children[0].children[0].id, "C");
    }

    #[test]
    fn test_build_tree_orphans_become_roots() {
        let forest = build_tree(vec![cat("X", Some("gone")), cat("Y", None)]);
        assert_eq!(forest.len(), 2);
    }

    #[test]
    fn test_build_tree_out_of_order_input() {
        // Child listed before its parent still nests correctly.
        let forest = build_tree(vec![cat("C", Some("B")), cat("B", Some("A")), cat("A", None)]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children[0].children[0].id, "C");
    }

    /// Editing A must exclude {A, B, C} from selectable parents.
    #[test]
    fn test_exclusion_set_covers_descendants() {
        let forest = sample_forest();
        let excluded = exclusion_set(&forest, "A");
        let expected: HashSet<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        assert_eq!(excluded, expected);
    }

    #[test]
    fn test_exclusion_set_always_contains_self() {
        let forest = sample_forest();
        // Leaf node: only itself.
        assert_eq!(exclusion_set(&forest, "C").len(), 1);
        // Unknown id still excludes itself.
        assert!(exclusion_set(&forest, "new").contains("new"));
    }

    #[test]
    fn test_parent_options_filter() {
        let flat = vec![
            cat("A", None),
            cat("B", Some("A")),
            cat("C", Some("B")),
            cat("D", None),
        ];
        let forest = sample_forest();

        let options = parent_options(&flat, &forest, "A");
        let ids: Vec<&str> = options.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["D"]);
    }

    #[test]
    fn test_flatten_collapsed_by_default() {
        let forest = sample_forest();
        let rows = flatten(&forest, &HashSet::new());
        let ids: Vec<&str> = rows.iter().map(|r| r.category.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "D"]);
        assert!(rows[0].has_children);
        assert!(!rows[1].has_children);
    }

    #[test]
    fn test_flatten_expands_per_node() {
        let forest = sample_forest();

        let mut expanded = HashSet::new();
        expanded.insert("A".to_string());
        let rows = flatten(&forest, &expanded);
        let ids: Vec<&str> = rows.iter().map(|r| r.category.id.as_str()).collect();
        // B is visible but C stays hidden until B is expanded too.
        assert_eq!(ids, vec!["A", "B", "D"]);
        assert_eq!(rows[1].level, 1);

        expanded.insert("B".to_string());
        let rows = flatten(&forest, &expanded);
        let ids: Vec<&str> = rows.iter().map(|r| r.category.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C", "D"]);
        assert_eq!(rows[2].level, 2);
    }

    #[test]
    fn test_flatten_levels_increment() {
        let forest = sample_forest();
        let expanded: HashSet<String> =
            ["A", "B"].iter().map(|s| s.to_string()).collect();
        for window in flatten(&forest, &expanded).windows(2) {
            // A child row is always exactly one level below its parent row.
            if window[1].level > window[0].level {
                assert_eq!(window[1].level, window[0].level + 1);
            }
        }
    }
}
