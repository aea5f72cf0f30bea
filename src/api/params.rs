//! Typed filter parameters for the cached operations.
//!
//! Each filter type declares, in [`OperationParameters::PARAMETERS`], the
//! ordered names of the optional parameters its operation accepts. Only the
//! parameters a caller actually set take part in the cache key and the query
//! string; unset and empty values are left out.
//!
//! # Example
//!
//! ```rust
//! use strategy_api::api::{OperationParameters, OrganizationSearch};
//!
//! let search = OrganizationSearch::new().title("ministry").type_id(5);
//! let arguments = search.to_arguments();
//!
//! assert!(arguments.contains("title"));
//! assert!(arguments.contains("type.id"));
//! assert!(!arguments.contains("type"));
//! ```

use serde_json::Value;

use crate::cache::Arguments;

/// Declares the parameters of one cached operation.
pub trait OperationParameters {
    /// Parameter names, in declaration order.
    const PARAMETERS: &'static [&'static str];

    /// Parameters that filter on a related resource.
    ///
    /// Each one is sent as `<name>.id` instead of `<name>`.
    const RELATIONS: &'static [&'static str] = &[];

    /// Returns the value of every declared parameter, aligned with
    /// [`PARAMETERS`](Self::PARAMETERS). `None` marks a parameter that was
    /// not supplied.
    fn values(&self) -> Vec<Option<Value>>;

    /// Builds the operation arguments from the supplied parameters.
    fn to_arguments(&self) -> Arguments {
        let mut arguments = Arguments::new();
        for (name, value) in Self::PARAMETERS.iter().zip(self.values()) {
            if let Some(value) = value {
                arguments.insert(*name, value);
            }
        }
        for relation in Self::RELATIONS {
            arguments.rename(relation, format!("{relation}.id"));
        }
        arguments
    }
}

/// Filters for [`StrategyClient::search_organizations`](crate::StrategyClient::search_organizations).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrganizationSearch {
    /// Title to search for.
    pub title: Option<String>,
    /// Organization type id.
    pub type_id: Option<u64>,
    /// Organization group id.
    pub group_id: Option<u64>,
}

impl OrganizationSearch {
    /// Creates a search with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Filters by organization type.
    #[must_use]
    pub const fn type_id(mut self, type_id: u64) -> Self {
        self.type_id = Some(type_id);
        self
    }

    /// Filters by organization group.
    #[must_use]
    pub const fn group_id(mut self, group_id: u64) -> Self {
        self.group_id = Some(group_id);
        self
    }
}

impl OperationParameters for OrganizationSearch {
    const PARAMETERS: &'static [&'static str] = &["title", "type", "group"];
    const RELATIONS: &'static [&'static str] = &["type", "group"];

    fn values(&self) -> Vec<Option<Value>> {
        vec![
            self.title.clone().map(Value::from),
            self.type_id.map(Value::from),
            self.group_id.map(Value::from),
        ]
    }
}

/// Filters for [`StrategyClient::get_organization_categories`](crate::StrategyClient::get_organization_categories).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    /// Category tree level.
    pub level: Option<u32>,
    /// Parent category id.
    pub parent_id: Option<u64>,
}

impl CategoryFilter {
    /// Creates a filter that matches every category.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by tree level.
    ///
    /// Level `0` counts as not supplied.
    #[must_use]
    pub const fn level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    /// Filters by parent category.
    #[must_use]
    pub const fn parent_id(mut self, parent_id: u64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

impl OperationParameters for CategoryFilter {
    const PARAMETERS: &'static [&'static str] = &["level", "parent"];
    const RELATIONS: &'static [&'static str] = &["parent"];

    fn values(&self) -> Vec<Option<Value>> {
        vec![self.level.map(Value::from), self.parent_id.map(Value::from)]
    }
}

/// Filter shared by the activities-by-focus, by-year and by-sector-council
/// operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Organization id.
    pub organization_id: Option<u64>,
}

impl ActivityFilter {
    /// Creates a filter that matches activities of every organization.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to one organization.
    #[must_use]
    pub const fn organization_id(mut self, organization_id: u64) -> Self {
        self.organization_id = Some(organization_id);
        self
    }
}

impl OperationParameters for ActivityFilter {
    const PARAMETERS: &'static [&'static str] = &["organization"];

    fn values(&self) -> Vec<Option<Value>> {
        vec![self.organization_id.map(Value::from)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_parameters_are_omitted() {
        assert!(OrganizationSearch::new().to_arguments().is_empty());
        assert!(CategoryFilter::new().to_arguments().is_empty());
        assert!(ActivityFilter::new().to_arguments().is_empty());
    }

    #[test]
    fn test_relations_are_renamed() {
        let arguments = OrganizationSearch::new()
            .title("ministry")
            .type_id(5)
            .group_id(9)
            .to_arguments();

        assert_eq!(arguments.get("title"), Some(&json!("ministry")));
        assert_eq!(arguments.get("type.id"), Some(&json!(5)));
        assert_eq!(arguments.get("group.id"), Some(&json!(9)));
        assert!(!arguments.contains("type"));
        assert!(!arguments.contains("group"));
    }

    #[test]
    fn test_category_filter_drops_zero_level() {
        let arguments = CategoryFilter::new().level(0).parent_id(3).to_arguments();

        assert!(!arguments.contains("level"));
        assert_eq!(arguments.get("parent.id"), Some(&json!(3)));
        assert_eq!(arguments.len(), 1);
    }

    #[test]
    fn test_empty_title_counts_as_unset() {
        let arguments = OrganizationSearch::new().title("").to_arguments();
        assert!(arguments.is_empty());
    }

    #[test]
    fn test_activity_filter_keeps_plain_name() {
        let arguments = ActivityFilter::new().organization_id(42).to_arguments();
        assert_eq!(arguments.get("organization"), Some(&json!(42)));
    }

    #[test]
    fn test_values_align_with_parameters() {
        let search = OrganizationSearch::new().group_id(1);
        assert_eq!(
            search.values().len(),
            OrganizationSearch::PARAMETERS.len()
        );
        assert_eq!(
            CategoryFilter::new().values().len(),
            CategoryFilter::PARAMETERS.len()
        );
    }
}
