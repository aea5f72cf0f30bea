//! Cache-key namespaces of the cached operations.

use std::fmt;

/// The fixed prefix each cached operation family puts in front of its keys.
///
/// Operations that share a family also share a namespace: the CRN lookup and
/// the by-id lookup both use [`Namespace::GetOrganization`], the timeline list
/// and single activity both use [`Namespace::GetActivitiesTimeline`]. Their
/// argument sets keep the keys apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Organization search.
    SearchOrganization,
    /// Single organization, by CRN or by id.
    GetOrganization,
    /// Organization categories.
    GetOrganizationCategories,
    /// Activities grouped by focus.
    ActivitiesByFocus,
    /// Activities grouped by year.
    ActivitiesByYear,
    /// Activities grouped by sector council.
    ActivitiesBySectorCouncil,
    /// Activities timeline and activity detail.
    GetActivitiesTimeline,
}

impl Namespace {
    /// Returns the prefix string used in cache keys.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SearchOrganization => "search-organization",
            Self::GetOrganization => "get-organization",
            Self::GetOrganizationCategories => "get-organization-categories",
            Self::ActivitiesByFocus => "activities-by-focus",
            Self::ActivitiesByYear => "activities-by-year",
            Self::ActivitiesBySectorCouncil => "activities-by-sector-council",
            Self::GetActivitiesTimeline => "get-activities-timeline",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_strings() {
        assert_eq!(Namespace::SearchOrganization.as_str(), "search-organization");
        assert_eq!(Namespace::GetOrganization.as_str(), "get-organization");
        assert_eq!(
            Namespace::ActivitiesBySectorCouncil.to_string(),
            "activities-by-sector-council"
        );
        assert_eq!(
            Namespace::GetActivitiesTimeline.to_string(),
            "get-activities-timeline"
        );
    }
}
