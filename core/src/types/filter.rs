use crate::types::StructureCategory;

/// Filter selecting structures by name
///
/// A structure passes when its name contains the search term
/// (case-insensitive) and, if a category is set, belongs to that category.
///
/// # Example
///
/// ```
/// use dvhstat_core::{StructureCategory, StructureFilter};
///
/// let filter = StructureFilter::default()
///     .with_search("lung")
///     .with_category(StructureCategory::OrganAtRisk);
///
/// assert!(filter.matches("Lung_L"));
/// assert!(!filter.matches("Heart"));
/// assert!(!filter.matches("PTV_60"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct StructureFilter {
    /// Case-insensitive name fragment; `None` or empty matches everything
    pub search: Option<String>,

    /// Required category; `None` allows all categories
    pub category: Option<StructureCategory>,
}

impl StructureFilter {
    /// Builder: Set the search term
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Builder: Restrict to a category
    pub fn with_category(mut self, category: StructureCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Returns true when the filter lets every structure through
    pub fn is_permissive(&self) -> bool {
        self.search.as_deref().map_or(true, str::is_empty) && self.category.is_none()
    }

    /// Checks whether a structure name passes the filter
    pub fn matches(&self, name: &str) -> bool {
        let search_ok = match self.search.as_deref() {
            Some(term) if !term.is_empty() => name.to_lowercase().contains(&term.to_lowercase()),
            _ => true,
        };
        search_ok && self.category.map_or(true, |c| c.matches(name))
    }

    /// Returns the names that pass the filter, in input order
    pub fn apply<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        names.into_iter().filter(|name| self.matches(name)).collect()
    }
}
