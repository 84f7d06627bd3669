//! Python wrappers for StructureFilter and ParserConfig

use pyo3::prelude::*;

use super::enums::PyStructureCategory;
use crate::types::{ParserConfig, StructureFilter};

#[pyclass(name = "StructureFilter", module = "dvhstat")]
#[derive(Clone, Debug)]
pub struct PyStructureFilter {
    pub(crate) inner: StructureFilter,
}

#[pymethods]
impl PyStructureFilter {
    #[new]
    #[pyo3(signature = (search=None, category=None))]
    fn new(search: Option<String>, category: Option<PyStructureCategory>) -> Self {
        Self {
            inner: StructureFilter {
                search,
                category: category.map(|c| c.inner),
            },
        }
    }

    #[getter]
    fn search(&self) -> Option<String> {
        self.inner.search.clone()
    }

    #[getter]
    fn category(&self) -> Option<PyStructureCategory> {
        self.inner.category.map(Into::into)
    }

    /// Checks whether a structure name passes the filter
    fn matches(&self, name: &str) -> bool {
        self.inner.matches(name)
    }

    /// Returns the names that pass the filter, in input order
    fn apply(&self, names: Vec<String>) -> Vec<String> {
        names.into_iter().filter(|n| self.inner.matches(n)).collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "StructureFilter(search={:?}, category={})",
            self.inner.search,
            self.inner
                .category
                .map(|c| c.simple_name())
                .unwrap_or("None")
        )
    }
}

#[pyclass(name = "ParserConfig", module = "dvhstat")]
#[derive(Clone, Debug)]
pub struct PyParserConfig {
    pub(crate) inner: ParserConfig,
}

#[pymethods]
impl PyParserConfig {
    #[new]
    #[pyo3(signature = (stats_window=10, target_marker="PTV".to_string(), compute_homogeneity=true))]
    fn new(stats_window: usize, target_marker: String, compute_homogeneity: bool) -> Self {
        Self {
            inner: ParserConfig {
                stats_window,
                target_marker,
                compute_homogeneity,
            },
        }
    }

    #[getter]
    fn stats_window(&self) -> usize {
        self.inner.stats_window
    }

    #[getter]
    fn target_marker(&self) -> String {
        self.inner.target_marker.clone()
    }

    #[getter]
    fn compute_homogeneity(&self) -> bool {
        self.inner.compute_homogeneity
    }

    fn __repr__(&self) -> String {
        format!(
            "ParserConfig(stats_window={}, target_marker={:?}, compute_homogeneity={})",
            self.inner.stats_window, self.inner.target_marker, self.inner.compute_homogeneity
        )
    }
}
