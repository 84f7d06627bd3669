//! Python wrapper for the structure taxonomy

use pyo3::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::macros::impl_py_from;
use crate::types::StructureCategory;

#[pyclass(name = "StructureCategory", module = "dvhstat")]
#[derive(Clone, Debug)]
pub struct PyStructureCategory {
    pub(crate) inner: StructureCategory,
}

#[pymethods]
impl PyStructureCategory {
    #[classattr]
    const TARGET: Self = Self {
        inner: StructureCategory::Target,
    };
    #[classattr]
    const ORGAN_AT_RISK: Self = Self {
        inner: StructureCategory::OrganAtRisk,
    };
    #[classattr]
    const OTHER: Self = Self {
        inner: StructureCategory::Other,
    };

    /// Returns the first category a structure name belongs to
    #[staticmethod]
    fn classify(name: &str) -> Self {
        StructureCategory::classify(name).into()
    }

    /// Parse a category from "targets", "oars" or "other"
    #[staticmethod]
    #[allow(clippy::should_implement_trait)]
    fn from_str(s: &str) -> PyResult<Self> {
        StructureCategory::from_str(s)
            .map(Into::into)
            .ok_or_else(|| {
                pyo3::exceptions::PyValueError::new_err(format!("Unknown category: {}", s))
            })
    }

    /// Checks whether a structure name belongs to this category
    fn matches(&self, name: &str) -> bool {
        self.inner.matches(name)
    }

    pub fn simple_name(&self) -> &'static str {
        self.inner.simple_name()
    }

    fn __str__(&self) -> String {
        self.inner.simple_name().to_string()
    }

    fn __repr__(&self) -> String {
        format!("StructureCategory.{:?}", self.inner)
    }

    fn __eq__(&self, other: &PyStructureCategory) -> bool {
        self.inner == other.inner
    }

    fn __hash__(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.inner.hash(&mut hasher);
        hasher.finish()
    }

    #[getter]
    fn value(&self) -> &str {
        self.inner.simple_name()
    }
}

impl_py_from!(PyStructureCategory, StructureCategory);
