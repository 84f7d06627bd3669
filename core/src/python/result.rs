//! Python wrappers for ParseResult, ReportMetadata and DoseVolumeCurve

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::errors::convert_error;
use super::filter::PyStructureFilter;
use super::utils::{option_f64_to_py, option_string_to_py};
use crate::api::ParseResult;
use crate::types::{DoseVolumeCurve, ReportMetadata, StructureStats};

/// Patient details from the report header
#[pyclass(name = "ReportMetadata", module = "dvhstat")]
#[derive(Clone)]
pub struct PyReportMetadata {
    pub(crate) inner: ReportMetadata,
}

#[pymethods]
impl PyReportMetadata {
    /// Patient name (if available)
    #[getter]
    fn name(&self, py: Python) -> PyObject {
        option_string_to_py(py, self.inner.name.clone())
    }

    /// Patient ID (if available)
    #[getter]
    fn id(&self, py: Python) -> PyObject {
        option_string_to_py(py, self.inner.id.clone())
    }

    /// Prescribed total dose in Gy (if available)
    #[getter]
    fn total_dose_gy(&self, py: Python) -> PyObject {
        option_f64_to_py(py, self.inner.total_dose_gy)
    }

    /// Convert metadata to dictionary
    pub fn to_dict(&self, py: Python) -> PyResult<Py<PyDict>> {
        let dict = PyDict::new_bound(py);
        dict.set_item("name", self.name(py))?;
        dict.set_item("id", self.id(py))?;
        dict.set_item("total_dose_gy", self.total_dose_gy(py))?;
        Ok(dict.unbind())
    }

    fn __repr__(&self) -> String {
        format!(
            "ReportMetadata(name={:?}, id={:?}, total_dose_gy={:?})",
            self.inner.name, self.inner.id, self.inner.total_dose_gy
        )
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// Cumulative dose-volume curve of one structure
#[pyclass(name = "DoseVolumeCurve", module = "dvhstat")]
#[derive(Clone)]
pub struct PyDoseVolumeCurve {
    pub(crate) inner: DoseVolumeCurve,
}

#[pymethods]
impl PyDoseVolumeCurve {
    /// Doses in cGy, in report order (NaN where unreadable)
    #[getter]
    fn doses(&self) -> Vec<f64> {
        self.inner.iter().map(|row| row.dose_cgy).collect()
    }

    /// Absolute volumes in cm³
    #[getter]
    fn volumes_cc(&self) -> Vec<f64> {
        self.inner.iter().map(|row| row.volume_cc).collect()
    }

    /// Relative volumes in percent
    #[getter]
    fn volumes_percent(&self) -> Vec<f64> {
        self.inner.iter().map(|row| row.volume_percent).collect()
    }

    /// Row nearest to a relative volume, as (dose_cgy, volume_cc, volume_percent)
    fn nearest_to_volume_percent(&self, percent: f64) -> Option<(f64, f64, f64)> {
        self.inner
            .nearest_to_volume_percent(percent)
            .map(|row| (row.dose_cgy, row.volume_cc, row.volume_percent))
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!("DoseVolumeCurve(rows={})", self.inner.len())
    }
}

/// Structured content of one DVH report
#[pyclass(name = "ParseResult", module = "dvhstat")]
#[derive(Clone)]
pub struct PyParseResult {
    pub(crate) inner: ParseResult,
}

#[pymethods]
impl PyParseResult {
    /// Patient details
    #[getter]
    fn metadata(&self) -> PyReportMetadata {
        PyReportMetadata {
            inner: self.inner.metadata().clone(),
        }
    }

    /// Names of all structures, in report order
    #[getter]
    fn structure_names(&self) -> Vec<String> {
        self.inner.structure_names().map(str::to_string).collect()
    }

    /// Names of the structures that have a curve
    fn curve_names(&self) -> Vec<String> {
        self.inner.curves().keys().map(str::to_string).collect()
    }

    /// Curve of one structure, or None
    fn curve(&self, structure: &str) -> Option<PyDoseVolumeCurve> {
        self.inner
            .curve(structure)
            .map(|curve| PyDoseVolumeCurve {
                inner: curve.clone(),
            })
    }

    /// Statistics of one structure as an ordered dict, or None
    fn stats(&self, py: Python, structure: &str) -> PyResult<Option<Py<PyDict>>> {
        self.inner
            .stats_for(structure)
            .map(|stats| stats_to_py_dict(py, stats))
            .transpose()
    }

    /// Returns a copy holding only the structures that pass the filter
    fn filtered(&self, filter: &PyStructureFilter) -> PyParseResult {
        self.inner.filtered(&filter.inner).into()
    }

    /// Serialize the result as JSON (NaN values become null)
    fn to_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(convert_error)
    }

    /// Restore a result from JSON produced by to_json()
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<PyParseResult> {
        ParseResult::from_json(json)
            .map(Into::into)
            .map_err(convert_error)
    }

    fn __eq__(&self, other: &PyParseResult) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        format!(
            "ParseResult(patient={}, structures={}, curves={})",
            self.inner.metadata(),
            self.inner.structure_names().count(),
            self.inner.curves().len()
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

impl From<ParseResult> for PyParseResult {
    fn from(inner: ParseResult) -> Self {
        Self { inner }
    }
}

fn stats_to_py_dict(py: Python, stats: &StructureStats) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    for (key, value) in stats.iter() {
        dict.set_item(key, value)?;
    }
    Ok(dict.unbind())
}
