//! Python bindings for dvhstat
//!
//! This module provides PyO3 bindings enabling Python users to parse
//! DVH text exports into structured results.

// Suppress false positive warnings from PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod enums;
mod errors;
mod filter;
#[macro_use]
mod macros;
mod parser;
mod result;
mod utils;

pub use enums::*;
pub use errors::*;
pub use filter::*;
pub use parser::*;
pub use result::*;

/// Python module definition
#[pymodule]
fn _dvhstat(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Register exception classes
    m.add("DvhError", py.get_type_bound::<errors::PyDvhError>())?;
    m.add("DecodeError", py.get_type_bound::<errors::PyDecodeError>())?;
    m.add("ReadError", py.get_type_bound::<errors::PyReadError>())?;
    m.add(
        "SerializationError",
        py.get_type_bound::<errors::PySerializationError>(),
    )?;

    // Register enum classes
    m.add_class::<PyStructureCategory>()?;

    // Register data structure classes
    m.add_class::<PyReportMetadata>()?;
    m.add_class::<PyDoseVolumeCurve>()?;
    m.add_class::<PyParseResult>()?;
    m.add_class::<PyStructureFilter>()?;
    m.add_class::<PyParserConfig>()?;

    // Register functions
    m.add_function(wrap_pyfunction!(py_parse_report, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_text, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_file, m)?)?;
    m.add_function(wrap_pyfunction!(py_with_percent_suffix, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
