//! Python exception types for dvhstat
//!
//! This module defines Python exception classes that map to Rust error types.

// Suppress warnings from PyO3's create_exception! macro about gil-refs feature
#![allow(unexpected_cfgs)]

use pyo3::{create_exception, exceptions::PyException, prelude::*};

// Base exception
create_exception!(
    dvhstat,
    PyDvhError,
    PyException,
    "Base exception for all dvhstat errors"
);

// Specific exceptions
create_exception!(
    dvhstat,
    PyDecodeError,
    PyDvhError,
    "Report payload is not valid UTF-8 text"
);

create_exception!(
    dvhstat,
    PyReadError,
    PyDvhError,
    "Report file could not be read"
);

create_exception!(
    dvhstat,
    PySerializationError,
    PyDvhError,
    "Parse result could not be serialized"
);

/// Convert Rust DvhError to appropriate Python exception
pub fn convert_error(err: crate::error::DvhError) -> PyErr {
    match err {
        crate::error::DvhError::Decode(msg) => PyDecodeError::new_err(msg),
        crate::error::DvhError::Io(e) => PyReadError::new_err(format!("IO error: {}", e)),
        crate::error::DvhError::Serialization(msg) => PySerializationError::new_err(msg),
    }
}
