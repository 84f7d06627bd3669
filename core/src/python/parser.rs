//! Python entry points for parsing reports

use pyo3::prelude::*;

use super::errors::convert_error;
use super::filter::PyParserConfig;
use super::result::PyParseResult;
use super::utils::path_to_pathbuf;
use crate::api::DvhReader;
use crate::types::ParserConfig;

fn config_or_default(config: Option<&PyParserConfig>) -> ParserConfig {
    config.map(|c| c.inner.clone()).unwrap_or_default()
}

/// Parse a DVH report from raw bytes
///
/// Args:
///     data: File contents (UTF-8, optional BOM)
///     config: Optional ParserConfig
///
/// Returns:
///     ParseResult: Parsed report
///
/// Raises:
///     DecodeError: If the bytes are not valid UTF-8
///
/// Example:
///     >>> from dvhstat import parse_report
///     >>> result = parse_report(open("plan_dvh.txt", "rb").read())
///     >>> result.stats("PTV_60")["Homogeneity Index"]
#[pyfunction]
#[pyo3(name = "parse_report", signature = (data, config=None))]
pub fn py_parse_report(data: &[u8], config: Option<&PyParserConfig>) -> PyResult<PyParseResult> {
    DvhReader::parse_bytes_with_config(data, config_or_default(config))
        .map(Into::into)
        .map_err(convert_error)
}

/// Parse a DVH report from already decoded text
#[pyfunction]
#[pyo3(name = "parse_text", signature = (text, config=None))]
pub fn py_parse_text(text: &str, config: Option<&PyParserConfig>) -> PyParseResult {
    DvhReader::parse_str_with_config(text, config_or_default(config)).into()
}

/// Parse a DVH report file
///
/// Args:
///     path: Path to the report (str or pathlib.Path)
///     config: Optional ParserConfig
///
/// Raises:
///     ReadError: If the file cannot be read
///     DecodeError: If the file is not valid UTF-8
#[pyfunction]
#[pyo3(name = "parse_file", signature = (path, config=None))]
pub fn py_parse_file(
    path: &Bound<'_, PyAny>,
    config: Option<&PyParserConfig>,
) -> PyResult<PyParseResult> {
    let path_buf = path_to_pathbuf(path)?;
    DvhReader::parse_file_with_config(path_buf, config_or_default(config))
        .map(Into::into)
        .map_err(convert_error)
}

/// Append "%" to a statistic unless it already ends with one
#[pyfunction]
#[pyo3(name = "with_percent_suffix")]
pub fn py_with_percent_suffix(value: &str) -> String {
    crate::cli::format::with_percent_suffix(value)
}
