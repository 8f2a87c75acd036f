//! Error handling for Python bindings

use akshar_normalizer::NormalizerError;
use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::{create_exception, PyErr, PyResult};
use std::str::FromStr;

create_exception!(
    akshar,
    UnsupportedScriptError,
    PyValueError,
    "The language code has no registered script"
);

create_exception!(
    akshar,
    InvalidConfigurationError,
    PyValueError,
    "The normalizer configuration is invalid"
);

/// Convert a Rust NormalizerError to a Python exception
pub trait IntoPyErr {
    fn into_py_err(self) -> PyErr;
}

impl IntoPyErr for NormalizerError {
    fn into_py_err(self) -> PyErr {
        match self {
            NormalizerError::UnsupportedScript(_) => {
                UnsupportedScriptError::new_err(self.to_string())
            }
            NormalizerError::Io { .. } => PyOSError::new_err(self.to_string()),
            _ => InvalidConfigurationError::new_err(self.to_string()),
        }
    }
}

/// Parse a name with the normalizer's `FromStr` rules.
pub fn parse<T: FromStr<Err = NormalizerError>>(name: &str) -> PyResult<T> {
    name.parse().map_err(IntoPyErr::into_py_err)
}
