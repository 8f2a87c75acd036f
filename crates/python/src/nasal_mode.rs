//! Python wrapper for the NasalMode enum

use akshar_normalizer::NasalMode;
use pyo3::prelude::*;

use crate::error::parse;

/// Python wrapper for NasalMode
#[pyclass(name = "NasalMode")]
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct PyNasalMode {
    pub(crate) inner: NasalMode,
}

#[pymethods]
impl PyNasalMode {
    /// Leave nasals untouched
    #[staticmethod]
    fn none() -> Self {
        Self {
            inner: NasalMode::None,
        }
    }

    /// Class nasal + halant before its own class becomes anusvaara
    #[staticmethod]
    fn anusvaara_strict() -> Self {
        Self {
            inner: NasalMode::AnusvaaraStrict,
        }
    }

    /// Any class nasal + halant becomes anusvaara
    #[staticmethod]
    fn anusvaara_relaxed() -> Self {
        Self {
            inner: NasalMode::AnusvaaraRelaxed,
        }
    }

    /// Anusvaara before a stop becomes the class nasal + halant
    #[staticmethod]
    fn nasal_consonants() -> Self {
        Self {
            inner: NasalMode::NasalConsonants,
        }
    }

    /// Parse a mode name (`"anusvaara-strict"`, `"to_anusvaara_strict"`, ...)
    #[staticmethod]
    fn from_name(name: &str) -> PyResult<Self> {
        Ok(Self {
            inner: parse(name)?,
        })
    }

    fn __repr__(&self) -> String {
        let name = match self.inner {
            NasalMode::None => "None",
            NasalMode::AnusvaaraStrict => "AnusvaaraStrict",
            NasalMode::AnusvaaraRelaxed => "AnusvaaraRelaxed",
            NasalMode::NasalConsonants => "NasalConsonants",
        };
        format!("NasalMode.{}", name)
    }

    fn __str__(&self) -> &'static str {
        self.inner.as_str()
    }

    /// Hash support for using in sets/dicts
    fn __hash__(&self) -> u64 {
        self.inner as u64
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl From<PyNasalMode> for NasalMode {
    fn from(py_mode: PyNasalMode) -> Self {
        py_mode.inner
    }
}

/// A nasal mode given either as a `NasalMode` object or by name.
#[derive(FromPyObject)]
pub enum NasalModeArg {
    Mode(PyNasalMode),
    Name(String),
}

impl NasalModeArg {
    pub fn resolve(self) -> PyResult<NasalMode> {
        match self {
            Self::Mode(mode) => Ok(mode.into()),
            Self::Name(name) => parse(&name),
        }
    }
}
