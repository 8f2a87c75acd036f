//! Python bindings for the akshar normalizer
//!
//! This module provides a Pythonic interface to the Rust-based normalizer.

use pyo3::prelude::*;

mod error;
mod nasal_mode;
mod normalizer;

use error::{InvalidConfigurationError, UnsupportedScriptError};
use nasal_mode::PyNasalMode;
use normalizer::PyNormalizer;

/// akshar: script-aware Indic text normalization in Rust
#[pymodule]
fn akshar(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add_class::<PyNormalizer>()?;
    m.add_class::<PyNasalMode>()?;

    m.add(
        "UnsupportedScriptError",
        py.get_type_bound::<UnsupportedScriptError>(),
    )?;
    m.add(
        "InvalidConfigurationError",
        py.get_type_bound::<InvalidConfigurationError>(),
    )?;

    // Add version info
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
