//! PyO3 wrapper for the Normalizer

use akshar_normalizer::{char_stats, Normalize, Normalizer, NormalizerConfig, VowelEndingPolicy};
use pyo3::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{parse, IntoPyErr};
use crate::nasal_mode::NasalModeArg;

/// Python wrapper for the akshar Normalizer
#[pyclass(name = "Normalizer")]
pub struct PyNormalizer {
    inner: Normalizer,
}

#[pymethods]
impl PyNormalizer {
    #[new]
    #[pyo3(signature = (
        lang = "hi",
        remove_nuktas = false,
        nasals_mode = None,
        do_normalize_chandras = false,
        do_normalize_vowel_ending = false,
        vowel_ending_policy = None
    ))]
    fn new(
        lang: &str,
        remove_nuktas: bool,
        nasals_mode: Option<NasalModeArg>,
        do_normalize_chandras: bool,
        do_normalize_vowel_ending: bool,
        vowel_ending_policy: Option<&str>,
    ) -> PyResult<Self> {
        let mut builder = Normalizer::builder()
            .script(lang)
            .remove_nuktas(remove_nuktas)
            .fold_chandras(do_normalize_chandras)
            .normalize_vowel_endings(do_normalize_vowel_ending);

        if let Some(mode) = nasals_mode {
            builder = builder.nasal_mode(mode.resolve()?);
        }
        if let Some(policy) = vowel_ending_policy {
            builder = builder.vowel_ending_policy(parse::<VowelEndingPolicy>(policy)?);
        }

        let inner = builder.build().map_err(|e| e.into_py_err())?;
        Ok(Self { inner })
    }

    /// Load a normalizer from a JSON configuration file
    #[staticmethod]
    fn from_config_file(path: &str) -> PyResult<Self> {
        let config =
            NormalizerConfig::from_json_file(&PathBuf::from(path)).map_err(|e| e.into_py_err())?;
        let inner = Normalizer::new(config).map_err(|e| e.into_py_err())?;
        Ok(Self { inner })
    }

    /// Normalize text
    fn normalize(&self, py: Python<'_>, text: &str) -> String {
        py.allow_threads(|| self.inner.normalize(text))
    }

    /// Normalize a batch of texts in parallel
    fn normalize_batch(&self, py: Python<'_>, texts: Vec<String>) -> Vec<String> {
        py.allow_threads(|| self.inner.normalize_batch(&texts))
    }

    /// Count invisible/format characters by name
    #[staticmethod]
    fn char_stats(text: &str) -> HashMap<&'static str, usize> {
        char_stats(text)
            .iter()
            .map(|(f, count)| (f.name(), count))
            .collect()
    }

    /// The configuration as a JSON string
    fn config_json(&self) -> PyResult<String> {
        self.inner.config().to_json().map_err(|e| e.into_py_err())
    }

    #[getter]
    fn lang(&self) -> &'static str {
        self.inner.config().script.code()
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "Normalizer(lang='{}', remove_nuktas={}, nasals_mode='{}', do_normalize_chandras={}, do_normalize_vowel_ending={}, vowel_ending_policy='{}')",
            config.script.code(),
            py_bool(config.remove_nuktas),
            config.nasal_mode,
            py_bool(config.fold_chandras),
            py_bool(config.normalize_vowel_endings),
            config.vowel_ending_policy,
        )
    }
}

fn py_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
