//! Python bindings for rust-bleu-score.

use pyo3::basic::CompareOp;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{
    bleu_counts as rust_bleu_counts, corpus_score_with_offset, score, validate_offset,
    Statistics, DEFAULT_CORPUS_OFFSET, DEFAULT_SENTENCE_OFFSET, MAX_NGRAM_ORDER,
};

/// Python wrapper for Statistics
#[pyclass(name = "Statistics")]
#[derive(Clone)]
pub struct PyStatistics {
    inner: Statistics,
}

fn to_counts(values: Vec<u64>, name: &str) -> PyResult<[u64; MAX_NGRAM_ORDER]> {
    values.try_into().map_err(|values: Vec<u64>| {
        PyValueError::new_err(format!(
            "{} must have {} entries, got {}",
            name,
            MAX_NGRAM_ORDER,
            values.len()
        ))
    })
}

#[pymethods]
impl PyStatistics {
    #[new]
    fn new(common_counts: Vec<u64>, total_counts: Vec<u64>) -> PyResult<Self> {
        let common = to_counts(common_counts, "common_counts")?;
        let total = to_counts(total_counts, "total_counts")?;
        if common.iter().zip(&total).any(|(c, t)| c > t) {
            return Err(PyValueError::new_err(
                "common_counts must not exceed total_counts",
            ));
        }
        Ok(Self {
            inner: Statistics::new(common, total),
        })
    }

    #[getter]
    fn common_counts(&self) -> Vec<u64> {
        self.inner.common_counts().to_vec()
    }

    #[getter]
    fn total_counts(&self) -> Vec<u64> {
        self.inner.total_counts().to_vec()
    }

    fn __add__(&self, other: &Self) -> Self {
        Self {
            inner: self.inner + other.inner,
        }
    }

    fn __richcmp__(&self, other: &Self, op: CompareOp, py: Python<'_>) -> PyObject {
        match op {
            CompareOp::Eq => (self.inner == other.inner).into_py(py),
            CompareOp::Ne => (self.inner != other.inner).into_py(py),
            _ => py.NotImplemented(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Statistics(common_counts={:?}, total_counts={:?})",
            self.inner.common_counts(),
            self.inner.total_counts()
        )
    }
}

/// Compute (Statistics, hyp_len, ref_len) for a whitespace-tokenized pair.
#[pyfunction]
fn bleu_counts(hypothesis: &str, reference: &str) -> (PyStatistics, u64, u64) {
    let stats = rust_bleu_counts(hypothesis, reference);
    (
        PyStatistics {
            inner: stats.statistics,
        },
        stats.hyp_length,
        stats.ref_length,
    )
}

/// Score a (Statistics, hyp_len, ref_len) triple.
#[pyfunction]
#[pyo3(signature = (counts, offset=DEFAULT_SENTENCE_OFFSET))]
fn bleu_from_counts(counts: (PyStatistics, u64, u64), offset: f64) -> PyResult<f64> {
    let offset = validate_offset(offset).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let (stats, hyp_len, ref_len) = counts;
    Ok(score(&stats.inner, hyp_len, ref_len, offset))
}

/// Corpus-level BLEU over position-aligned hypotheses and references.
#[pyfunction]
#[pyo3(signature = (hypotheses, references, offset=DEFAULT_CORPUS_OFFSET))]
fn corpus_bleu(hypotheses: Vec<String>, references: Vec<String>, offset: f64) -> PyResult<f64> {
    let offset = validate_offset(offset).map_err(|e| PyValueError::new_err(e.to_string()))?;
    corpus_score_with_offset(&hypotheses, &references, offset)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Python module definition
#[pymodule]
pub fn _rust(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyStatistics>()?;
    m.add_function(wrap_pyfunction!(bleu_counts, m)?)?;
    m.add_function(wrap_pyfunction!(bleu_from_counts, m)?)?;
    m.add_function(wrap_pyfunction!(corpus_bleu, m)?)?;
    Ok(())
}
