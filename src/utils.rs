#[cfg(feature = "python-bindings")]
use ndarray::Array2;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    optimization::loglik_optimizer::traits::LineSearcher,
    rasch::{core::key::Submission, core::options::FitOptions, errors::RaschError},
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1, PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method0("to_numpy") {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix(raw_data: &Bound<'_, PyAny>) -> PyResult<Array2<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    if let Ok(obj) = raw_data.call_method0("to_numpy") {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro.as_array().to_owned());
        }
    }

    // Nested-sequence fallback: list of equal-length float rows.
    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64",
        )
    })?;

    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, |row| row.len());
    let mut flat = Vec::with_capacity(n_rows * n_cols);
    for (index, row) in rows.iter().enumerate() {
        if row.len() != n_cols {
            return Err(PyValueError::new_err(format!(
                "row {index} has {} entries; expected {n_cols} (all rows must have equal length)",
                row.len()
            )));
        }
        flat.extend_from_slice(row);
    }

    Array2::from_shape_vec((n_rows, n_cols), flat)
        .map_err(|e| PyValueError::new_err(format!("could not shape response data: {e}")))
}

#[cfg(feature = "python-bindings")]
pub fn extract_string_list(raw_data: &Bound<'_, PyAny>) -> PyResult<Vec<String>> {
    raw_data
        .extract::<Vec<String>>()
        .map_err(|_| pyo3::exceptions::PyTypeError::new_err("expected a sequence of str"))
}

#[cfg(feature = "python-bindings")]
pub fn extract_submissions(raw_data: &Bound<'_, PyAny>) -> PyResult<Vec<Submission>> {
    let pairs: Vec<(String, Vec<String>)> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a sequence of (person, answers) pairs with str entries",
        )
    })?;

    let mut submissions = Vec::with_capacity(pairs.len());
    for (person, answers) in &pairs {
        // Submission::new -> RaschResult<Submission> -> PyErr
        submissions.push(Submission::new(person, answers)?);
    }
    Ok(submissions)
}

#[cfg(feature = "python-bindings")]
pub fn extract_fit_options(
    max_iter: Option<usize>, tol: Option<f64>, batch_size: Option<usize>, seed: Option<u64>,
    line_searcher: Option<&str>, lbfgs_mem: Option<usize>, verbose: Option<bool>,
) -> PyResult<FitOptions> {
    use std::str::FromStr;

    let defaults = FitOptions::default();

    // LineSearcher::from_str -> OptResult<LineSearcher> -> RaschError -> PyErr
    let ls = match line_searcher {
        Some(name) => LineSearcher::from_str(name).map_err(RaschError::from)?,
        None => defaults.line_searcher,
    };

    // FitOptions::new -> RaschResult<FitOptions> -> PyErr
    let opts = FitOptions::new(
        max_iter.unwrap_or(defaults.max_iter),
        tol.unwrap_or(defaults.tol),
        batch_size.unwrap_or(defaults.batch_size),
        seed,
        ls,
        lbfgs_mem,
        verbose.unwrap_or(false),
    )?;

    Ok(opts)
}
