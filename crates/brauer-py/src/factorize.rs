//! Factorization bindings used by the batch drivers (enumeration, verification).

use crate::common::{map_err, tangle_from_py};
use brauer::{Factorization, FactorizeCfg};
use pyo3::prelude::*;

/// Minimal factorization as generator tokens (`["I"]` for the identity).
#[pyfunction]
#[pyo3(signature = (diagram, validate = false))]
pub fn factorize(diagram: &Bound<'_, PyAny>, validate: bool) -> PyResult<Vec<String>> {
    let tangle = tangle_from_py(diagram)?;
    let cfg = FactorizeCfg {
        validate_crossings: validate,
    };
    brauer::factorize_bn(tangle, cfg)
        .map(|f| f.tokens())
        .map_err(map_err)
}

/// Tangle length, i.e. the number of generators in a minimal factorization.
#[pyfunction]
pub fn length(diagram: &Bound<'_, PyAny>) -> PyResult<usize> {
    Ok(tangle_from_py(diagram)?.length())
}

/// Number of crossing pairs of the diagram.
#[pyfunction]
pub fn crossing_number(diagram: &Bound<'_, PyAny>) -> PyResult<usize> {
    Ok(tangle_from_py(diagram)?.crossing_number())
}

/// Number of `T` tokens in a generator sequence.
#[pyfunction]
pub fn t_count(tokens: Vec<String>) -> PyResult<usize> {
    let f: Factorization = tokens.join(",").parse().map_err(map_err)?;
    Ok(f.t_count())
}

/// Evaluate a generator sequence in order `n`; returns canonical sorted edges.
#[pyfunction]
pub fn evaluate(tokens: Vec<String>, n: usize) -> PyResult<Vec<(i32, i32)>> {
    let f: Factorization = tokens.join(",").parse().map_err(map_err)?;
    let tangle = f.evaluate(n).map_err(map_err)?;
    Ok(tangle.edges().map(|e| e.labels()).collect())
}

/// Product of two diagrams (first on top) and the number of loops removed.
#[pyfunction]
pub fn compose(
    top: &Bound<'_, PyAny>,
    bottom: &Bound<'_, PyAny>,
) -> PyResult<(Vec<(i32, i32)>, usize)> {
    let top = tangle_from_py(top)?;
    let bottom = tangle_from_py(bottom)?;
    let (product, loops) = top.compose(&bottom).map_err(map_err)?;
    Ok((product.edges().map(|e| e.labels()).collect(), loops))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(factorize, m)?)?;
    m.add_function(wrap_pyfunction!(length, m)?)?;
    m.add_function(wrap_pyfunction!(crossing_number, m)?)?;
    m.add_function(wrap_pyfunction!(t_count, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(compose, m)?)?;
    Ok(())
}
