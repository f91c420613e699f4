use brauer::{Error, Tangle};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn map_err(err: Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Decode a diagram from its text form or from a list of label pairs.
pub fn tangle_from_py(diagram: &Bound<'_, PyAny>) -> PyResult<Tangle> {
    if let Ok(text) = diagram.extract::<String>() {
        return text.parse().map_err(map_err);
    }
    let pairs: Vec<(i32, i32)> = diagram.extract()?;
    Tangle::from_edges(pairs).map_err(map_err)
}
