//! PyO3 bindings for selected `brauer` functions.
//!
//! Notes
//! - Keep bindings thin and predictable; diagrams cross the boundary either as
//!   text (`"1:2,1':2'"`) or as lists of signed label pairs.
//! - The enumeration and verification drivers stay in Python; only the
//!   factorization core is native.

mod common;
mod factorize;

use pyo3::prelude::*;

#[pymodule]
fn brauer_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", brauer::VERSION)?;
    factorize::register(m)?;
    Ok(())
}
