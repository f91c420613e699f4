//! Minimal factorization of Brauer diagrams.
//!
//! A Brauer diagram ("tangle") is a perfect matching on `N` upper and `N`
//! lower points. Every diagram is a product of the generators `U_i` (cap
//! strands `i, i+1`) and `T_i` (cross them); this crate computes a product of
//! minimal length together with the bookkeeping it needs: edge kinds, crossing
//! counts, the merge rule, and the permutation projection.
//!
//! API Policy
//! - The crate is used by the `cli` runner and the Python bindings; there is no
//!   stable public API. Prefer `api` for curated imports.

pub mod api;
pub mod edge;
pub mod error;
pub mod factorize;
pub mod generator;
pub mod merge;
pub mod sample;
pub mod tangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use edge::{Edge, EdgeKind, Label};
pub use error::{Error, Result};
pub use factorize::{factorize_bn, factorize_sn, planar_permutation, FactorizeCfg};
pub use generator::{Factorization, Generator};
pub use tangle::Tangle;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::edge::{crosses, Edge, EdgeKind, Label};
    pub use crate::factorize::{factorize_bn, FactorizeCfg};
    pub use crate::generator::{Factorization, Generator};
    pub use crate::sample::{random_tangle, random_word, ReplayToken};
    pub use crate::tangle::Tangle;
}
