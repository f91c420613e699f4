//! Curated internal API for the runner and bindings (UNSTABLE).
//!
//! Breaking changes are allowed; prefer these re-exports for consistency
//! across experiments.

// Diagrams and edges
pub use crate::edge::{circle_position, crosses, Edge, EdgeKind, Label};
pub use crate::tangle::Tangle;
// Generators
pub use crate::generator::{Factorization, Generator};
// Factorization
pub use crate::factorize::{
    factorize_bn, factorize_sn, node_polarity, planar_permutation, FactorizeCfg, Polarity,
};
pub use crate::merge::{count_length_reducing_merges, length_reducing_merge, merge_replacement};
// Sampling
pub use crate::sample::{random_tangle, random_word, ReplayToken};
// Errors
pub use crate::error::{Error, Result};
