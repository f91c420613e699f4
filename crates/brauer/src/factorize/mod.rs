//! Minimal factorization of Brauer diagrams into `U_i` / `T_i` generators.
//!
//! Purpose
//! - Project a tangle onto the permutation `τ` it induces once all crossings
//!   that are forced by edge sizes are ignored, sort `τ` by adjacent
//!   transpositions, and replay that order on the tangle: each index either
//!   absorbs a unit hook (`U_i`) or uncrosses two strands (`T_i`).
//! - Every step lowers the tangle length by exactly one, so the output length
//!   equals [`Tangle::length`].
//!
//! Determinism
//! - Merge partners are probed in ascending [`Edge`] order and the first
//!   length-reducing one wins. Outputs are canonical for that order only.

mod polarity;

pub use polarity::{node_polarity, planar_permutation, Polarity};

use crate::edge::{Edge, Label};
use crate::error::{Error, Result};
use crate::generator::{Factorization, Generator};
use crate::merge::length_reducing_merge;
use crate::tangle::Tangle;

/// Factorization configuration.
#[derive(Clone, Copy, Debug)]
pub struct FactorizeCfg {
    /// Recompute crossing counts from scratch after every step and compare with
    /// the incremental cache; also checks that each step lowers the length by one.
    pub validate_crossings: bool,
}

impl Default for FactorizeCfg {
    fn default() -> Self {
        Self {
            validate_crossings: cfg!(debug_assertions),
        }
    }
}

/// Sort a permutation diagram by adjacent transpositions.
///
/// `s[k]` is the lower node reached from upper node `k + 1`; a bubble sort
/// records `T_{i+1}` for every swap of positions `i, i+1`. The number of
/// transpositions equals the inversion count of `s`.
pub fn factorize_sn(perm: &Tangle) -> Result<Factorization> {
    let n = perm.n();
    let mut s = Vec::with_capacity(n);
    for k in 1..=n as Label {
        let e = perm
            .edge_from(k)
            .filter(|e| e.kind().is_transversal())
            .ok_or_else(|| Error::Inconsistent(format!("{perm} is not a permutation diagram")))?;
        s.push(-e.second());
    }
    let mut gens = Vec::new();
    for j in (1..n).rev() {
        for i in 0..j {
            if s[i] > s[i + 1] {
                s.swap(i, i + 1);
                gens.push(Generator::T(i + 1));
            }
        }
    }
    Ok(Factorization(gens))
}

/// Reduce `tangle` to the identity and return the generators removed.
///
/// The tangle is consumed: it is rewritten in place, one committed step per
/// transposition of the sort order, with speculative merges run on copies.
pub fn factorize_bn(mut tangle: Tangle, cfg: FactorizeCfg) -> Result<Factorization> {
    let order = factorize_sn(&planar_permutation(&tangle)?)?;
    let start_length = tangle.length();
    tracing::debug!(
        n = tangle.n(),
        length = start_length,
        steps = order.len(),
        "factorize"
    );

    let mut gens = Vec::with_capacity(order.len());
    for g in order.generators() {
        let i = g.index();
        let before = tangle.length();
        let label = i as Label;
        if tangle.contains(label, label + 1) {
            let hook = Edge::new(label, label + 1);
            let (partner, merged) =
                length_reducing_merge(&tangle, hook).ok_or_else(|| Error::NoMergeCandidate {
                    diagram: tangle.to_string(),
                    index: i,
                })?;
            tracing::trace!(index = i, %partner, "merge");
            tangle = merged;
            gens.push(Generator::U(i));
        } else {
            if !tangle.compose_with_t(i)? {
                return Err(Error::Inconsistent(format!(
                    "T{i} does not uncross strands {i}, {} of {tangle}",
                    i + 1
                )));
            }
            tracing::trace!(index = i, "uncross");
            gens.push(Generator::T(i));
        }
        if cfg.validate_crossings {
            tangle.check_crossings()?;
            if tangle.length() + 1 != before {
                return Err(Error::Inconsistent(format!(
                    "step {} left length {} after {before}",
                    gens.len(),
                    tangle.length()
                )));
            }
        }
    }
    Ok(Factorization(gens))
}

impl Tangle {
    /// Minimal factorization with the default configuration; `self` is untouched.
    pub fn factorize(&self) -> Result<Factorization> {
        factorize_bn(self.clone(), FactorizeCfg::default())
    }
}
