//! Node polarity and the planar permutation `τ` of a tangle.

use std::collections::BTreeMap;

use crate::edge::{EdgeKind, Label};
use crate::error::{Error, Result};
use crate::tangle::Tangle;

/// Which way a node's strand leans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Polarity {
    Negative,
    Positive,
}

/// Polarity of `node`; zero transversals have none.
///
/// Upper hooks are `-` at their left end and `+` at their right end, lower
/// hooks the other way round; transversals take the sign of their kind.
pub fn node_polarity(tangle: &Tangle, node: Label) -> Option<Polarity> {
    let edge = tangle.edge_from(node)?;
    let is_left = edge.first() == node;
    match edge.kind() {
        EdgeKind::UpperHook if is_left => Some(Polarity::Negative),
        EdgeKind::UpperHook => Some(Polarity::Positive),
        EdgeKind::LowerHook if is_left => Some(Polarity::Positive),
        EdgeKind::LowerHook => Some(Polarity::Negative),
        EdgeKind::PositiveTransversal => Some(Polarity::Positive),
        EdgeKind::NegativeTransversal => Some(Polarity::Negative),
        EdgeKind::ZeroTransversal => None,
    }
}

/// Label the unsaturated nodes of one side as `(polarity, rank)`, rank counting
/// from 1 per polarity in order of increasing magnitude.
fn label_side(
    tangle: &Tangle,
    nodes: impl Iterator<Item = Label>,
) -> Result<BTreeMap<(Polarity, usize), Label>> {
    let mut counts = [0usize; 2];
    let mut labels = BTreeMap::new();
    for node in nodes {
        let Some(edge) = tangle.edge_from(node) else {
            return Err(Error::Inconsistent(format!("node {node} has no edge")));
        };
        if tangle.crossings_of(edge) >= edge.size() {
            continue;
        }
        let p = node_polarity(tangle, node).ok_or_else(|| {
            Error::Inconsistent(format!("unsaturated node {node} without polarity"))
        })?;
        let slot = &mut counts[p as usize];
        *slot += 1;
        labels.insert((p, *slot), node);
    }
    Ok(labels)
}

/// The permutation diagram `τ(X)`.
///
/// Edges whose crossing count reaches their size are kept as they are (they
/// are transversals); the remaining endpoints are re-paired upper to lower by
/// matching polarity labels.
pub fn planar_permutation(tangle: &Tangle) -> Result<Tangle> {
    let n = tangle.n() as Label;
    let upper = label_side(tangle, 1..=n)?;
    let lower = label_side(tangle, (1..=n).map(|k| -k))?;
    if upper.len() != lower.len() {
        return Err(Error::Inconsistent(format!(
            "{} upper vs {} lower unsaturated nodes in {tangle}",
            upper.len(),
            lower.len()
        )));
    }

    let mut pairs = Vec::with_capacity(tangle.n());
    for k in 1..=n {
        let Some(edge) = tangle.edge_from(k) else {
            return Err(Error::Inconsistent(format!("node {k} has no edge")));
        };
        if tangle.crossings_of(edge) >= edge.size() {
            if edge.kind().is_hook() {
                return Err(Error::Inconsistent(format!("saturated hook {edge}")));
            }
            pairs.push(edge.labels());
        }
    }
    for (key, &up) in &upper {
        let down = lower.get(key).ok_or_else(|| {
            Error::Inconsistent(format!("polarity label {key:?} missing on the lower side"))
        })?;
        pairs.push((up, *down));
    }
    Tangle::from_edges(pairs)
}
