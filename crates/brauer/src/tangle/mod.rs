//! Tangles: Brauer diagrams as perfect matchings with a crossing cache.
//!
//! Purpose
//! - Hold the involution on `1..=N ∪ -1..=-N` as a sorted edge set, a
//!   node → edge lookup, and the number of edges crossing each edge.
//! - Provide the edits used by factorization (`replace_edges`, `merge`,
//!   `compose_with_t`) so that every logical rewrite leaves the crossing cache
//!   equal to a from-scratch recomputation.
//!
//! Layout
//! - `codec.rs`: text form `a:b,c':d`.
//! - `compose.rs`: diagram product, generator diagrams, transposition update.

mod codec;
mod compose;

use std::collections::{BTreeMap, BTreeSet};

use crate::edge::{crosses, Edge, Label};
use crate::error::{Error, Result};
use crate::merge::merge_replacement;

/// A Brauer diagram on `2N` points.
#[derive(Clone, Debug)]
pub struct Tangle {
    n: usize,
    edges: BTreeSet<Edge>,
    node_to_edge: BTreeMap<Label, Edge>,
    crossings: BTreeMap<Edge, usize>,
}

impl PartialEq for Tangle {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.edges == other.edges
    }
}

impl Eq for Tangle {}

impl Tangle {
    /// Build a tangle from labelled pairs; `N` is the number of pairs.
    ///
    /// Fails with [`Error::InvalidDiagram`] unless every label of
    /// `1..=N ∪ -1..=-N` occurs exactly once.
    pub fn from_edges<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Label, Label)>,
    {
        let pairs: Vec<(Label, Label)> = pairs.into_iter().collect();
        let n = pairs.len();
        if n == 0 {
            return Err(Error::InvalidDiagram("no edges".into()));
        }
        let mut seen = BTreeSet::new();
        for &(x, y) in &pairs {
            for v in [x, y] {
                if v == 0 || v.unsigned_abs() as usize > n {
                    return Err(Error::InvalidDiagram(format!(
                        "label {v} outside ±1..={n}"
                    )));
                }
                if !seen.insert(v) {
                    return Err(Error::InvalidDiagram(format!("label {v} repeated")));
                }
            }
        }
        let mut tangle = Tangle {
            n,
            edges: BTreeSet::new(),
            node_to_edge: BTreeMap::new(),
            crossings: BTreeMap::new(),
        };
        for (x, y) in pairs {
            tangle.add_edge(Edge::new(x, y));
        }
        tangle.crossings = tangle.recompute_crossings();
        Ok(tangle)
    }

    /// Half the number of boundary points.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Edges in canonical order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    pub fn edge_set(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    /// Edge incident to `node`; `None` only for labels outside `±1..=±N`.
    pub fn edge_from(&self, node: Label) -> Option<Edge> {
        self.node_to_edge.get(&node).copied()
    }

    /// Whether labels `x` and `y` share an edge.
    pub fn contains(&self, x: Label, y: Label) -> bool {
        self.node_to_edge.get(&x).is_some_and(|e| e.contains(y))
    }

    /// Cached number of edges crossing `edge` (0 if absent).
    pub fn crossings_of(&self, edge: Edge) -> usize {
        self.crossings.get(&edge).copied().unwrap_or(0)
    }

    pub fn crossing_counts(&self) -> &BTreeMap<Edge, usize> {
        &self.crossings
    }

    /// Total number of crossing pairs.
    pub fn crossing_number(&self) -> usize {
        self.crossings.values().sum::<usize>() / 2
    }

    /// Minimal number of generators: `Σ max(size, crossings) / 2`.
    pub fn length(&self) -> usize {
        self.edges
            .iter()
            .map(|&e| e.size().max(self.crossings_of(e)))
            .sum::<usize>()
            / 2
    }

    pub fn is_identity(&self) -> bool {
        self.edges
            .iter()
            .all(|e| e.first() > 0 && e.first() == -e.second())
    }

    /// Number of pieces the diagram splits into between consecutive strands.
    ///
    /// Gap `k` (between strands `k` and `k+1`) separates the diagram when no
    /// edge spans it.
    pub fn n_components(&self) -> usize {
        let mut spanned = vec![false; self.n.saturating_sub(1)];
        for e in &self.edges {
            let p = e.first().unsigned_abs() as usize;
            let q = e.second().unsigned_abs() as usize;
            for gap in p.min(q)..p.max(q) {
                spanned[gap - 1] = true;
            }
        }
        spanned.iter().filter(|&&s| !s).count() + 1
    }

    /// Number of other edges crossing `edge`, computed from scratch.
    pub fn n_intersecting_edges(&self, edge: Edge) -> usize {
        self.edges
            .iter()
            .filter(|&&d| d != edge && crosses(edge, d, self.n))
            .count()
    }

    /// From-scratch crossing counts (O(N²)).
    pub fn recompute_crossings(&self) -> BTreeMap<Edge, usize> {
        self.edges
            .iter()
            .map(|&e| (e, self.n_intersecting_edges(e)))
            .collect()
    }

    /// Compare the cache against [`Tangle::recompute_crossings`].
    pub fn check_crossings(&self) -> Result<()> {
        let fresh = self.recompute_crossings();
        for (&edge, &actual) in &fresh {
            let cached = self.crossings_of(edge);
            if cached != actual {
                return Err(Error::StaleCrossings {
                    edge,
                    cached,
                    actual,
                });
            }
        }
        if self.crossings.len() != fresh.len() {
            return Err(Error::Inconsistent(format!(
                "crossing cache holds {} entries for {} edges",
                self.crossings.len(),
                fresh.len()
            )));
        }
        Ok(())
    }

    /// Insert `edge` with a zero crossing count.
    ///
    /// Contract: the counts of other edges are left untouched. The caller must
    /// add one to every edge crossing `edge` (and to `edge` itself per crossing)
    /// before the cache is read again.
    pub(crate) fn add_edge(&mut self, edge: Edge) {
        let (x, y) = edge.labels();
        self.edges.insert(edge);
        self.node_to_edge.insert(x, edge);
        self.node_to_edge.insert(y, edge);
        self.crossings.insert(edge, 0);
    }

    /// Remove `edge` and its cache entry.
    ///
    /// Contract: as for [`Tangle::add_edge`], the caller subtracts one from
    /// every remaining edge that crossed `edge`.
    pub(crate) fn delete_edge(&mut self, edge: Edge) {
        let (x, y) = edge.labels();
        self.edges.remove(&edge);
        self.node_to_edge.remove(&x);
        self.node_to_edge.remove(&y);
        self.crossings.remove(&edge);
    }

    /// Edges crossing `edge`, excluding `edge` itself.
    fn crossers(&self, edge: Edge) -> Vec<Edge> {
        self.edges
            .iter()
            .copied()
            .filter(|&d| d != edge && crosses(edge, d, self.n))
            .collect()
    }

    /// Replace `removed` by `added` and patch the crossing cache incrementally.
    ///
    /// Both slices must cover the same set of labels, each label once, and every
    /// removed edge must be present, so the involution survives the rewrite.
    /// Nothing is touched when the check fails.
    pub fn replace_edges(&mut self, removed: &[Edge], added: &[Edge]) -> Result<()> {
        let mut out_labels = BTreeSet::new();
        for e in removed {
            if !self.edges.contains(e) {
                return Err(Error::InvalidDiagram(format!("edge {e} not present")));
            }
            out_labels.extend([e.first(), e.second()]);
        }
        let in_labels: BTreeSet<Label> =
            added.iter().flat_map(|e| [e.first(), e.second()]).collect();
        if 2 * removed.len() != out_labels.len()
            || out_labels != in_labels
            || 2 * added.len() != in_labels.len()
        {
            return Err(Error::InvalidDiagram(
                "replacement edges must reuse the removed labels exactly once".into(),
            ));
        }
        for &e in removed {
            self.delete_edge(e);
            for d in self.crossers(e) {
                if let Some(c) = self.crossings.get_mut(&d) {
                    *c -= 1;
                }
            }
        }
        for &e in added {
            self.add_edge(e);
            let hits = self.crossers(e);
            for d in &hits {
                if let Some(c) = self.crossings.get_mut(d) {
                    *c += 1;
                }
            }
            self.crossings.insert(e, hits.len());
        }
        Ok(())
    }

    /// Apply the merge rule of the unit hook `hook` against `edge`.
    ///
    /// Returns the two replacement edges, or `None` (diagram untouched) when the
    /// rule is not defined for this pair.
    pub fn merge(&mut self, hook: Edge, edge: Edge) -> Option<(Edge, Edge)> {
        if hook == edge || !self.edges.contains(&hook) || !self.edges.contains(&edge) {
            return None;
        }
        let (e1, e2) = merge_replacement(hook, edge)?;
        self.replace_edges(&[hook, edge], &[e1, e2]).ok()?;
        Some((e1, e2))
    }
}

#[cfg(test)]
mod tests;
