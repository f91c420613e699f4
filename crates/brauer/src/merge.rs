//! The merge rule: absorbing a unit upper hook `(i, i+1)` into another edge.
//!
//! Geometrically this pulls a `U_i` off the top of the diagram. Whether the
//! rule is defined depends on the kind of the partner edge and on where its
//! endpoints sit relative to `i` and `i + 1`.

use crate::edge::{Edge, EdgeKind, Label};
use crate::tangle::Tangle;

/// Replacement edges for merging `hook` with `edge`, or `None` if undefined.
///
/// `hook` must be a unit upper hook. The cases, for `edge = (x, y)`:
/// - upper hook, `x < i` and `i+1 < y`: `(x, i)`, `(i+1, y)`
/// - lower hook, `x <= i` and `i+1 <= |y|`: `(i, x)`, `(i+1, y)`
/// - negative transversal, `x < i` and `i+1 <= |y|`: `(x, i)`, `(i+1, y)`
/// - positive transversal, `x > i+1` and `i >= |y|`: `(i, y)`, `(i+1, x)`
/// - zero transversal: never
pub fn merge_replacement(hook: Edge, edge: Edge) -> Option<(Edge, Edge)> {
    if !hook.is_unit_upper_hook() || hook == edge {
        return None;
    }
    let i: Label = hook.first();
    let (x, y) = edge.labels();
    let (e1, e2) = match edge.kind() {
        EdgeKind::UpperHook if x < i && i + 1 < y => ((x, i), (i + 1, y)),
        EdgeKind::LowerHook if x <= i && i + 1 <= y.abs() => ((i, x), (i + 1, y)),
        EdgeKind::NegativeTransversal if x < i && i + 1 <= y.abs() => ((x, i), (i + 1, y)),
        EdgeKind::PositiveTransversal if x > i + 1 && i >= y.abs() => ((i, y), (i + 1, x)),
        _ => return None,
    };
    Some((Edge::new(e1.0, e1.1), Edge::new(e2.0, e2.1)))
}

/// Merge `hook` into the candidates of `tangle` in edge order and return the
/// first result whose length is exactly one less, with the partner edge used.
///
/// Each attempt runs on a copy, so failed attempts leave `tangle` untouched.
pub fn length_reducing_merge(tangle: &Tangle, hook: Edge) -> Option<(Edge, Tangle)> {
    let target = tangle.length().checked_sub(1)?;
    tangle
        .edges()
        .filter(|&e| e != hook)
        .find_map(|edge| {
            let mut attempt = tangle.clone();
            attempt.merge(hook, edge)?;
            (attempt.length() == target).then_some((edge, attempt))
        })
}

/// How many partner edges give a length-reducing merge with `hook`.
pub fn count_length_reducing_merges(tangle: &Tangle, hook: Edge) -> usize {
    let Some(target) = tangle.length().checked_sub(1) else {
        return 0;
    };
    tangle
        .edges()
        .filter(|&e| e != hook)
        .filter(|&edge| {
            let mut attempt = tangle.clone();
            attempt.merge(hook, edge).is_some() && attempt.length() == target
        })
        .count()
}
