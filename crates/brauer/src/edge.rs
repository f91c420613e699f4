//! Edges of a Brauer diagram: canonical orientation, kind, size, crossings.
//!
//! Labels are signed integers: `1..=N` on the upper boundary and `-1..=-N` on
//! the lower boundary. Two edges cross when their endpoints interleave on the
//! circle obtained by walking the upper boundary left to right and the lower
//! boundary right to left.

use std::fmt;

/// Signed node label.
pub type Label = i32;

/// The five edge kinds, determined by sign pattern and magnitude order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    UpperHook,
    LowerHook,
    ZeroTransversal,
    PositiveTransversal,
    NegativeTransversal,
}

impl EdgeKind {
    #[inline]
    pub fn is_transversal(self) -> bool {
        matches!(
            self,
            EdgeKind::ZeroTransversal
                | EdgeKind::PositiveTransversal
                | EdgeKind::NegativeTransversal
        )
    }

    #[inline]
    pub fn is_hook(self) -> bool {
        !self.is_transversal()
    }
}

/// An edge in canonical orientation.
///
/// Endpoints are ordered by magnitude; a transversal is stored
/// positive-then-negative. Upper hooks therefore ascend, lower hooks ascend in
/// magnitude (`(-1, -2)`), and the derived `Ord` is the lexicographic order on
/// the stored pair, which is the probe order used during factorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(Label, Label);

impl Edge {
    /// Canonicalize a pair of labels. Callers guarantee both are non-zero.
    pub fn new(x: Label, y: Label) -> Self {
        debug_assert!(x != 0 && y != 0, "labels are non-zero");
        let (mut a, mut b) = if y.abs() < x.abs() { (y, x) } else { (x, y) };
        if a < 0 && b > 0 {
            std::mem::swap(&mut a, &mut b);
        }
        Edge(a, b)
    }

    #[inline]
    pub fn first(self) -> Label {
        self.0
    }

    #[inline]
    pub fn second(self) -> Label {
        self.1
    }

    #[inline]
    pub fn labels(self) -> (Label, Label) {
        (self.0, self.1)
    }

    #[inline]
    pub fn contains(self, node: Label) -> bool {
        self.0 == node || self.1 == node
    }

    /// The endpoint opposite to `node`, if `node` is on this edge.
    pub fn other(self, node: Label) -> Option<Label> {
        if self.0 == node {
            Some(self.1)
        } else if self.1 == node {
            Some(self.0)
        } else {
            None
        }
    }

    pub fn kind(self) -> EdgeKind {
        let (x, y) = (self.0, self.1);
        if x < 0 && y < 0 {
            return EdgeKind::LowerHook;
        }
        if x > 0 && y > 0 {
            return EdgeKind::UpperHook;
        }
        // canonical transversal: x > 0 > y
        match x.cmp(&-y) {
            std::cmp::Ordering::Greater => EdgeKind::PositiveTransversal,
            std::cmp::Ordering::Equal => EdgeKind::ZeroTransversal,
            std::cmp::Ordering::Less => EdgeKind::NegativeTransversal,
        }
    }

    /// `| |x| - |y| |`.
    #[inline]
    pub fn size(self) -> usize {
        self.0.unsigned_abs().abs_diff(self.1.unsigned_abs()) as usize
    }

    /// Whether this is the size-one upper hook `(i, i + 1)`.
    #[inline]
    pub fn is_unit_upper_hook(self) -> bool {
        self.kind() == EdgeKind::UpperHook && self.size() == 1
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", LabelText(self.0), LabelText(self.1))
    }
}

/// Text form of a label: `k` for upper nodes, `k'` for lower nodes.
pub(crate) struct LabelText(pub Label);

impl fmt::Display for LabelText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "{}'", -self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Position of a label on the boundary circle of `2n` points.
#[inline]
pub fn circle_position(label: Label, n: usize) -> usize {
    let i = label.unsigned_abs() as usize;
    if label > 0 {
        i
    } else {
        2 * n - i + 1
    }
}

/// Whether two edges interleave on the boundary circle.
pub fn crosses(e1: Edge, e2: Edge, n: usize) -> bool {
    let span = |e: Edge| {
        let (p, q) = (circle_position(e.0, n), circle_position(e.1, n));
        (p.min(q), p.max(q))
    };
    let (a0, a1) = span(e1);
    let (b0, b1) = span(e2);
    (a0 < b0 && b0 < a1 && a1 < b1) || (b0 < a0 && a0 < b1 && b1 < a1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_orientation() {
        assert_eq!(Edge::new(2, 1).labels(), (1, 2));
        assert_eq!(Edge::new(-3, 4).labels(), (4, -3));
        assert_eq!(Edge::new(-1, 3).labels(), (3, -1));
        assert_eq!(Edge::new(-2, -1).labels(), (-1, -2));
        assert_eq!(Edge::new(-2, 2).labels(), (2, -2));
    }

    #[test]
    fn kinds_and_sizes() {
        assert_eq!(Edge::new(1, 3).kind(), EdgeKind::UpperHook);
        assert_eq!(Edge::new(-1, -3).kind(), EdgeKind::LowerHook);
        assert_eq!(Edge::new(2, -2).kind(), EdgeKind::ZeroTransversal);
        assert_eq!(Edge::new(3, -1).kind(), EdgeKind::PositiveTransversal);
        assert_eq!(Edge::new(1, -3).kind(), EdgeKind::NegativeTransversal);
        assert_eq!(Edge::new(1, -3).size(), 2);
        assert_eq!(Edge::new(2, -2).size(), 0);
        assert!(Edge::new(4, 5).is_unit_upper_hook());
        assert!(!Edge::new(-4, -5).is_unit_upper_hook());
        assert!(Edge::new(-4, -5).kind().is_hook());
        assert!(!Edge::new(2, -2).kind().is_hook());
    }

    #[test]
    fn crossing_of_transposition_strands() {
        // T1 in B2: (1,-2) and (2,-1) cross
        assert!(crosses(Edge::new(1, -2), Edge::new(2, -1), 2));
        // nested hooks do not cross
        assert!(!crosses(Edge::new(1, 4), Edge::new(2, 3), 4));
        // disjoint hooks do not cross
        assert!(!crosses(Edge::new(1, 2), Edge::new(-1, -2), 2));
        // interleaved upper hooks cross
        assert!(crosses(Edge::new(1, 3), Edge::new(2, 4), 4));
        // symmetric
        assert!(crosses(Edge::new(2, 4), Edge::new(1, 3), 4));
    }

    #[test]
    fn display_uses_prime_for_lower_nodes() {
        assert_eq!(Edge::new(-3, 4).to_string(), "4:3'");
        assert_eq!(Edge::new(1, 2).to_string(), "1:2");
    }
}
