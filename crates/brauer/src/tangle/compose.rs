//! Diagram product, generator diagrams, and the in-place `T_i` update.
//!
//! Convention: `x.compose(&y)` stacks `x` above `y`; the lower nodes of `x` are
//! glued to the upper nodes of `y`. Generators act on the lower boundary, so a
//! word `g1 g2 … gk` evaluates to `((id · g1) · g2) … · gk`.

use super::Tangle;
use crate::edge::{crosses, Edge, Label};
use crate::error::{Error, Result};
use crate::generator::Generator;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Level {
    Top,
    Bottom,
}

/// One step of a walk through the stacked pair.
enum Step {
    /// Reached an outer endpoint of the product.
    Exit(Label),
    /// Crossed the gluing line at middle point `k`; continue on the other level.
    Middle(usize, Level, Label),
}

impl Tangle {
    /// The identity diagram `{(k, -k)}` of order `n`.
    pub fn identity(n: usize) -> Result<Self> {
        Tangle::from_edges((1..=n as Label).map(|k| (k, -k)))
    }

    /// The elementary diagram of `g` in order `n`.
    pub fn generator(g: Generator, n: usize) -> Result<Self> {
        g.check_range(n)?;
        let i = g.index() as Label;
        let mut pairs: Vec<(Label, Label)> = (1..=n as Label)
            .filter(|&k| k != i && k != i + 1)
            .map(|k| (k, -k))
            .collect();
        match g {
            Generator::U(_) => pairs.extend([(i, i + 1), (-i, -(i + 1))]),
            Generator::T(_) => pairs.extend([(i, -(i + 1)), (i + 1, -i)]),
        }
        Tangle::from_edges(pairs)
    }

    /// Product with `self` on top of `below`.
    ///
    /// Returns the product diagram and the number of closed loops removed.
    pub fn compose(&self, below: &Tangle) -> Result<(Tangle, usize)> {
        if self.n != below.n {
            return Err(Error::SizeMismatch {
                left: self.n,
                right: below.n,
            });
        }
        let n = self.n as Label;
        let mut visited = vec![false; self.n + 1];
        let mut paired = vec![false; 2 * self.n + 1];
        let slot = |l: Label| (l + n) as usize;
        let mut pairs = Vec::with_capacity(self.n);

        let outer = (1..=n)
            .map(|k| (Level::Top, k))
            .chain((1..=n).map(|k| (Level::Bottom, -k)));
        for (level, start) in outer {
            if paired[slot(start)] {
                continue;
            }
            let (mut level, mut node) = (level, start);
            let end = loop {
                match self.step(below, level, node)? {
                    Step::Exit(end) => break end,
                    Step::Middle(k, next_level, next_node) => {
                        visited[k] = true;
                        level = next_level;
                        node = next_node;
                    }
                }
            };
            paired[slot(start)] = true;
            paired[slot(end)] = true;
            pairs.push((start, end));
        }

        let mut loops = 0;
        for k in 1..=self.n {
            if visited[k] {
                continue;
            }
            loops += 1;
            visited[k] = true;
            let (mut level, mut node) = (Level::Top, -(k as Label));
            loop {
                match self.step(below, level, node)? {
                    Step::Middle(j, _, _) if visited[j] => break,
                    Step::Middle(j, next_level, next_node) => {
                        visited[j] = true;
                        level = next_level;
                        node = next_node;
                    }
                    Step::Exit(end) => {
                        return Err(Error::Inconsistent(format!(
                            "closed component through middle point {k} reached boundary {end}"
                        )))
                    }
                }
            }
        }

        Ok((Tangle::from_edges(pairs)?, loops))
    }

    fn step(&self, below: &Tangle, level: Level, node: Label) -> Result<Step> {
        let diagram = match level {
            Level::Top => self,
            Level::Bottom => below,
        };
        let next = diagram
            .edge_from(node)
            .and_then(|e| e.other(node))
            .ok_or_else(|| Error::Inconsistent(format!("node {node} has no edge")))?;
        Ok(match (level, next > 0) {
            (Level::Top, true) | (Level::Bottom, false) => Step::Exit(next),
            (Level::Top, false) => Step::Middle(next.unsigned_abs() as usize, Level::Bottom, -next),
            (Level::Bottom, true) => Step::Middle(next as usize, Level::Top, -next),
        })
    }

    /// Product with the generator `g` below; loops are discarded.
    pub fn apply(&self, g: Generator) -> Result<Tangle> {
        let (product, _loops) = self.compose(&Tangle::generator(g, self.n)?)?;
        Ok(product)
    }

    /// Swap the roles of the upper nodes `i` and `i + 1` in place.
    ///
    /// Both touched edges keep their crossing counts except for the pair
    /// itself, whose crossing relation flips; no other endpoint lies between
    /// the two circle positions. Returns whether the two strands crossed
    /// before the swap (the length-reducing direction). A hook `(i, i + 1)` is
    /// left unchanged and reports `false`.
    pub fn compose_with_t(&mut self, i: usize) -> Result<bool> {
        Generator::T(i).check_range(self.n)?;
        let i = i as Label;
        let a = self
            .edge_from(i)
            .ok_or_else(|| Error::Inconsistent(format!("node {i} has no edge")))?;
        let b = self
            .edge_from(i + 1)
            .ok_or_else(|| Error::Inconsistent(format!("node {} has no edge", i + 1)))?;
        if a == b {
            return Ok(false);
        }
        let crossed = crosses(a, b, self.n);
        let (ca, cb) = (self.crossings_of(a), self.crossings_of(b));

        let swap = |l: Label| {
            if l == i {
                i + 1
            } else if l == i + 1 {
                i
            } else {
                l
            }
        };
        let relabel = |e: Edge| Edge::new(swap(e.first()), swap(e.second()));
        let (a2, b2) = (relabel(a), relabel(b));

        self.delete_edge(a);
        self.delete_edge(b);
        self.add_edge(a2);
        self.add_edge(b2);
        let shift = |c: usize| if crossed { c - 1 } else { c + 1 };
        self.crossings.insert(a2, shift(ca));
        self.crossings.insert(b2, shift(cb));
        Ok(crossed)
    }
}
