//! Shared helpers for integration tests.

use brauer::{Label, Tangle};

/// All `(2n-1)!!` Brauer diagrams of order `n`.
pub fn all_tangles(n: usize) -> Vec<Tangle> {
    let labels: Vec<Label> = (1..=n as Label)
        .chain((1..=n as Label).map(|k| -k))
        .collect();
    let mut out = Vec::new();
    let mut pairs = Vec::with_capacity(n);
    matchings(&labels, &mut pairs, &mut out);
    out
}

fn matchings(rest: &[Label], pairs: &mut Vec<(Label, Label)>, out: &mut Vec<Tangle>) {
    let Some((&first, tail)) = rest.split_first() else {
        out.push(Tangle::from_edges(pairs.iter().copied()).expect("perfect matching"));
        return;
    };
    for k in 0..tail.len() {
        let mut remaining = tail.to_vec();
        let partner = remaining.remove(k);
        pairs.push((first, partner));
        matchings(&remaining, pairs, out);
        pairs.pop();
    }
}

pub fn double_factorial(n: usize) -> usize {
    (1..=n).rev().step_by(2).product()
}
