//! Random tangles and generator words with replayable seeds.
//!
//! Model
//! - Tangles: shuffle the `2N` labels uniformly and pair them consecutively,
//!   which draws a perfect matching uniformly among the `(2N-1)!!` diagrams.
//! - Words: independent uniform picks among the `2(N-1)` generators.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//!   draw `k` of a batch can be reproduced without replaying draws `0..k`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::edge::Label;
use crate::error::Result;
use crate::generator::{Factorization, Generator};
use crate::tangle::Tangle;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniformly random Brauer diagram of order `n`.
pub fn random_tangle(n: usize, tok: ReplayToken) -> Result<Tangle> {
    let mut rng = tok.to_std_rng();
    let mut labels: Vec<Label> = (1..=n as Label)
        .chain((1..=n as Label).map(|k| -k))
        .collect();
    labels.shuffle(&mut rng);
    Tangle::from_edges(labels.chunks_exact(2).map(|p| (p[0], p[1])))
}

/// Random generator word of length `len` in order `n` (empty when `n < 2`).
pub fn random_word(n: usize, len: usize, tok: ReplayToken) -> Factorization {
    if n < 2 {
        return Factorization::default();
    }
    let mut rng = tok.to_std_rng();
    let gens = (0..len)
        .map(|_| {
            let i = rng.gen_range(1..n);
            if rng.gen_bool(0.5) {
                Generator::U(i)
            } else {
                Generator::T(i)
            }
        })
        .collect();
    Factorization(gens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_is_deterministic() {
        let tok = ReplayToken::new(42, 7);
        assert_eq!(random_tangle(6, tok).unwrap(), random_tangle(6, tok).unwrap());
        assert_eq!(random_word(5, 12, tok), random_word(5, 12, tok));
    }

    #[test]
    fn draws_are_valid_diagrams() {
        for index in 0..50 {
            let t = random_tangle(5, ReplayToken::new(1, index)).unwrap();
            assert_eq!(t.n(), 5);
            assert!(t.check_crossings().is_ok());
        }
    }

    #[test]
    fn words_stay_in_range() {
        let w = random_word(4, 100, ReplayToken::new(3, 0));
        assert_eq!(w.len(), 100);
        assert!(w.generators().iter().all(|g| (1..4).contains(&g.index())));
        assert!(random_word(1, 10, ReplayToken::new(3, 0)).is_empty());
    }
}
