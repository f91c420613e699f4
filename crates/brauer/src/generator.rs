//! Generator vocabulary (`U_i`, `T_i`) and generator sequences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tangle::Tangle;

/// Elementary generator of the Brauer monoid, 1-based index.
///
/// `U(i)` caps strands `i, i+1` on both sides; `T(i)` crosses them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Generator {
    U(usize),
    T(usize),
}

impl Generator {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Generator::U(i) | Generator::T(i) => i,
        }
    }

    #[inline]
    pub fn is_transposition(self) -> bool {
        matches!(self, Generator::T(_))
    }

    /// Ensure `1 <= i < n`.
    pub fn check_range(self, n: usize) -> Result<()> {
        let i = self.index();
        if i == 0 || i >= n {
            return Err(Error::GeneratorOutOfRange { index: i, n });
        }
        Ok(())
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::U(i) => write!(f, "U{i}"),
            Generator::T(i) => write!(f, "T{i}"),
        }
    }
}

impl FromStr for Generator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let head = chars.next();
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::parse(s, "expected U<i> or T<i>"));
        }
        let index: usize = digits
            .parse()
            .map_err(|_| Error::parse(s, "expected U<i> or T<i>"))?;
        if index == 0 {
            return Err(Error::parse(s, "generator indices are 1-based"));
        }
        match head {
            Some('U') => Ok(Generator::U(index)),
            Some('T') => Ok(Generator::T(index)),
            _ => Err(Error::parse(s, "expected U<i> or T<i>")),
        }
    }
}

impl From<Generator> for String {
    fn from(g: Generator) -> Self {
        g.to_string()
    }
}

impl TryFrom<String> for Generator {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Ordered generator sequence; empty means the identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Factorization(pub Vec<Generator>);

impl Factorization {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn generators(&self) -> &[Generator] {
        &self.0
    }

    /// Text tokens, with the sentinel `I` standing in for the empty sequence.
    pub fn tokens(&self) -> Vec<String> {
        if self.0.is_empty() {
            return vec!["I".to_string()];
        }
        self.0.iter().map(Generator::to_string).collect()
    }

    /// Number of `T` generators.
    pub fn t_count(&self) -> usize {
        self.0.iter().filter(|g| g.is_transposition()).count()
    }

    pub fn u_count(&self) -> usize {
        self.len() - self.t_count()
    }

    /// Multiply the generators left to right, starting from the identity of order `n`.
    pub fn evaluate(&self, n: usize) -> Result<Tangle> {
        let mut acc = Tangle::identity(n)?;
        for &g in &self.0 {
            acc = acc.apply(g)?;
        }
        Ok(acc)
    }
}

impl From<Vec<Generator>> for Factorization {
    fn from(v: Vec<Generator>) -> Self {
        Factorization(v)
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(","))
    }
}

impl FromStr for Factorization {
    type Err = Error;

    /// Accepts `I` or comma/whitespace separated tokens; `I` tokens are dropped.
    fn from_str(s: &str) -> Result<Self> {
        let gens = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty() && *t != "I")
            .map(str::parse::<Generator>)
            .collect::<Result<Vec<_>>>()?;
        Ok(Factorization(gens))
    }
}
