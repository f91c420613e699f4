//! Text form of a tangle: comma-separated `a:b` pairs, `k'` for the lower node `-k`.
//!
//! `1:2,1':2'` is `U1` in B2; `1:2',2:1'` is `T1`.

use std::fmt;
use std::str::FromStr;

use super::Tangle;
use crate::edge::Label;
use crate::error::{Error, Result};

fn parse_label(token: &str) -> Result<Label> {
    let token = token.trim();
    let (digits, lower) = match token.strip_suffix('\'') {
        Some(rest) => (rest.trim_end(), true),
        None => (token, false),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::parse(
            token,
            "expected a positive integer, optionally primed",
        ));
    }
    let k: Label = digits
        .parse()
        .map_err(|_| Error::parse(token, "expected a positive integer, optionally primed"))?;
    if k <= 0 {
        return Err(Error::parse(token, "labels start at 1"));
    }
    Ok(if lower { -k } else { k })
}

fn parse_pair(token: &str) -> Result<(Label, Label)> {
    let mut parts = token.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Ok((parse_label(a)?, parse_label(b)?)),
        _ => Err(Error::parse(token, "expected a pair `a:b`")),
    }
}

impl FromStr for Tangle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidDiagram("empty text".into()));
        }
        let pairs = s.split(',').map(parse_pair).collect::<Result<Vec<_>>>()?;
        Tangle::from_edges(pairs)
    }
}

impl fmt::Display for Tangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, e) in self.edges.iter().enumerate() {
            if k > 0 {
                f.write_str(",")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}
