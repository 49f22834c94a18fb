//! Permutations in one-line notation, plus the cycle-string codec.
//!
//! The canonical internal form is always 0-indexed: `perm[i]` is the image
//! of `i`. An index base of 0 or 1 is applied only when rendering cycle
//! strings. Equality is equality of the one-line arrays; cycle strings are
//! a display view and never an identity check.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// A total bijection on `[0, n)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Perm(Vec<u32>);

impl Perm {
    pub fn identity(n: usize) -> Perm {
        Perm((0..n as u32).collect())
    }

    /// Build from a 0-indexed one-line array, validating that it is a
    /// permutation of exactly `[0, n)`.
    pub fn from_one_line(one_line: Vec<u32>) -> Result<Perm, Error> {
        let n = one_line.len();
        let mut seen = vec![false; n];
        for &v in &one_line {
            let idx = v as usize;
            if idx >= n {
                return Err(Error::InvalidPermutation(format!(
                    "value {} out of range for n={}",
                    v, n
                )));
            }
            if seen[idx] {
                return Err(Error::InvalidPermutation(format!("value {} repeats", v)));
            }
            seen[idx] = true;
        }
        Ok(Perm(one_line))
    }

    /// Build from a one-line array expressed at `base` (the oracle always
    /// sends 1-indexed data).
    pub fn from_one_line_based(one_line: &[u32], base: u32) -> Result<Perm, Error> {
        let mut shifted = Vec::with_capacity(one_line.len());
        for &v in one_line {
            match v.checked_sub(base) {
                Some(x) => shifted.push(x),
                None => {
                    return Err(Error::InvalidPermutation(format!(
                        "value {} below index base {}",
                        v, base
                    )))
                }
            }
        }
        Perm::from_one_line(shifted)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Image of `i`.
    pub fn image(&self, i: usize) -> u32 {
        self.0[i]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn into_one_line(self) -> Vec<u32> {
        self.0
    }

    /// One-line array re-expressed at `base` (for the oracle wire format).
    pub fn one_line_based(&self, base: u32) -> Vec<u32> {
        self.0.iter().map(|&v| v + base).collect()
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &v)| v == i as u32)
    }

    /// Render cycle notation at the given index base.
    ///
    /// Orbits are traced starting from the smallest unvisited index, fixed
    /// points are omitted, and the all-fixed permutation renders as `"()"`.
    /// This traversal order is deterministic and is the canonical form.
    pub fn to_cycles(&self, index_base: u32) -> String {
        let n = self.0.len();
        let mut visited = vec![false; n];
        let mut out = String::new();

        for start in 0..n {
            if visited[start] || self.0[start] as usize == start {
                visited[start] = true;
                continue;
            }
            let mut cycle = Vec::new();
            let mut j = start;
            while !visited[j] {
                visited[j] = true;
                cycle.push(j as u32 + index_base);
                j = self.0[j] as usize;
            }
            if cycle.len() > 1 {
                out.push('(');
                for (k, v) in cycle.iter().enumerate() {
                    if k > 0 {
                        out.push(' ');
                    }
                    out.push_str(&v.to_string());
                }
                out.push(')');
            }
        }

        if out.is_empty() {
            out.push_str("()");
        }
        out
    }
}

/// Re-render an already-built cycle string at a different index base by
/// adding `delta` to every embedded integer. Used because the oracle always
/// returns 1-indexed cycle strings.
pub fn shift_cycles(cycles: &str, delta: i64) -> String {
    if delta == 0 {
        return cycles.to_string();
    }
    let mut out = String::with_capacity(cycles.len());
    let mut digits = String::new();
    for c in cycles.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else {
            flush_shifted(&mut out, &mut digits, delta);
            out.push(c);
        }
    }
    flush_shifted(&mut out, &mut digits, delta);
    out
}

fn flush_shifted(out: &mut String, digits: &mut String, delta: i64) {
    if digits.is_empty() {
        return;
    }
    // Stored cycle strings never hold numbers near i64 range; saturate
    // rather than wrap if one somehow does.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX).saturating_add(delta);
    out.push_str(&value.to_string());
    digits.clear();
}
