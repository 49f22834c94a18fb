//! Folding accepted hops into the working leap, and naming the result.
//!
//! A hop is applied as a relabeling of the existing composed labels:
//! `new[hop[i]] = current[i]`, i.e. right-to-left application order. Two
//! `perform_hop` calls therefore equal one call with the combined
//! permutation under the same rule.

use crate::error::Error;
use crate::perm::Perm;
use serde::{Deserialize, Serialize};

/// Where a hop came from. Serialized names match the session document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HopSource {
    Oracle,
    #[serde(rename = "manual")]
    Drawn,
    Recalled,
}

/// A vertex permutation treated as a nameable, discrete move.
///
/// The cycle string is stored 1-indexed (the oracle's convention) and
/// shifted for display only. Identity of a hop is its `perm`, never the
/// rendered cycle string.
#[derive(Clone, Debug, PartialEq)]
pub struct Hop {
    pub perm: Perm,
    pub cycle: String,
    pub source: HopSource,
}

impl Hop {
    pub fn from_perm(perm: Perm, source: HopSource) -> Hop {
        let cycle = perm.to_cycles(1);
        Hop { perm, cycle, source }
    }
}

/// One step of the composition history. `one_line` is empty for history
/// rebuilt from a saved leap, where only cycle strings persist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HopRecord {
    pub cycle: String,
    pub one_line: Vec<u32>,
}

/// The permutation currently built by composing accepted hops.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkingLeap {
    pub labels: Perm,
    pub history: Vec<HopRecord>,
}

/// A named, persisted snapshot of a working leap, independent of the live
/// composition. `permutation` is the 0-indexed composed label array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedLeap {
    pub name: String,
    pub permutation: Vec<u32>,
    pub history: Vec<String>,
}

#[derive(Default)]
pub struct LeapComposer {
    working: Option<WorkingLeap>,
    saved: Vec<SavedLeap>,
}

impl LeapComposer {
    pub fn new() -> LeapComposer {
        LeapComposer::default()
    }

    pub fn working(&self) -> Option<&WorkingLeap> {
        self.working.as_ref()
    }

    pub fn labels(&self) -> Option<&Perm> {
        self.working.as_ref().map(|w| &w.labels)
    }

    pub fn saved(&self) -> &[SavedLeap] {
        &self.saved
    }

    /// Fold one hop into the working leap. `n` is the live vertex count;
    /// a size mismatch is rejected before anything changes.
    pub fn perform_hop(&mut self, hop: &Hop, n: usize) -> Result<&Perm, Error> {
        if hop.perm.len() != n {
            return Err(Error::IncompatibleHop {
                expected: n,
                got: hop.perm.len(),
            });
        }
        let current = match &self.working {
            Some(w) => w.labels.clone(),
            None => Perm::identity(n),
        };
        // A working leap built over a different vertex count cannot be
        // folded into; indexing it below would be out of bounds.
        if current.len() != n {
            return Err(Error::IncompatibleHop {
                expected: n,
                got: current.len(),
            });
        }
        let mut new_labels = vec![0u32; n];
        for i in 0..n {
            new_labels[hop.perm.image(i) as usize] = current.image(i);
        }
        // current was a bijection and hop.perm only permutes the slots.
        let labels = Perm::from_one_line(new_labels)?;

        let record = HopRecord {
            cycle: hop.cycle.clone(),
            one_line: hop.perm.as_slice().to_vec(),
        };
        let working = self.working.get_or_insert_with(|| WorkingLeap {
            labels: Perm::identity(n),
            history: Vec::new(),
        });
        working.labels = labels;
        working.history.push(record);
        Ok(&working.labels)
    }

    /// Clear the working leap and its history. The graph is untouched.
    pub fn reset(&mut self) {
        self.working = None;
    }

    pub fn save_working(&mut self, name: &str) -> Result<(), Error> {
        let working = self.working.as_ref().ok_or(Error::NoActiveLeap)?;
        self.saved.push(SavedLeap {
            name: name.to_string(),
            permutation: working.labels.as_slice().to_vec(),
            history: working.history.iter().map(|h| h.cycle.clone()).collect(),
        });
        Ok(())
    }

    /// Restore the working leap from a saved one. Per-hop one-line detail is
    /// not recoverable from storage; the rebuilt history is display-only.
    pub fn recall(&mut self, index: usize) -> Result<(), Error> {
        let saved = self.saved.get(index).ok_or(Error::NoSuchIndex(index))?;
        let labels = Perm::from_one_line(saved.permutation.clone())?;
        let history = saved
            .history
            .iter()
            .map(|cycle| HopRecord {
                cycle: cycle.clone(),
                one_line: Vec::new(),
            })
            .collect();
        self.working = Some(WorkingLeap { labels, history });
        Ok(())
    }

    pub fn delete_saved(&mut self, index: usize) -> Result<(), Error> {
        if index >= self.saved.len() {
            return Err(Error::NoSuchIndex(index));
        }
        self.saved.remove(index);
        Ok(())
    }

    pub(crate) fn set_saved(&mut self, saved: Vec<SavedLeap>) {
        self.saved = saved;
    }
}
