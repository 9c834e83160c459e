#![forbid(unsafe_code)]

use crate::stores::CandidateKey;
use std::collections::HashMap;

/// Delay-load eligibility per (image, process). Entries only ever move from
/// eligible to ineligible.
#[derive(Debug, Default)]
pub struct CandidacyMap {
    entries: HashMap<CandidateKey, bool>,
}

impl CandidacyMap {
    /// Record a load observation. Repeated observations are AND-folded.
    pub fn observe_load(&mut self, key: CandidateKey, eligible: bool) {
        let entry = self.entries.entry(key).or_insert(eligible);
        *entry &= eligible;
    }

    /// Mark the pair as ineligible, creating the entry if needed. Returns
    /// `true` if this call revoked a previously eligible entry.
    pub fn disqualify(&mut self, key: CandidateKey) -> bool {
        match self.entries.insert(key, false) {
            Some(was_eligible) => was_eligible,
            None => false,
        }
    }

    pub fn is_eligible(&self, key: CandidateKey) -> Option<bool> {
        self.entries.get(&key).copied()
    }

    pub fn eligible(&self) -> impl Iterator<Item = CandidateKey> + '_ {
        self.entries
            .iter()
            .filter_map(|(key, eligible)| eligible.then_some(*key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
