//! Shared-document detection.
//!
//! A "shared document" is a single scanned page span referenced by more than
//! one registration record, either through identical `(pages, volume)`
//! coordinates or through an explicit `Mat. <n>` cross-reference in another
//! record's observations.
//!
//! Detection is two strictly separated passes: [`SharedIndex::build`]
//! aggregates over the whole record sequence, then [`SharedIndex::is_shared`]
//! answers per-record lookups against the finished aggregation. The decision
//! pass never runs against a partially built index; callers hold the built
//! value immutably.

use std::collections::{HashMap, HashSet};

use crate::text::registration::{extract_mat_number, mat_numbers_in};
use crate::types::IndexRecord;

/// Group key: trimmed `(pages, volume)` cell values.
type GroupKey = (String, String);

/// Immutable aggregation of page-span groups and observation
/// cross-references over one index snapshot.
#[derive(Debug, Default)]
pub struct SharedIndex {
    /// Mat-numbers of every record per `(pages, volume)` coordinate.
    groups: HashMap<GroupKey, Vec<String>>,
    /// Mat-number mentioned in some record's observations → that record's
    /// own coordinate.
    observation_refs: HashMap<String, GroupKey>,
}

impl SharedIndex {
    /// Collect pass: aggregate the full record sequence.
    ///
    /// The result depends only on the multiset of
    /// `(pages, volume, matricula, observations)` values, not on record
    /// order. Duplicate and self-referencing observation mentions are
    /// absorbed without error.
    pub fn build(records: &[IndexRecord]) -> Self {
        let mut groups: HashMap<GroupKey, Vec<String>> = HashMap::new();
        let mut observation_refs: HashMap<String, GroupKey> = HashMap::new();

        for record in records {
            let key = Self::group_key(record);
            let mat_number = extract_mat_number(&record.registration_raw);
            groups.entry(key.clone()).or_default().push(mat_number);

            for mentioned in mat_numbers_in(&record.observations) {
                observation_refs.insert(mentioned, key.clone());
            }
        }

        SharedIndex {
            groups,
            observation_refs,
        }
    }

    /// Decision pass: whether `record` references a shared document.
    ///
    /// True iff the record's coordinate group holds more than one distinct
    /// mat-number, or its own mat-number is cross-referenced from any
    /// record's observations.
    pub fn is_shared(&self, record: &IndexRecord) -> bool {
        let mat_number = extract_mat_number(&record.registration_raw);
        if self.observation_refs.contains_key(&mat_number) {
            return true;
        }

        let key = Self::group_key(record);
        match self.groups.get(&key) {
            Some(mat_numbers) => mat_numbers.iter().collect::<HashSet<_>>().len() > 1,
            None => false,
        }
    }

    fn group_key(record: &IndexRecord) -> GroupKey {
        (record.pages.trim().to_string(), record.volume.trim().to_string())
    }
}
