use std::collections::{HashMap, HashSet};

use crate::model::entity_key::{EntityKey, KeyedStudent};
use crate::model::student::Student;

/// Merges the local overlay with a remote snapshot.
///
/// Remote records whose key already appears in the overlay are dropped, so the
/// local copy of an entity always wins. The overlay comes first and the
/// combined sequence is then collapsed with `dedup_by_key`.
pub fn merge_sources(overlay: Vec<Student>, remote: Vec<Student>) -> Vec<KeyedStudent> {
    let local: Vec<KeyedStudent> = overlay.into_iter().map(KeyedStudent::new).collect();
    let local_keys: HashSet<EntityKey> = local.iter().map(|entry| entry.key.clone()).collect();

    let combined = local
        .into_iter()
        .chain(
            remote
                .into_iter()
                .map(KeyedStudent::new)
                .filter(|entry| !local_keys.contains(&entry.key)),
        )
        .collect();

    dedup_by_key(combined)
}

/// Collapses records sharing a key. Each key keeps the position of its first
/// occurrence and the data of its last one.
pub fn dedup_by_key(entries: Vec<KeyedStudent>) -> Vec<KeyedStudent> {
    let mut slots: HashMap<EntityKey, usize> = HashMap::with_capacity(entries.len());
    let mut unique: Vec<KeyedStudent> = Vec::with_capacity(entries.len());
    for entry in entries {
        match slots.get(&entry.key) {
            Some(&idx) => unique[idx] = entry,
            None => {
                slots.insert(entry.key.clone(), unique.len());
                unique.push(entry);
            }
        }
    }
    unique
}
