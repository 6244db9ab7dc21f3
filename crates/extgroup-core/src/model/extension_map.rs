/// The result mapping: extension key → files in the order they were found.
///
/// Keys iterate in sorted order so rendered output is stable between runs;
/// within a key, records keep insertion (traversal) order.
use crate::model::FileRecord;
use compact_str::CompactString;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtensionMap {
    groups: BTreeMap<CompactString, Vec<FileRecord>>,
}

impl ExtensionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` to the sequence for `key`, creating it if absent.
    pub fn push(&mut self, key: CompactString, record: FileRecord) {
        self.groups.entry(key).or_default().push(record);
    }

    /// Records stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&[FileRecord]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.groups.contains_key(key)
    }

    /// Number of distinct extension keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all keys.
    pub fn file_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Sum of record sizes across all keys.
    pub fn total_size(&self) -> u64 {
        self.groups.values().flatten().map(|r| r.size).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(CompactString::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FileRecord])> {
        self.groups
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
