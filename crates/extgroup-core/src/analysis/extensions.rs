/// Per-extension size and count totals.
use crate::model::ExtensionMap;
use serde::Serialize;

/// Totals for one extension key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionStats {
    pub extension: String,
    pub file_count: u64,
    pub total_size: u64,
}

/// Compute totals for every key, largest total size first.
///
/// Ties are broken by key so the order is stable.
pub fn extension_stats(files: &ExtensionMap) -> Vec<ExtensionStats> {
    let mut stats: Vec<ExtensionStats> = files
        .iter()
        .map(|(ext, records)| ExtensionStats {
            extension: ext.to_string(),
            file_count: records.len() as u64,
            total_size: records.iter().map(|r| r.size).sum(),
        })
        .collect();

    stats.sort_by(|a, b| {
        b.total_size
            .cmp(&a.total_size)
            .then_with(|| a.extension.cmp(&b.extension))
    });
    stats
}
