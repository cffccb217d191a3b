//! Label table construction and lookup.

use super::decoder;
use std::collections::HashMap;

/// Mapping from label name to instruction index.
///
/// Built once from the source lines before execution and never mutated
/// afterwards. When a name is defined more than once the last definition
/// wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelTable {
    entries: HashMap<String, usize>,
}

impl LabelTable {
    /// Scans `lines` once and records the index of every label definition.
    pub fn build<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut entries = HashMap::new();
        for (idx, line) in lines.iter().enumerate() {
            if let Some(name) = decoder::label_name(line.as_ref()) {
                if let Some(prev) = entries.insert(name.to_string(), idx) {
                    log::debug!("label '{}' redefined at {} (was {})", name, idx, prev);
                }
            }
        }
        log::debug!("label table: {} label(s)", entries.len());
        Self { entries }
    }

    /// Index of `name`, if defined.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries.get(name).copied()
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the program defines no labels.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, index)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        let mut pairs: Vec<_> = self.entries.iter().map(|(k, &v)| (k.as_str(), v)).collect();
        pairs.sort_by_key(|&(name, idx)| (idx, name));
        pairs.into_iter()
    }
}
