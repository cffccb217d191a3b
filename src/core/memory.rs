//! Sparse word-addressable memory.
//!
//! Every address holds one 32-bit word. Addresses are not checked for
//! alignment or bounds; unwritten addresses read as zero.

use std::collections::BTreeMap;

/// Sparse data memory keyed by word address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    words: BTreeMap<i32, i32>,
}

impl Memory {
    /// Creates an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the word at `addr`, or 0 if it was never written.
    pub fn read(&self, addr: i32) -> i32 {
        self.words.get(&addr).copied().unwrap_or(0)
    }

    /// Writes `val` at `addr`, creating or overwriting the entry.
    pub fn write(&mut self, addr: i32, val: i32) {
        self.words.insert(addr, val);
    }

    /// Number of populated addresses.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no address has been written.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Populated `(address, value)` pairs in ascending address order.
    pub fn snapshot(&self) -> Vec<(i32, i32)> {
        self.words.iter().map(|(&a, &v)| (a, v)).collect()
    }
}
