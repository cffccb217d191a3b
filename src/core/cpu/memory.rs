//! Load/store helpers.
//!
//! Every load or store counts as one memory access.

use super::Cpu;

impl Cpu {
    pub(super) fn load_word(&mut self, addr: i32) -> i32 {
        self.stats.memory_accesses += 1;
        self.stats.inst_load += 1;
        self.mem.read(addr)
    }

    pub(super) fn store_word(&mut self, addr: i32, val: i32) {
        self.stats.memory_accesses += 1;
        self.stats.inst_store += 1;
        self.mem.write(addr, val);
    }
}
