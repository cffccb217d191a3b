//! Instruction semantics.
//!
//! Dispatches a decoded [`Instruction`] against the register file and
//! memory. On entry the program counter already points at the next slot;
//! control transfers overwrite it.

use super::Cpu;
use crate::common::Diagnostic;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::{Instruction, Target};

impl Cpu {
    pub(super) fn execute(&mut self, index: usize, inst: &Instruction) {
        match inst {
            Instruction::Add { rd, rs1, rs2 } => {
                let val = Alu::execute(AluOp::Add, self.regs.read(*rs1), self.regs.read(*rs2));
                self.retire_alu(*rd, val);
            }
            Instruction::Addi { rd, rs1, imm } => {
                let val = Alu::execute(AluOp::Add, self.regs.read(*rs1), *imm);
                self.retire_alu(*rd, val);
            }
            Instruction::Sub { rd, rs1, rs2 } => {
                let val = Alu::execute(AluOp::Sub, self.regs.read(*rs1), self.regs.read(*rs2));
                self.retire_alu(*rd, val);
            }
            Instruction::Li { rd, imm } => self.retire_alu(*rd, *imm),
            Instruction::Lw { rd, offset, rs1 } => {
                let addr = Alu::effective_address(self.regs.read(*rs1), *offset);
                let val = self.load_word(addr);
                self.regs.write(*rd, val);
                self.stats.instructions += 1;
            }
            Instruction::Sw { rs2, offset, rs1 } => {
                let addr = Alu::effective_address(self.regs.read(*rs1), *offset);
                let val = self.regs.read(*rs2);
                self.store_word(addr, val);
                self.stats.instructions += 1;
            }
            Instruction::Beq { rs1, rs2, target } => {
                self.stats.instructions += 1;
                self.stats.inst_branch += 1;
                if self.regs.read(*rs1) == self.regs.read(*rs2) {
                    self.stats.branches_taken += 1;
                    self.pc = self.resolve(index, target);
                }
            }
            Instruction::Jal { rd, target } => {
                self.stats.instructions += 1;
                self.stats.inst_jump += 1;
                // Return address is the index of the following slot.
                self.regs.write(*rd, self.pc as i32);
                self.pc = self.resolve(index, target);
            }
            Instruction::J { target } => {
                self.stats.instructions += 1;
                self.stats.inst_jump += 1;
                self.pc = self.resolve(index, target);
            }
            Instruction::Unknown(text) => {
                self.stats.inst_unknown += 1;
                self.report(Diagnostic::UnknownInstruction {
                    index,
                    text: text.clone(),
                });
            }
            Instruction::Label(_) => {}
        }
    }

    /// Resolves a control-flow target to an instruction index.
    ///
    /// Numeric targets are used as-is. A missing label is reported and
    /// resolves to the current program counter, which already points past
    /// the jumping instruction, so the transfer degrades to a no-op.
    pub(super) fn resolve(&mut self, index: usize, target: &Target) -> usize {
        match target {
            Target::Index(i) => *i,
            Target::Label(name) => {
                if let Some(i) = self.program.labels().get(name) {
                    return i;
                }
                self.report(Diagnostic::LabelNotFound {
                    index,
                    label: name.clone(),
                });
                self.pc
            }
        }
    }

    fn retire_alu(&mut self, rd: usize, val: i32) {
        self.regs.write(rd, val);
        self.stats.instructions += 1;
        self.stats.inst_alu += 1;
    }
}
