//! Decoded instruction representation.
//!
//! Each source line decodes once, at load time, into an [`Instruction`].
//! The execution engine dispatches on the enum and never re-parses text.

use std::fmt;

/// A control-flow target operand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A decimal numeral used directly as an instruction index.
    Index(usize),
    /// A symbolic name looked up in the label table.
    Label(String),
}

impl Target {
    /// Classifies an operand token: all ASCII digits is an index, anything
    /// else is a label name.
    pub fn parse(token: &str) -> Self {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(idx) = token.parse::<usize>() {
                return Target::Index(idx);
            }
        }
        Target::Label(token.to_string())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Index(i) => write!(f, "{}", i),
            Target::Label(l) => f.write_str(l),
        }
    }
}

/// One slot of the instruction sequence.
///
/// Register fields are indices in `[0, 32)`; immediates are already
/// truncated to 32 bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// A `name:` label definition. Occupies a slot but never executes.
    Label(String),
    /// `reg[rd] = reg[rs1] + reg[rs2]`
    Add { rd: usize, rs1: usize, rs2: usize },
    /// `reg[rd] = reg[rs1] + imm`
    Addi { rd: usize, rs1: usize, imm: i32 },
    /// `reg[rd] = reg[rs1] - reg[rs2]`
    Sub { rd: usize, rs1: usize, rs2: usize },
    /// `reg[rd] = imm`
    Li { rd: usize, imm: i32 },
    /// `reg[rd] = mem[reg[rs1] + offset]`
    Lw { rd: usize, offset: i32, rs1: usize },
    /// `mem[reg[rs1] + offset] = reg[rs2]`
    Sw { rs2: usize, offset: i32, rs1: usize },
    /// Branch to `target` when `reg[rs1] == reg[rs2]`.
    Beq { rs1: usize, rs2: usize, target: Target },
    /// Write the return address to `rd` and jump to `target`.
    Jal { rd: usize, target: Target },
    /// Unconditional jump.
    J { target: Target },
    /// An opcode outside the supported set; carries the source text.
    Unknown(String),
}

impl Instruction {
    /// Whether this slot is a label definition.
    pub fn is_label(&self) -> bool {
        matches!(self, Instruction::Label(_))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Label(name) => write!(f, "{}:", name),
            Instruction::Add { rd, rs1, rs2 } => write!(f, "add x{} x{} x{}", rd, rs1, rs2),
            Instruction::Addi { rd, rs1, imm } => write!(f, "addi x{} x{} {}", rd, rs1, imm),
            Instruction::Sub { rd, rs1, rs2 } => write!(f, "sub x{} x{} x{}", rd, rs1, rs2),
            Instruction::Li { rd, imm } => write!(f, "li x{} {}", rd, imm),
            Instruction::Lw { rd, offset, rs1 } => write!(f, "lw x{} {} x{}", rd, offset, rs1),
            Instruction::Sw { rs2, offset, rs1 } => write!(f, "sw x{} {} x{}", rs2, offset, rs1),
            Instruction::Beq { rs1, rs2, target } => {
                write!(f, "beq x{} x{} {}", rs1, rs2, target)
            }
            Instruction::Jal { rd, target } => write!(f, "jal x{} {}", rd, target),
            Instruction::J { target } => write!(f, "j {}", target),
            Instruction::Unknown(text) => f.write_str(text),
        }
    }
}
