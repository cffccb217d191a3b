//! Textual instruction decoder.
//!
//! Turns one normalized source line (`opcode op1 op2 ...`) into an
//! [`Instruction`]. Opcodes are case-folded before matching. Unsupported
//! opcodes decode to [`Instruction::Unknown`]; operand problems on a
//! supported opcode are a [`DecodeError`].

use super::abi;
use super::instruction::{Instruction, Target};
use crate::common::{DecodeError, NUM_REGS};

/// Splits a line into tokens, treating commas as whitespace.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Returns the label name if `line` is a label definition.
///
/// A label definition is a line holding a single token that ends in `:`.
/// Colons anywhere else do not make a label.
pub fn label_name(line: &str) -> Option<&str> {
    let tokens = tokenize(line);
    match *tokens.as_slice() {
        [tok] => tok.strip_suffix(':').filter(|name| !name.is_empty()),
        _ => None,
    }
}

/// Decodes one line.
///
/// # Returns
///
/// The decoded instruction, or the operand error together with the
/// case-folded opcode so the caller can report which instruction failed.
pub fn decode(line: &str) -> Result<Instruction, (String, DecodeError)> {
    if let Some(name) = label_name(line) {
        return Ok(Instruction::Label(name.to_string()));
    }

    let tokens = tokenize(line);
    let Some((op, ops)) = tokens.split_first() else {
        return Ok(Instruction::Unknown(line.to_string()));
    };
    let opcode = op.to_ascii_lowercase();

    decode_operands(&opcode, ops, line).map_err(|e| (opcode, e))
}

fn decode_operands(opcode: &str, ops: &[&str], line: &str) -> Result<Instruction, DecodeError> {
    let inst = match opcode {
        "add" => {
            expect_count(ops, 3, "3")?;
            Instruction::Add {
                rd: parse_reg(ops[0])?,
                rs1: parse_reg(ops[1])?,
                rs2: parse_reg(ops[2])?,
            }
        }
        "sub" => {
            expect_count(ops, 3, "3")?;
            Instruction::Sub {
                rd: parse_reg(ops[0])?,
                rs1: parse_reg(ops[1])?,
                rs2: parse_reg(ops[2])?,
            }
        }
        "addi" => {
            expect_count(ops, 3, "3")?;
            Instruction::Addi {
                rd: parse_reg(ops[0])?,
                rs1: parse_reg(ops[1])?,
                imm: parse_imm(ops[2])?,
            }
        }
        "li" => {
            expect_count(ops, 2, "2")?;
            Instruction::Li {
                rd: parse_reg(ops[0])?,
                imm: parse_imm(ops[1])?,
            }
        }
        "lw" => {
            let (rd, offset, rs1) = parse_mem_operands(ops)?;
            Instruction::Lw { rd, offset, rs1 }
        }
        "sw" => {
            let (rs2, offset, rs1) = parse_mem_operands(ops)?;
            Instruction::Sw { rs2, offset, rs1 }
        }
        "beq" => {
            expect_count(ops, 3, "3")?;
            Instruction::Beq {
                rs1: parse_reg(ops[0])?,
                rs2: parse_reg(ops[1])?,
                target: Target::parse(ops[2]),
            }
        }
        "jal" => match ops {
            [target] => Instruction::Jal {
                rd: abi::REG_RA,
                target: Target::parse(target),
            },
            [rd, target] => Instruction::Jal {
                rd: parse_reg(rd)?,
                target: Target::parse(target),
            },
            _ => {
                return Err(DecodeError::OperandCount {
                    expected: "1 or 2",
                    found: ops.len(),
                })
            }
        },
        "j" => {
            expect_count(ops, 1, "1")?;
            Instruction::J {
                target: Target::parse(ops[0]),
            }
        }
        _ => Instruction::Unknown(line.to_string()),
    };
    Ok(inst)
}

fn expect_count(ops: &[&str], n: usize, expected: &'static str) -> Result<(), DecodeError> {
    if ops.len() == n {
        Ok(())
    } else {
        Err(DecodeError::OperandCount {
            expected,
            found: ops.len(),
        })
    }
}

/// Parses `reg, offset, base` or `reg, offset(base)`.
fn parse_mem_operands(ops: &[&str]) -> Result<(usize, i32, usize), DecodeError> {
    match ops {
        [reg, offset, base] => Ok((parse_reg(reg)?, parse_imm(offset)?, parse_reg(base)?)),
        [reg, mem] => {
            let (offset, base) = parse_base_offset(mem)?;
            Ok((parse_reg(reg)?, offset, base))
        }
        _ => Err(DecodeError::OperandCount {
            expected: "2 or 3",
            found: ops.len(),
        }),
    }
}

/// Parses `offset(base)`; an empty offset means zero.
fn parse_base_offset(token: &str) -> Result<(i32, usize), DecodeError> {
    let bad = || DecodeError::InvalidMemoryOperand(token.to_string());
    let open = token.find('(').ok_or_else(bad)?;
    let inner = token[open + 1..].strip_suffix(')').ok_or_else(bad)?;
    let offset = match &token[..open] {
        "" => 0,
        off => parse_imm(off)?,
    };
    Ok((offset, parse_reg(inner)?))
}

/// Parses a register operand: `xN`, bare `N`, or an ABI name.
pub fn parse_reg(token: &str) -> Result<usize, DecodeError> {
    let numeric = token
        .strip_prefix(|c| c == 'x' || c == 'X')
        .unwrap_or(token);
    if numeric.is_empty() || !numeric.bytes().all(|b| b.is_ascii_digit()) {
        return abi::index_of(token)
            .ok_or_else(|| DecodeError::InvalidRegister(token.to_string()));
    }

    let idx: u32 = numeric
        .parse()
        .map_err(|_| DecodeError::InvalidRegister(token.to_string()))?;
    if (idx as usize) < NUM_REGS {
        Ok(idx as usize)
    } else {
        Err(DecodeError::RegisterOutOfRange(idx))
    }
}

/// Parses a decimal or `0x` hexadecimal immediate.
///
/// Values in `[i32::MIN, u32::MAX]` are accepted and truncated to 32 bits,
/// so `0xFFFFFFFF` reads as `-1`.
pub fn parse_imm(token: &str) -> Result<i32, DecodeError> {
    let bad = || DecodeError::InvalidImmediate(token.to_string());
    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let (radix, digits) = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, body),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(bad());
    }

    let magnitude = i64::from_str_radix(digits, radix).map_err(|_| bad())?;
    let value = if negative { -magnitude } else { magnitude };
    if value < i32::MIN as i64 || value > u32::MAX as i64 {
        return Err(bad());
    }
    Ok(value as u32 as i32)
}
