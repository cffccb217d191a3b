//! Decoded program image.

use super::decoder;
use super::instruction::Instruction;
use super::labels::LabelTable;
use crate::common::SimError;

/// A loaded program: decoded instructions, their source text, and the
/// label table.
#[derive(Clone, Debug, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
    source: Vec<String>,
    labels: LabelTable,
}

impl Program {
    /// Decodes an already-normalized instruction sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MalformedOperand`] for the first line whose
    /// opcode is supported but whose operands do not decode.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, SimError> {
        let labels = LabelTable::build(lines);
        let mut instructions = Vec::with_capacity(lines.len());
        let mut source = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let inst = decoder::decode(line).map_err(|(opcode, reason)| {
                SimError::MalformedOperand {
                    index,
                    line: line.to_string(),
                    opcode,
                    reason,
                }
            })?;
            instructions.push(inst);
            source.push(line.to_string());
        }

        log::debug!(
            "decoded {} instruction slot(s), {} label(s)",
            instructions.len(),
            labels.len()
        );
        for (name, idx) in labels.iter() {
            log::trace!("label {} -> {}", name, idx);
        }
        Ok(Self {
            instructions,
            source,
            labels,
        })
    }

    /// Number of slots, label definitions included.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no slots.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Decoded instruction at `index`.
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Source text of the slot at `index`.
    pub fn source(&self, index: usize) -> Option<&str> {
        self.source.get(index).map(String::as_str)
    }

    /// The label table.
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }
}
