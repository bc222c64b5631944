use serde::Serialize;
use std::fmt;

use super::InstructionRecord;
use crate::constants::{FALLBACK_HANDLER, FALLBACK_HANDLER_EXTENDED, TABLE_SIZE};

/// Which of the two opcode tables an annotation belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    /// One byte opcodes.
    Primary,
    /// Opcodes reached through the `0xCB` prefix.
    Extended,
}

impl Space {
    /// Handler installed for every opcode without an implementation.
    pub fn fallback_handler(self) -> &'static str {
        match self {
            Space::Primary => FALLBACK_HANDLER,
            Space::Extended => FALLBACK_HANDLER_EXTENDED,
        }
    }

    /// Prepended to the table names, e.g. `CB_OPCODE_TABLE`.
    pub fn table_prefix(self) -> &'static str {
        match self {
            Space::Primary => "",
            Space::Extended => "CB_",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Primary => write!(f, "primary"),
            Space::Extended => write!(f, "extended"),
        }
    }
}

/// Dense opcode -> record mapping for one space. Empty slots are unimplemented opcodes.
#[derive(Debug, Clone)]
pub struct OpcodeSpace {
    kind: Space,
    slots: Vec<Option<InstructionRecord>>,
}

impl OpcodeSpace {
    pub fn new(kind: Space) -> Self {
        OpcodeSpace {
            kind,
            slots: vec![None; TABLE_SIZE],
        }
    }

    /// Stores `record` at `opcode`, handing back whatever was there before.
    pub fn insert(&mut self, opcode: u8, record: InstructionRecord) -> Option<InstructionRecord> {
        self.slots[opcode as usize].replace(record)
    }

    pub fn get(&self, opcode: u8) -> Option<&InstructionRecord> {
        self.slots[opcode as usize].as_ref()
    }

    /// Number of implemented opcodes.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Implemented opcodes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &InstructionRecord)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(opcode, slot)| slot.as_ref().map(|record| (opcode as u8, record)))
    }

    /// Handler identifier emitted at `opcode`, falling back to the trap handler.
    pub fn handler_at(&self, opcode: u8) -> &str {
        self.get(opcode)
            .map_or(self.kind.fallback_handler(), |record| record.handler.as_str())
    }
}
