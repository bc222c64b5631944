use serde::Serialize;
use std::fmt;

use super::{InstructionRecord, Space};

/// Two annotations claiming the same opcode. The replacing one ends up in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub space: Space,
    pub opcode: u8,
    pub previous: InstructionRecord,
    pub replacement: InstructionRecord,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} opcode 0x{:02X}: `{}` ({}) replaced by `{}` ({})",
            self.space,
            self.opcode,
            self.previous.handler,
            self.previous.source,
            self.replacement.handler,
            self.replacement.source
        )
    }
}
