use log::{debug, warn};

use super::pattern::annotations;
use crate::model::{Conflict, InstructionRecord, ModuleRegistry, OpcodeSpace, Space};

/// Everything one scan pass learned: both opcode spaces, the import list
/// and any opcode that was claimed more than once.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub primary: OpcodeSpace,
    pub extended: OpcodeSpace,
    pub modules: ModuleRegistry,
    pub conflicts: Vec<Conflict>,
}

impl ScanResult {
    pub fn new() -> Self {
        ScanResult {
            primary: OpcodeSpace::new(Space::Primary),
            extended: OpcodeSpace::new(Space::Extended),
            modules: ModuleRegistry::new(),
            conflicts: Vec::new(),
        }
    }

    pub fn space(&self, kind: Space) -> &OpcodeSpace {
        match kind {
            Space::Primary => &self.primary,
            Space::Extended => &self.extended,
        }
    }

    fn space_mut(&mut self, kind: Space) -> &mut OpcodeSpace {
        match kind {
            Space::Primary => &mut self.primary,
            Space::Extended => &mut self.extended,
        }
    }

    /// Adds every annotation found in `text`, attributing them to `source`.
    /// Later definitions of an opcode replace earlier ones and are recorded as conflicts.
    /// Returns the number of annotations found.
    pub fn scan_source(&mut self, text: &str, source: &str) -> usize {
        let mut found = 0;
        for annotation in annotations(text) {
            found += 1;
            let record = InstructionRecord::new(
                annotation.name,
                annotation.handler,
                annotation.cycles,
                source,
            );
            debug!(
                "{} 0x{:02X} {:<12} -> {}",
                annotation.space, annotation.opcode, record.name, record.handler
            );

            let replacement = record.clone();
            if let Some(previous) = self
                .space_mut(annotation.space)
                .insert(annotation.opcode, record)
            {
                let conflict = Conflict {
                    space: annotation.space,
                    opcode: annotation.opcode,
                    previous,
                    replacement,
                };
                warn!("Duplicate definition, {}", conflict);
                self.conflicts.push(conflict);
            }
        }
        found
    }

    /// Registers `module` as an import target. Reserved names are ignored.
    pub fn register_module(&mut self, module: &str) {
        if !self.modules.register(module) {
            debug!("Module '{}' not registered", module);
        }
    }

    /// Total number of implemented opcodes over both spaces.
    pub fn record_count(&self) -> usize {
        self.primary.len() + self.extended.len()
    }
}
