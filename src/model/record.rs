use serde::Serialize;

/// Metadata for one annotated handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionRecord {
    /// Mnemonic as written between the quotes, used for disassembly.
    pub name: String,
    pub handler: String,
    /// Cycle count, kept as the literal digits from the annotation.
    pub cycles: String,
    /// File the annotation was found in.
    pub source: String,
}

impl InstructionRecord {
    pub fn new(name: &str, handler: &str, cycles: &str, source: &str) -> Self {
        InstructionRecord {
            name: name.to_string(),
            handler: handler.to_string(),
            cycles: cycles.to_string(),
            source: source.to_string(),
        }
    }
}
