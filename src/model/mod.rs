mod conflict;
mod record;
mod registry;
mod space;

pub use conflict::Conflict;
pub use record::InstructionRecord;
pub use registry::ModuleRegistry;
pub use space::{OpcodeSpace, Space};
