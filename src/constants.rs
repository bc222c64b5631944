// Shape of every generated table.
pub const TABLE_SIZE: usize = 256;
pub const ENTRIES_PER_ROW: usize = 4;
pub const ENTRIES_PER_BLOCK: usize = 16;

/// Marker in front of the two hex digits of an extended (prefixed) opcode.
pub const EXTENDED_MARKER: &str = "CB";

/// Base names that never become import targets: generated outputs and aggregators.
pub const RESERVED_MODULES: [&str; 3] = ["mod", "opcodes", "timings"];

pub const FALLBACK_HANDLER: &str = "missing";
pub const FALLBACK_HANDLER_EXTENDED: &str = "missing_cb";
pub const MISSING_NAME: &str = "Missing";

pub const DISCLAIMER: &str = "// This file is autogenerated by `tablegen`, do not edit it by hand.\n";

// Defaults mirror the layout of the emulator this tool was written for.
pub const DEFAULT_SOURCE_DIR: &str = "src/jeebie/instr";
pub const DEFAULT_PATTERN: &str = "*.rs";
pub const DEFAULT_OPCODES_OUT: &str = "src/jeebie/instr/opcodes.rs";
pub const DEFAULT_DISASM_OUT: &str = "src/jeebie/disasm/metadata.rs";
pub const DEFAULT_MODULE_ROOT: &str = "jeebie::instr";
pub const DEFAULT_CPU_PATH: &str = "jeebie::core::cpu::CPU";
