mod disasm;
mod dispatch;
mod layout;

pub use disasm::disasm_fragments;
pub use dispatch::dispatch_fragments;
pub use layout::table_fragments;

use crate::constants::{DEFAULT_CPU_PATH, DEFAULT_MODULE_ROOT};
use crate::scanner::ScanResult;

/// Paths spliced into the generated dispatch source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Parent path of the handler modules, e.g. `jeebie::instr`.
    pub module_root: String,
    /// Full path of the processor state type handed to every handler.
    pub cpu_path: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        EmitConfig {
            module_root: DEFAULT_MODULE_ROOT.to_string(),
            cpu_path: DEFAULT_CPU_PATH.to_string(),
        }
    }
}

impl EmitConfig {
    /// Last path segment of `cpu_path`, used in signatures.
    pub fn cpu_type(&self) -> &str {
        self.cpu_path.rsplit("::").next().unwrap_or(self.cpu_path.as_str())
    }
}

/// Full text of the dispatch table source.
pub fn render_dispatch(scan: &ScanResult, config: &EmitConfig) -> String {
    dispatch_fragments(scan, config).concat()
}

/// Full text of the disassembly name tables.
pub fn render_disasm(scan: &ScanResult) -> String {
    disasm_fragments(scan).concat()
}
