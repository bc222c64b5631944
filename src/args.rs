use std::path::PathBuf;

use clap::Parser;

use crate::constants::*;
use crate::emitter::EmitConfig;

/// Generates opcode dispatch and disassembly tables from annotated handler sources.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory holding the instruction handler sources.
    #[arg(long, default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: PathBuf,

    /// Glob, relative to the source directory, selecting the files to scan.
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Where the dispatch tables are written.
    #[arg(long, default_value = DEFAULT_OPCODES_OUT)]
    pub opcodes_out: PathBuf,

    /// Where the disassembly name tables are written.
    #[arg(long, default_value = DEFAULT_DISASM_OUT)]
    pub disasm_out: PathBuf,

    /// Module path the handler modules are imported from.
    #[arg(long, default_value = DEFAULT_MODULE_ROOT)]
    pub module_root: String,

    /// Path of the CPU type every handler takes.
    #[arg(long, default_value = DEFAULT_CPU_PATH)]
    pub cpu_path: String,

    /// Also write a JSON report of every scanned opcode.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Fail instead of letting the last definition of an opcode win.
    #[arg(long)]
    pub deny_duplicates: bool,

    /// Only verify the generated files are up to date, write nothing.
    #[arg(long)]
    pub check: bool,

    // Optional log path, if none given logs go to stderr.
    #[arg(long)]
    pub log_path: Option<PathBuf>,
}

impl Args {
    pub fn emit_config(&self) -> EmitConfig {
        EmitConfig {
            module_root: self.module_root.clone(),
            cpu_path: self.cpu_path.clone(),
        }
    }
}
