pub mod args;
pub mod constants;
pub mod emitter;
pub mod error;
pub mod model;
pub mod output;
pub mod report;
pub mod scanner;

use args::Args;
use emitter::{render_disasm, render_dispatch};
use error::GenError;
use log::{info, warn};
use output::Artifact;
use report::Report;
use scanner::ScanResult;
use std::io;

use std::path::PathBuf;

use std::io::Write;

pub fn setup_logging(log_path: &Option<PathBuf>) -> Result<(), io::Error> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    // Redirect to a file when asked, stderr otherwise.
    if let Some(path) = log_path {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Scans the handler sources and writes (or with `--check`, verifies) both generated files.
/// Nothing is written unless every input was read and every artifact rendered.
pub fn run(args: &Args) -> Result<ScanResult, GenError> {
    let scan = scanner::scan_dir(&args.source_dir, &args.pattern)?;
    info!(
        "Found {} primary and {} extended opcode(s) across {} module(s)",
        scan.primary.len(),
        scan.extended.len(),
        scan.modules.len()
    );

    if !scan.conflicts.is_empty() {
        if args.deny_duplicates {
            return Err(GenError::DuplicateOpcodes(scan.conflicts.clone()));
        }
        warn!(
            "{} opcode(s) defined more than once, last definition kept",
            scan.conflicts.len()
        );
    }

    let config = args.emit_config();
    let artifacts = [
        Artifact::new(&args.opcodes_out, render_dispatch(&scan, &config)),
        Artifact::new(&args.disasm_out, render_disasm(&scan)),
    ];

    if args.check {
        output::check_all(&artifacts)?;
        return Ok(scan);
    }
    output::write_all(&artifacts)?;

    if let Some(path) = &args.report {
        let json = Report::new(&scan).to_json()?;
        Artifact::new(path, json).write()?;
    }

    Ok(scan)
}
