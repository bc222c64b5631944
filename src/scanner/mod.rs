mod accumulator;
mod files;
mod pattern;

pub use accumulator::ScanResult;
pub use files::{discover, module_name, scan_dir, scan_paths};
