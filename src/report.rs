use serde::Serialize;

use crate::model::{Conflict, InstructionRecord, OpcodeSpace};
use crate::scanner::ScanResult;

#[derive(Serialize)]
pub struct ReportEntry<'a> {
    /// Formatted as `0x7C`.
    pub opcode: String,
    #[serde(flatten)]
    pub record: &'a InstructionRecord,
}

/// Machine readable summary of a scan, including the cycle timings the tables leave out.
#[derive(Serialize)]
pub struct Report<'a> {
    pub modules: &'a [String],
    pub primary: Vec<ReportEntry<'a>>,
    pub extended: Vec<ReportEntry<'a>>,
    pub conflicts: &'a [Conflict],
}

fn entries(space: &OpcodeSpace) -> Vec<ReportEntry<'_>> {
    space
        .iter()
        .map(|(opcode, record)| ReportEntry {
            opcode: format!("0x{:02X}", opcode),
            record,
        })
        .collect()
}

impl<'a> Report<'a> {
    pub fn new(scan: &'a ScanResult) -> Self {
        Report {
            modules: scan.modules.as_slice(),
            primary: entries(&scan.primary),
            extended: entries(&scan.extended),
            conflicts: &scan.conflicts,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
