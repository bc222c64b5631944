use super::layout::table_fragments;
use crate::constants::{DISCLAIMER, MISSING_NAME};
use crate::model::Space;
use crate::scanner::ScanResult;

// Names are emitted verbatim except for what would end the literal early.
fn escape_literal(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Disclaimer and both name tables, in output order.
pub fn disasm_fragments(scan: &ScanResult) -> Vec<String> {
    let mut fragments = vec![DISCLAIMER.to_string()];
    for space in [Space::Primary, Space::Extended] {
        let opcodes = scan.space(space);
        fragments.extend(table_fragments(
            &format!("{}DISASM_TABLE", space.table_prefix()),
            "&'static str",
            |opcode| {
                let name = opcodes
                    .get(opcode)
                    .map_or(MISSING_NAME, |record| record.name.as_str());
                format!("\"{}\"", escape_literal(name))
            },
        ));
    }
    fragments.push("\n".to_string());
    fragments
}
