use crate::constants::{ENTRIES_PER_BLOCK, ENTRIES_PER_ROW, TABLE_SIZE};

/// Lays out a `pub static` array of 256 cells: four cells per row and a
/// `// 0x..` comment before every block of sixteen. `cell` renders the entry for one opcode.
pub fn table_fragments<F>(name: &str, element_type: &str, cell: F) -> Vec<String>
where
    F: Fn(u8) -> String,
{
    let mut fragments = Vec::with_capacity(2 + TABLE_SIZE / ENTRIES_PER_ROW * 2);
    fragments.push(format!(
        "\n\npub static {} : [{}; {}] = [\n",
        name, element_type, TABLE_SIZE
    ));

    for row_start in (0..TABLE_SIZE).step_by(ENTRIES_PER_ROW) {
        if row_start % ENTRIES_PER_BLOCK == 0 {
            fragments.push(format!("    // {:#04x}\n", row_start));
        }
        let cells: Vec<String> = (row_start..row_start + ENTRIES_PER_ROW)
            .map(|opcode| cell(opcode as u8))
            .collect();
        fragments.push(format!("    {},\n", cells.join(", ")));
    }

    fragments.push("];".to_string());
    fragments
}
