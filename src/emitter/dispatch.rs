use super::EmitConfig;
use super::layout::table_fragments;
use crate::constants::DISCLAIMER;
use crate::model::Space;
use crate::scanner::ScanResult;

const HANDLER_WIDTH: usize = 13;

fn fallback_fn(space: Space, cpu: &str) -> String {
    let prefix = match space {
        Space::Primary => "",
        Space::Extended => "CB",
    };
    format!(
        "fn {}(cpu: &mut {}) -> i32 {{\n    panic!(\"Opcode 0x{}{{:02X}} is not implemented!\", cpu.mem.read_b(cpu.reg.pc - 1))\n}}\n",
        space.fallback_handler(),
        cpu,
        prefix
    )
}

fn preamble(config: &EmitConfig) -> String {
    let cpu = config.cpu_type();
    let mut code = String::new();
    code.push_str(&format!("\nuse {};\n", config.cpu_path));
    code.push_str("/// The type of functions that implement an opcode.\n");
    code.push_str(&format!("pub type OpcodeFunc = fn(&mut {}) -> i32;\n\n", cpu));
    code.push_str(&fallback_fn(Space::Primary, cpu));
    code.push_str(&fallback_fn(Space::Extended, cpu));
    code
}

/// Disclaimer, imports, preamble and both handler tables, in output order.
pub fn dispatch_fragments(scan: &ScanResult, config: &EmitConfig) -> Vec<String> {
    let mut fragments = vec![DISCLAIMER.to_string()];
    for module in scan.modules.iter() {
        fragments.push(format!("use {}::{}::*;\n", config.module_root, module));
    }
    fragments.push(preamble(config));

    for space in [Space::Primary, Space::Extended] {
        let opcodes = scan.space(space);
        fragments.extend(table_fragments(
            &format!("{}OPCODE_TABLE", space.table_prefix()),
            "OpcodeFunc",
            |opcode| format!("{:>width$}", opcodes.handler_at(opcode), width = HANDLER_WIDTH),
        ));
    }
    fragments.push("\n".to_string());
    fragments
}
