use clap::Parser;
use opcode_tablegen::args::Args;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Scratch emulator tree under the system temp dir, removed on drop.
pub struct Fixture {
    pub root: PathBuf,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new(name: &str) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let root = std::env::temp_dir().join(format!(
            "tablegen-{}-{}-{}",
            name,
            std::process::id(),
            id
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("instr")).unwrap();
        Fixture { root }
    }

    pub fn instr_dir(&self) -> PathBuf {
        self.root.join("instr")
    }

    /// Creates (and returns) a directory directly under the fixture root.
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn opcodes_out(&self) -> PathBuf {
        self.root.join("instr").join("opcodes.rs")
    }

    pub fn disasm_out(&self) -> PathBuf {
        self.root.join("disasm").join("metadata.rs")
    }

    /// Writes a handler source file into the scanned directory.
    pub fn source(&self, file: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.instr_dir().join(file);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Command line pointing every path into the fixture, plus `extra` flags.
    pub fn args(&self, extra: &[&str]) -> Args {
        let instr = self.instr_dir();
        let opcodes = self.opcodes_out();
        let disasm = self.disasm_out();
        let mut argv: Vec<String> = vec![
            "tablegen".into(),
            "--source-dir".into(),
            path_arg(&instr),
            "--opcodes-out".into(),
            path_arg(&opcodes),
            "--disasm-out".into(),
            path_arg(&disasm),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::parse_from(argv)
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Cells of the table declared as `name`, in order, with quotes and padding removed.
#[allow(dead_code)]
pub fn table_cells(text: &str, name: &str) -> Vec<String> {
    let start = text
        .find(&format!("pub static {} :", name))
        .unwrap_or_else(|| panic!("table {} not found", name));
    let body = &text[start..];
    let body = &body[body.find("= [\n").unwrap() + 4..body.find("];").unwrap()];

    let mut cells = Vec::new();
    for line in body.lines().map(str::trim) {
        if line.starts_with("//") {
            continue;
        }
        let row = line.trim_end_matches(',');
        if let Some(quoted) = row.strip_prefix('"') {
            let quoted = quoted.strip_suffix('"').unwrap();
            cells.extend(quoted.split("\", \"").map(str::to_string));
        } else {
            cells.extend(row.split(',').map(|cell| cell.trim().to_string()));
        }
    }
    cells
}
