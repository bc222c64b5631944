use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::EXTENDED_MARKER;
use crate::model::Space;

lazy_static! {
    // // 'LD A,B' 78 4
    // pub fn LD_a_b(cpu: &mut CPU) -> i32 {
    static ref RE_ANNOTATION: Regex = Regex::new(
        r"//\s'(?P<name>.*)'\s(?P<code>CB [0-9A-F]{2}|[0-9A-F]{2})\s(?P<cycles>[0-9]+)\s+pub fn (?P<handler>[^(\s]+)\s*\("
    )
    .unwrap();
}

/// One matched comment + declaration pair, borrowing from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation<'a> {
    pub space: Space,
    pub opcode: u8,
    pub name: &'a str,
    pub cycles: &'a str,
    pub handler: &'a str,
}

/// Every annotation in `text`, in source order.
/// Comments that are not immediately followed by a `pub fn` are skipped.
pub fn annotations(text: &str) -> impl Iterator<Item = Annotation<'_>> {
    RE_ANNOTATION.captures_iter(text).filter_map(|caps| {
        let code = caps.name("code")?.as_str();
        let space = if code.starts_with(EXTENDED_MARKER) {
            Space::Extended
        } else {
            Space::Primary
        };
        let opcode = u8::from_str_radix(&code[code.len() - 2..], 16).ok()?;

        Some(Annotation {
            space,
            opcode,
            name: caps.name("name")?.as_str(),
            cycles: caps.name("cycles")?.as_str(),
            handler: caps.name("handler")?.as_str(),
        })
    })
}
