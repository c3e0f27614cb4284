use std::error;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::entry::{Entry, HexKey};

lazy_static! {
    // dict[0x3400] = "qiū";
    // Searched anywhere in the line. The value stops at the first quote and
    // escapes are not interpreted.
    static ref LINE_PATTERN: Regex =
        Regex::new(r#"dict\[(0x[0-9A-Fa-f]+)\]\s*=\s*"([^"]*)";"#).unwrap();
}

/// Signal for an input line that does not contain an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unparsed {
    /// 1-based line number.
    pub line_number: usize,
}

impl fmt::Display for Unparsed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Line {} is not in the expected format and will be skipped.",
            self.line_number
        )
    }
}

impl error::Error for Unparsed {}

/// Extract the entry contained in `line`.
pub fn parse_line(line_number: usize, line: &str) -> Result<Entry, Unparsed> {
    let captures = LINE_PATTERN
        .captures(line)
        .ok_or(Unparsed { line_number })?;

    Ok(Entry::new(
        HexKey::new_unchecked(&captures[1]),
        &captures[2],
    ))
}
