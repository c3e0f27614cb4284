use std::io::BufRead;

use crate::common::{debug, Result};
use crate::core::mapping::Mapping;
use crate::core::parse::{parse_line, Unparsed};

/// Counters collected over one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Lines read.
    pub lines: usize,
    /// Lines that produced an entry.
    pub accepted: usize,
    /// Lines that did not match.
    pub skipped: usize,
    /// Accepted entries that replaced an earlier value.
    pub overwritten: usize,
}

#[derive(Debug)]
pub struct Scan {
    pub mapping: Mapping,
    pub stats: ScanStats,
}

/// Read every line from `reader` into a mapping.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. `on_skip` is called in line
/// order for each line without an entry. A read error, including invalid
/// utf-8, aborts the scan.
pub fn scan<R, F>(reader: R, on_skip: F) -> crate::Result<Scan>
where
    R: BufRead,
    F: FnMut(&Unparsed),
{
    scan_lines(reader, on_skip).map_err(Into::into)
}

pub(crate) fn scan_lines<R, F>(mut reader: R, mut on_skip: F) -> Result<Scan>
where
    R: BufRead,
    F: FnMut(&Unparsed),
{
    let mut mapping = Mapping::new();
    let mut stats = ScanStats::default();
    let mut buf = String::new();

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }

        for line in split_carriage_returns(&buf) {
            stats.lines += 1;

            match parse_line(stats.lines, line) {
                Ok(entry) => {
                    stats.accepted += 1;
                    if mapping.insert(entry).is_some() {
                        stats.overwritten += 1;
                    }
                }
                Err(unparsed) => {
                    debug!("skip line {}: {:?}", unparsed.line_number, line);
                    stats.skipped += 1;
                    on_skip(&unparsed);
                }
            }
        }
    }

    Ok(Scan { mapping, stats })
}

// Split one `read_line` chunk into lines. The chunk holds at most one `\n`,
// at its end, so every other terminator inside it is a lone `\r`.
fn split_carriage_returns(chunk: &str) -> impl Iterator<Item = &str> {
    let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
    let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
    chunk.split('\r')
}
