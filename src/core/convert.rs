use std::fs;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::common::{debug, info, ErrorKind, Result};
use crate::config::Config;
use crate::core::mapping::Mapping;
use crate::core::parse::Unparsed;
use crate::core::scan::{scan_lines, ScanStats};
use crate::core::serialize::{self, DEFAULT_INDENT};
use crate::error::HexdictError;

/// Outcome of a successful conversion.
#[derive(Debug)]
pub struct Conversion {
    pub output: PathBuf,
    pub mapping: Mapping,
    pub stats: ScanStats,
}

/// Reads dict lines from `input` and writes the json mapping to `output`.
#[derive(Debug, Clone)]
pub struct Converter {
    input: PathBuf,
    output: PathBuf,
    indent: u8,
}

impl Converter {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            indent: DEFAULT_INDENT,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Converter::new(config.input(), config.output()).with_indent(config.indent())
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Run the conversion, calling `on_skip` for every line without an entry.
    ///
    /// The input is parsed completely before the output file is created. A
    /// missing or undecodable input therefore never produces an output file.
    pub fn run<F>(&self, on_skip: F) -> crate::Result<Conversion>
    where
        F: FnMut(&Unparsed),
    {
        self.run_inner(on_skip).map_err(|err| {
            if let Some(backtrace) = err.backtrace() {
                debug!("{}\n{:?}", err, backtrace);
            }
            err.into()
        })
    }

    /// Run the conversion, writing a warning per skipped line and a
    /// confirmation naming the output file to `out`.
    ///
    /// A failure to write to `out` is reported after the output file has
    /// been written.
    pub fn run_reporting<W: Write>(&self, mut out: W) -> crate::Result<Conversion> {
        let mut report_error = None;

        let conversion = self.run(|unparsed| {
            if report_error.is_none() {
                report_error = write_warning(&mut out, unparsed).err();
            }
        })?;

        if let Some(err) = report_error {
            return Err(HexdictError::Io(err));
        }

        write_confirmation(&mut out, &conversion.output).map_err(HexdictError::Io)?;

        Ok(conversion)
    }

    fn run_inner<F>(&self, on_skip: F) -> Result<Conversion>
    where
        F: FnMut(&Unparsed),
    {
        debug!("{:?}", self);

        let f = fs::File::open(&self.input).map_err(|source| ErrorKind::ReadInput {
            path: self.input.clone(),
            source,
        })?;

        let scan = scan_lines(BufReader::new(f), on_skip).map_err(|err| err.reading(&self.input))?;

        serialize::write_file_inner(&scan.mapping, &self.output, self.indent)?;

        info!(
            input = %self.input.display(),
            output = %self.output.display(),
            lines = scan.stats.lines,
            entries = scan.mapping.len(),
            skipped = scan.stats.skipped,
            overwritten = scan.stats.overwritten,
            "converted"
        );

        Ok(Conversion {
            output: self.output.clone(),
            mapping: scan.mapping,
            stats: scan.stats,
        })
    }
}

/// Convert `input` to `output`, printing a warning per skipped line and a
/// confirmation naming the output file to stdout.
pub fn convert(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> crate::Result<Conversion> {
    Converter::new(input, output).run_reporting(io::stdout().lock())
}

pub fn write_warning<W: Write>(mut writer: W, unparsed: &Unparsed) -> io::Result<()> {
    writeln!(writer, "Warning: {}", unparsed)
}

pub fn write_confirmation<W: Write>(mut writer: W, output: &Path) -> io::Result<()> {
    writeln!(
        writer,
        "Conversion complete. JSON data has been saved to '{}'.",
        output.display()
    )
}
