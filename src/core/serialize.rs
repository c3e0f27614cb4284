use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::common::{ErrorKind, Result};
use crate::core::mapping::Mapping;

/// Indentation width used when none is configured.
pub const DEFAULT_INDENT: u8 = 4;

/// Write `mapping` as one pretty printed json object followed by a newline.
///
/// Non-ascii characters are written as is, never as `\uXXXX` escapes.
pub fn to_writer<W: Write>(mapping: &Mapping, writer: W, indent: u8) -> crate::Result<()> {
    encode(mapping, writer, indent).map_err(Into::into)
}

pub fn to_vec(mapping: &Mapping, indent: u8) -> crate::Result<Vec<u8>> {
    encode_to_vec(mapping, indent).map_err(Into::into)
}

/// Serialize the whole document, then write it to `path` in one call.
pub fn write_file(mapping: &Mapping, path: impl AsRef<Path>, indent: u8) -> crate::Result<()> {
    write_file_inner(mapping, path.as_ref(), indent).map_err(Into::into)
}

fn encode<W: Write>(mapping: &Mapping, mut writer: W, indent: u8) -> Result<()> {
    let indent = vec![b' '; usize::from(indent)];
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut ser = Serializer::with_formatter(&mut writer, formatter);

    mapping.serialize(&mut ser)?;
    writer.write_all(b"\n")?;

    Ok(())
}

fn encode_to_vec(mapping: &Mapping, indent: u8) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    encode(mapping, &mut buf, indent)?;
    Ok(buf)
}

// A serialization failure never leaves a file behind.
pub(crate) fn write_file_inner(mapping: &Mapping, path: &Path, indent: u8) -> Result<()> {
    let buf = encode_to_vec(mapping, indent)?;

    fs::write(path, buf).map_err(|source| {
        ErrorKind::WriteOutput {
            path: path.to_owned(),
            source,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::{Entry, HexKey};

    fn mapping(entries: &[(&str, &str)]) -> Mapping {
        entries
            .iter()
            .map(|(k, v)| Entry::new(HexKey::new(*k).unwrap(), *v))
            .collect()
    }

    fn to_string(mapping: &Mapping, indent: u8) -> String {
        String::from_utf8(to_vec(mapping, indent).unwrap()).unwrap()
    }

    #[test]
    fn single_entry_keeps_non_ascii() {
        let out = to_string(&mapping(&[("0x3400", "qiū")]), DEFAULT_INDENT);

        assert_eq!(out, "{\n    \"0x3400\": \"qiū\"\n}\n");
        assert!(!out.contains("\\u"));
    }

    #[test]
    fn multiple_entries_are_four_space_indented() {
        let out = to_string(
            &mapping(&[("0x4E00", "yī"), ("0x3400", "qiū")]),
            DEFAULT_INDENT,
        );

        assert_eq!(
            out,
            "{\n    \"0x3400\": \"qiū\",\n    \"0x4E00\": \"yī\"\n}\n"
        );
    }

    #[test]
    fn to_writer_appends_to_sink() {
        let mut buf = b"// generated\n".to_vec();
        to_writer(&mapping(&[("0x1", "a")]), &mut buf, DEFAULT_INDENT).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "// generated\n{\n    \"0x1\": \"a\"\n}\n"
        );
    }

    #[test]
    fn custom_indent() {
        let out = to_string(&mapping(&[("0x1", "a")]), 2);
        assert_eq!(out, "{\n  \"0x1\": \"a\"\n}\n");
    }

    #[test]
    fn widest_indent() {
        let out = to_string(&mapping(&[("0x1", "a")]), u8::MAX);
        assert_eq!(out, format!("{{\n{}\"0x1\": \"a\"\n}}\n", " ".repeat(255)));
    }

    #[test]
    fn empty_mapping_is_empty_object() {
        assert_eq!(to_string(&Mapping::new(), DEFAULT_INDENT), "{}\n");
    }

    #[test]
    fn backslash_is_escaped_as_json() {
        let out = to_string(&mapping(&[("0x1", r"a\")]), DEFAULT_INDENT);

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["0x1"], r"a\");
    }

    #[test]
    fn write_file_reports_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("pinyin.json");

        let err = write_file_inner(&Mapping::new(), &path, DEFAULT_INDENT).unwrap_err();

        match err.kind() {
            ErrorKind::WriteOutput { path: p, .. } => assert_eq!(p, &path),
            kind => panic!("unexpected kind {:?}", kind),
        }

        let err = write_file(&Mapping::new(), &path, DEFAULT_INDENT).unwrap_err();
        assert!(matches!(err, crate::HexdictError::WriteOutput { .. }));
        assert!(!path.exists());
    }
}
