pub(crate) mod internal;

use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use self::internal::{ConfigSource, ErrorKind};

/// Errors returned by the public api.
#[derive(Debug)]
pub enum HexdictError {
    /// Input file could not be opened or decoded as utf-8.
    ReadInput { path: PathBuf, source: io::Error },
    /// Output file could not be created or written.
    WriteOutput { path: PathBuf, source: io::Error },
    /// Mapping could not be serialized.
    Serialize(serde_json::Error),
    /// Config file could not be read or parsed.
    Config { path: PathBuf, message: String },
    /// Text is not a `0x` prefixed hexadecimal literal.
    InvalidKey { key: String },
    Io(io::Error),
}

impl fmt::Display for HexdictError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HexdictError::ReadInput { path, source } => {
                write!(f, "failed to read input file '{}'. {}", path.display(), source)
            }
            HexdictError::WriteOutput { path, source } => {
                write!(f, "failed to write output file '{}'. {}", path.display(), source)
            }
            HexdictError::Serialize(err) => write!(f, "failed to serialize mapping. {}", err),
            HexdictError::Config { path, message } => {
                write!(f, "invalid config file '{}'. {}", path.display(), message)
            }
            HexdictError::InvalidKey { key } => {
                write!(f, "key must be a 0x prefixed hex literal. got {}", key)
            }
            HexdictError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for HexdictError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            HexdictError::ReadInput { source, .. } | HexdictError::WriteOutput { source, .. } => {
                Some(source)
            }
            HexdictError::Serialize(err) => Some(err),
            HexdictError::Io(err) => Some(err),
            HexdictError::Config { .. } | HexdictError::InvalidKey { .. } => None,
        }
    }
}

impl From<internal::Error> for HexdictError {
    fn from(err: internal::Error) -> Self {
        match err.into_kind() {
            ErrorKind::Io(err) => HexdictError::Io(err),
            ErrorKind::ReadInput { path, source } => HexdictError::ReadInput { path, source },
            ErrorKind::WriteOutput { path, source } => HexdictError::WriteOutput { path, source },
            ErrorKind::Serialize(err) => HexdictError::Serialize(err),
            ErrorKind::Config { path, source } => {
                let message = match source {
                    ConfigSource::Io(err) => err.to_string(),
                    ConfigSource::Yaml(err) => err.to_string(),
                };
                HexdictError::Config { path, message }
            }
        }
    }
}

impl HexdictError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            HexdictError::Config { .. } => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_kinds_map_to_public_variants() {
        let err = internal::Error::from(ErrorKind::WriteOutput {
            path: PathBuf::from("pinyin.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });

        let err = HexdictError::from(err);
        assert!(matches!(err, HexdictError::WriteOutput { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(error::Error::source(&err).is_some());
    }

    #[test]
    fn config_error_exit_code() {
        let err = internal::Error::from(ErrorKind::Config {
            path: PathBuf::from("hexdict.yaml"),
            source: ConfigSource::Io(io::Error::new(io::ErrorKind::NotFound, "missing")),
        });

        let err = HexdictError::from(err);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.to_string(),
            "invalid config file 'hexdict.yaml'. missing"
        );
    }
}
