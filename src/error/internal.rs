use std::error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use backtrace::Backtrace;

#[derive(Debug)]
pub(crate) struct Error {
    kind: ErrorKind,
    backtrace: Option<Backtrace>,
}

#[derive(Debug)]
pub(crate) enum ErrorKind {
    Io(io::Error),
    ReadInput { path: PathBuf, source: io::Error },
    WriteOutput { path: PathBuf, source: io::Error },
    Serialize(serde_json::Error),
    Config { path: PathBuf, source: ConfigSource },
}

// Reasons a config file could not be loaded.
#[derive(Debug)]
pub(crate) enum ConfigSource {
    Io(io::Error),
    Yaml(serde_yaml::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            ErrorKind::Io(err) => write!(f, "{}", err),
            ErrorKind::ReadInput { path, source } => {
                write!(f, "read input {}. {}", path.display(), source)
            }
            ErrorKind::WriteOutput { path, source } => {
                write!(f, "write output {}. {}", path.display(), source)
            }
            ErrorKind::Serialize(err) => write!(f, "serialize mapping. {}", err),
            ErrorKind::Config { path, source } => {
                write!(f, "load config {}. {}", path.display(), source)
            }
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigSource::Io(err) => write!(f, "{}", err),
            ConfigSource::Yaml(err) => write!(f, "{}", err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::from(ErrorKind::Io(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::from(ErrorKind::Serialize(err))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::with_backtrace(kind)
    }
}

impl Error {
    pub(crate) fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn into_kind(self) -> ErrorKind {
        self.kind
    }

    pub(crate) fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_ref()
    }

    // Attach the input path to a bare io error raised while reading lines.
    pub(crate) fn reading(self, path: &Path) -> Self {
        match self.kind {
            ErrorKind::Io(source) => Self {
                kind: ErrorKind::ReadInput {
                    path: path.to_owned(),
                    source,
                },
                backtrace: self.backtrace,
            },
            kind => Self {
                kind,
                backtrace: self.backtrace,
            },
        }
    }

    fn with_backtrace(kind: ErrorKind) -> Self {
        Self {
            kind,
            backtrace: Some(Backtrace::new()),
        }
    }
}

impl error::Error for Error {}
