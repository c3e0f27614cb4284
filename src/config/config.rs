use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::{ErrorKind, Result};
use crate::config::filepath;
use crate::core::serialize::DEFAULT_INDENT;
use crate::error::internal::ConfigSource;

// Conversion configuration.
// Every field is optional so a config file may set any subset of them.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // File to read dict lines from.
    input: Option<PathBuf>,
    // Json file to write.
    output: Option<PathBuf>,
    // Spaces per indentation level in the json output.
    indent: Option<u8>,
}

impl Config {
    /// Load config from a yaml file.
    pub fn load_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        Config::load(path.as_ref()).map_err(Into::into)
    }

    pub(crate) fn load(path: &Path) -> Result<Self> {
        let config_error = |source| ErrorKind::Config {
            path: path.to_owned(),
            source,
        };

        let f = fs::File::open(path).map_err(|err| config_error(ConfigSource::Io(err)))?;
        let config = serde_yaml::from_reader::<_, Config>(f)
            .map_err(|err| config_error(ConfigSource::Yaml(err)))?;

        Ok(config)
    }

    pub fn set_input(&mut self, val: &mut Option<PathBuf>) {
        if let Some(val) = val.take() {
            self.input = Some(val)
        }
    }
    pub fn set_output(&mut self, val: &mut Option<PathBuf>) {
        if let Some(val) = val.take() {
            self.output = Some(val)
        }
    }
    pub fn set_indent(&mut self, val: Option<u8>) {
        if let Some(val) = val {
            self.indent = Some(val)
        }
    }

    /// Values set in other take precedence.
    pub fn override_merge(&mut self, other: &mut Config) {
        self.set_input(&mut other.input);
        self.set_output(&mut other.output);
        self.set_indent(other.indent);
    }

    pub fn input(&self) -> &Path {
        match self.input.as_deref() {
            Some(val) => val,
            None => Path::new(filepath::DEFAULT_INPUT),
        }
    }

    pub fn output(&self) -> &Path {
        match self.output.as_deref() {
            Some(val) => val,
            None => Path::new(filepath::DEFAULT_OUTPUT),
        }
    }

    pub fn indent(&self) -> u8 {
        self.indent.unwrap_or(DEFAULT_INDENT)
    }
}
