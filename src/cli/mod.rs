use std::io;
use std::path::PathBuf;

use clap::Parser;

use crate::common::debug;
use crate::config::{env, Config};
use crate::core::{Conversion, Converter};
use crate::Result;

/// Convert dict[0xHEX] = "value"; lines into a json dictionary
#[derive(Parser, Debug)]
#[command(version)]
pub struct HexdictCommand {
    /// Input file containing dict lines [default: input.txt]
    #[arg(long, short = 'i', env = env::INPUT)]
    pub input: Option<PathBuf>,
    /// Json output file [default: pinyin.json]
    #[arg(long, short = 'o', env = env::OUTPUT)]
    pub output: Option<PathBuf>,
    /// Spaces per indentation level, at most 255 [default: 4]
    #[arg(long, env = env::INDENT)]
    pub indent: Option<u8>,
    /// Configuration file path
    #[arg(long, short = 'C', env = env::CONFIG)]
    pub config: Option<PathBuf>,
}

/// Parse command line args
pub fn parse() -> HexdictCommand {
    HexdictCommand::parse()
}

impl HexdictCommand {
    /// Resolve config from defaults, the config file and command line values.
    pub fn config(self) -> Result<Config> {
        let HexdictCommand {
            mut input,
            mut output,
            indent,
            config,
        } = self;

        let mut config = match config {
            Some(path) => Config::load_file(path)?,
            None => Config::default(),
        };

        let mut overrides = {
            let mut config = Config::default();
            config.set_input(&mut input);
            config.set_output(&mut output);
            config.set_indent(indent);
            config
        };

        config.override_merge(&mut overrides);

        debug!("{:?}", config);

        Ok(config)
    }

    pub fn run(self) -> Result<Conversion> {
        let config = self.config()?;

        Converter::from_config(&config).run_reporting(io::stdout().lock())
    }
}
