mod config;
pub use config::Config;

pub mod filepath {
    pub const DEFAULT_INPUT: &str = "input.txt";
    pub const DEFAULT_OUTPUT: &str = "pinyin.json";
}

pub mod env {
    pub const LOG_DIRECTIVE: &str = "HEXDICT_LOG";
    pub const INPUT: &str = "HEXDICT_INPUT";
    pub const OUTPUT: &str = "HEXDICT_OUTPUT";
    pub const INDENT: &str = "HEXDICT_INDENT";
    pub const CONFIG: &str = "HEXDICT_CONFIG";
}
