#![allow(clippy::module_inception)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use crate::error::HexdictError;
pub type Result<T, E = crate::error::HexdictError> = std::result::Result<T, E>;

pub use crate::core::{convert, Converter, Entry, HexKey, Mapping};

pub(crate) mod common {
    pub(crate) type Result<T, E = crate::error::internal::Error> = std::result::Result<T, E>;

    pub(crate) type ErrorKind = crate::error::internal::ErrorKind;

    pub use tracing::{debug, info, trace};
}
