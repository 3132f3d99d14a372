//! Configuration file I/O
//!
//! The detector description is exchanged as `l3transform.config`, a plain
//! text file of `name = value ;` statements.

mod fields;
mod reader;
mod writer;

pub use reader::{parse_config, read_config};
pub use writer::{format_config, write_config};

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "l3transform.config";
