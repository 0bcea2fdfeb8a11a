//! Argument builders for the CLI.
//!
//! Each function returns a `clap::Arg` that `commands.rs` composes.

use std::path::PathBuf;

use clap::{Arg, value_parser};
use shimgen_lib::config::DEFAULT_MODULE_PREFIX;

/// Declaration file to stub (positional).
pub fn path_arg() -> Arg {
    Arg::new("path")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("Declaration file to generate a stub for")
}

/// Base library declarations (--lib).
pub fn lib_arg() -> Arg {
    Arg::new("lib")
        .long("lib")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Base declaration file handed to the front end (default: empty)")
}

/// Front-end command (--front-end).
pub fn front_end_arg() -> Arg {
    Arg::new("front_end")
        .long("front-end")
        .value_name("CMD")
        .help("Type-checking front end: reads sources as JSON on stdin, writes the environment")
}

/// Prepared environment dump (--env).
pub fn env_arg() -> Arg {
    Arg::new("env")
        .long("env")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("front_end")
        .help("Environment JSON produced earlier by the front end")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Line terminator between statements (--line-ending).
pub fn line_ending_arg() -> Arg {
    Arg::new("line_ending")
        .long("line-ending")
        .value_name("EOL")
        .default_value("crlf")
        .value_parser(["crlf", "lf"])
        .help("Line ending between statements")
}

/// Module-name prefix in the environment (--module-prefix).
pub fn module_prefix_arg() -> Arg {
    Arg::new("module_prefix")
        .long("module-prefix")
        .value_name("PREFIX")
        .default_value(DEFAULT_MODULE_PREFIX)
        .help("Prefix the front end puts on module-scoped names")
}
