//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use shimgen_lib::{Config, LineEnding};

use crate::commands::stub::StubArgs;

pub struct StubParams {
    pub path: Option<PathBuf>,
    pub lib: Option<PathBuf>,
    pub front_end: Option<String>,
    pub env: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub line_ending: LineEnding,
    pub module_prefix: String,
}

impl StubParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: m.get_one::<PathBuf>("path").cloned(),
            lib: m.get_one::<PathBuf>("lib").cloned(),
            front_end: m.get_one::<String>("front_end").cloned(),
            env: m.get_one::<PathBuf>("env").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            line_ending: parse_line_ending(m),
            module_prefix: m
                .get_one::<String>("module_prefix")
                .cloned()
                .unwrap_or_default(),
        }
    }
}

impl From<StubParams> for StubArgs {
    fn from(p: StubParams) -> Self {
        Self {
            path: p.path,
            lib_path: p.lib,
            front_end: p.front_end,
            env_path: p.env,
            output: p.output,
            config: Config::new()
                .module_prefix(p.module_prefix)
                .line_ending(p.line_ending),
        }
    }
}

fn parse_line_ending(m: &ArgMatches) -> LineEnding {
    m.get_one::<String>("line_ending")
        .and_then(|s| LineEnding::from_name(s))
        .unwrap_or_default()
}
