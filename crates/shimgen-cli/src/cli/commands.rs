//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("shimgen")
        .about("Generate a runtime stub module from a typed declaration file")
        .override_usage(
            "\
  shimgen <PATH> --front-end <CMD> [--lib <FILE>]
  shimgen <PATH> --env <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  shimgen api.d.ts --front-end tscore --lib lib.d.ts   # check and stub
  shimgen api.d.ts --env api.env.json                  # stub a prepared environment
  shimgen api.d.ts --env api.env.json -o api.js        # write to file
  shimgen api.d.ts --env api.env.json --line-ending lf"#,
        )
        .arg(path_arg())
        .arg(lib_arg())
        .arg(front_end_arg())
        .arg(env_arg())
        .arg(output_file_arg())
        .arg(line_ending_arg())
        .arg(module_prefix_arg())
}
