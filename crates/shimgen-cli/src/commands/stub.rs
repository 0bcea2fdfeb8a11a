use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use shimgen_core::{Environment, Origin};
use shimgen_lib::{Config, generate_with_config};

use super::front_end::{self, FrontEndError, LIB_FILE_NAME, SourceFile};

pub const USAGE_HINT: &str = "Please pass a valid path";

pub struct StubArgs {
    pub path: Option<PathBuf>,
    pub lib_path: Option<PathBuf>,
    pub front_end: Option<String>,
    pub env_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Config,
}

pub fn run(args: StubArgs) {
    let Some(path) = args.path.as_deref() else {
        println!("{USAGE_HINT}");
        return;
    };

    let path = std::path::absolute(path).unwrap_or_else(|e| {
        eprintln!("error: cannot resolve '{}': {}", path.display(), e);
        std::process::exit(1);
    });

    let output = stub(&args, &path).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    if let Some(ref out) = args.output {
        fs::write(out, &output).unwrap_or_else(|e| {
            eprintln!("error: failed to write {}: {}", out.display(), e);
            std::process::exit(1);
        });
    } else if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("error: failed to write output: {}", e);
        std::process::exit(1);
    }
}

/// Generate the rendered stub for the file at absolute `path`.
pub fn stub(args: &StubArgs, path: &Path) -> Result<String, String> {
    let origin = Origin::from(path.to_string_lossy().into_owned());
    let environment = load_environment(args, path).map_err(|e| e.to_string())?;
    let statements =
        generate_with_config(&environment, &origin, &args.config).map_err(|e| e.to_string())?;
    Ok(args.config.render(&statements))
}

fn load_environment(args: &StubArgs, path: &Path) -> Result<Environment, FrontEndError> {
    if let Some(ref env_path) = args.env_path {
        return front_end::load_dump(env_path);
    }

    let Some(ref command) = args.front_end else {
        return Err(FrontEndError::NotConfigured);
    };

    let text = front_end::read_text(path)?;
    let lib_text = match args.lib_path {
        Some(ref lib) => front_end::read_text(lib)?,
        None => String::new(),
    };

    let file = path.to_string_lossy();
    let sources = [
        SourceFile {
            file: LIB_FILE_NAME,
            text: &lib_text,
        },
        SourceFile {
            file: &file,
            text: &text,
        },
    ];
    front_end::run(command, &sources)
}
