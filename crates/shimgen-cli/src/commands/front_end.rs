//! Boundary to the type-checking front end.
//!
//! The front end is an external command. It receives the sources as a JSON
//! array of `{file, text}` on stdin (base library first, then the file under
//! processing) and answers with the environment JSON on stdout. A previously
//! captured answer can be loaded directly instead.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use serde::Serialize;
use shimgen_core::{Environment, LoadError};
use tracing::debug;

/// File name the base declarations are registered under.
pub const LIB_FILE_NAME: &str = ">lib.d.ts";

#[derive(Debug, thiserror::Error)]
pub enum FrontEndError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no front end configured (use --front-end or --env)")]
    NotConfigured,

    #[error("front-end command is empty")]
    EmptyCommand,

    #[error("failed to run front end '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to send request to front end '{command}': {source}")]
    Write {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("front end '{command}' failed ({status}): {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to encode front-end request: {0}")]
    Request(#[from] serde_json::Error),

    #[error("invalid environment: {0}")]
    Environment(#[from] LoadError),
}

/// One declaration source handed to the front end.
#[derive(Debug, Serialize)]
pub struct SourceFile<'a> {
    pub file: &'a str,
    pub text: &'a str,
}

pub fn read_text(path: &Path) -> Result<String, FrontEndError> {
    fs::read_to_string(path).map_err(|source| FrontEndError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a captured environment dump.
pub fn load_dump(path: &Path) -> Result<Environment, FrontEndError> {
    let json = read_text(path)?;
    Ok(Environment::from_json(&json)?)
}

/// Run `command` over `sources` and parse its environment.
///
/// `command` is split on whitespace into program and arguments.
pub fn run(command: &str, sources: &[SourceFile<'_>]) -> Result<Environment, FrontEndError> {
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or(FrontEndError::EmptyCommand)?;
    let request = serde_json::to_vec(sources)?;

    let spawn_error = |source| FrontEndError::Spawn {
        command: command.to_owned(),
        source,
    };

    debug!(command, sources = sources.len(), "running front end");
    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(spawn_error)?;

    // The front end may start writing before it has read all of stdin.
    let writer = child
        .stdin
        .take()
        .map(|mut stdin| std::thread::spawn(move || stdin.write_all(&request)));

    let output = child.wait_with_output().map_err(spawn_error)?;
    let written = match writer {
        Some(writer) => writer
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("request writer panicked"))),
        None => Ok(()),
    };

    if !output.status.success() {
        return Err(FrontEndError::Failed {
            command: command.to_owned(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }
    // A front end that exits cleanly without reading its whole request
    // answered for partial input.
    written.map_err(|source| FrontEndError::Write {
        command: command.to_owned(),
        source,
    })?;

    Ok(Environment::from_reader(output.stdout.as_slice())?)
}
