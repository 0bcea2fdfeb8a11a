//! shimgen: runtime placeholder modules from typed declaration trees.
//!
//! Given the environment a type-checking front end produced for one
//! declaration file, emits the statements that define every name the file
//! declares with a value of the right shape: `{}` for structural types,
//! an empty function for callables and classes, a bare `var` for the rest.
//!
//! # Example
//!
//! ```
//! use shimgen_core::{BuiltinKind, Environment, Origin, TypeNode};
//!
//! let mut env = Environment::new();
//! env.declare("x", TypeNode::builtin(BuiltinKind::Number, "a.d.ts"));
//!
//! let statements = shimgen_lib::generate(&env, &Origin::from("a.d.ts")).unwrap();
//! assert_eq!(statements, ["var x;"]);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod declarations;
pub mod emit;
pub mod format;
pub mod guard;

#[cfg(test)]
pub mod test_utils;


pub use config::{Config, LineEnding};
pub use declarations::{DeclarationTable, Root};
pub use emit::{Emitter, generate, generate_with_config, render};
pub use guard::{Guard, Stop};

/// Errors that abort stub generation.
///
/// Both mean the declaration tree holds a shape with no stub policy. There
/// is no partial output: a stub silently missing a member is worse than none.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("not yet implemented object kind `{kind}` at `{scope}`: {raw}")]
    UnsupportedObjectKind {
        scope: String,
        kind: String,
        raw: String,
    },

    #[error("not yet implemented node kind `{tag}` at `{scope}`: {raw}")]
    UnsupportedNode {
        scope: String,
        tag: String,
        raw: String,
    },
}

impl Error {
    /// Scope path of the offending node.
    pub fn scope(&self) -> &str {
        match self {
            Self::UnsupportedObjectKind { scope, .. } | Self::UnsupportedNode { scope, .. } => {
                scope
            }
        }
    }
}

/// Result type for stub generation.
pub type Result<T> = std::result::Result<T, Error>;
