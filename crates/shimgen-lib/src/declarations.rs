//! Root set construction.
//!
//! Splits the front end's flat environment into module-scoped and plain
//! top-level names, keeping only bindings declared by the processed file.
//! Both partitions are ordered maps, which is what makes root iteration
//! (and so the whole output) deterministic.

use std::collections::BTreeMap;

use shimgen_core::{Environment, Origin, TypeId};
use tracing::trace;

/// A root symbol's entry point into the type graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Root {
    pub object: TypeId,
}

/// Module and top-level roots of one declaration file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeclarationTable {
    /// Module names with the prefix stripped.
    pub modules: BTreeMap<String, Root>,
    pub env: BTreeMap<String, Root>,
}

impl DeclarationTable {
    /// Partition `environment` by `module_prefix`, dropping bindings whose
    /// node was not declared by `origin`.
    pub fn build(environment: &Environment, origin: &Origin, module_prefix: &str) -> Self {
        let mut table = Self::default();

        for (name, binding) in &environment.bindings {
            let Some(node) = environment.types.get(binding.object) else {
                continue;
            };
            if !node.is_from(origin) {
                trace!(
                    name = name.as_str(),
                    origin = ?node.origin,
                    "skipping foreign binding"
                );
                continue;
            }

            let root = Root {
                object: binding.object,
            };
            match name.strip_prefix(module_prefix) {
                Some(module) if !module_prefix.is_empty() => {
                    table.modules.insert(module.to_owned(), root);
                }
                _ => {
                    table.env.insert(name.clone(), root);
                }
            }
        }

        table
    }

    /// Whether `scope` names a root in either partition.
    pub fn is_top_level(&self, scope: &str) -> bool {
        self.modules.contains_key(scope) || self.env.contains_key(scope)
    }

    /// Traversal order: modules by name, then top-level names by name.
    pub fn roots(&self) -> impl Iterator<Item = (&str, Root)> {
        self.modules
            .iter()
            .chain(&self.env)
            .map(|(name, root)| (name.as_str(), *root))
    }

    pub fn len(&self) -> usize {
        self.modules.len() + self.env.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.env.is_empty()
    }
}
