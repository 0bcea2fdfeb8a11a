//! Recursion guard for the stub walk.

use std::collections::HashSet;

use shimgen_core::{TypeId, TypeNode};

use crate::DeclarationTable;

/// Why the walk stopped at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stop {
    /// Aliases are emitted where they are declared, never where they are used.
    Reference,
    /// A nested scope that is itself a root; it is (or will be) emitted there.
    TopLevel,
    /// An object whose members are already being walked further up.
    Cycle,
}

/// Decides whether the walk may expand a node.
///
/// Depth-0 nodes are roots and always expand. Below that, a scope naming
/// another root, or an object already on the active expansion path, is
/// treated as an external reference.
#[derive(Debug)]
pub struct Guard<'a> {
    table: &'a DeclarationTable,
    active: HashSet<TypeId>,
}

impl<'a> Guard<'a> {
    pub fn new(table: &'a DeclarationTable) -> Self {
        Self {
            table,
            active: HashSet::new(),
        }
    }

    pub fn check(&self, scope: &str, id: TypeId, node: &TypeNode, depth: usize) -> Option<Stop> {
        if node.is_reference() {
            return Some(Stop::Reference);
        }
        if depth == 0 {
            return None;
        }
        if self.table.is_top_level(scope) {
            return Some(Stop::TopLevel);
        }
        if node.is_object() && self.active.contains(&id) {
            return Some(Stop::Cycle);
        }
        None
    }

    /// Mark `id` as having its members walked.
    pub fn enter(&mut self, id: TypeId) {
        self.active.insert(id);
    }

    pub fn leave(&mut self, id: TypeId) {
        self.active.remove(&id);
    }

    pub fn is_active(&self, id: TypeId) -> bool {
        self.active.contains(&id)
    }
}
