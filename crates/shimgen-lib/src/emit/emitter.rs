//! Emitter state and driver.

use shimgen_core::{Origin, TypeTable};
use tracing::{debug, trace};

use crate::{DeclarationTable, Guard, Result};

/// Stub emitter over one declaration table.
pub struct Emitter<'a> {
    pub(super) types: &'a TypeTable,
    pub(super) table: &'a DeclarationTable,
    /// File under processing; everything else is skipped.
    pub(super) origin: &'a Origin,
    pub(super) guard: Guard<'a>,
    /// Statements in emission order.
    pub(super) output: Vec<String>,
}

impl<'a> Emitter<'a> {
    pub fn new(types: &'a TypeTable, table: &'a DeclarationTable, origin: &'a Origin) -> Self {
        Self {
            types,
            table,
            origin,
            guard: Guard::new(table),
            output: Vec::new(),
        }
    }

    /// Emit every root: modules first, then top-level names, each sorted.
    pub fn emit(mut self) -> Result<Vec<String>> {
        let table = self.table;
        debug!(
            origin = %self.origin,
            modules = table.modules.len(),
            env = table.env.len(),
            "emitting stubs"
        );

        for (name, root) in table.roots() {
            debug!(root = name, "emitting root");
            self.emit_node(name, root.object, 0)?;
        }

        Ok(self.output)
    }

    pub(super) fn push(&mut self, statement: String) {
        trace!(%statement, "emit");
        self.output.push(statement);
    }
}
