//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{TypeId, TypeNode, TypeTable};

impl TypeTable {
    pub(crate) fn ensure_slot(&mut self, id: TypeId) -> &mut Option<TypeNode> {
        let len = self.len();
        self.slot_mut(id).unwrap_or_else(|| {
            panic!(
                "TypeTable: type_id {} out of range (len {len}) \
                 (handles must come from push/reserve on the same table)",
                id.0
            )
        })
    }
}
