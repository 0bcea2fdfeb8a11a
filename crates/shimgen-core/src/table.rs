//! Arena storage for declaration nodes.

use serde::Serialize;

use crate::{TypeId, TypeNode};

/// Arena of type nodes addressed by [`TypeId`].
///
/// Slots can be reserved before they are defined, which is how cyclic
/// graphs are tied: reserve the target, build the nodes that point at it,
/// then define it.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct TypeTable {
    nodes: Vec<Option<TypeNode>>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its handle.
    pub fn push(&mut self, node: TypeNode) -> TypeId {
        let id = self.next_id();
        self.nodes.push(Some(node));
        id
    }

    /// Allocate an empty slot to be filled by [`TypeTable::define`].
    pub fn reserve(&mut self) -> TypeId {
        let id = self.next_id();
        self.nodes.push(None);
        id
    }

    /// Fill (or replace) the slot behind `id`.
    ///
    /// Panics if `id` was not handed out by this table.
    pub fn define(&mut self, id: TypeId, node: TypeNode) {
        *self.ensure_slot(id) = Some(node);
    }

    /// Node behind `id`, or `None` for unknown or still-reserved handles.
    pub fn get(&self, id: TypeId) -> Option<&TypeNode> {
        self.nodes.get(id.index()).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handles of reserved slots that were never defined.
    pub fn undefined(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| TypeId(i as u32))
    }

    pub(crate) fn slot_mut(&mut self, id: TypeId) -> Option<&mut Option<TypeNode>> {
        self.nodes.get_mut(id.index())
    }

    fn next_id(&self) -> TypeId {
        TypeId(self.nodes.len() as u32)
    }
}
