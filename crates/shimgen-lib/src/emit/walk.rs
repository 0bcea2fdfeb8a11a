//! Recursive node walk.

use shimgen_core::{ObjectKind, ObjectType, TypeData, TypeId, TypeNode};
use tracing::{debug, warn};

use super::Emitter;
use crate::format::{EMPTY_OBJECT, assign, function};
use crate::{Error, Result};

impl Emitter<'_> {
    pub(super) fn emit_node(&mut self, scope: &str, type_id: TypeId, depth: usize) -> Result<()> {
        let types = self.types;
        let Some(node) = types.get(type_id) else {
            warn!(scope, type_id = type_id.0, "dangling type handle");
            return Ok(());
        };

        if let Some(stop) = self.guard.check(scope, type_id, node, depth) {
            debug!(scope, ?stop, "not expanding");
            return Ok(());
        }

        match &node.data {
            TypeData::Object(object) => {
                if !node.is_from(self.origin) {
                    debug!(scope, origin = ?node.origin, "skipping foreign object");
                    return Ok(());
                }
                self.emit_object(scope, type_id, node, object, depth)
            }
            TypeData::Builtin { .. } | TypeData::Enum | TypeData::TypeParam => {
                self.push(assign(scope, None));
                Ok(())
            }
            // Stopped by the guard above.
            TypeData::Reference => Ok(()),
            TypeData::Unrecognized { tag } => Err(Error::UnsupportedNode {
                scope: scope.to_owned(),
                tag: tag.clone(),
                raw: raw_contents(node),
            }),
        }
    }

    fn emit_object(
        &mut self,
        scope: &str,
        type_id: TypeId,
        node: &TypeNode,
        object: &ObjectType,
        depth: usize,
    ) -> Result<()> {
        let members_scope = match &object.kind {
            ObjectKind::Module | ObjectKind::Interface => {
                let value = match object.calls.first() {
                    Some(call) if node.is_callable() => function(&call.parameters),
                    _ => EMPTY_OBJECT.to_owned(),
                };
                self.push(assign(scope, Some(&value)));
                scope.to_owned()
            }
            ObjectKind::Class => {
                self.push(assign(scope, Some(&function(&[]))));
                format!("{scope}.prototype")
            }
            ObjectKind::Unrecognized(kind) => {
                return Err(Error::UnsupportedObjectKind {
                    scope: scope.to_owned(),
                    kind: kind.clone(),
                    raw: raw_contents(node),
                });
            }
        };

        self.emit_members(&members_scope, type_id, object, depth)
    }

    fn emit_members(
        &mut self,
        scope: &str,
        type_id: TypeId,
        object: &ObjectType,
        depth: usize,
    ) -> Result<()> {
        let origin = self.origin;
        self.guard.enter(type_id);
        for (name, property) in &object.properties {
            if !property.is_from(origin) {
                debug!(scope, member = name.as_str(), "skipping foreign member");
                continue;
            }
            self.emit_node(&format!("{scope}.{name}"), property.type_id, depth + 1)?;
        }
        self.guard.leave(type_id);
        Ok(())
    }
}

fn raw_contents(node: &TypeNode) -> String {
    serde_json::to_string(node).unwrap_or_else(|_| format!("{node:?}"))
}
