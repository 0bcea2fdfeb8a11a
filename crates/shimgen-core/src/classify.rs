//! Shape predicates over type nodes.
//!
//! Pure inspection, no state. The emitter matches on [`TypeData`] directly;
//! these helpers exist for the guard, the declaration table builder and
//! anything else that only needs a yes/no answer.

use crate::{ObjectKind, ObjectType, Origin, TypeData, TypeNode};

impl TypeNode {
    pub fn is_builtin(&self) -> bool {
        matches!(self.data, TypeData::Builtin { .. })
    }

    pub fn is_reference(&self) -> bool {
        matches!(self.data, TypeData::Reference)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.data, TypeData::Enum)
    }

    pub fn is_type_param(&self) -> bool {
        matches!(self.data, TypeData::TypeParam)
    }

    pub fn is_object(&self) -> bool {
        matches!(self.data, TypeData::Object(_))
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match &self.data {
            TypeData::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn object_kind(&self) -> Option<&ObjectKind> {
        self.as_object().map(|object| &object.kind)
    }

    pub fn is_module(&self) -> bool {
        self.object_kind() == Some(&ObjectKind::Module)
    }

    pub fn is_interface(&self) -> bool {
        self.object_kind() == Some(&ObjectKind::Interface)
    }

    pub fn is_class(&self) -> bool {
        self.object_kind() == Some(&ObjectKind::Class)
    }

    /// Interface with at least one call signature.
    ///
    /// Modules are never callable even when the front end attaches calls.
    pub fn is_callable(&self) -> bool {
        self.is_interface() && self.as_object().is_some_and(|object| !object.calls.is_empty())
    }

    /// Whether this node was declared by `origin`. Nodes without an origin
    /// never match.
    pub fn is_from(&self, origin: &Origin) -> bool {
        self.origin.as_ref() == Some(origin)
    }
}

impl crate::Property {
    pub fn is_from(&self, origin: &Origin) -> bool {
        self.origin.as_ref() == Some(origin)
    }
}
