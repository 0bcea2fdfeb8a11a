//! JSON (de)serialization in the front end's environment format.
//!
//! The front end writes `{ "env": {...}, "types": [...] }`. Node positions
//! hold either an inline node or an index into `types`; indices are how a
//! front end shares nodes and expresses cycles.
//!
//! A single [`TypeNode`] serializes back into the same node shape, with
//! member types written as table indices.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::{
    Binding, BuiltinKind, CallSignature, Environment, ObjectKind, ObjectType, Origin, Parameter,
    Property, TypeData, TypeId, TypeNode, TypeTable,
};

/// Error while loading an environment dump.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("malformed environment JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A node position points past the end of `types`.
    #[error("type index {index} out of range ({len} shared types)")]
    DanglingIndex { index: u32, len: usize },
}

impl Environment {
    /// Parse an environment from its JSON dump.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: RawEnvironment = serde_json::from_str(json)?;
        raw.lower()
    }

    /// Parse an environment from a reader (front-end stdout, a file).
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, LoadError> {
        let raw: RawEnvironment = serde_json::from_reader(reader)?;
        raw.lower()
    }
}

/// Raw environment matching the front end's JSON format.
#[derive(Debug, Deserialize)]
struct RawEnvironment {
    env: IndexMap<String, RawBinding>,
    #[serde(default)]
    types: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
struct RawBinding {
    object: RawNodeRef,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNodeRef {
    Index(u32),
    Inline(Box<RawNode>),
}

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    meta: RawMeta,
    #[serde(default)]
    properties: Option<IndexMap<String, RawProperty>>,
    #[serde(default)]
    calls: Option<Vec<RawCall>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMeta {
    #[serde(default)]
    origin: Option<String>,
    #[serde(default)]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawProperty {
    #[serde(rename = "type")]
    ty: RawNodeRef,
    #[serde(default)]
    meta: RawMeta,
}

#[derive(Debug, Deserialize)]
struct RawCall {
    #[serde(default)]
    parameters: Vec<RawParameter>,
}

#[derive(Debug, Deserialize)]
struct RawParameter {
    name: String,
}

impl RawEnvironment {
    fn lower(self) -> Result<Environment, LoadError> {
        let mut types = TypeTable::new();
        let shared: Vec<TypeId> = self.types.iter().map(|_| types.reserve()).collect();

        let mut lowering = Lowering {
            types,
            shared_len: shared.len(),
        };
        for (id, raw) in shared.into_iter().zip(self.types) {
            let node = lowering.node(raw)?;
            lowering.types.define(id, node);
        }

        let mut bindings = IndexMap::with_capacity(self.env.len());
        for (name, binding) in self.env {
            let object = lowering.node_ref(binding.object)?;
            bindings.insert(name, Binding { object });
        }

        Ok(Environment {
            types: lowering.types,
            bindings,
        })
    }
}

struct Lowering {
    types: TypeTable,
    /// Number of slots reserved for the `types` section.
    shared_len: usize,
}

impl Lowering {
    fn node_ref(&mut self, raw: RawNodeRef) -> Result<TypeId, LoadError> {
        match raw {
            RawNodeRef::Index(index) if (index as usize) < self.shared_len => Ok(TypeId(index)),
            RawNodeRef::Index(index) => Err(LoadError::DanglingIndex {
                index,
                len: self.shared_len,
            }),
            RawNodeRef::Inline(raw) => {
                let node = self.node(*raw)?;
                Ok(self.types.push(node))
            }
        }
    }

    fn node(&mut self, raw: RawNode) -> Result<TypeNode, LoadError> {
        let origin = raw.meta.origin.map(Origin::from);
        let data = match raw.tag.as_str() {
            "reference" => TypeData::Reference,
            "enum" => TypeData::Enum,
            "type-param" => TypeData::TypeParam,
            "object" => {
                let kind = ObjectKind::from_name(raw.meta.kind.as_deref().unwrap_or_default());
                let object = self.object(
                    kind,
                    raw.properties.unwrap_or_default(),
                    raw.calls.unwrap_or_default(),
                )?;
                TypeData::Object(object)
            }
            tag => match BuiltinKind::from_tag(tag) {
                Some(kind) => TypeData::Builtin { kind },
                None => TypeData::Unrecognized {
                    tag: tag.to_owned(),
                },
            },
        };
        Ok(TypeNode { origin, data })
    }

    fn object(
        &mut self,
        kind: ObjectKind,
        properties: IndexMap<String, RawProperty>,
        calls: Vec<RawCall>,
    ) -> Result<ObjectType, LoadError> {
        let mut object = ObjectType::new(kind);
        for (name, raw) in properties {
            let type_id = self.node_ref(raw.ty)?;
            let property = Property {
                name: name.clone(),
                type_id,
                origin: raw.meta.origin.map(Origin::from),
            };
            object.properties.insert(name, property);
        }
        object.calls = calls
            .into_iter()
            .map(|call| CallSignature {
                parameters: call
                    .parameters
                    .into_iter()
                    .map(|p| Parameter { name: p.name })
                    .collect(),
            })
            .collect();
        Ok(object)
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Serialize for TypeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeView::from(self).serialize(serializer)
    }
}

#[derive(Serialize)]
struct NodeView<'a> {
    #[serde(rename = "type")]
    tag: &'a str,
    meta: MetaView<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<IndexMap<&'a str, PropertyView<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    calls: Option<Vec<CallView<'a>>>,
}

#[derive(Serialize)]
struct MetaView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    origin: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'a str>,
}

#[derive(Serialize)]
struct PropertyView<'a> {
    #[serde(rename = "type")]
    ty: TypeId,
    meta: MetaView<'a>,
}

#[derive(Serialize)]
struct CallView<'a> {
    parameters: &'a [Parameter],
}

impl<'a> From<&'a TypeNode> for NodeView<'a> {
    fn from(node: &'a TypeNode) -> Self {
        let object = match &node.data {
            TypeData::Object(object) => Some(object),
            _ => None,
        };
        Self {
            tag: node.tag(),
            meta: MetaView {
                origin: node.origin.as_ref().map(Origin::as_str),
                // Lowering maps a missing kind to an empty one.
                kind: object
                    .map(|object| object.kind.as_str())
                    .filter(|kind| !kind.is_empty()),
            },
            properties: object.map(|object| {
                object
                    .properties
                    .iter()
                    .map(|(name, property)| {
                        let view = PropertyView {
                            ty: property.type_id,
                            meta: MetaView {
                                origin: property.origin.as_ref().map(Origin::as_str),
                                kind: None,
                            },
                        };
                        (name.as_str(), view)
                    })
                    .collect()
            }),
            calls: object.map(|object| {
                object
                    .calls
                    .iter()
                    .map(|call| CallView {
                        parameters: &call.parameters,
                    })
                    .collect()
            }),
        }
    }
}
