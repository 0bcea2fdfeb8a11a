#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for shimgen declaration trees.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the front end's JSON environment
//! - **Analysis layer**: arena-backed `TypeNode` graph addressed by `TypeId`
//!
//! The analysis layer is read-only once built. Properties refer to their
//! types by handle, so cyclic declaration graphs are representable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod classify;
mod invariants;
mod json;
mod table;


pub use json::LoadError;
pub use table::TypeTable;

// ============================================================================
// Common Types
// ============================================================================

/// Handle to a node stored in a [`TypeTable`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl TypeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifies which input source text declared a node.
#[derive(Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Origin(String);

impl Origin {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Origin {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for Origin {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Analysis Layer
// ============================================================================

/// Primitive types with no runtime shape of their own.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BuiltinKind {
    Number,
    String,
    Boolean,
    Void,
    Any,
}

impl BuiltinKind {
    /// Parse a front-end type tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "number" => Some(Self::Number),
            "string" => Some(Self::String),
            "boolean" => Some(Self::Boolean),
            "void" => Some(Self::Void),
            "any" => Some(Self::Any),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Void => "void",
            Self::Any => "any",
        }
    }
}

/// Declaration kind of an object node.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ObjectKind {
    Module,
    Interface,
    Class,
    /// A kind the front end produced that shimgen has no stub policy for.
    Unrecognized(String),
}

impl ObjectKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "module" => Self::Module,
            "interface" => Self::Interface,
            "class" => Self::Class,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Module => "module",
            Self::Interface => "interface",
            Self::Class => "class",
            Self::Unrecognized(kind) => kind,
        }
    }
}

/// Formal parameter of a call signature. Only the name matters for stubs.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Parameter {
    pub name: String,
}

/// One overload of a callable object.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CallSignature {
    pub parameters: Vec<Parameter>,
}

impl CallSignature {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameters: names
                .into_iter()
                .map(|name| Parameter { name: name.into() })
                .collect(),
        }
    }
}

/// Named member of an object node.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Property {
    pub name: String,
    pub type_id: TypeId,
    pub origin: Option<Origin>,
}

/// Module, interface or class shape.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ObjectType {
    pub kind: ObjectKind,
    /// Members in declaration order.
    pub properties: IndexMap<String, Property>,
    pub calls: Vec<CallSignature>,
}

impl ObjectType {
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            kind,
            properties: IndexMap::new(),
            calls: Vec::new(),
        }
    }
}

/// Closed set of node variants.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TypeData {
    Builtin { kind: BuiltinKind },
    /// Alias to a type declared elsewhere; never expanded.
    Reference,
    Enum,
    TypeParam,
    Object(ObjectType),
    /// A type tag the front end produced that shimgen does not classify.
    Unrecognized { tag: String },
}

/// A node of the declaration tree.
///
/// Serializes in the front end's node shape (see `json.rs`), which is what
/// diagnostics quote as raw node contents.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TypeNode {
    pub origin: Option<Origin>,
    pub data: TypeData,
}

impl TypeNode {
    pub fn new(data: TypeData, origin: Option<Origin>) -> Self {
        Self { origin, data }
    }

    pub fn builtin(kind: BuiltinKind, origin: impl Into<Origin>) -> Self {
        Self::new(TypeData::Builtin { kind }, Some(origin.into()))
    }

    pub fn object(object: ObjectType, origin: impl Into<Origin>) -> Self {
        Self::new(TypeData::Object(object), Some(origin.into()))
    }

    /// Front-end tag this node was built from.
    pub fn tag(&self) -> &str {
        match &self.data {
            TypeData::Builtin { kind } => kind.as_str(),
            TypeData::Reference => "reference",
            TypeData::Enum => "enum",
            TypeData::TypeParam => "type-param",
            TypeData::Object(_) => "object",
            TypeData::Unrecognized { tag } => tag,
        }
    }
}

/// Entry of the flat front-end environment.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Binding {
    pub object: TypeId,
}

/// Flat symbol environment produced by the type-checking front end.
///
/// Module-scoped names carry a distinguishing prefix (`module:` by
/// convention); everything else is a plain top-level name.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Environment {
    pub types: TypeTable,
    pub bindings: IndexMap<String, Binding>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to an already stored node.
    pub fn bind(&mut self, name: impl Into<String>, object: TypeId) {
        self.bindings.insert(name.into(), Binding { object });
    }

    /// Store `node` and bind `name` to it.
    pub fn declare(&mut self, name: impl Into<String>, node: TypeNode) -> TypeId {
        let id = self.types.push(node);
        self.bind(name, id);
        id
    }
}
