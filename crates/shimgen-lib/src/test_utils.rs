//! Declaration graph builders for tests.

use shimgen_core::{
    BuiltinKind, CallSignature, Environment, ObjectKind, ObjectType, Origin, Property, TypeData,
    TypeId, TypeNode,
};

/// Origin of the file under processing in tests.
pub const FILE: &str = "/work/a.d.ts";
/// Origin of the base library declarations.
pub const LIB: &str = ">lib.d.ts";

/// Builds an environment node by node.
pub struct Decls {
    pub env: Environment,
    pub origin: Origin,
}

impl Default for Decls {
    fn default() -> Self {
        Self::new()
    }
}

impl Decls {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
            origin: Origin::from(FILE),
        }
    }

    pub fn builtin(&mut self, kind: BuiltinKind) -> TypeId {
        self.env.types.push(TypeNode::builtin(kind, FILE))
    }

    /// Node with explicit data and origin.
    pub fn node(&mut self, data: TypeData, origin: &str) -> TypeId {
        self.env
            .types
            .push(TypeNode::new(data, Some(Origin::from(origin))))
    }

    pub fn reference(&mut self) -> TypeId {
        self.node(TypeData::Reference, FILE)
    }

    pub fn object(&mut self, kind: ObjectKind, members: Vec<Property>) -> TypeId {
        self.object_with_calls(kind, members, Vec::new())
    }

    pub fn object_with_calls(
        &mut self,
        kind: ObjectKind,
        members: Vec<Property>,
        calls: Vec<CallSignature>,
    ) -> TypeId {
        let id = self.env.types.reserve();
        self.define(id, kind, members, calls);
        id
    }

    /// Fill a slot obtained from `reserve`, for tying cycles.
    pub fn define(
        &mut self,
        id: TypeId,
        kind: ObjectKind,
        members: Vec<Property>,
        calls: Vec<CallSignature>,
    ) {
        let mut object = ObjectType::new(kind);
        object.properties = members.into_iter().map(|p| (p.name.clone(), p)).collect();
        object.calls = calls;
        self.env.types.define(id, TypeNode::object(object, FILE));
    }

    pub fn reserve(&mut self) -> TypeId {
        self.env.types.reserve()
    }

    pub fn bind(&mut self, name: &str, id: TypeId) {
        self.env.bind(name, id);
    }

    /// Generated statements joined with `\n`; panics on error.
    pub fn expect_stub(&self) -> String {
        let statements =
            crate::generate(&self.env, &self.origin).expect("stub generation failed");
        statements.join("\n")
    }

    pub fn expect_error(&self) -> crate::Error {
        crate::generate(&self.env, &self.origin).expect_err("stub generation succeeded")
    }
}

/// Member declared by the processed file.
pub fn member(name: &str, type_id: TypeId) -> Property {
    Property {
        name: name.to_owned(),
        type_id,
        origin: Some(Origin::from(FILE)),
    }
}

/// Member merged in from another declaration file.
pub fn foreign_member(name: &str, type_id: TypeId) -> Property {
    Property {
        name: name.to_owned(),
        type_id,
        origin: Some(Origin::from(LIB)),
    }
}
