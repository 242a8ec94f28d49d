//! Code objects stored in the registry arena.
//!
//! # Role
//!
//! Plain data: names, kinds and the per-kind fields. Everything that needs the
//! registry (paths, re-keying, alias and attribute queries) lives in
//! [`crate::registry`].

mod method;
mod namespace;

pub use method::{MethodData, Parameter, Scope, Visibility};
pub use namespace::{AttrAccessors, NamespaceData, NamespaceKind};

use crate::ids::ObjectId;

/// Kind-specific payload of a [`CodeObject`].
#[derive(Debug, Clone)]
pub enum ObjectKind {
	Namespace(NamespaceData),
	Method(MethodData),
}

/// A documented definition.
///
/// `name` and `namespace` are fixed at construction; a different name is a
/// different object.
#[derive(Debug, Clone)]
pub struct CodeObject {
	name: String,
	namespace: Option<ObjectId>,
	kind: ObjectKind,
}

impl CodeObject {
	pub(crate) fn new(name: String, namespace: Option<ObjectId>, kind: ObjectKind) -> Self {
		Self {
			name,
			namespace,
			kind,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Owning namespace; `None` only for the root namespace itself.
	pub fn namespace(&self) -> Option<ObjectId> {
		self.namespace
	}

	pub fn kind(&self) -> &ObjectKind {
		&self.kind
	}

	pub fn as_method(&self) -> Option<&MethodData> {
		match &self.kind {
			ObjectKind::Method(m) => Some(m),
			ObjectKind::Namespace(_) => None,
		}
	}

	pub fn as_method_mut(&mut self) -> Option<&mut MethodData> {
		match &mut self.kind {
			ObjectKind::Method(m) => Some(m),
			ObjectKind::Namespace(_) => None,
		}
	}

	pub fn as_namespace(&self) -> Option<&NamespaceData> {
		match &self.kind {
			ObjectKind::Namespace(ns) => Some(ns),
			ObjectKind::Method(_) => None,
		}
	}

	pub fn as_namespace_mut(&mut self) -> Option<&mut NamespaceData> {
		match &mut self.kind {
			ObjectKind::Namespace(ns) => Some(ns),
			ObjectKind::Method(_) => None,
		}
	}

	pub fn is_method(&self) -> bool {
		matches!(self.kind, ObjectKind::Method(_))
	}

	pub fn is_namespace(&self) -> bool {
		matches!(self.kind, ObjectKind::Namespace(_))
	}
}
