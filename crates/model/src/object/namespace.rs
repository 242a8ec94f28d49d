use rustc_hash::FxHashMap as HashMap;
use strum::{Display, EnumString};

use super::method::Scope;
use crate::ids::ObjectId;

/// Kind of container a namespace represents.
#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum NamespaceKind {
	/// The implicit top-level namespace. Exactly one per registry.
	Root,
	Module,
	Class,
}

/// Reader and writer methods generated for one attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AttrAccessors {
	pub read: Option<ObjectId>,
	pub write: Option<ObjectId>,
}

impl AttrAccessors {
	pub fn new(read: Option<ObjectId>, write: Option<ObjectId>) -> Self {
		Self { read, write }
	}
}

/// Namespace-specific data: member list and the bookkeeping tables the
/// discovery pipeline fills in.
///
/// The namespace exclusively owns both tables. Query logic only reads them.
#[derive(Debug, Clone)]
pub struct NamespaceData {
	kind: NamespaceKind,
	pub(crate) children: Vec<ObjectId>,
	attributes: HashMap<Scope, HashMap<String, AttrAccessors>>,
	aliases: HashMap<ObjectId, String>,
}

impl NamespaceData {
	pub(crate) fn new(kind: NamespaceKind) -> Self {
		Self {
			kind,
			children: Vec::new(),
			attributes: HashMap::default(),
			aliases: HashMap::default(),
		}
	}

	pub fn kind(&self) -> NamespaceKind {
		self.kind
	}

	/// Members in insertion order, registered or not.
	pub fn children(&self) -> &[ObjectId] {
		&self.children
	}

	/// Records an attribute under its bare name (no setter suffix).
	pub fn add_attribute(&mut self, scope: Scope, name: impl Into<String>, accessors: AttrAccessors) {
		self.attributes
			.entry(scope)
			.or_default()
			.insert(name.into(), accessors);
	}

	pub fn attribute(&self, scope: Scope, name: &str) -> Option<&AttrAccessors> {
		self.attributes.get(&scope)?.get(name)
	}

	/// All attributes declared for `scope`.
	pub fn attributes(&self, scope: Scope) -> impl Iterator<Item = (&str, &AttrAccessors)> {
		self.attributes
			.get(&scope)
			.into_iter()
			.flat_map(|table| table.iter().map(|(name, acc)| (name.as_str(), acc)))
	}

	/// Records that `object` is also known as `name` in this namespace.
	///
	/// Returns the name previously recorded for `object`, if any.
	pub fn add_alias(&mut self, object: ObjectId, name: impl Into<String>) -> Option<String> {
		self.aliases.insert(object, name.into())
	}

	pub fn remove_alias(&mut self, object: ObjectId) -> Option<String> {
		self.aliases.remove(&object)
	}

	pub fn alias_name(&self, object: ObjectId) -> Option<&str> {
		self.aliases.get(&object).map(String::as_str)
	}

	pub fn aliases(&self) -> impl Iterator<Item = (ObjectId, &str)> {
		self.aliases.iter().map(|(id, name)| (*id, name.as_str()))
	}
}
