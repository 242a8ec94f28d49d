//! Session-scoped object arena and canonical-path index.
//!
//! # Role
//!
//! [`Registry`] owns every [`CodeObject`] of a documentation session and maps
//! canonical paths to the registered ones. It is an explicit value, not a
//! process global: one registry per session, one per test.
//!
//! # Invariants
//!
//! - At most one object per path (last `register` wins).
//!   - Enforced in: [`Registry::register`].
//!   - Tested by: `tests::test_register_replaces_occupant`.
//!   - Failure symptom: cross-references resolve to a stale definition.
//!
//! - A registered object's current canonical path equals its index key.
//!   - Enforced in: [`Registry::set_scope`] (the only mutator of a path-affecting field).
//!   - Tested by: `tests::test_rekey_moves_index_entry`, `tests::prop_rekey_consistency`.
//!   - Failure symptom: lookup by the rendered path misses an existing method.
//!
//! - `delete` only removes an entry that points at the deleted object.
//!   - Enforced in: [`Registry::delete`].
//!   - Tested by: `tests::test_delete_leaves_other_occupant`.
//!   - Failure symptom: deleting a replaced object unregisters its replacement.

mod mutate;
mod query;

use rustc_hash::FxHashMap as HashMap;
use tracing::{debug, trace};

pub use query::MethodFilter;

use crate::config::ModelConfig;
use crate::error::{ModelError, Result};
use crate::ids::ObjectId;
use crate::object::{CodeObject, MethodData, NamespaceData, NamespaceKind, ObjectKind, Scope};
use crate::path::{self, Owner};

/// Arena of code objects plus the canonical-path index.
#[derive(Debug, Clone)]
pub struct Registry {
	config: ModelConfig,
	objects: Vec<CodeObject>,
	by_path: HashMap<String, ObjectId>,
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

impl Registry {
	/// Creates an empty registry with default separators.
	pub fn new() -> Self {
		Self::with_config(ModelConfig::default())
	}

	/// Creates an empty registry holding only the root namespace.
	pub fn with_config(config: ModelConfig) -> Self {
		let root = CodeObject::new(
			String::new(),
			None,
			ObjectKind::Namespace(NamespaceData::new(NamespaceKind::Root)),
		);
		Self {
			config,
			objects: vec![root],
			by_path: HashMap::default(),
		}
	}

	pub fn config(&self) -> &ModelConfig {
		&self.config
	}

	/// The root namespace. Always present, never indexed.
	pub fn root(&self) -> ObjectId {
		ObjectId::ROOT
	}

	//
	// construction
	//

	/// Constructs a namespace under `parent` without registering it.
	pub fn insert_namespace(
		&mut self,
		parent: ObjectId,
		name: impl Into<String>,
		kind: NamespaceKind,
	) -> Result<ObjectId> {
		self.insert(
			parent,
			name.into(),
			ObjectKind::Namespace(NamespaceData::new(kind)),
		)
	}

	/// Constructs a method under `namespace` without registering it.
	///
	/// The initial scope is set here; no index entry exists until
	/// [`Registry::register`] is called.
	pub fn insert_method(
		&mut self,
		namespace: ObjectId,
		name: impl Into<String>,
		scope: Scope,
	) -> Result<ObjectId> {
		self.insert(
			namespace,
			name.into(),
			ObjectKind::Method(MethodData::new(scope)),
		)
	}

	/// Constructs and registers a namespace.
	pub fn define_namespace(
		&mut self,
		parent: ObjectId,
		name: impl Into<String>,
		kind: NamespaceKind,
	) -> Result<ObjectId> {
		let id = self.insert_namespace(parent, name, kind)?;
		self.register(id)?;
		Ok(id)
	}

	/// Constructs and registers a method.
	pub fn define_method(
		&mut self,
		namespace: ObjectId,
		name: impl Into<String>,
		scope: Scope,
	) -> Result<ObjectId> {
		let id = self.insert_method(namespace, name, scope)?;
		self.register(id)?;
		Ok(id)
	}

	fn insert(&mut self, owner: ObjectId, name: String, kind: ObjectKind) -> Result<ObjectId> {
		if let ObjectKind::Namespace(ns) = &kind
			&& ns.kind() == NamespaceKind::Root
		{
			return Err(ModelError::InvalidFieldValue {
				field: "namespace kind",
				value: "root".to_string(),
			});
		}
		// An empty name would share the root's path "".
		if name.is_empty() {
			return Err(ModelError::InvalidFieldValue {
				field: "name",
				value: name,
			});
		}
		let id = ObjectId::from_index(self.objects.len()).ok_or(ModelError::ArenaFull)?;
		self.namespace_mut(owner)?.children.push(id);
		self.objects.push(CodeObject::new(name, Some(owner), kind));
		Ok(id)
	}

	//
	// index
	//

	/// Indexes `id` under its current canonical path.
	///
	/// An object already at that path is replaced; its handle stays valid but
	/// it is no longer registered. Returns the replaced object, if it was a
	/// different one.
	pub fn register(&mut self, id: ObjectId) -> Result<Option<ObjectId>> {
		if id.is_root() {
			return Ok(None);
		}
		let path = self.canonical_path(id)?;
		let replaced = self.by_path.insert(path.clone(), id).filter(|prev| *prev != id);
		match replaced {
			Some(prev) => debug!(%path, %id, %prev, "registry entry replaced"),
			None => debug!(%path, %id, "registered"),
		}
		Ok(replaced)
	}

	/// Removes the index entry at `id`'s current path if it points at `id`.
	///
	/// Returns whether an entry was removed. Deleting an unregistered object,
	/// or one whose path now belongs to another object, is a no-op.
	pub fn delete(&mut self, id: ObjectId) -> Result<bool> {
		let path = self.canonical_path(id)?;
		if self.by_path.get(&path) != Some(&id) {
			trace!(%path, %id, "delete skipped; not registered under this path");
			return Ok(false);
		}
		self.by_path.remove(&path);
		debug!(%path, %id, "deleted");
		Ok(true)
	}

	/// Object registered at `path`. The empty path names the root namespace.
	pub fn lookup(&self, path: &str) -> Option<ObjectId> {
		if path.is_empty() {
			return Some(ObjectId::ROOT);
		}
		self.by_path.get(path).copied()
	}

	/// Like [`Registry::lookup`], returning the object itself.
	pub fn at(&self, path: &str) -> Option<&CodeObject> {
		self.lookup(path).and_then(|id| self.get(id))
	}

	/// Whether `id` is the object indexed under its current path.
	pub fn is_registered(&self, id: ObjectId) -> bool {
		if id.is_root() {
			return true;
		}
		self.canonical_path(id)
			.is_ok_and(|path| self.by_path.get(&path) == Some(&id))
	}

	/// Number of indexed objects (the root is not counted).
	pub fn len(&self) -> usize {
		self.by_path.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_path.is_empty()
	}

	/// All indexed paths, sorted.
	pub fn paths(&self) -> Vec<&str> {
		let mut paths: Vec<&str> = self.by_path.keys().map(String::as_str).collect();
		paths.sort_unstable();
		paths
	}

	//
	// arena access
	//

	pub fn get(&self, id: ObjectId) -> Option<&CodeObject> {
		self.objects.get(id.index())
	}

	pub fn object(&self, id: ObjectId) -> Result<&CodeObject> {
		self.get(id).ok_or(ModelError::UnknownObject(id))
	}

	fn object_mut(&mut self, id: ObjectId) -> Result<&mut CodeObject> {
		self.objects
			.get_mut(id.index())
			.ok_or(ModelError::UnknownObject(id))
	}

	pub fn method(&self, id: ObjectId) -> Result<&MethodData> {
		self.object(id)?
			.as_method()
			.ok_or(ModelError::NotAMethod(id))
	}

	/// Mutable method data. Scope is not reachable from here; see
	/// [`Registry::set_scope`].
	pub fn method_mut(&mut self, id: ObjectId) -> Result<&mut MethodData> {
		self.object_mut(id)?
			.as_method_mut()
			.ok_or(ModelError::NotAMethod(id))
	}

	pub fn namespace(&self, id: ObjectId) -> Result<&NamespaceData> {
		self.object(id)?
			.as_namespace()
			.ok_or(ModelError::NotANamespace(id))
	}

	/// Mutable namespace data, for filling in attribute and alias tables.
	pub fn namespace_mut(&mut self, id: ObjectId) -> Result<&mut NamespaceData> {
		self.object_mut(id)?
			.as_namespace_mut()
			.ok_or(ModelError::NotANamespace(id))
	}

	//
	// paths
	//

	/// Canonical path of `id`, recomputed from its current position and scope.
	pub fn canonical_path(&self, id: ObjectId) -> Result<String> {
		let object = self.object(id)?;
		let seps = &self.config.separators;
		match object.kind() {
			ObjectKind::Namespace(ns) if ns.kind() == NamespaceKind::Root => Ok(String::new()),
			ObjectKind::Namespace(_) => {
				let owner_path = self.owner_path(object.namespace())?;
				Ok(path::namespace_path(seps, owner(owner_path.as_deref()), object.name()))
			}
			ObjectKind::Method(m) => {
				let owner_path = self.owner_path(object.namespace())?;
				Ok(path::method_path(seps, owner(owner_path.as_deref()), object.name(), m.scope()))
			}
		}
	}

	/// Path of an owning namespace; `None` for the root or an absent owner.
	fn owner_path(&self, namespace: Option<ObjectId>) -> Result<Option<String>> {
		match namespace {
			None => Ok(None),
			Some(ns) if ns.is_root() => Ok(None),
			Some(ns) => self.canonical_path(ns).map(Some),
		}
	}
}

fn owner(path: Option<&str>) -> Owner<'_> {
	path.map_or(Owner::Root, Owner::Namespace)
}
