//! Read-only queries for the rendering layer.
//!
//! # Role
//!
//! Answers questions about a method by consulting its owning namespace's
//! tables: attribute status, aliases, display names and member listings.
//!
//! # Alias direction
//!
//! A namespace's alias table maps an alias object to the name it aliases.
//! [`Registry::is_alias`] is the forward question ("is this object a key?").
//! [`Registry::aliases_of`] is the reverse one ("which objects were recorded
//! as aliasing my name, in my scope?"). The scope check keeps a class method
//! and an instance method of the same name from being reported as aliases of
//! each other.

use super::Registry;
use crate::error::Result;
use crate::ids::ObjectId;
use crate::object::{AttrAccessors, NamespaceData, NamespaceKind, Scope, Visibility};
use crate::path;

/// Selection criteria for [`Registry::meths`]. `None` matches anything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MethodFilter {
	pub scope: Option<Scope>,
	pub visibility: Option<Visibility>,
}

impl MethodFilter {
	pub fn scope(scope: Scope) -> Self {
		Self {
			scope: Some(scope),
			..Self::default()
		}
	}

	pub fn with_visibility(mut self, visibility: Visibility) -> Self {
		self.visibility = Some(visibility);
		self
	}

	fn matches(&self, scope: Scope, visibility: Visibility) -> bool {
		self.scope.is_none_or(|s| s == scope) && self.visibility.is_none_or(|v| v == visibility)
	}
}

impl Registry {
	/// The method's owning namespace data, if it has one.
	fn owning_namespace(&self, id: ObjectId) -> Result<Option<&NamespaceData>> {
		let object = self.object(id)?;
		Ok(match object.namespace() {
			Some(ns) => Some(self.namespace(ns)?),
			None => None,
		})
	}

	/// Display name; with `prefixed`, instance methods gain the instance
	/// separator (`#run`). Namespaces always render their bare name.
	pub fn display_name(&self, id: ObjectId, prefixed: bool) -> Result<String> {
		let object = self.object(id)?;
		let Some(method) = object.as_method() else {
			return Ok(object.name().to_string());
		};
		let owner_path = self.owner_path(object.namespace())?;
		Ok(path::method_display_name(
			&self.config.separators,
			super::owner(owner_path.as_deref()),
			object.name(),
			method.scope(),
			prefixed,
		))
	}

	/// Whether the method is a reader or writer of a declared attribute.
	///
	/// One trailing setter suffix is stripped before the lookup, so `size` and
	/// `size=` both match the attribute `size`.
	pub fn is_attribute(&self, id: ObjectId) -> Result<bool> {
		Ok(self.attr_info(id)?.is_some())
	}

	/// The accessor record [`Registry::is_attribute`] matched, if any.
	pub fn attr_info(&self, id: ObjectId) -> Result<Option<&AttrAccessors>> {
		let scope = self.method(id)?.scope();
		let name = self.config.strip_setter(self.object(id)?.name());
		Ok(self
			.owning_namespace(id)?
			.and_then(|ns| ns.attribute(scope, name)))
	}

	/// Whether this method is the recorded reader of its attribute.
	pub fn is_reader(&self, id: ObjectId) -> Result<bool> {
		Ok(self.attr_info(id)?.is_some_and(|info| info.read == Some(id)))
	}

	/// Whether this method is the recorded writer of its attribute.
	pub fn is_writer(&self, id: ObjectId) -> Result<bool> {
		Ok(self.attr_info(id)?.is_some_and(|info| info.write == Some(id)))
	}

	/// Whether the owning namespace records this exact object as an alias.
	pub fn is_alias(&self, id: ObjectId) -> Result<bool> {
		self.method(id)?;
		Ok(self
			.owning_namespace(id)?
			.is_some_and(|ns| ns.alias_name(id).is_some()))
	}

	/// Objects recorded as aliasing this method's name in the same scope.
	///
	/// Sorted by handle. Entries whose object is unknown or not a method are
	/// skipped.
	pub fn aliases_of(&self, id: ObjectId) -> Result<Vec<ObjectId>> {
		let scope = self.method(id)?.scope();
		let name = self.object(id)?.name();
		let Some(ns) = self.owning_namespace(id)? else {
			return Ok(Vec::new());
		};

		let mut list: Vec<ObjectId> = ns
			.aliases()
			.filter(|(other, alias)| *other != id && *alias == name)
			.filter(|(other, _)| {
				self.get(*other)
					.and_then(|o| o.as_method())
					.is_some_and(|m| m.scope() == scope)
			})
			.map(|(other, _)| other)
			.collect();
		list.sort_unstable();
		Ok(list)
	}

	/// Whether the method was written in source; unset counts as inferred.
	pub fn is_explicit(&self, id: ObjectId) -> Result<bool> {
		Ok(self.method(id)?.is_explicit())
	}

	/// Whether this is the instance-level constructor of a class.
	pub fn is_constructor(&self, id: ObjectId) -> Result<bool> {
		let method = self.method(id)?;
		let object = self.object(id)?;
		if method.scope() != Scope::Instance || object.name() != self.config.constructor_name {
			return Ok(false);
		}
		Ok(self
			.owning_namespace(id)?
			.is_some_and(|ns| ns.kind() == NamespaceKind::Class))
	}

	/// Members of a namespace in insertion order, registered or not.
	pub fn children(&self, namespace: ObjectId) -> Result<&[ObjectId]> {
		Ok(self.namespace(namespace)?.children())
	}

	/// Registered methods of a namespace matching `filter`, in insertion order.
	pub fn meths(&self, namespace: ObjectId, filter: MethodFilter) -> Result<Vec<ObjectId>> {
		let children = self.children(namespace)?;
		Ok(children
			.iter()
			.copied()
			.filter(|child| {
				self.get(*child)
					.and_then(|o| o.as_method())
					.is_some_and(|m| filter.matches(m.scope(), m.visibility()))
			})
			.filter(|child| self.is_registered(*child))
			.collect())
	}

	/// Looks up a method of `namespace` by name and scope through its
	/// canonical path.
	pub fn resolve_method(
		&self,
		namespace: ObjectId,
		name: &str,
		scope: Scope,
	) -> Result<Option<ObjectId>> {
		self.namespace(namespace)?;
		let seps = &self.config.separators;
		let ns_path = self.owner_path(Some(namespace))?;
		let path = path::method_path(seps, super::owner(ns_path.as_deref()), name, scope);
		Ok(self.lookup(&path))
	}
}
