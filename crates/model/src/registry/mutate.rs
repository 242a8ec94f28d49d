//! Post-construction mutation of methods.
//!
//! # Role
//!
//! Scope is the one method field that moves an object in the index, so it is
//! only writable through [`Registry::set_scope`]. The other fields are plain
//! updates and are forwarded to [`crate::MethodData`].

use tracing::debug;

use super::Registry;
use crate::error::Result;
use crate::ids::ObjectId;
use crate::object::{Parameter, Scope, Visibility};

impl Registry {
	/// Changes a method's scope, re-keying it if it is registered.
	///
	/// A registered method is removed under its old path, updated, and
	/// registered under its new path within this call. An unregistered method
	/// (for example, freshly constructed) only has its field updated; no
	/// index entry is created for it.
	pub fn set_scope(&mut self, id: ObjectId, scope: Scope) -> Result<()> {
		let current = self.method(id)?.scope();
		if current == scope {
			return Ok(());
		}

		let old_path = self.canonical_path(id)?;
		let registered = self.by_path.get(&old_path) == Some(&id);
		if registered {
			self.by_path.remove(&old_path);
		}

		self.method_mut(id)?.replace_scope(scope);

		if registered {
			self.register(id)?;
		}
		debug!(%id, %old_path, from = %current, to = %scope, registered, "scope changed");
		Ok(())
	}

	/// Changes a method's scope from text (`class`, `:instance`).
	///
	/// Unknown text fails with [`crate::ModelError::InvalidFieldValue`] and
	/// leaves the method and the index untouched.
	pub fn set_scope_str(&mut self, id: ObjectId, text: &str) -> Result<()> {
		let scope = Scope::parse(text)?;
		self.set_scope(id, scope)
	}

	pub fn set_visibility(&mut self, id: ObjectId, visibility: Visibility) -> Result<()> {
		self.method_mut(id)?.set_visibility(visibility);
		Ok(())
	}

	/// Sets visibility from text; unknown text leaves the method unchanged.
	pub fn set_visibility_str(&mut self, id: ObjectId, text: &str) -> Result<()> {
		let visibility = Visibility::parse(text)?;
		self.set_visibility(id, visibility)
	}

	pub fn set_parameters(&mut self, id: ObjectId, parameters: Vec<Parameter>) -> Result<()> {
		self.method_mut(id)?.set_parameters(parameters);
		Ok(())
	}

	pub fn set_explicit(&mut self, id: ObjectId, explicit: bool) -> Result<()> {
		self.method_mut(id)?.set_explicit(explicit);
		Ok(())
	}
}
