//! Canonical path computation.
//!
//! # Role
//!
//! Pure functions from `(owner path, name, scope)` to a path string. The
//! registry calls these at registration, at re-keying and at lookup time;
//! nothing here touches registry state.
//!
//! # Rules
//!
//! - Namespaces join with the namespace separator and render bare directly
//!   under the root: `Foo`, `Foo::Bar`.
//! - Instance methods always use the instance separator: `Foo#run`.
//! - Class methods use the class separator inside a namespace (`Foo.build`)
//!   and the namespace separator under the root (`::build`).
//! - Methods under the root keep their separator as a prefix: `#run`.

use crate::config::Separators;
use crate::object::Scope;

/// Where an object sits, as far as path computation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner<'a> {
	/// The root namespace, or no namespace at all.
	Root,
	/// A non-root namespace with the given canonical path.
	Namespace(&'a str),
}

impl Owner<'_> {
	pub fn is_root(self) -> bool {
		matches!(self, Owner::Root)
	}
}

/// Separator placed between a method's owner and its name.
pub fn method_separator<'s>(seps: &'s Separators, scope: Scope, owner: Owner<'_>) -> &'s str {
	match scope {
		Scope::Instance => &seps.instance,
		Scope::Class if owner.is_root() => &seps.namespace,
		Scope::Class => &seps.class,
	}
}

/// Canonical path of a method.
pub fn method_path(seps: &Separators, owner: Owner<'_>, name: &str, scope: Scope) -> String {
	let sep = method_separator(seps, scope, owner);
	match owner {
		Owner::Root => format!("{sep}{name}"),
		Owner::Namespace(path) => format!("{path}{sep}{name}"),
	}
}

/// Canonical path of a namespace.
pub fn namespace_path(seps: &Separators, owner: Owner<'_>, name: &str) -> String {
	match owner {
		Owner::Root => name.to_string(),
		Owner::Namespace(path) => format!("{path}{}{name}", seps.namespace),
	}
}

/// Method name for display, optionally prefixed.
///
/// The prefix is only added when the method's separator is the instance
/// separator, so `#run` but plain `build` for class methods.
pub fn method_display_name(
	seps: &Separators,
	owner: Owner<'_>,
	name: &str,
	scope: Scope,
	prefixed: bool,
) -> String {
	let sep = method_separator(seps, scope, owner);
	if prefixed && sep == seps.instance {
		format!("{sep}{name}")
	} else {
		name.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn seps() -> Separators {
		Separators::default()
	}

	#[test]
	fn root_instance_method_keeps_separator_prefix() {
		assert_eq!(method_path(&seps(), Owner::Root, "run", Scope::Instance), "#run");
	}

	#[test]
	fn root_class_method_uses_namespace_separator() {
		assert_eq!(method_path(&seps(), Owner::Root, "build", Scope::Class), "::build");
	}

	#[test]
	fn nested_methods_use_scope_separator() {
		let owner = Owner::Namespace("Foo");
		assert_eq!(method_path(&seps(), owner, "build", Scope::Class), "Foo.build");
		assert_eq!(method_path(&seps(), owner, "run", Scope::Instance), "Foo#run");
	}

	#[test]
	fn namespaces_render_bare_under_root() {
		assert_eq!(namespace_path(&seps(), Owner::Root, "Foo"), "Foo");
		assert_eq!(namespace_path(&seps(), Owner::Namespace("Foo"), "Bar"), "Foo::Bar");
	}

	#[test]
	fn display_name_prefixes_instance_methods_only() {
		let owner = Owner::Namespace("Foo");
		let s = seps();
		assert_eq!(method_display_name(&s, owner, "run", Scope::Instance, true), "#run");
		assert_eq!(method_display_name(&s, owner, "run", Scope::Instance, false), "run");
		assert_eq!(method_display_name(&s, owner, "build", Scope::Class, true), "build");
		assert_eq!(method_display_name(&s, Owner::Root, "build", Scope::Class, true), "build");
	}

	#[test]
	fn custom_separators_are_honored() {
		let s = Separators {
			namespace: "/".to_string(),
			instance: "@".to_string(),
			class: "::".to_string(),
		};
		assert_eq!(method_path(&s, Owner::Namespace("A/B"), "x", Scope::Class), "A/B::x");
		assert_eq!(method_path(&s, Owner::Root, "x", Scope::Class), "/x");
		assert_eq!(namespace_path(&s, Owner::Namespace("A"), "B"), "A/B");
	}
}
