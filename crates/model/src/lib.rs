//! Object model and canonical-path registry for documentation generation.
//!
//! A discovery pipeline walks source code and records what it finds here:
//! namespaces and the methods they own. Rendering and cross-referencing read
//! the same data back through the [`Registry`] without caring how it was
//! discovered.
//!
//! # Mental Model
//!
//! 1. **Arena:** every [`CodeObject`] lives in the registry's arena and is
//!    addressed by an [`ObjectId`]. A member refers to its namespace by handle,
//!    never by ownership.
//! 2. **Index:** registered objects are also reachable by canonical path
//!    (`Foo::Bar#run`, `Foo.build`, `#run`). Paths are computed on demand by
//!    [`path`] from namespace, name and scope; they are never stored.
//! 3. **Re-keying:** a method's scope is part of its path, so the only way to
//!    change it is [`Registry::set_scope`], which moves the index entry in one
//!    step.
//!
//! # Invariants
//!
//! - At most one object per canonical path; a registered object's current path
//!   is the key it is stored under.
//!   - Enforced in: [`Registry::register`], [`Registry::set_scope`].
//!   - Tested by: `registry::tests::test_rekey_moves_index_entry`.
//! - Deleting is idempotent and never removes another object's entry.
//!   - Enforced in: [`Registry::delete`].
//!   - Tested by: `registry::tests::test_delete_is_idempotent`.
//! - Constructing an object never creates an index entry.
//!   - Enforced in: [`Registry::insert_method`].
//!   - Tested by: `registry::tests::test_fresh_method_is_unregistered`.
//! - Only the root namespace has the empty path; other objects need a name.
//!   - Enforced in: `Registry::insert`.
//!   - Tested by: `registry::tests::test_empty_name_rejected`.

pub mod config;
pub mod error;
pub mod ids;
pub mod object;
pub mod path;
pub mod registry;
pub mod shared;

pub use config::{ModelConfig, Separators};
pub use error::{ModelError, Result};
pub use ids::ObjectId;
pub use object::{
	AttrAccessors, CodeObject, MethodData, NamespaceData, NamespaceKind, ObjectKind, Parameter,
	Scope, Visibility,
};
pub use registry::{MethodFilter, Registry};
pub use shared::SharedRegistry;
