use thiserror::Error;

use crate::ids::ObjectId;

/// Errors raised by the object model.
///
/// Absence is never an error here: lookups return `Option` and deleting an
/// unregistered object is a no-op.
#[derive(Error, Debug)]
pub enum ModelError {
	/// Text supplied for a field (scope, visibility, name) was rejected.
	#[error("invalid value for {field}: {value:?}")]
	InvalidFieldValue { field: &'static str, value: String },
	/// The handle does not belong to this registry's arena.
	#[error("unknown object: {0}")]
	UnknownObject(ObjectId),
	/// The operation needs a method.
	#[error("{0} is not a method")]
	NotAMethod(ObjectId),
	/// The operation needs a namespace.
	#[error("{0} is not a namespace")]
	NotANamespace(ObjectId),
	/// No handle is left for another object.
	#[error("object arena is full")]
	ArenaFull,
	#[error("failed to parse model config: {0}")]
	Config(#[from] toml::de::Error),
}

/// Result type for object model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
