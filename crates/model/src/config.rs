//! Model configuration.
//!
//! Locating and reading the configuration file belongs to the caller; this
//! module only turns a TOML fragment into a [`ModelConfig`]. Every field has a
//! default, so an empty document is valid.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Path separators used when computing canonical paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Separators {
	/// Between nested namespaces, and before root-level class methods.
	pub namespace: String,
	/// Before instance methods.
	pub instance: String,
	/// Before class methods of a non-root namespace.
	pub class: String,
}

impl Default for Separators {
	fn default() -> Self {
		Self {
			namespace: "::".to_string(),
			instance: "#".to_string(),
			class: ".".to_string(),
		}
	}
}

/// Configuration for a [`crate::Registry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
	pub separators: Separators,
	/// Trailing marker that turns an attribute reader name into its writer.
	pub setter_suffix: char,
	/// Name of the instance method that constructs a class.
	pub constructor_name: String,
}

impl Default for ModelConfig {
	fn default() -> Self {
		Self {
			separators: Separators::default(),
			setter_suffix: '=',
			constructor_name: "initialize".to_string(),
		}
	}
}

impl ModelConfig {
	/// Parses a configuration from TOML text.
	pub fn from_toml_str(text: &str) -> Result<Self> {
		Ok(toml::from_str(text)?)
	}

	/// Strips one trailing setter suffix from `name`, if present.
	pub fn strip_setter<'a>(&self, name: &'a str) -> &'a str {
		name.strip_suffix(self.setter_suffix).unwrap_or(name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_document_uses_defaults() {
		let config = ModelConfig::from_toml_str("").unwrap();
		assert_eq!(config, ModelConfig::default());
	}

	#[test]
	fn partial_separators_keep_remaining_defaults() {
		let config = ModelConfig::from_toml_str(
			r#"
			[separators]
			instance = "@"
			"#,
		)
		.unwrap();
		assert_eq!(config.separators.instance, "@");
		assert_eq!(config.separators.namespace, "::");
		assert_eq!(config.separators.class, ".");
		assert_eq!(config.setter_suffix, '=');
	}

	#[test]
	fn malformed_document_is_config_error() {
		let err = ModelConfig::from_toml_str("separators = 3").unwrap_err();
		assert!(matches!(err, crate::ModelError::Config(_)));
	}

	#[test]
	fn strip_setter_removes_single_suffix() {
		let config = ModelConfig::default();
		assert_eq!(config.strip_setter("size="), "size");
		assert_eq!(config.strip_setter("size=="), "size=");
		assert_eq!(config.strip_setter("size"), "size");
	}
}
