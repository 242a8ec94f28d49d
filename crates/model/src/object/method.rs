use std::fmt::Write as _;
use std::str::FromStr;

use strum::{Display, EnumString};

use crate::error::{ModelError, Result};

/// Whether a method belongs to the class level or the instance level of its
/// namespace. Part of the method's identity.
#[derive(Debug, Default, Display, EnumString, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Scope {
	/// Called on the namespace itself.
	Class,
	/// Called on instances.
	#[default]
	Instance,
}

impl Scope {
	/// Normalizes textual input (`class`, `:instance`) into a scope.
	pub fn parse(text: &str) -> Result<Self> {
		parse_symbolic(text, "scope")
	}
}

/// Access level of a method. Not part of its identity.
#[derive(Debug, Default, Display, EnumString, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
	#[default]
	Public,
	Protected,
	Private,
}

impl Visibility {
	/// Normalizes textual input (`private`, `:protected`) into a visibility.
	pub fn parse(text: &str) -> Result<Self> {
		parse_symbolic(text, "visibility")
	}
}

/// Accepts the bare form and the symbol form (leading `:`) of a closed value.
fn parse_symbolic<T: FromStr>(text: &str, field: &'static str) -> Result<T> {
	let trimmed = text.trim();
	let bare = trimmed.strip_prefix(':').unwrap_or(trimmed);
	T::from_str(bare).map_err(|_| ModelError::InvalidFieldValue {
		field,
		value: text.to_string(),
	})
}

/// A declared parameter and its default value, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
	pub name: String,
	pub default: Option<String>,
}

impl Parameter {
	pub fn new(name: impl Into<String>, default: Option<&str>) -> Self {
		Self {
			name: name.into(),
			default: default.map(str::to_string),
		}
	}
}

/// Method-specific data.
///
/// `scope` has no setter here: it decides the canonical path, so changing it
/// must go through [`crate::Registry::set_scope`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodData {
	scope: Scope,
	visibility: Visibility,
	parameters: Vec<Parameter>,
	explicit: Option<bool>,
}

impl MethodData {
	pub(crate) fn new(scope: Scope) -> Self {
		Self {
			scope,
			visibility: Visibility::Public,
			parameters: Vec::new(),
			explicit: None,
		}
	}

	pub fn scope(&self) -> Scope {
		self.scope
	}

	pub(crate) fn replace_scope(&mut self, scope: Scope) -> Scope {
		std::mem::replace(&mut self.scope, scope)
	}

	pub fn visibility(&self) -> Visibility {
		self.visibility
	}

	pub fn set_visibility(&mut self, visibility: Visibility) {
		self.visibility = visibility;
	}

	/// Sets the visibility from text, leaving it unchanged on error.
	pub fn set_visibility_str(&mut self, text: &str) -> Result<()> {
		self.visibility = Visibility::parse(text)?;
		Ok(())
	}

	/// Parameters in declared order.
	pub fn parameters(&self) -> &[Parameter] {
		&self.parameters
	}

	pub fn set_parameters(&mut self, parameters: Vec<Parameter>) {
		self.parameters = parameters;
	}

	pub fn push_parameter(&mut self, parameter: Parameter) {
		self.parameters.push(parameter);
	}

	/// Raw flag; `None` means the discovery pipeline never said.
	pub fn explicit(&self) -> Option<bool> {
		self.explicit
	}

	pub fn set_explicit(&mut self, explicit: bool) {
		self.explicit = Some(explicit);
	}

	/// Whether the method was written in source rather than synthesized.
	pub fn is_explicit(&self) -> bool {
		self.explicit.unwrap_or(false)
	}

	/// Renders the parameter list as `(a, b = 1)`.
	pub fn parameter_list(&self) -> String {
		let mut out = String::from("(");
		for (i, param) in self.parameters.iter().enumerate() {
			if i > 0 {
				out.push_str(", ");
			}
			out.push_str(&param.name);
			if let Some(default) = &param.default {
				let _ = write!(out, " = {default}");
			}
		}
		out.push(')');
		out
	}
}
