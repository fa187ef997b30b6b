use std::fmt;

use serde::Serialize;

use crate::shade::{Result, ShadeError};

/// Absolute, slash-separated prim path whose components are valid identifiers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PrimPath(String);

impl PrimPath {
	/// Root path `/`.
	pub fn root() -> Self {
		Self("/".to_owned())
	}

	/// Parse absolute path syntax such as `/materials/Wood`.
	pub fn parse(input: &str) -> Result<Self> {
		let Some(rest) = input.strip_prefix('/') else {
			return Err(ShadeError::InvalidPrimPath { path: input.to_owned() });
		};

		if rest.is_empty() {
			return Ok(Self::root());
		}

		for component in rest.split('/') {
			if component.is_empty() || make_valid_identifier(component) != component {
				return Err(ShadeError::InvalidPrimPath { path: input.to_owned() });
			}
		}

		Ok(Self(input.to_owned()))
	}

	/// Append one child component, sanitizing it into a valid identifier.
	pub fn child(&self, name: &str) -> Self {
		let name = make_valid_identifier(name);
		if self.is_root() { Self(format!("/{name}")) } else { Self(format!("{}/{name}", self.0)) }
	}

	/// Whether this is the root path.
	pub fn is_root(&self) -> bool {
		self.0 == "/"
	}

	/// Last path component, or empty for the root.
	pub fn name(&self) -> &str {
		self.0.rsplit('/').next().unwrap_or("")
	}

	/// Parent path, or `None` for the root.
	pub fn parent(&self) -> Option<Self> {
		if self.is_root() {
			return None;
		}
		match self.0.rfind('/') {
			Some(0) => Some(Self::root()),
			Some(idx) => Some(Self(self.0[..idx].to_owned())),
			None => None,
		}
	}

	/// Borrow the path text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for PrimPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Produce a valid identifier: ASCII alphanumerics and `_`, not starting with a digit.
///
/// Every other character becomes `_`; an empty input becomes `_`.
pub fn make_valid_identifier(input: &str) -> String {
	if input.is_empty() {
		return "_".to_owned();
	}

	let mut out = String::with_capacity(input.len());
	for (idx, ch) in input.chars().enumerate() {
		let keep = if idx == 0 { ch.is_ascii_alphabetic() || ch == '_' } else { ch.is_ascii_alphanumeric() || ch == '_' };
		out.push(if keep { ch } else { '_' });
	}
	out
}

/// Lowercase then sanitize, the rule used for emitted input names.
pub fn input_identifier(input: &str) -> String {
	make_valid_identifier(&input.to_ascii_lowercase())
}
