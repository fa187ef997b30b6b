//! Narrow write interface to a scene-description stage.

use serde::Serialize;

use crate::shade::{PrimPath, Result, Value, ValueType};

/// Schema of a prim the exporter defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimKind {
	/// Material prim.
	Material,
	/// Grouping scope.
	Scope,
	/// Shader prim.
	Shader,
}

impl PrimKind {
	/// Schema type name.
	pub fn type_name(self) -> &'static str {
		match self {
			Self::Material => "Material",
			Self::Scope => "Scope",
			Self::Shader => "Shader",
		}
	}
}

/// Material output terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalKind {
	/// `surface`
	Surface,
	/// `volume`
	Volume,
	/// `displacement`
	Displacement,
}

impl TerminalKind {
	/// Output base name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Surface => "surface",
			Self::Volume => "volume",
			Self::Displacement => "displacement",
		}
	}
}

/// Destination of authored materials.
///
/// Handles returned by one call are only meaningful to the sink that produced them.
pub trait SceneSink {
	/// Prim handle.
	type Prim: Clone;
	/// Attribute handle.
	type Attr;

	/// Define the prim at `path`, or author an override when `as_override` is set.
	fn define_or_override(&mut self, path: &PrimPath, kind: PrimKind, as_override: bool) -> Result<Self::Prim>;

	/// Create a plain attribute such as `info:id`.
	fn create_attribute(&mut self, prim: &Self::Prim, name: &str, ty: ValueType, uniform: bool) -> Result<Self::Attr>;

	/// Create shader input `name`.
	fn create_input(&mut self, prim: &Self::Prim, name: &str, ty: ValueType) -> Result<Self::Attr>;

	/// Create a material terminal, universal when `render_context` is `None`.
	fn create_output(&mut self, prim: &Self::Prim, terminal: TerminalKind, render_context: Option<&str>) -> Result<Self::Attr>;

	/// Set the default value, or a time sample when `time` is given.
	fn set(&mut self, attr: &Self::Attr, value: &Value, time: Option<f64>) -> Result<()>;

	/// Connect `attr` to output `output` of `source`.
	fn connect(&mut self, attr: &Self::Attr, source: &Self::Prim, output: &str) -> Result<()>;
}
