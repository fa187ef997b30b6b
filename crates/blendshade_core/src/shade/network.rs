use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::shade::{InputValue, PrimKind, PrimPath, Result, SceneSink, ShadeError, ShaderUnit, TerminalKind, Value, ValueType};

/// Render context of the renderer-native terminals.
pub const RENDER_CONTEXT: &str = "cycles";

/// Source of one material terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalBinding {
	/// Shader prim providing the value.
	pub source: PrimPath,
	/// Output name on the source.
	pub output: String,
}

impl TerminalBinding {
	/// Bind `source.output`.
	pub fn new(source: PrimPath, output: impl Into<String>) -> Self {
		Self { source, output: output.into() }
	}
}

/// Terminals authored in the renderer's own context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderTerminals {
	/// Surface closure.
	pub surface: Option<TerminalBinding>,
	/// Volume closure.
	pub volume: Option<TerminalBinding>,
	/// Displacement vector.
	pub displacement: Option<TerminalBinding>,
}

impl RenderTerminals {
	/// Bound terminals in authoring order.
	pub fn iter(&self) -> impl Iterator<Item = (TerminalKind, &TerminalBinding)> {
		[(TerminalKind::Surface, &self.surface), (TerminalKind::Volume, &self.volume), (TerminalKind::Displacement, &self.displacement)]
			.into_iter()
			.filter_map(|(kind, binding)| binding.as_ref().map(|binding| (kind, binding)))
	}

	/// Slot for one terminal kind.
	pub fn slot_mut(&mut self, kind: TerminalKind) -> &mut Option<TerminalBinding> {
		match kind {
			TerminalKind::Surface => &mut self.surface,
			TerminalKind::Volume => &mut self.volume,
			TerminalKind::Displacement => &mut self.displacement,
		}
	}

	fn or(self, other: Self) -> Self {
		Self {
			surface: self.surface.or(other.surface),
			volume: self.volume.or(other.volume),
			displacement: self.displacement.or(other.displacement),
		}
	}
}

/// A scope prim and the shader units below it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitScope {
	/// Scope prim path.
	pub path: PrimPath,
	/// Units in creation order; paths are unique.
	pub units: Vec<ShaderUnit>,
}

impl UnitScope {
	/// Empty scope at `path`.
	pub fn new(path: PrimPath) -> Self {
		Self { path, units: Vec::new() }
	}

	/// Add `unit` unless a unit with the same path exists; returns whether it was added.
	pub fn insert(&mut self, unit: ShaderUnit) -> bool {
		if self.unit(&unit.path).is_some() {
			debug!(path = %unit.path, "shader unit already exists; keeping the first");
			return false;
		}
		self.units.push(unit);
		true
	}

	/// Unit by prim path.
	pub fn unit(&self, path: &PrimPath) -> Option<&ShaderUnit> {
		self.units.iter().find(|unit| &unit.path == path)
	}
}

/// One attribute authored directly on the material prim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialAttribute {
	/// Namespaced attribute name.
	pub name: String,
	/// Declared type.
	#[serde(rename = "type")]
	pub ty: ValueType,
	/// Uniform (not time-varying) attribute.
	pub uniform: bool,
	/// Authored value.
	pub value: Value,
}

/// Everything one material export authors, as plain data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialNetwork {
	/// Material prim path.
	pub material: PrimPath,
	/// Render settings authored on the material prim.
	pub attributes: Vec<MaterialAttribute>,
	/// Shaders authored directly below the material.
	pub shaders: Vec<ShaderUnit>,
	/// Approximate preview surface scope.
	pub preview: Option<UnitScope>,
	/// Renderer-native mirror scope.
	pub native: Option<UnitScope>,
	/// Universal surface terminal.
	pub surface: Option<TerminalBinding>,
	/// Renderer-context terminals.
	pub cycles: RenderTerminals,
}

impl MaterialNetwork {
	/// Network with nothing but the material prim.
	pub fn new(material: PrimPath) -> Self {
		Self {
			material,
			attributes: Vec::new(),
			shaders: Vec::new(),
			preview: None,
			native: None,
			surface: None,
			cycles: RenderTerminals::default(),
		}
	}

	/// Combine two networks of the same material; values already present in `self` win.
	pub fn merge(mut self, other: Self) -> Self {
		for attribute in other.attributes {
			if !self.attributes.iter().any(|existing| existing.name == attribute.name) {
				self.attributes.push(attribute);
			}
		}
		for shader in other.shaders {
			if !self.shaders.iter().any(|existing| existing.path == shader.path) {
				self.shaders.push(shader);
			}
		}
		self.preview = self.preview.or(other.preview);
		self.native = self.native.or(other.native);
		self.surface = self.surface.or(other.surface);
		self.cycles = self.cycles.or(other.cycles);
		self
	}

	/// Every shader unit in authoring order.
	pub fn units(&self) -> impl Iterator<Item = &ShaderUnit> {
		self.shaders
			.iter()
			.chain(self.preview.iter().flat_map(|scope| scope.units.iter()))
			.chain(self.native.iter().flat_map(|scope| scope.units.iter()))
	}

	/// Shader unit by prim path.
	pub fn unit(&self, path: &PrimPath) -> Option<&ShaderUnit> {
		self.units().find(|unit| &unit.path == path)
	}

	/// Author the network through `sink`.
	///
	/// Every prim is defined before any connection is made, so connections may point at units
	/// authored later in the same network.
	pub fn write<S: SceneSink>(&self, sink: &mut S, as_override: bool) -> Result<()> {
		let material = sink.define_or_override(&self.material, PrimKind::Material, as_override)?;
		for attribute in &self.attributes {
			let attr = sink.create_attribute(&material, &attribute.name, attribute.ty, attribute.uniform)?;
			sink.set(&attr, &attribute.value, None)?;
		}

		let mut prims = HashMap::new();
		for scope in self.preview.iter().chain(self.native.iter()) {
			sink.define_or_override(&scope.path, PrimKind::Scope, as_override)?;
		}
		for unit in self.units() {
			let prim = sink.define_or_override(&unit.path, PrimKind::Shader, as_override)?;
			prims.insert(unit.path.clone(), prim);
		}

		for unit in self.units() {
			let Some(prim) = prims.get(&unit.path) else {
				continue;
			};
			let id = sink.create_attribute(prim, "info:id", ValueType::Token, true)?;
			sink.set(&id, &Value::Token(unit.id.clone()), None)?;

			for (name, input) in &unit.inputs {
				let attr = sink.create_input(prim, name, input.ty)?;
				match &input.value {
					InputValue::Literal { value } => sink.set(&attr, value, None)?,
					InputValue::Samples { samples } => {
						for (time, value) in samples {
							sink.set(&attr, value, Some(*time))?;
						}
					}
					InputValue::Connection { source, output } => {
						let source_prim = lookup(&prims, source)?;
						sink.connect(&attr, source_prim, output)?;
					}
				}
			}
		}

		if let Some(binding) = &self.surface {
			let attr = sink.create_output(&material, TerminalKind::Surface, None)?;
			sink.connect(&attr, lookup(&prims, &binding.source)?, &binding.output)?;
		}
		for (kind, binding) in self.cycles.iter() {
			let attr = sink.create_output(&material, kind, Some(RENDER_CONTEXT))?;
			sink.connect(&attr, lookup(&prims, &binding.source)?, &binding.output)?;
		}

		Ok(())
	}
}

fn lookup<'a, P>(prims: &'a HashMap<PrimPath, P>, path: &PrimPath) -> Result<&'a P> {
	prims.get(path).ok_or_else(|| ShadeError::Sink {
		message: format!("connection source {path} is not part of the network"),
	})
}
