use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use serde::Serialize;

use crate::shade::{PrimKind, PrimPath, Result, SceneSink, ShadeError, TerminalKind, Value, ValueType};

/// Whether a prim is defined or only overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Specifier {
	/// `def`
	Def,
	/// `over`
	Over,
}

/// One recorded attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageAttribute {
	/// Declared type.
	#[serde(rename = "type")]
	pub ty: ValueType,
	/// Uniform attribute.
	pub uniform: bool,
	/// Default value.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default: Option<Value>,
	/// Time samples in ascending time.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub samples: Vec<(f64, Value)>,
	/// Connection target as `<prim>.outputs:<name>`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub connection: Option<String>,
}

/// One recorded prim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StagePrim {
	/// Schema.
	pub kind: PrimKind,
	/// Specifier.
	pub specifier: Specifier,
	/// Attributes by full name.
	pub attributes: BTreeMap<String, StageAttribute>,
}

/// Attribute handle of a [`MemoryStage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageAttr {
	prim: PrimPath,
	name: String,
}

/// In-memory scene-description sink.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemoryStage {
	prims: BTreeMap<PrimPath, StagePrim>,
}

impl MemoryStage {
	/// Empty stage.
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether nothing was authored.
	pub fn is_empty(&self) -> bool {
		self.prims.is_empty()
	}

	/// Recorded prim at `path`.
	pub fn prim(&self, path: &str) -> Option<&StagePrim> {
		self.prims.iter().find(|(key, _)| key.as_str() == path).map(|(_, prim)| prim)
	}

	/// Recorded attribute `name` of the prim at `path`.
	pub fn attribute(&self, path: &str, name: &str) -> Option<&StageAttribute> {
		self.prim(path).and_then(|prim| prim.attributes.get(name))
	}

	/// Recorded prim paths in order.
	pub fn paths(&self) -> impl Iterator<Item = &str> {
		self.prims.keys().map(PrimPath::as_str)
	}

	fn prim_mut(&mut self, path: &PrimPath) -> Result<&mut StagePrim> {
		self.prims.get_mut(path).ok_or_else(|| ShadeError::Sink {
			message: format!("prim {path} is not defined"),
		})
	}

	fn attr_mut(&mut self, attr: &StageAttr) -> Result<&mut StageAttribute> {
		self.prim_mut(&attr.prim)?.attributes.get_mut(&attr.name).ok_or_else(|| ShadeError::Sink {
			message: format!("attribute {}.{} is not defined", attr.prim, attr.name),
		})
	}

	fn declare(&mut self, prim: &PrimPath, name: String, ty: ValueType, uniform: bool) -> Result<StageAttr> {
		self.prim_mut(prim)?.attributes.entry(name.clone()).or_insert(StageAttribute {
			ty,
			uniform,
			default: None,
			samples: Vec::new(),
			connection: None,
		});
		Ok(StageAttr { prim: prim.clone(), name })
	}

	/// Render the stage as USDA text; undeclared ancestors appear as typeless `over`s.
	pub fn to_usda(&self) -> String {
		let mut all = BTreeSet::new();
		for path in self.prims.keys() {
			let mut cursor = Some(path.clone());
			while let Some(path) = cursor {
				if path.is_root() {
					break;
				}
				cursor = path.parent();
				all.insert(path);
			}
		}

		let mut out = String::from("#usda 1.0\n");
		for path in all.iter().filter(|path| path.parent().is_some_and(|parent| parent.is_root())) {
			out.push('\n');
			self.render_prim(&mut out, &all, path, 0);
		}
		out
	}

	fn render_prim(&self, out: &mut String, all: &BTreeSet<PrimPath>, path: &PrimPath, depth: usize) {
		let pad = "    ".repeat(depth);
		let header = match self.prims.get(path) {
			Some(StagePrim { specifier: Specifier::Def, kind, .. }) => format!("def {} \"{}\"", kind.type_name(), path.name()),
			_ => format!("over \"{}\"", path.name()),
		};
		let _ = writeln!(out, "{pad}{header}\n{pad}{{");

		if let Some(prim) = self.prims.get(path) {
			for (name, attribute) in &prim.attributes {
				render_attribute(out, &pad, name, attribute);
			}
		}

		let children: Vec<&PrimPath> = all.iter().filter(|child| child.parent().as_ref() == Some(path)).collect();
		for (idx, child) in children.into_iter().enumerate() {
			if idx > 0 || self.prims.get(path).is_some_and(|prim| !prim.attributes.is_empty()) {
				out.push('\n');
			}
			self.render_prim(out, all, child, depth + 1);
		}

		let _ = writeln!(out, "{pad}}}");
	}
}

fn render_attribute(out: &mut String, pad: &str, name: &str, attribute: &StageAttribute) {
	let decl = format!("{pad}    {}{} {name}", if attribute.uniform { "uniform " } else { "" }, attribute.ty.as_str());
	if let Some(target) = &attribute.connection {
		let _ = writeln!(out, "{decl}.connect = <{target}>");
	} else if !attribute.samples.is_empty() {
		let _ = writeln!(out, "{decl}.timeSamples = {{");
		for (time, value) in &attribute.samples {
			let _ = writeln!(out, "{pad}        {}: {},", Value::Float(*time as f32).to_usda(), value.to_usda());
		}
		let _ = writeln!(out, "{pad}    }}");
	} else if let Some(value) = &attribute.default {
		let _ = writeln!(out, "{decl} = {}", value.to_usda());
	} else {
		let _ = writeln!(out, "{decl}");
	}
}

impl SceneSink for MemoryStage {
	type Prim = PrimPath;
	type Attr = StageAttr;

	fn define_or_override(&mut self, path: &PrimPath, kind: PrimKind, as_override: bool) -> Result<PrimPath> {
		if path.is_root() {
			return Err(ShadeError::Sink {
				message: "cannot author the pseudo-root".to_owned(),
			});
		}
		let specifier = if as_override { Specifier::Over } else { Specifier::Def };
		let prim = self.prims.entry(path.clone()).or_insert(StagePrim {
			kind,
			specifier,
			attributes: BTreeMap::new(),
		});
		prim.kind = kind;
		if specifier == Specifier::Def {
			prim.specifier = Specifier::Def;
		}
		Ok(path.clone())
	}

	fn create_attribute(&mut self, prim: &PrimPath, name: &str, ty: ValueType, uniform: bool) -> Result<StageAttr> {
		self.declare(prim, name.to_owned(), ty, uniform)
	}

	fn create_input(&mut self, prim: &PrimPath, name: &str, ty: ValueType) -> Result<StageAttr> {
		self.declare(prim, format!("inputs:{name}"), ty, false)
	}

	fn create_output(&mut self, prim: &PrimPath, terminal: TerminalKind, render_context: Option<&str>) -> Result<StageAttr> {
		let name = match render_context {
			Some(context) => format!("outputs:{context}:{}", terminal.as_str()),
			None => format!("outputs:{}", terminal.as_str()),
		};
		self.declare(prim, name, ValueType::Token, false)
	}

	fn set(&mut self, attr: &StageAttr, value: &Value, time: Option<f64>) -> Result<()> {
		let attribute = self.attr_mut(attr)?;
		match time {
			None => attribute.default = Some(value.clone()),
			Some(time) => match attribute.samples.binary_search_by(|(at, _)| at.total_cmp(&time)) {
				Ok(idx) => attribute.samples[idx].1 = value.clone(),
				Err(idx) => attribute.samples.insert(idx, (time, value.clone())),
			},
		}
		Ok(())
	}

	fn connect(&mut self, attr: &StageAttr, source: &PrimPath, output: &str) -> Result<()> {
		if !self.prims.contains_key(source) {
			return Err(ShadeError::Sink {
				message: format!("connection source {source} is not defined"),
			});
		}
		self.attr_mut(attr)?.connection = Some(format!("{source}.outputs:{output}"));
		Ok(())
	}
}

#[cfg(test)]
mod tests;
