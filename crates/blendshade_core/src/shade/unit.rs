use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::Serialize;

use crate::shade::{PrimPath, Value, ValueType};

/// How one shader input receives its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputValue {
	/// Constant value.
	Literal {
		/// Authored value.
		value: Value,
	},
	/// One value per output frame.
	Samples {
		/// `(time, value)` pairs in ascending time.
		samples: Vec<(f64, Value)>,
	},
	/// Connection to another unit's output.
	Connection {
		/// Source shader prim.
		source: PrimPath,
		/// Source output name.
		output: String,
	},
}

/// One typed input of a shader unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShaderInput {
	/// Declared input type.
	#[serde(rename = "type")]
	pub ty: ValueType,
	/// Value source.
	#[serde(flatten)]
	pub value: InputValue,
}

/// One shader prim to author: path, renderer identifier and inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShaderUnit {
	/// Prim path of the shader.
	pub path: PrimPath,
	/// Renderer identifier authored as `info:id`.
	pub id: String,
	/// Inputs keyed by valid identifier.
	pub inputs: BTreeMap<String, ShaderInput>,
}

impl ShaderUnit {
	/// Create a unit with no inputs.
	pub fn new(path: PrimPath, id: impl Into<String>) -> Self {
		Self {
			path,
			id: id.into(),
			inputs: BTreeMap::new(),
		}
	}

	/// Set a literal using the value's natural type, replacing any earlier entry.
	pub fn set(&mut self, name: &str, value: Value) {
		self.set_typed(name, value.value_type(), value);
	}

	/// Set a literal with an explicit type, replacing any earlier entry.
	pub fn set_typed(&mut self, name: &str, ty: ValueType, value: Value) {
		self.inputs.insert(name.to_owned(), ShaderInput { ty, value: InputValue::Literal { value } });
	}

	/// Set a literal only when the input is not present yet.
	pub fn set_default(&mut self, name: &str, value: Value) {
		if let Entry::Vacant(slot) = self.inputs.entry(name.to_owned()) {
			slot.insert(ShaderInput {
				ty: value.value_type(),
				value: InputValue::Literal { value },
			});
		}
	}

	/// Author time samples, replacing any earlier entry.
	pub fn set_samples(&mut self, name: &str, ty: ValueType, samples: Vec<(f64, Value)>) {
		self.inputs.insert(name.to_owned(), ShaderInput { ty, value: InputValue::Samples { samples } });
	}

	/// Connect an input to `source.output`, keeping an existing input's type or using `fallback`.
	pub fn connect(&mut self, name: &str, fallback: ValueType, source: PrimPath, output: impl Into<String>) {
		let ty = self.inputs.get(name).map_or(fallback, |input| input.ty);
		self.inputs.insert(
			name.to_owned(),
			ShaderInput {
				ty,
				value: InputValue::Connection { source, output: output.into() },
			},
		);
	}

	/// Input by name.
	pub fn input(&self, name: &str) -> Option<&ShaderInput> {
		self.inputs.get(name)
	}

	/// Literal value of an input, if it has one.
	pub fn literal(&self, name: &str) -> Option<&Value> {
		match self.inputs.get(name).map(|input| &input.value) {
			Some(InputValue::Literal { value }) => Some(value),
			_ => None,
		}
	}

	/// Connection source of an input, if it is connected.
	pub fn connection(&self, name: &str) -> Option<(&PrimPath, &str)> {
		match self.inputs.get(name).map(|input| &input.value) {
			Some(InputValue::Connection { source, output }) => Some((source, output.as_str())),
			_ => None,
		}
	}
}
