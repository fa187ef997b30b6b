use serde::Serialize;

/// Scene-description value type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
	/// `bool`
	Bool,
	/// `int`
	Int,
	/// `float`
	Float,
	/// `float2`
	Float2,
	/// `float3`
	Float3,
	/// `float4`
	Float4,
	/// `color3f`
	Color3f,
	/// `vector3f`
	Vector3f,
	/// `string`
	String,
	/// `token`
	Token,
	/// `asset`
	Asset,
	/// `float[]`
	FloatArray,
	/// `float3[]`
	Float3Array,
}

impl ValueType {
	/// Render the type as its USDA spelling.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Float => "float",
			Self::Float2 => "float2",
			Self::Float3 => "float3",
			Self::Float4 => "float4",
			Self::Color3f => "color3f",
			Self::Vector3f => "vector3f",
			Self::String => "string",
			Self::Token => "token",
			Self::Asset => "asset",
			Self::FloatArray => "float[]",
			Self::Float3Array => "float3[]",
		}
	}
}

/// One authored attribute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
	/// Boolean scalar.
	Bool(bool),
	/// 32-bit integer scalar.
	Int(i32),
	/// 32-bit float scalar.
	Float(f32),
	/// Two-component float tuple.
	Float2([f32; 2]),
	/// Three-component float tuple.
	Float3([f32; 3]),
	/// Four-component float tuple.
	Float4([f32; 4]),
	/// Free-form string.
	String(String),
	/// Identifier-like token.
	Token(String),
	/// Asset path.
	Asset(String),
	/// Float array.
	FloatArray(Vec<f32>),
	/// Three-component float tuple array.
	Float3Array(Vec<[f32; 3]>),
}

impl Value {
	/// Natural scene-description type of this value.
	///
	/// Tuples map to the plain `floatN` types; callers that need `color3f` or `vector3f` pass the
	/// type explicitly.
	pub fn value_type(&self) -> ValueType {
		match self {
			Self::Bool(_) => ValueType::Bool,
			Self::Int(_) => ValueType::Int,
			Self::Float(_) => ValueType::Float,
			Self::Float2(_) => ValueType::Float2,
			Self::Float3(_) => ValueType::Float3,
			Self::Float4(_) => ValueType::Float4,
			Self::String(_) => ValueType::String,
			Self::Token(_) => ValueType::Token,
			Self::Asset(_) => ValueType::Asset,
			Self::FloatArray(_) => ValueType::FloatArray,
			Self::Float3Array(_) => ValueType::Float3Array,
		}
	}

	/// Render the value as a USDA literal.
	pub fn to_usda(&self) -> String {
		match self {
			Self::Bool(v) => if *v { "1" } else { "0" }.to_owned(),
			Self::Int(v) => v.to_string(),
			Self::Float(v) => float_literal(*v),
			Self::Float2(v) => tuple_literal(v),
			Self::Float3(v) => tuple_literal(v),
			Self::Float4(v) => tuple_literal(v),
			Self::String(v) | Self::Token(v) => format!("\"{}\"", escape(v)),
			Self::Asset(v) => format!("@{v}@"),
			Self::FloatArray(items) => {
				let parts: Vec<String> = items.iter().map(|item| float_literal(*item)).collect();
				format!("[{}]", parts.join(", "))
			}
			Self::Float3Array(items) => {
				let parts: Vec<String> = items.iter().map(|item| tuple_literal(item)).collect();
				format!("[{}]", parts.join(", "))
			}
		}
	}
}

fn float_literal(value: f32) -> String {
	if value.is_finite() && value.fract() == 0.0 && value.abs() < 1.0e9 {
		format!("{value:.0}")
	} else {
		format!("{value}")
	}
}

fn tuple_literal(values: &[f32]) -> String {
	let parts: Vec<String> = values.iter().map(|item| float_literal(*item)).collect();
	format!("({})", parts.join(", "))
}

fn escape(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			c => out.push(c),
		}
	}
	out
}
