use tracing::debug;

use crate::shade::{
	EnumValue, ExportConfig, FlatGraph, Node, NodeKind, NodeStorage, PrimPath, Result, ShadeError, ShaderUnit, SocketValue, Value, ValueType, input_name,
	make_valid_identifier, normalize_separators, resolve_texture,
};

/// Generic integer slot a field is read from.
#[derive(Debug, Clone, Copy)]
enum Slot {
	One,
	Two,
	Three,
}

/// One field stored in the generic integer slots.
#[derive(Debug, Clone, Copy)]
enum CustomField {
	/// Enum code resolved through the token tables.
	Enum(&'static str, Slot),
	/// Non-zero slot as a boolean.
	Bool(&'static str, Slot),
	/// Slot verbatim.
	Int(&'static str, Slot),
	/// One bit of the slot as a boolean.
	Flag(&'static str, Slot, i32),
}

use CustomField::{Bool, Enum, Flag, Int};

const CUSTOM_FIELDS: &[(NodeKind, &[CustomField])] = &[
	(NodeKind::TexWhiteNoise, &[Enum("Dimensions", Slot::One)]),
	(NodeKind::Math, &[Enum("Type", Slot::One)]),
	(NodeKind::VectorMath, &[Enum("Type", Slot::One)]),
	(NodeKind::Mapping, &[Enum("Type", Slot::One)]),
	(NodeKind::MixRgb, &[Enum("Type", Slot::One), Flag("Use_Clamp", Slot::Two, 2)]),
	(NodeKind::VectorDisplacement, &[Enum("Space", Slot::One)]),
	(NodeKind::VectorRotate, &[Enum("Type", Slot::One), Bool("Invert", Slot::Two)]),
	(NodeKind::VectorTransform, &[Enum("Type", Slot::One), Enum("Space", Slot::Two)]),
	(NodeKind::SubsurfaceScattering, &[Enum("Falloff", Slot::One)]),
	(NodeKind::Clamp, &[Enum("Type", Slot::One)]),
	(NodeKind::Wireframe, &[Bool("Use_Pixel_Size", Slot::One)]),
	(NodeKind::BsdfGlossy, &[Enum("Distribution", Slot::One)]),
	(NodeKind::BsdfRefraction, &[Enum("Distribution", Slot::One)]),
	(NodeKind::BsdfToon, &[Enum("component", Slot::One)]),
	(NodeKind::Displacement, &[Enum("Space", Slot::One)]),
	(NodeKind::BsdfHair, &[Enum("component", Slot::One)]),
	(NodeKind::BsdfHairPrincipled, &[Enum("parametrization", Slot::One)]),
	(NodeKind::MapRange, &[Bool("Use_Clamp", Slot::One), Int("Type", Slot::Two)]),
	(NodeKind::Bevel, &[Int("Samples", Slot::One)]),
	(NodeKind::AmbientOcclusion, &[Int("Samples", Slot::One), Bool("Inside", Slot::Two), Bool("Only_Local", Slot::Three)]),
	(NodeKind::BsdfAnisotropic, &[Enum("Distribution", Slot::One)]),
	(NodeKind::BsdfGlass, &[Enum("Distribution", Slot::One)]),
	(NodeKind::Bump, &[Bool("Invert", Slot::One)]),
	(
		NodeKind::BsdfPrincipled,
		&[Enum("Distribution", Slot::One), Enum("Subsurface_Method", Slot::Two), Flag("Blend_SSS_Diffuse", Slot::One, 8)],
	),
];

/// Renderer identifier for `node`: `cycles_` plus its lowercased type label, with fixed renames.
pub fn node_identifier(node: &Node) -> String {
	let label = node.type_label().to_ascii_lowercase();
	let name = match node.kind {
		NodeKind::MixShader => "mix_closure",
		NodeKind::AddShader => "add_closure",
		NodeKind::OutputMaterial | NodeKind::OutputWorld | NodeKind::OutputLight => "output",
		NodeKind::UvMap => "uvmap",
		NodeKind::ValToRgb => "rgb_ramp",
		NodeKind::HueSaturation => "hsv",
		NodeKind::BrightContrast => "brightness_contrast",
		NodeKind::Background => "background_shader",
		NodeKind::VolumeScatter => "scatter_volume",
		NodeKind::VolumeAbsorption => "absorption_volume",
		_ if label == "rgb" => "color",
		_ => label.as_str(),
	};
	format!("cycles_{}", make_valid_identifier(name))
}

/// Translate one node into a shader unit under `scope`.
///
/// Muted nodes and nodes that only exist in the editor produce `None`. Fails when a texture node
/// references no image.
pub fn translate_node(node: &Node, scope: &PrimPath, config: &ExportConfig) -> Result<Option<ShaderUnit>> {
	if node.muted {
		return Ok(None);
	}
	if node.kind.is_group() || node.kind.is_group_boundary() || node.kind.is_layout() {
		debug!(node = %node.name, kind = node.kind.idname(), "node has no shader equivalent");
		return Ok(None);
	}
	if node.kind == NodeKind::Unknown {
		debug!(node = %node.name, "translating node of unknown type from its sockets");
	}

	let mut unit = ShaderUnit::new(scope.child(&node.name), node_identifier(node));
	write_custom_fields(&mut unit, node);
	write_storage(&mut unit, node, config)?;
	write_socket_defaults(&mut unit, node);
	Ok(Some(unit))
}

/// Translate every node of `graph` under `scope`, index-aligned with `graph.nodes`.
///
/// Material output nodes produce no unit; their links bind terminals instead.
pub fn translate_graph(graph: &FlatGraph, scope: &PrimPath, config: &ExportConfig) -> Result<Vec<Option<ShaderUnit>>> {
	graph
		.nodes
		.iter()
		.map(|node| if node.kind.is_material_output() { Ok(None) } else { translate_node(node, scope, config) })
		.collect()
}

fn slot_value(node: &Node, slot: Slot) -> i32 {
	match slot {
		Slot::One => node.custom1,
		Slot::Two => node.custom2,
		Slot::Three => node.custom3,
	}
}

fn set_enum(unit: &mut ShaderUnit, kind: NodeKind, field: &str, code: i32) {
	match EnumValue::for_node(kind, field, code) {
		EnumValue::Token(token) => unit.set(field, Value::String(token.to_owned())),
		EnumValue::Raw(code) => {
			debug!(kind = kind.idname(), field, code, "no token for enum code; authoring raw value");
			unit.set(field, Value::Int(code));
		}
	}
}

fn write_custom_fields(unit: &mut ShaderUnit, node: &Node) {
	let Some((_, fields)) = CUSTOM_FIELDS.iter().find(|(kind, _)| *kind == node.kind) else {
		return;
	};

	for field in *fields {
		match *field {
			Enum(name, slot) => set_enum(unit, node.kind, name, slot_value(node, slot)),
			Bool(name, slot) => unit.set(name, Value::Bool(slot_value(node, slot) != 0)),
			Int(name, slot) => unit.set(name, Value::Int(slot_value(node, slot))),
			Flag(name, slot, bit) => unit.set(name, Value::Bool(slot_value(node, slot) & bit != 0)),
		}
	}
}

fn write_storage(unit: &mut ShaderUnit, node: &Node, config: &ExportConfig) -> Result<()> {
	let kind = node.kind;
	match &node.storage {
		Some(NodeStorage::Image(texture)) => {
			let image = texture.image.as_ref();
			resolve_texture(&node.name, image, &texture.image_user, config)?.write(unit, "filename");
			set_enum(unit, kind, "interpolation", texture.interpolation);
			set_enum(unit, kind, "projection", texture.projection);
			set_enum(unit, kind, "extension", texture.extension);
			if let Some(image) = image {
				set_enum(unit, kind, "alpha_type", image.alpha_mode);
				unit.set("colorspace", Value::String(image.colorspace.clone()));
			}
		}
		Some(NodeStorage::Environment(texture)) => {
			let image = texture.image.as_ref();
			resolve_texture(&node.name, image, &texture.image_user, config)?.write(unit, "filename");
			set_enum(unit, kind, "projection", texture.projection);
			set_enum(unit, kind, "interpolation", texture.interpolation);
			if let Some(image) = image {
				set_enum(unit, kind, "alpha_type", image.alpha_mode);
				unit.set("colorspace", Value::String(image.colorspace.clone()));
			}
		}
		None if kind.is_image_texture() => return Err(ShadeError::MissingResource { node: node.name.clone() }),
		Some(NodeStorage::Sky {
			sky_model,
			sun_direction,
			turbidity,
			ground_albedo,
		}) => {
			set_enum(unit, kind, "type", *sky_model);
			unit.set_typed("sun_direction", ValueType::Vector3f, Value::Float3(*sun_direction));
			unit.set("turbidity", Value::Float(*turbidity));
			unit.set("ground_albedo", Value::Float(*ground_albedo));
		}
		Some(NodeStorage::Brick {
			offset_freq,
			squash_freq,
			offset,
			squash,
		}) => {
			unit.set("offset_freq", Value::Int(*offset_freq));
			unit.set("squash_freq", Value::Int(*squash_freq));
			unit.set("offset", Value::Float(*offset));
			unit.set("squash", Value::Float(*squash));
		}
		Some(NodeStorage::Gradient { gradient_type }) => set_enum(unit, kind, "type", *gradient_type),
		Some(NodeStorage::Noise { dimensions }) => set_enum(unit, kind, "dimensions", *dimensions),
		Some(NodeStorage::Voronoi { dimensions, feature, distance }) => {
			set_enum(unit, kind, "dimensions", *dimensions);
			set_enum(unit, kind, "feature", *feature);
			set_enum(unit, kind, "metric", *distance);
		}
		Some(NodeStorage::Musgrave { musgrave_type, dimensions }) => {
			set_enum(unit, kind, "type", *musgrave_type);
			set_enum(unit, kind, "dimensions", *dimensions);
		}
		Some(NodeStorage::Wave {
			wave_type,
			bands_direction,
			rings_direction,
			wave_profile,
		}) => {
			set_enum(unit, kind, "type", *wave_type);
			set_enum(unit, kind, "profile", *wave_profile);
			set_enum(unit, kind, "rings_direction", *rings_direction);
			set_enum(unit, kind, "bands_direction", *bands_direction);
		}
		Some(NodeStorage::PointDensity { space, interpolation }) => {
			set_enum(unit, kind, "space", *space);
			set_enum(unit, kind, "interpolation", *interpolation);
		}
		Some(NodeStorage::Magic { depth }) => unit.set("depth", Value::Int(*depth)),
		Some(NodeStorage::ColorRamp(band)) => {
			let (rgb, alpha) = band.bake();
			unit.set("Interpolate", Value::Bool(band.interpolates()));
			unit.set("Ramp", Value::Float3Array(rgb));
			unit.set("Ramp_Alpha", Value::FloatArray(alpha));
		}
		Some(NodeStorage::Curves(mapping)) => {
			let baked = if kind == NodeKind::RgbCurve { mapping.bake_rgb() } else { mapping.bake_vector() };
			unit.set("Min_X", Value::Float(0.0));
			unit.set("Max_X", Value::Float(1.0));
			unit.set("Curves", Value::Float3Array(baked));
		}
		Some(NodeStorage::UvMap { uv_map }) => unit.set("attribute", Value::String(make_valid_identifier(uv_map))),
		Some(NodeStorage::HueSat { hue, sat, val }) => {
			unit.set("hue", Value::Float(*hue));
			unit.set("sat", Value::Float(*sat));
			unit.set("val", Value::Float(*val));
		}
		Some(NodeStorage::Tangent { direction_type, axis, uv_map }) => {
			set_enum(unit, kind, "direction_type", *direction_type);
			set_enum(unit, kind, "axis", *axis);
			unit.set("Attribute", Value::String(uv_map.clone()));
		}
		Some(NodeStorage::NormalMap { space, uv_map }) => {
			set_enum(unit, kind, "Space", *space);
			unit.set("Attribute", Value::String(make_valid_identifier(uv_map)));
		}
		Some(NodeStorage::VertexColor { layer_name }) => unit.set("layer_name", Value::String(layer_name.clone())),
		Some(NodeStorage::Ies { mode, filepath }) => {
			unit.set("mode", Value::Int(*mode));
			unit.set("filename", Value::Asset(normalize_separators(filepath)));
		}
		Some(NodeStorage::Attribute { name }) => unit.set("Attribute", Value::String(name.clone())),
		Some(NodeStorage::Group { .. }) | None => {}
	}

	match (kind, node.outputs.first().map(|socket| &socket.value)) {
		(NodeKind::Value, Some(SocketValue::Float(value))) => unit.set("value", Value::Float(*value)),
		(NodeKind::Rgb, Some(SocketValue::Rgba(color))) => unit.set_typed("value", ValueType::Color3f, Value::Float3([color[0], color[1], color[2]])),
		_ => {}
	}

	Ok(())
}

/// Socket default as an authored value; closures carry none.
pub(crate) fn socket_default(value: &SocketValue) -> Option<Value> {
	match value {
		SocketValue::Float(v) => Some(Value::Float(*v)),
		SocketValue::Int(v) => Some(Value::Int(*v)),
		SocketValue::Bool(v) => Some(Value::Bool(*v)),
		SocketValue::Vector(v) => Some(Value::Float3(*v)),
		SocketValue::Rgba(v) => Some(Value::Float4(*v)),
		SocketValue::String(v) => Some(Value::Token(make_valid_identifier(v))),
		SocketValue::Shader => None,
	}
}

fn write_socket_defaults(unit: &mut ShaderUnit, node: &Node) {
	for socket in &node.inputs {
		let Some(value) = socket_default(&socket.value) else {
			continue;
		};
		let name = input_name(node.kind, &socket.identifier);
		unit.set_default(&name, value);
	}
}
