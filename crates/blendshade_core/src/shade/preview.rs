//! Approximate portable surface built from the first principled or diffuse BSDF.
//!
//! Channels follow exactly one link: a texture feeding a color-correction node that feeds the
//! BSDF is not found, and the channel falls back to the socket default.

use tracing::debug;

use crate::shade::{
	ExportConfig, FlatGraph, ImageUser, Node, NodeKind, NodeStorage, PrimPath, Result, ShaderUnit, SocketValue, TerminalBinding, UnitScope, Value, ValueType,
	make_valid_identifier, resolve_texture,
};

/// Scope holding preview units.
pub const PREVIEW_SCOPE: &str = "preview";
/// Identifier of the preview surface shader.
pub const PREVIEW_SURFACE_ID: &str = "UsdPreviewSurface";
/// Identifier of the preview texture shader.
pub const UV_TEXTURE_ID: &str = "UsdUVTexture";
/// Identifier of the float2 primvar reader.
pub const PRIMVAR_READER_ID: &str = "UsdPrimvarReader_float2";
/// Name of the reader synthesized for textures with no UV source.
pub const FALLBACK_READER: &str = "uvmap";

#[derive(Debug, Clone, Copy)]
enum Fallback {
	Color,
	Float,
	OneMinus,
	Skip,
}

struct Channel {
	socket: &'static str,
	input: &'static str,
	ty: ValueType,
	output: &'static str,
	follows_links: bool,
	fallback: Fallback,
}

const fn channel(socket: &'static str, input: &'static str, ty: ValueType, output: &'static str, follows_links: bool, fallback: Fallback) -> Channel {
	Channel {
		socket,
		input,
		ty,
		output,
		follows_links,
		fallback,
	}
}

const CHANNELS: &[Channel] = &[
	channel("Base Color", "diffuseColor", ValueType::Float3, "rgb", true, Fallback::Color),
	channel("Color", "diffuseColor", ValueType::Float3, "rgb", true, Fallback::Color),
	channel("Roughness", "roughness", ValueType::Float, "r", true, Fallback::Float),
	channel("Metallic", "metallic", ValueType::Float, "r", true, Fallback::Float),
	channel("Specular", "specular", ValueType::Float, "r", true, Fallback::Float),
	channel("Transmission", "opacity", ValueType::Float, "r", true, Fallback::OneMinus),
	channel("IOR", "ior", ValueType::Float, "r", false, Fallback::Float),
	channel("Normal", "normal", ValueType::Float3, "rgb", true, Fallback::Skip),
];

impl Channel {
	fn literal(&self, value: &SocketValue) -> Option<Value> {
		match self.fallback {
			Fallback::Color => match value {
				SocketValue::Rgba(color) => Some(Value::Float3([color[0], color[1], color[2]])),
				SocketValue::Vector(vector) => Some(Value::Float3(*vector)),
				other => other.as_float().map(|v| Value::Float3([v, v, v])),
			},
			Fallback::Float => value.as_float().map(Value::Float),
			Fallback::OneMinus => value.as_float().map(|v| Value::Float(1.0 - v)),
			Fallback::Skip => None,
		}
	}
}

/// Preview units and the shader bound to the universal surface terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSurface {
	/// The `preview` scope and its units, surface first.
	pub scope: UnitScope,
	/// Universal surface binding.
	pub surface: TerminalBinding,
}

/// Build the preview surface of `graph` below `material`, or `None` without an eligible BSDF.
pub fn synthesize_preview(graph: &FlatGraph, material: &PrimPath, config: &ExportConfig) -> Result<Option<PreviewSurface>> {
	let Some(bsdf) = graph.nodes.iter().position(|node| node.kind.is_preview_surface() && !node.muted) else {
		debug!(material = %material, "no principled or diffuse BSDF; skipping preview surface");
		return Ok(None);
	};

	let mut scope = UnitScope::new(material.child(PREVIEW_SCOPE));
	let node = &graph.nodes[bsdf];
	let mut surface = ShaderUnit::new(scope.path.child(&node.name), PREVIEW_SURFACE_ID);

	for socket in &node.inputs {
		let Some(channel) = CHANNELS.iter().find(|channel| channel.socket == socket.name) else {
			continue;
		};

		let source = channel
			.follows_links
			.then(|| graph.input_link(bsdf, &socket.identifier))
			.flatten()
			.map(|link| link.from)
			.filter(|from| is_channel_source(&graph.nodes[*from]));

		match source {
			Some(from) => {
				let path = add_source(graph, from, &mut scope, config)?;
				surface.connect(channel.input, channel.ty, path, channel.output);
			}
			None => {
				if let Some(value) = channel.literal(&socket.value) {
					surface.set_typed(channel.input, channel.ty, value);
				}
			}
		}
	}

	let binding = TerminalBinding::new(surface.path.clone(), "surface");
	scope.units.insert(0, surface);
	Ok(Some(PreviewSurface { scope, surface: binding }))
}

fn is_channel_source(node: &Node) -> bool {
	!node.muted && matches!(node.kind, NodeKind::TexImage | NodeKind::UvMap | NodeKind::TexCoord)
}

fn is_uv_source(node: &Node) -> bool {
	!node.muted && matches!(node.kind, NodeKind::UvMap | NodeKind::TexCoord)
}

fn add_source(graph: &FlatGraph, idx: usize, scope: &mut UnitScope, config: &ExportConfig) -> Result<PrimPath> {
	let node = &graph.nodes[idx];
	let path = scope.path.child(&node.name);
	if scope.unit(&path).is_some() {
		return Ok(path);
	}

	if node.kind != NodeKind::TexImage {
		scope.insert(reader(path.clone(), reader_varname(node.storage.as_ref(), config)));
		return Ok(path);
	}

	let mut texture = ShaderUnit::new(path.clone(), UV_TEXTURE_ID);
	let (image, user) = match &node.storage {
		Some(NodeStorage::Image(storage)) => (storage.image.as_ref(), storage.image_user),
		_ => (None, ImageUser::default()),
	};
	resolve_texture(&node.name, image, &user, config)?.write(&mut texture, "file");

	let uv_source = node
		.input("Vector")
		.and_then(|socket| graph.input_link(idx, &socket.identifier))
		.map(|link| link.from)
		.filter(|from| is_uv_source(&graph.nodes[*from]));

	let reader_path = match uv_source {
		Some(from) => add_source(graph, from, scope, config)?,
		None => {
			let path = scope.path.child(FALLBACK_READER);
			scope.insert(reader(path.clone(), config.fallback_uv_set().to_owned()));
			path
		}
	};
	texture.connect("st", ValueType::Float2, reader_path, "result");
	scope.insert(texture);
	Ok(path)
}

fn reader_varname(storage: Option<&NodeStorage>, config: &ExportConfig) -> String {
	match storage {
		_ if config.convert_uv_to_st => "st".to_owned(),
		Some(NodeStorage::UvMap { uv_map }) if !uv_map.is_empty() => make_valid_identifier(uv_map),
		_ => config.fallback_uv_set().to_owned(),
	}
}

fn reader(path: PrimPath, varname: String) -> ShaderUnit {
	let mut unit = ShaderUnit::new(path, PRIMVAR_READER_ID);
	unit.set("varname", Value::Token(varname));
	unit
}
