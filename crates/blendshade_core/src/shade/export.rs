use tracing::{debug, info};

use crate::shade::{
	EnumValue, ExportConfig, GroupLibrary, MATERIAL_DISPLACEMENT_METHOD, MATERIAL_VOLUME_INTERPOLATION, MATERIAL_VOLUME_SAMPLING, Material,
	MaterialAttribute, MaterialNetwork, MaterialSettings, PREVIEW_SURFACE_ID, PrimPath, Result, SceneSink, ShaderUnit,
	TerminalBinding, UnitScope, Value, ValueType, ViewportDisplay, flatten, resolve_links, synthesize_preview, translate_graph,
};

/// Scope holding the renderer-native mirror.
pub const NATIVE_SCOPE: &str = "cycles";
/// Shader authored from viewport display values.
pub const VIEWPORT_SHADER: &str = "previewShader";

fn material_path(material: &Material, config: &ExportConfig) -> Result<PrimPath> {
	config.validate()?;
	Ok(config.material_root_path()?.child(&material.name))
}

/// Build the renderer-native mirror of `material`: one unit per node, wired terminals and the
/// material's render settings.
pub fn build_native_mirror(material: &Material, library: &GroupLibrary, config: &ExportConfig) -> Result<MaterialNetwork> {
	let path = material_path(material, config)?;
	let mut network = MaterialNetwork::new(path.clone());
	network.attributes = settings_attributes(&material.settings);

	let Some(tree) = material.active_tree() else {
		debug!(material = %material.name, "material does not use nodes; native mirror holds settings only");
		return Ok(network);
	};

	let graph = flatten(tree, library, &config.flatten)?;
	let scope = path.child(NATIVE_SCOPE);
	let mut units = translate_graph(&graph, &scope, config)?;
	network.cycles = resolve_links(&graph, &mut units);

	let mut native = UnitScope::new(scope);
	for unit in units.into_iter().flatten() {
		native.insert(unit);
	}
	debug!(material = %material.name, nodes = graph.nodes.len(), units = native.units.len(), "built native mirror");
	network.native = Some(native);
	Ok(network)
}

/// Build the approximate preview surface of `material`.
///
/// The network carries no preview when the material does not use nodes or has no eligible BSDF.
pub fn build_approximate_surface(material: &Material, library: &GroupLibrary, config: &ExportConfig) -> Result<MaterialNetwork> {
	let path = material_path(material, config)?;
	let mut network = MaterialNetwork::new(path.clone());

	let Some(tree) = material.active_tree() else {
		return Ok(network);
	};
	let graph = flatten(tree, library, &config.flatten)?;
	if let Some(preview) = synthesize_preview(&graph, &path, config)? {
		network.surface = Some(preview.surface);
		network.preview = Some(preview.scope);
	}
	Ok(network)
}

/// Build the viewport-display fallback: one preview shader bound to the universal surface.
pub fn build_viewport_surface(material: &Material, config: &ExportConfig) -> Result<MaterialNetwork> {
	let path = material_path(material, config)?;
	let mut network = MaterialNetwork::new(path.clone());
	let shader = viewport_shader(&path, &material.viewport);
	network.surface = Some(TerminalBinding::new(shader.path.clone(), "surface"));
	network.shaders.push(shader);
	Ok(network)
}

fn viewport_shader(material: &PrimPath, viewport: &ViewportDisplay) -> ShaderUnit {
	let mut shader = ShaderUnit::new(material.child(VIEWPORT_SHADER), PREVIEW_SURFACE_ID);
	shader.set_typed("diffuseColor", ValueType::Color3f, Value::Float3(viewport.diffuse_color));
	shader.set("roughness", Value::Float(viewport.roughness));
	shader.set("metallic", Value::Float(viewport.metallic));
	shader
}

fn settings_attributes(settings: &MaterialSettings) -> Vec<MaterialAttribute> {
	let attribute = |name: &str, ty: ValueType, uniform: bool, value: Value| MaterialAttribute {
		name: name.to_owned(),
		ty,
		uniform,
		value,
	};
	let enumerated = |name: &str, code: i32| match EnumValue::for_material(name, code) {
		EnumValue::Token(token) => attribute(name, ValueType::Token, true, Value::Token(token.to_owned())),
		EnumValue::Raw(code) => {
			debug!(field = name, code, "no token for material enum code; authoring raw value");
			attribute(name, ValueType::Int, true, Value::Int(code))
		}
	};

	vec![
		attribute("cycles:material:pass_id", ValueType::Int, true, Value::Int(settings.pass_id)),
		attribute("cycles:material:use_mis", ValueType::Bool, false, Value::Bool(settings.use_mis)),
		attribute("cycles:material:use_transparent_shadow", ValueType::Bool, false, Value::Bool(settings.use_transparent_shadow)),
		attribute("cycles:material:heterogeneous_volume", ValueType::Bool, true, Value::Bool(!settings.homogeneous_volume)),
		enumerated(MATERIAL_VOLUME_SAMPLING, settings.volume_sampling),
		enumerated(MATERIAL_VOLUME_INTERPOLATION, settings.volume_interpolation),
		attribute("cycles:material:volume_step_rate", ValueType::Float, true, Value::Float(settings.volume_step_rate)),
		enumerated(MATERIAL_DISPLACEMENT_METHOD, settings.displacement_method),
	]
}

/// Build every network `config` asks for and author them through `sink`.
///
/// Nothing is written unless every part was built.
pub fn export_material<S: SceneSink>(material: &Material, library: &GroupLibrary, config: &ExportConfig, sink: &mut S) -> Result<MaterialNetwork> {
	let uses_nodes = material.active_tree().is_some();

	let mut network = if uses_nodes && config.generate_preview_surface {
		build_approximate_surface(material, library, config)?
	} else {
		build_viewport_surface(material, config)?
	};
	if uses_nodes && config.generate_native_mirror {
		network = network.merge(build_native_mirror(material, library, config)?);
	}

	network.write(sink, config.export_as_overrides)?;
	info!(material = %material.name, units = network.units().count(), "exported material");
	Ok(network)
}

#[cfg(test)]
mod tests;
