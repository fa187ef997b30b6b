use crate::shade::{NodeKind, Socket, SocketValue};

const WHITE: SocketValue = SocketValue::Rgba([1.0, 1.0, 1.0, 1.0]);
const GREY: SocketValue = SocketValue::Rgba([0.8, 0.8, 0.8, 1.0]);
const ZERO3: SocketValue = SocketValue::Vector([0.0, 0.0, 0.0]);

fn f(name: &str, value: f32) -> Socket {
	Socket::named(name, SocketValue::Float(value))
}

fn c(name: &str, value: SocketValue) -> Socket {
	Socket::named(name, value)
}

fn v(name: &str) -> Socket {
	Socket::named(name, ZERO3)
}

fn shader(name: &str) -> Socket {
	Socket::named(name, SocketValue::Shader)
}

fn id(identifier: &str, name: &str, value: SocketValue) -> Socket {
	Socket::new(identifier, name, value)
}

/// Built-in `(inputs, outputs)` layout for one node kind.
///
/// Kinds without a template return empty lists; their sockets must come from the document.
pub fn socket_template(kind: NodeKind) -> (Vec<Socket>, Vec<Socket>) {
	use NodeKind as K;

	match kind {
		K::OutputMaterial => (vec![shader("Surface"), shader("Volume"), v("Displacement")], vec![]),
		K::OutputWorld => (vec![shader("Surface"), shader("Volume")], vec![]),
		K::OutputLight => (vec![shader("Surface")], vec![]),
		K::BsdfPrincipled => (
			vec![
				c("Base Color", GREY),
				f("Subsurface", 0.0),
				c("Subsurface Radius", SocketValue::Vector([1.0, 0.2, 0.1])),
				c("Subsurface Color", GREY),
				f("Metallic", 0.0),
				f("Specular", 0.5),
				f("Specular Tint", 0.0),
				f("Roughness", 0.5),
				f("Anisotropic", 0.0),
				f("Anisotropic Rotation", 0.0),
				f("Sheen", 0.0),
				f("Sheen Tint", 0.5),
				f("Clearcoat", 0.0),
				f("Clearcoat Roughness", 0.03),
				f("IOR", 1.45),
				f("Transmission", 0.0),
				f("Transmission Roughness", 0.0),
				c("Emission", SocketValue::Rgba([0.0, 0.0, 0.0, 1.0])),
				f("Alpha", 1.0),
				v("Normal"),
				v("Clearcoat Normal"),
				v("Tangent"),
			],
			vec![shader("BSDF")],
		),
		K::BsdfDiffuse | K::BsdfGlossy | K::BsdfVelvet => (vec![c("Color", GREY), f("Roughness", 0.0), v("Normal")], vec![shader("BSDF")]),
		K::BsdfGlass | K::BsdfRefraction => (vec![c("Color", WHITE), f("Roughness", 0.0), f("IOR", 1.45), v("Normal")], vec![shader("BSDF")]),
		K::BsdfTranslucent => (vec![c("Color", GREY), v("Normal")], vec![shader("BSDF")]),
		K::BsdfTransparent => (vec![c("Color", WHITE)], vec![shader("BSDF")]),
		K::Emission => (vec![c("Color", WHITE), f("Strength", 1.0)], vec![shader("Emission")]),
		K::Background => (vec![c("Color", GREY), f("Strength", 1.0)], vec![shader("Background")]),
		K::Holdout => (vec![], vec![shader("Holdout")]),
		K::VolumeAbsorption => (vec![c("Color", GREY), f("Density", 1.0)], vec![shader("Volume")]),
		K::VolumeScatter => (vec![c("Color", GREY), f("Density", 1.0), f("Anisotropy", 0.0)], vec![shader("Volume")]),
		K::MixShader => (
			vec![f("Fac", 0.5), id("Shader", "Shader", SocketValue::Shader), id("Shader_001", "Shader", SocketValue::Shader)],
			vec![shader("Shader")],
		),
		K::AddShader => (vec![id("Shader", "Shader", SocketValue::Shader), id("Shader_001", "Shader", SocketValue::Shader)], vec![shader("Shader")]),
		K::TexImage => (vec![v("Vector")], vec![c("Color", SocketValue::Rgba([0.0, 0.0, 0.0, 1.0])), f("Alpha", 1.0)]),
		K::TexEnvironment => (vec![v("Vector")], vec![c("Color", SocketValue::Rgba([0.0, 0.0, 0.0, 1.0]))]),
		K::TexNoise => (
			vec![v("Vector"), f("W", 0.0), f("Scale", 5.0), f("Detail", 2.0), f("Roughness", 0.5), f("Distortion", 0.0)],
			vec![f("Fac", 0.0), c("Color", WHITE)],
		),
		K::TexChecker => (
			vec![v("Vector"), c("Color1", GREY), c("Color2", SocketValue::Rgba([0.2, 0.2, 0.2, 1.0])), f("Scale", 5.0)],
			vec![c("Color", WHITE), f("Fac", 0.0)],
		),
		K::MixRgb => (vec![f("Fac", 0.5), c("Color1", SocketValue::Rgba([0.5, 0.5, 0.5, 1.0])), c("Color2", SocketValue::Rgba([0.5, 0.5, 0.5, 1.0]))], vec![c("Color", WHITE)]),
		K::RgbCurve => (vec![f("Fac", 1.0), c("Color", WHITE)], vec![c("Color", WHITE)]),
		K::VectorCurve => (vec![f("Fac", 1.0), v("Vector")], vec![v("Vector")]),
		K::Invert => (vec![f("Fac", 1.0), c("Color", WHITE)], vec![c("Color", WHITE)]),
		K::Gamma => (vec![c("Color", WHITE), f("Gamma", 1.0)], vec![c("Color", WHITE)]),
		K::BrightContrast => (vec![c("Color", WHITE), f("Bright", 0.0), f("Contrast", 0.0)], vec![c("Color", WHITE)]),
		K::HueSaturation => (
			vec![f("Hue", 0.5), f("Saturation", 1.0), f("Value", 1.0), f("Fac", 1.0), c("Color", GREY)],
			vec![c("Color", WHITE)],
		),
		K::Mapping => (
			vec![v("Vector"), v("Location"), v("Rotation"), c("Scale", SocketValue::Vector([1.0, 1.0, 1.0]))],
			vec![v("Vector")],
		),
		K::Bump => (vec![f("Strength", 1.0), f("Distance", 1.0), f("Height", 1.0), v("Normal")], vec![v("Normal")]),
		K::NormalMap => (vec![f("Strength", 1.0), c("Color", SocketValue::Rgba([0.5, 0.5, 1.0, 1.0]))], vec![v("Normal")]),
		K::Displacement => (vec![f("Height", 0.0), f("Midlevel", 0.5), f("Scale", 1.0), v("Normal")], vec![v("Displacement")]),
		K::Math => (
			vec![
				id("Value", "Value", SocketValue::Float(0.5)),
				id("Value_001", "Value", SocketValue::Float(0.5)),
				id("Value_002", "Value", SocketValue::Float(0.5)),
			],
			vec![f("Value", 0.0)],
		),
		K::VectorMath => (
			vec![
				id("Vector", "Vector", ZERO3),
				id("Vector_001", "Vector", ZERO3),
				id("Vector_002", "Vector", ZERO3),
				f("Scale", 1.0),
			],
			vec![v("Vector"), f("Value", 0.0)],
		),
		K::ValToRgb => (vec![f("Fac", 0.5)], vec![c("Color", WHITE), f("Alpha", 1.0)]),
		K::RgbToBw => (vec![c("Color", SocketValue::Rgba([0.5, 0.5, 0.5, 1.0]))], vec![f("Val", 0.0)]),
		K::SeparateRgb => (vec![c("Image", GREY)], vec![f("R", 0.0), f("G", 0.0), f("B", 0.0)]),
		K::CombineRgb => (vec![f("R", 0.0), f("G", 0.0), f("B", 0.0)], vec![c("Image", WHITE)]),
		K::SeparateXyz => (vec![v("Vector")], vec![f("X", 0.0), f("Y", 0.0), f("Z", 0.0)]),
		K::CombineXyz => (vec![f("X", 0.0), f("Y", 0.0), f("Z", 0.0)], vec![v("Vector")]),
		K::Clamp => (vec![f("Value", 1.0), f("Min", 0.0), f("Max", 1.0)], vec![f("Result", 0.0)]),
		K::TexCoord => (
			vec![],
			vec![v("Generated"), v("Normal"), v("UV"), v("Object"), v("Camera"), v("Window"), v("Reflection")],
		),
		K::UvMap => (vec![], vec![v("UV")]),
		K::Value => (vec![], vec![f("Value", 0.5)]),
		K::Rgb => (vec![], vec![c("Color", SocketValue::Rgba([0.5, 0.5, 0.5, 1.0]))]),
		K::Fresnel => (vec![f("IOR", 1.45), v("Normal")], vec![f("Fac", 0.0)]),
		K::LayerWeight => (vec![f("Blend", 0.5), v("Normal")], vec![f("Fresnel", 0.0), f("Facing", 0.0)]),
		K::Reroute => (vec![c("Input", SocketValue::Rgba([0.0, 0.0, 0.0, 1.0]))], vec![c("Output", SocketValue::Rgba([0.0, 0.0, 0.0, 1.0]))]),
		_ => (Vec::new(), Vec::new()),
	}
}

#[cfg(test)]
mod tests {
	use super::socket_template;
	use crate::shade::NodeKind;

	#[test]
	fn multi_slot_nodes_share_names_but_not_identifiers() {
		let (inputs, _) = socket_template(NodeKind::MixShader);
		let ids: Vec<&str> = inputs.iter().map(|socket| socket.identifier.as_str()).collect();
		assert_eq!(ids, ["Fac", "Shader", "Shader_001"]);
		assert_eq!(inputs[1].name, inputs[2].name);
	}

	#[test]
	fn untemplated_kinds_are_empty() {
		let (inputs, outputs) = socket_template(NodeKind::Unknown);
		assert!(inputs.is_empty() && outputs.is_empty());
	}
}
