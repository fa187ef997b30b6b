//! Socket identifier renames for nodes whose multi-slot sockets share a name.

use crate::shade::{NodeKind, input_identifier};

/// Renderer input name for the input socket `identifier` of a `kind` node.
pub fn input_name(kind: NodeKind, identifier: &str) -> String {
	let renamed = match (kind, identifier) {
		(NodeKind::Math, "Value") => "value1",
		(NodeKind::Math, "Value_001") => "value2",
		(NodeKind::Math, "Value_002") => "value3",
		(NodeKind::VectorMath, "Vector") => "vector1",
		(NodeKind::VectorMath, "Vector_001") => "vector2",
		(NodeKind::VectorMath, "Vector_002") => "vector3",
		(kind, "Shader") if kind.is_closure_combiner() => "closure1",
		(kind, "Shader_001") if kind.is_closure_combiner() => "closure2",
		(NodeKind::SeparateRgb, "Image") => "color",
		(NodeKind::RgbCurve, "Color") => "value",
		_ => identifier,
	};
	input_identifier(renamed)
}

/// Renderer output name for the output socket `identifier` of a `kind` node.
pub fn output_name(kind: NodeKind, identifier: &str) -> String {
	let renamed = match (kind, identifier) {
		(kind, _) if kind.is_closure_combiner() => "closure",
		(NodeKind::RgbCurve, "Color") => "value",
		_ => identifier,
	};
	input_identifier(renamed)
}

#[cfg(test)]
mod tests {
	use super::{input_name, output_name};
	use crate::shade::NodeKind;

	#[test]
	fn multi_slot_inputs_are_numbered() {
		assert_eq!(input_name(NodeKind::Math, "Value"), "value1");
		assert_eq!(input_name(NodeKind::Math, "Value_002"), "value3");
		assert_eq!(input_name(NodeKind::VectorMath, "Vector_001"), "vector2");
		assert_eq!(input_name(NodeKind::VectorMath, "Scale"), "scale");
		assert_eq!(input_name(NodeKind::MixShader, "Shader_001"), "closure2");
		assert_eq!(input_name(NodeKind::MixShader, "Fac"), "fac");
	}

	#[test]
	fn other_inputs_are_lowercased_identifiers() {
		assert_eq!(input_name(NodeKind::BsdfPrincipled, "Base Color"), "base_color");
		assert_eq!(input_name(NodeKind::SeparateRgb, "Image"), "color");
		assert_eq!(input_name(NodeKind::RgbCurve, "Color"), "value");
	}

	#[test]
	fn closure_combiners_have_one_output() {
		assert_eq!(output_name(NodeKind::AddShader, "Shader"), "closure");
		assert_eq!(output_name(NodeKind::RgbCurve, "Color"), "value");
		assert_eq!(output_name(NodeKind::TexImage, "Color"), "color");
	}
}
