use crate::shade::{Compression, NodeKind, ShadeError, ShaderDocument, SocketValue, node_identifier};

const DOCUMENT: &str = r#"{
	"materials": [
		{
			"name": "Wood",
			"use_nodes": true,
			"node_tree": {
				"nodes": [
					{"name": "Principled BSDF", "type": "ShaderNodeBsdfPrincipled"},
					{"name": "Material Output", "type": "ShaderNodeOutputMaterial", "is_active_output": true},
					{
						"name": "Hologram",
						"type": "ShaderNodeFutureThing",
						"inputs": [{"name": "Fac", "value": {"type": "float", "value": 0.5}}]
					}
				],
				"links": [
					{"from_node": "Principled BSDF", "from_socket": "BSDF", "to_node": "Material Output", "to_socket": "Surface"}
				]
			},
			"settings": {"pass_id": 3}
		}
	],
	"node_groups": {}
}"#;

#[test]
fn nodes_without_sockets_receive_templates() {
	let document = ShaderDocument::from_json_str(DOCUMENT).expect("document parses");
	let material = document.material("Wood").expect("material exists");
	let tree = material.active_tree().expect("nodes enabled");

	let bsdf = tree.node("Principled BSDF").expect("bsdf exists");
	assert_eq!(bsdf.kind, NodeKind::BsdfPrincipled);
	assert!(bsdf.input("Base Color").is_some());
	assert!(bsdf.output("BSDF").is_some());

	let unknown = tree.node("Hologram").expect("unknown node kept");
	assert_eq!(unknown.kind, NodeKind::Unknown);
	assert_eq!(unknown.inputs[0].identifier, "Fac");
	assert_eq!(unknown.inputs[0].value, SocketValue::Float(0.5));
}

#[test]
fn unknown_nodes_keep_their_idname_as_type_label() {
	let document = ShaderDocument::from_json_str(DOCUMENT).expect("document parses");
	let material = document.material("Wood").expect("material exists");
	let tree = material.active_tree().expect("nodes enabled");

	let unknown = tree.node("Hologram").expect("unknown node kept");
	assert_eq!(unknown.type_label(), "ShaderNodeFutureThing");
	assert_eq!(node_identifier(unknown), "cycles_shadernodefuturething");
	assert_eq!(tree.node("Principled BSDF").expect("bsdf exists").ui_name, None);
}

#[test]
fn settings_default_missing_fields() {
	let document = ShaderDocument::from_json_str(DOCUMENT).expect("document parses");
	let material = document.material("Wood").expect("material exists");
	assert_eq!(material.settings.pass_id, 3);
	assert!(material.settings.use_mis);
	assert_eq!(material.settings.volume_sampling, 2);
	assert_eq!(material.viewport.diffuse_color, [0.8, 0.8, 0.8]);
}

#[test]
fn missing_material_is_an_error() {
	let document = ShaderDocument::from_json_str(DOCUMENT).expect("document parses");
	let err = document.material("Stone").expect_err("no such material");
	assert!(matches!(err, ShadeError::MaterialNotFound { name } if name == "Stone"));
}

#[test]
fn compressed_documents_record_their_mode() {
	let packed = zstd::encode_all(DOCUMENT.as_bytes(), 3).expect("zstd encodes");
	let document = ShaderDocument::from_bytes(packed).expect("compressed document parses");
	assert_eq!(document.compression, Compression::Zstd);
	assert_eq!(document.materials.len(), 1);

	let plain = ShaderDocument::from_bytes(DOCUMENT.as_bytes().to_vec()).expect("plain document parses");
	assert_eq!(plain.compression, Compression::None);
}
