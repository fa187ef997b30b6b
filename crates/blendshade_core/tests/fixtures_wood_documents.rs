#![allow(missing_docs)]

use blendshade::shade::{Compression, ExportConfig, PrimPath, ShadeError, ShaderDocument, Value, build_native_mirror};
use blendshade_testkit::fixture_json;
use serde_json::json;

fn wood_json() -> serde_json::Value {
	fixture_json("wood.json").expect("fixture parses as json")
}

fn document(json: &serde_json::Value) -> ShaderDocument {
	ShaderDocument::from_bytes(serde_json::to_vec(json).expect("json serializes")).expect("document parses")
}

#[test]
fn compressed_documents_match_plain_ones() {
	let json = wood_json();
	let plain = document(&json);
	let compressed = zstd::encode_all(serde_json::to_vec(&json).expect("json serializes").as_slice(), 3).expect("zstd encodes");

	let packed = ShaderDocument::from_bytes(compressed).expect("compressed document parses");
	assert_eq!(packed.compression, Compression::Zstd);
	assert_eq!(plain.compression, Compression::None);
	assert_eq!(packed.materials, plain.materials);
	assert_eq!(packed.node_groups, plain.node_groups);
}

#[test]
fn non_json_bytes_report_their_magic() {
	let err = ShaderDocument::from_bytes(b"BLENDER-v501".to_vec()).expect_err("not a document");
	assert!(matches!(err, ShadeError::UnknownMagic { magic } if &magic == b"BLEN"));
}

#[test]
fn empty_image_paths_author_empty_assets() {
	let mut json = wood_json();
	json["materials"][0]["node_tree"]["nodes"][1]["storage"]["image"]["filepath"] = json!("");
	let document = document(&json);
	let material = document.material("Wood").expect("material exists");

	let network = build_native_mirror(material, &document.node_groups, &ExportConfig::default()).expect("builds");
	let albedo = network
		.unit(&PrimPath::parse("/materials/Wood/cycles/Albedo").expect("valid path"))
		.expect("albedo unit");
	assert_eq!(albedo.literal("filename"), Some(&Value::Asset(String::new())));
}

#[test]
fn self_referencing_groups_hit_the_depth_limit() {
	let mut json = wood_json();
	let nodes = json["node_groups"]["Roughen"]["nodes"].as_array_mut().expect("group nodes");
	nodes.push(json!({
		"name": "Again",
		"type": "ShaderNodeGroup",
		"storage": { "kind": "group", "tree": "Roughen" }
	}));
	let document = document(&json);
	let material = document.material("Wood").expect("material exists");

	let mut config = ExportConfig::default();
	config.flatten.max_depth = 4;
	let err = build_native_mirror(material, &document.node_groups, &config).expect_err("recursion");
	assert!(matches!(err, ShadeError::GroupRecursion { ref group, max_depth: 4 } if group == "Roughen"));
}

#[test]
fn unknown_materials_are_reported_by_name() {
	let document = document(&wood_json());
	let err = document.material("Stone").expect_err("absent");
	assert_eq!(err.to_string(), "material not found: Stone");
}
