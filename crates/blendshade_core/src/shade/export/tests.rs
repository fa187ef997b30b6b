use crate::shade::{
	ExportConfig, GroupLibrary, Material, MemoryStage, Node, NodeKind, NodeStorage, NodeTree, ShadeError, Specifier, Value, ValueType,
	build_approximate_surface, build_native_mirror, export_material,
};

fn principled_material(name: &str) -> Material {
	let tree = NodeTree::new()
		.with_node(Node::new("Principled BSDF", NodeKind::BsdfPrincipled))
		.with_node(Node::new("Material Output", NodeKind::OutputMaterial))
		.with_link("Principled BSDF", "BSDF", "Material Output", "Surface");
	Material::with_tree(name, tree)
}

#[test]
fn export_writes_preview_native_and_settings() {
	let mut stage = MemoryStage::new();
	let network = export_material(&principled_material("Wood"), &GroupLibrary::new(), &ExportConfig::default(), &mut stage).expect("exports");

	assert!(network.preview.is_some() && network.native.is_some());
	let paths: Vec<&str> = stage.paths().collect();
	assert_eq!(
		paths,
		["/materials/Wood", "/materials/Wood/cycles", "/materials/Wood/cycles/Principled_BSDF", "/materials/Wood/preview", "/materials/Wood/preview/Principled_BSDF"]
	);

	let surface = stage.attribute("/materials/Wood", "outputs:surface").expect("surface output");
	assert_eq!(surface.connection.as_deref(), Some("/materials/Wood/preview/Principled_BSDF.outputs:surface"));
	let cycles = stage.attribute("/materials/Wood", "outputs:cycles:surface").expect("cycles output");
	assert_eq!(cycles.connection.as_deref(), Some("/materials/Wood/cycles/Principled_BSDF.outputs:bsdf"));

	let sampling = stage.attribute("/materials/Wood", "cycles:material:volume_sampling_method").expect("setting");
	assert_eq!(sampling.default, Some(Value::Token("volume_sampling_multiple_importance".to_owned())));
	assert!(sampling.uniform);
	let mis = stage.attribute("/materials/Wood", "cycles:material:use_mis").expect("setting");
	assert!(!mis.uniform);

	let id = stage.attribute("/materials/Wood/cycles/Principled_BSDF", "info:id").expect("id");
	assert_eq!(id.default, Some(Value::Token("cycles_principled_bsdf".to_owned())));
}

#[test]
fn materials_without_nodes_use_viewport_values() {
	let mut material = principled_material("Plain");
	material.use_nodes = false;
	material.viewport.diffuse_color = [0.1, 0.2, 0.3];

	let mut stage = MemoryStage::new();
	let network = export_material(&material, &GroupLibrary::new(), &ExportConfig::default(), &mut stage).expect("exports");
	assert!(network.native.is_none() && network.preview.is_none());

	let color = stage.attribute("/materials/Plain/previewShader", "inputs:diffuseColor").expect("color");
	assert_eq!(color.ty, ValueType::Color3f);
	assert_eq!(color.default, Some(Value::Float3([0.1, 0.2, 0.3])));
	let surface = stage.attribute("/materials/Plain", "outputs:surface").expect("surface");
	assert_eq!(surface.connection.as_deref(), Some("/materials/Plain/previewShader.outputs:surface"));
}

#[test]
fn disabling_the_preview_falls_back_to_viewport_values() {
	let config = ExportConfig {
		generate_preview_surface: false,
		..ExportConfig::default()
	};
	let mut stage = MemoryStage::new();
	let network = export_material(&principled_material("Wood"), &GroupLibrary::new(), &config, &mut stage).expect("exports");

	assert!(network.preview.is_none());
	assert!(network.native.is_some());
	assert!(stage.prim("/materials/Wood/previewShader").is_some());
}

#[test]
fn missing_resources_leave_the_sink_untouched() {
	let tree = NodeTree::new()
		.with_node(Node::new("Image Texture", NodeKind::TexImage).with_storage(NodeStorage::Image(Default::default())))
		.with_node(Node::new("Principled BSDF", NodeKind::BsdfPrincipled))
		.with_link("Image Texture", "Color", "Principled BSDF", "Base Color");
	let material = Material::with_tree("Broken", tree);
	let config = ExportConfig {
		generate_preview_surface: false,
		..ExportConfig::default()
	};

	let mut stage = MemoryStage::new();
	let err = export_material(&material, &GroupLibrary::new(), &config, &mut stage).expect_err("missing image");
	assert!(matches!(err, ShadeError::MissingResource { ref node } if node == "Image Texture"));
	assert!(stage.is_empty());

	let err = build_native_mirror(&material, &GroupLibrary::new(), &config).expect_err("missing image");
	assert!(matches!(err, ShadeError::MissingResource { .. }));
}

#[test]
fn muted_textures_without_images_are_skipped() {
	let tree = NodeTree::new()
		.with_node(Node::new("Image Texture", NodeKind::TexImage).with_storage(NodeStorage::Image(Default::default())).muted())
		.with_node(Node::new("Principled BSDF", NodeKind::BsdfPrincipled))
		.with_link("Image Texture", "Color", "Principled BSDF", "Base Color");

	let mut stage = MemoryStage::new();
	export_material(&Material::with_tree("Muted", tree), &GroupLibrary::new(), &ExportConfig::default(), &mut stage).expect("exports");
	assert!(stage.paths().all(|path| !path.ends_with("/Image_Texture")));
	assert!(stage.paths().any(|path| path == "/materials/Muted/preview/Principled_BSDF"));
}

#[test]
fn overrides_author_over_specifiers() {
	let config = ExportConfig {
		export_as_overrides: true,
		..ExportConfig::default()
	};
	let mut stage = MemoryStage::new();
	export_material(&principled_material("Wood"), &GroupLibrary::new(), &config, &mut stage).expect("exports");

	assert_eq!(stage.prim("/materials/Wood").map(|prim| prim.specifier), Some(Specifier::Over));
	assert!(stage.to_usda().contains("over \"Wood\""));
}

#[test]
fn unknown_material_enums_are_authored_as_integers() {
	let mut material = principled_material("Odd");
	material.settings.displacement_method = 17;

	let network = build_native_mirror(&material, &GroupLibrary::new(), &ExportConfig::default()).expect("builds");
	let method = network
		.attributes
		.iter()
		.find(|attribute| attribute.name == "cycles:material:displacement_method")
		.expect("attribute present");
	assert_eq!(method.ty, ValueType::Int);
	assert_eq!(method.value, Value::Int(17));
}

#[test]
fn rebuilding_yields_identical_networks() {
	let material = principled_material("Wood");
	let config = ExportConfig::default();
	assert_eq!(
		build_native_mirror(&material, &GroupLibrary::new(), &config).expect("builds"),
		build_native_mirror(&material, &GroupLibrary::new(), &config).expect("builds")
	);
	assert_eq!(
		build_approximate_surface(&material, &GroupLibrary::new(), &config).expect("builds"),
		build_approximate_surface(&material, &GroupLibrary::new(), &config).expect("builds")
	);
}

#[test]
fn invalid_material_roots_are_rejected() {
	let config = ExportConfig {
		material_root: "materials".to_owned(),
		..ExportConfig::default()
	};
	let err = build_native_mirror(&principled_material("Wood"), &GroupLibrary::new(), &config).expect_err("relative root");
	assert!(matches!(err, ShadeError::InvalidPrimPath { .. }));
}

#[test]
fn nodes_sharing_a_prim_name_keep_separate_units() {
	let tree = NodeTree::new()
		.with_node(Node::new("Math.001", NodeKind::Math).with_custom(2, 0, 0))
		.with_node(Node::new("Math_001", NodeKind::Math).with_custom(5, 0, 0))
		.with_node(Node::new("Emission", NodeKind::Emission))
		.with_link("Math_001", "Value", "Emission", "Strength");
	let network = build_native_mirror(&Material::with_tree("M", tree), &GroupLibrary::new(), &ExportConfig::default()).expect("builds");

	let units: Vec<(&str, Option<&Value>)> = network.units().map(|unit| (unit.path.name(), unit.literal("Type"))).collect();
	let multiply = Value::String("multiply".to_owned());
	let divide = Value::String("divide".to_owned());
	assert_eq!(units, [("Math_001", Some(&multiply)), ("Math_001_001", Some(&divide)), ("Emission", None)]);

	let emission = network.units().find(|unit| unit.path.name() == "Emission").expect("emission unit");
	assert_eq!(emission.connection("strength").map(|(source, output)| (source.name(), output)), Some(("Math_001_001", "value")));
}
