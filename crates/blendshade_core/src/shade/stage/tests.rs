use crate::shade::{MemoryStage, PrimKind, PrimPath, SceneSink, ShadeError, Specifier, TerminalKind, Value, ValueType};

fn path(text: &str) -> PrimPath {
	PrimPath::parse(text).expect("valid path")
}

#[test]
fn attributes_require_a_defined_prim() {
	let mut stage = MemoryStage::new();
	let err = stage.create_input(&path("/materials/M/Shader"), "fac", ValueType::Float).expect_err("prim missing");
	assert!(matches!(err, ShadeError::Sink { .. }));
	assert!(stage.is_empty());
}

#[test]
fn time_samples_stay_sorted_and_replace_equal_times() {
	let mut stage = MemoryStage::new();
	let shader = stage.define_or_override(&path("/m/Tex"), PrimKind::Shader, false).expect("define");
	let attr = stage.create_input(&shader, "filename", ValueType::Asset).expect("input");
	stage.set(&attr, &Value::Asset("c.png".into()), Some(3.0)).expect("set");
	stage.set(&attr, &Value::Asset("a.png".into()), Some(1.0)).expect("set");
	stage.set(&attr, &Value::Asset("b.png".into()), Some(3.0)).expect("set");

	let recorded = stage.attribute("/m/Tex", "inputs:filename").expect("recorded");
	assert_eq!(recorded.samples, vec![(1.0, Value::Asset("a.png".into())), (3.0, Value::Asset("b.png".into()))]);
	assert!(recorded.default.is_none());
}

#[test]
fn overrides_never_demote_a_definition() {
	let mut stage = MemoryStage::new();
	stage.define_or_override(&path("/m"), PrimKind::Material, false).expect("define");
	stage.define_or_override(&path("/m"), PrimKind::Material, true).expect("override");
	assert_eq!(stage.prim("/m").map(|prim| prim.specifier), Some(Specifier::Def));

	stage.define_or_override(&path("/n"), PrimKind::Material, true).expect("override");
	assert_eq!(stage.prim("/n").map(|prim| prim.specifier), Some(Specifier::Over));
}

#[test]
fn usda_renders_nesting_connections_and_implicit_ancestors() {
	let mut stage = MemoryStage::new();
	let material = stage.define_or_override(&path("/materials/Wood"), PrimKind::Material, false).expect("define");
	let shader = stage.define_or_override(&path("/materials/Wood/preview/Surface"), PrimKind::Shader, false).expect("define");

	let id = stage.create_attribute(&shader, "info:id", ValueType::Token, true).expect("id");
	stage.set(&id, &Value::Token("UsdPreviewSurface".into()), None).expect("set");
	let output = stage.create_output(&material, TerminalKind::Surface, None).expect("output");
	stage.connect(&output, &shader, "surface").expect("connect");
	let cycles = stage.create_output(&material, TerminalKind::Volume, Some("cycles")).expect("output");
	stage.connect(&cycles, &shader, "bsdf").expect("connect");

	let text = stage.to_usda();
	assert!(text.starts_with("#usda 1.0\n"));
	assert!(text.contains("over \"materials\"\n{"));
	assert!(text.contains("    def Material \"Wood\"\n"));
	assert!(text.contains("token outputs:surface.connect = </materials/Wood/preview/Surface.outputs:surface>"));
	assert!(text.contains("token outputs:cycles:volume.connect = </materials/Wood/preview/Surface.outputs:bsdf>"));
	assert!(text.contains("over \"preview\""));
	assert!(text.contains("uniform token info:id = \"UsdPreviewSurface\""));
}

#[test]
fn connecting_to_an_unknown_prim_fails() {
	let mut stage = MemoryStage::new();
	let shader = stage.define_or_override(&path("/m/A"), PrimKind::Shader, false).expect("define");
	let attr = stage.create_input(&shader, "fac", ValueType::Float).expect("input");
	let err = stage.connect(&attr, &path("/m/B"), "value").expect_err("missing source");
	assert!(matches!(err, ShadeError::Sink { .. }));
}
