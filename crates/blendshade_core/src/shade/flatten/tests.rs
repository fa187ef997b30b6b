use crate::shade::{FlattenOptions, GroupLibrary, Node, NodeKind, NodeStorage, NodeTree, ShadeError, SocketValue, flatten};

fn group_instance(name: &str, tree: &str) -> Node {
	Node::new(name, NodeKind::Group)
		.with_input("Fac", SocketValue::Float(0.25))
		.with_output("Result", SocketValue::Float(0.0))
		.with_storage(NodeStorage::Group { tree: tree.to_owned() })
}

fn boundary_input() -> Node {
	Node::new("Group Input", NodeKind::GroupInput).with_output("Fac", SocketValue::Float(0.0))
}

fn boundary_output() -> Node {
	Node::new("Group Output", NodeKind::GroupOutput).with_input("Result", SocketValue::Float(0.0))
}

/// Group that multiplies its `Fac` input by 2.
fn doubler() -> NodeTree {
	NodeTree::new()
		.with_node(boundary_input())
		.with_node(Node::new("Math", NodeKind::Math).with_input("Value_001", SocketValue::Float(2.0)).with_custom(2, 0, 0))
		.with_node(boundary_output())
		.with_link("Group Input", "Fac", "Math", "Value")
		.with_link("Math", "Value", "Group Output", "Result")
}

fn library(entries: &[(&str, NodeTree)]) -> GroupLibrary {
	entries.iter().map(|(name, tree)| ((*name).to_owned(), tree.clone())).collect()
}

fn material_with_group(feed: bool) -> NodeTree {
	let mut tree = NodeTree::new()
		.with_node(Node::new("Noise", NodeKind::TexNoise))
		.with_node(group_instance("Group", "Doubler"))
		.with_node(Node::new("Emission", NodeKind::Emission))
		.with_link("Group", "Result", "Emission", "Strength");
	if feed {
		tree.add_link("Noise", "Fac", "Group", "Fac");
	}
	tree
}

#[test]
fn group_boundaries_are_spliced_to_external_links() {
	let graph = flatten(&material_with_group(true), &library(&[("Doubler", doubler())]), &FlattenOptions::default()).expect("flatten succeeds");

	assert!(graph.nodes.iter().all(|node| !node.kind.is_group() && !node.kind.is_group_boundary()));
	let noise = graph.find("Noise").expect("noise kept");
	let math = graph.find("Math").expect("group body inlined");
	let emission = graph.find("Emission").expect("emission kept");

	let into_math = graph.input_link(math, "Value").expect("math input rewired");
	assert_eq!((into_math.from, into_math.from_socket.as_str()), (noise, "Fac"));
	let into_emission = graph.input_link(emission, "Strength").expect("emission input rewired");
	assert_eq!((into_emission.from, into_emission.from_socket.as_str()), (math, "Value"));
}

#[test]
fn unlinked_group_inputs_push_their_default_into_the_consumer() {
	let graph = flatten(&material_with_group(false), &library(&[("Doubler", doubler())]), &FlattenOptions::default()).expect("flatten succeeds");

	let math = graph.find("Math").expect("group body inlined");
	assert!(graph.input_link(math, "Value").is_none());
	assert_eq!(graph.nodes[math].inputs[0].value, SocketValue::Float(0.25));
}

#[test]
fn instance_defaults_convert_to_the_consumer_type() {
	let body = NodeTree::new()
		.with_node(boundary_input())
		.with_node(Node::new("Emission", NodeKind::Emission))
		.with_link("Group Input", "Fac", "Emission", "Color");
	let tree = NodeTree::new().with_node(group_instance("Group", "Tint"));

	let graph = flatten(&tree, &library(&[("Tint", body)]), &FlattenOptions::default()).expect("flatten succeeds");
	let emission = graph.find("Emission").expect("emission inlined");
	assert_eq!(graph.nodes[emission].input("Color").map(|socket| &socket.value), Some(&SocketValue::Rgba([0.25, 0.25, 0.25, 1.0])));
}

#[test]
fn copied_names_are_made_unique() {
	let tree = NodeTree::new()
		.with_node(Node::new("Math", NodeKind::Math))
		.with_node(group_instance("A", "Doubler"))
		.with_node(group_instance("B", "Doubler"));

	let graph = flatten(&tree, &library(&[("Doubler", doubler())]), &FlattenOptions::default()).expect("flatten succeeds");
	let names: Vec<&str> = graph.nodes.iter().map(|node| node.name.as_str()).collect();
	assert_eq!(names, ["Math", "Math.001", "Math.002"]);
}

#[test]
fn nested_groups_expand_after_their_parent() {
	let tree = NodeTree::new()
		.with_node(Node::new("Noise", NodeKind::TexNoise))
		.with_node(group_instance("Group", "Outer"))
		.with_node(Node::new("Emission", NodeKind::Emission))
		.with_link("Noise", "Fac", "Group", "Fac")
		.with_link("Group", "Result", "Emission", "Strength");
	let nested = NodeTree::new()
		.with_node(boundary_input())
		.with_node(group_instance("Inner", "Doubler"))
		.with_node(boundary_output())
		.with_link("Group Input", "Fac", "Inner", "Fac")
		.with_link("Inner", "Result", "Group Output", "Result");

	let graph = flatten(&tree, &library(&[("Outer", nested), ("Doubler", doubler())]), &FlattenOptions::default()).expect("flatten succeeds");
	let noise = graph.find("Noise").expect("noise kept");
	let math = graph.find("Math").expect("nested body inlined");
	let emission = graph.find("Emission").expect("emission kept");
	assert_eq!(graph.input_link(math, "Value").map(|link| link.from), Some(noise));
	assert_eq!(graph.input_link(emission, "Strength").map(|link| link.from), Some(math));
}

#[test]
fn self_referencing_groups_hit_the_depth_limit() {
	let recursive = NodeTree::new()
		.with_node(boundary_input())
		.with_node(group_instance("Again", "Loop"))
		.with_link("Group Input", "Fac", "Again", "Fac");
	let tree = NodeTree::new().with_node(group_instance("Group", "Loop"));

	let err = flatten(&tree, &library(&[("Loop", recursive)]), &FlattenOptions::default()).expect_err("recursion detected");
	assert!(matches!(err, ShadeError::GroupRecursion { group, max_depth: 32 } if group == "Loop"));
}

#[test]
fn depth_limit_is_configurable() {
	let tree = NodeTree::new().with_node(group_instance("Group", "Outer"));
	let nested = NodeTree::new().with_node(group_instance("Inner", "Doubler"));

	let options = FlattenOptions { max_depth: 1 };
	let err = flatten(&tree, &library(&[("Outer", nested), ("Doubler", doubler())]), &options).expect_err("too deep");
	assert!(matches!(err, ShadeError::GroupRecursion { group, max_depth: 1 } if group == "Doubler"));
}

#[test]
fn unknown_group_trees_drop_the_instance() {
	let graph = flatten(&material_with_group(true), &GroupLibrary::new(), &FlattenOptions::default()).expect("flatten succeeds");
	let names: Vec<&str> = graph.nodes.iter().map(|node| node.name.as_str()).collect();
	assert_eq!(names, ["Noise", "Emission"]);
	assert!(graph.links.is_empty());
}

#[test]
fn reroutes_are_spliced_and_frames_dropped() {
	let tree = NodeTree::new()
		.with_node(Node::new("Frame", NodeKind::Frame))
		.with_node(Node::new("Image", NodeKind::TexImage))
		.with_node(Node::new("Reroute", NodeKind::Reroute))
		.with_node(Node::new("Reroute.001", NodeKind::Reroute))
		.with_node(Node::new("Dangling", NodeKind::Reroute))
		.with_node(Node::new("BSDF", NodeKind::BsdfPrincipled))
		.with_link("Reroute.001", "Output", "BSDF", "Base Color")
		.with_link("Reroute", "Output", "Reroute.001", "Input")
		.with_link("Image", "Color", "Reroute", "Input")
		.with_link("Dangling", "Output", "BSDF", "Roughness");

	let graph = flatten(&tree, &GroupLibrary::new(), &FlattenOptions::default()).expect("flatten succeeds");
	let names: Vec<&str> = graph.nodes.iter().map(|node| node.name.as_str()).collect();
	assert_eq!(names, ["Image", "BSDF"]);
	assert_eq!(graph.links.len(), 1);
	let link = &graph.links[0];
	assert_eq!((link.from, link.from_socket.as_str(), link.to, link.to_socket.as_str()), (0, "Color", 1, "Base Color"));
}

#[test]
fn duplicate_links_into_one_input_keep_the_first() {
	let tree = NodeTree::new()
		.with_node(Node::new("A", NodeKind::Value))
		.with_node(Node::new("B", NodeKind::Value))
		.with_node(Node::new("Math", NodeKind::Math))
		.with_link("A", "Value", "Math", "Value")
		.with_link("B", "Value", "Math", "Value");

	let graph = flatten(&tree, &GroupLibrary::new(), &FlattenOptions::default()).expect("flatten succeeds");
	assert_eq!(graph.links.len(), 1);
	assert_eq!(graph.links[0].from, 0);
}

#[test]
fn material_output_prefers_the_active_unmuted_node() {
	let tree = NodeTree::new()
		.with_node(Node::new("Muted", NodeKind::OutputMaterial).muted())
		.with_node(Node::new("Inactive", NodeKind::OutputMaterial).active_output(false))
		.with_node(Node::new("Active", NodeKind::OutputMaterial));
	let graph = flatten(&tree, &GroupLibrary::new(), &FlattenOptions::default()).expect("flatten succeeds");
	assert_eq!(graph.material_output(), Some(2));

	let tree = NodeTree::new().with_node(Node::new("Inactive", NodeKind::OutputMaterial).active_output(false));
	let graph = flatten(&tree, &GroupLibrary::new(), &FlattenOptions::default()).expect("flatten succeeds");
	assert_eq!(graph.material_output(), Some(0));
}

#[test]
fn names_colliding_after_sanitizing_are_made_unique() {
	let tree = NodeTree::new()
		.with_node(Node::new("Math.001", NodeKind::Math))
		.with_node(Node::new("Math_001", NodeKind::Math))
		.with_node(Node::new("Emission", NodeKind::Emission))
		.with_link("Math_001", "Value", "Emission", "Strength");

	let graph = flatten(&tree, &GroupLibrary::new(), &FlattenOptions::default()).expect("flatten succeeds");
	let names: Vec<&str> = graph.nodes.iter().map(|node| node.name.as_str()).collect();
	assert_eq!(names, ["Math.001", "Math_001.001", "Emission"]);
	assert_eq!(graph.input_link(2, "Strength").map(|link| link.from), Some(1));
}

#[test]
fn pass_through_groups_carry_the_instance_value() {
	let body = NodeTree::new()
		.with_node(boundary_input())
		.with_node(Node::new("Group Output", NodeKind::GroupOutput).with_input("Fac", SocketValue::Float(0.0)))
		.with_link("Group Input", "Fac", "Group Output", "Fac");
	let instance = Node::new("Group", NodeKind::Group)
		.with_input("Fac", SocketValue::Float(0.75))
		.with_output("Fac", SocketValue::Float(0.0))
		.with_storage(NodeStorage::Group { tree: "Pass".to_owned() });
	let tree = NodeTree::new()
		.with_node(instance)
		.with_node(Node::new("Emission", NodeKind::Emission))
		.with_link("Group", "Fac", "Emission", "Strength");

	let graph = flatten(&tree, &library(&[("Pass", body)]), &FlattenOptions::default()).expect("flatten succeeds");
	let emission = graph.find("Emission").expect("emission kept");
	assert!(graph.links.is_empty());
	assert_eq!(graph.nodes[emission].input("Strength").map(|socket| &socket.value), Some(&SocketValue::Float(0.75)));
}
