use tracing::debug;

use crate::shade::{FlatGraph, RenderTerminals, ShaderUnit, TerminalBinding, TerminalKind, ValueType, input_name, output_name};

/// Wire unit connections and renderer terminals from the links of `graph`.
///
/// `units` is index-aligned with `graph.nodes`; a `None` entry is a node without a unit and every
/// link touching it is dropped. Only links into the designated material output bind terminals.
pub fn resolve_links(graph: &FlatGraph, units: &mut [Option<ShaderUnit>]) -> RenderTerminals {
	let output = graph.material_output();
	let mut terminals = RenderTerminals::default();

	for link in &graph.links {
		let (from_node, to_node) = (&graph.nodes[link.from], &graph.nodes[link.to]);
		let Some(source) = units.get(link.from).and_then(Option::as_ref).map(|unit| unit.path.clone()) else {
			debug!(from = %from_node.name, to = %to_node.name, "link source has no shader unit; dropping link");
			continue;
		};

		if Some(link.to) == output {
			let (kind, output) = match link.to_socket.as_str() {
				"Surface" => {
					let from_name = from_node.output(&link.from_socket).map_or(link.from_socket.as_str(), |socket| socket.name.as_str());
					(TerminalKind::Surface, if from_name == "BSDF" { "bsdf" } else { "closure" })
				}
				"Volume" => (TerminalKind::Volume, "bsdf"),
				"Displacement" => (TerminalKind::Displacement, "vector"),
				other => {
					debug!(input = other, "material output input has no terminal; dropping link");
					continue;
				}
			};
			*terminals.slot_mut(kind) = Some(TerminalBinding::new(source, output));
			continue;
		}
		if to_node.kind.is_material_output() {
			debug!(node = %to_node.name, "link into an inactive material output; dropping link");
			continue;
		}

		let Some(dest) = units.get_mut(link.to).and_then(Option::as_mut) else {
			debug!(from = %from_node.name, to = %to_node.name, "link destination has no shader unit; dropping link");
			continue;
		};
		let input = input_name(to_node.kind, &link.to_socket);
		let output = output_name(from_node.kind, &link.from_socket);
		dest.connect(&input, ValueType::Float, source, output);
	}

	terminals
}
