use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::shade::{FlattenOptions, GroupLibrary, Node, NodeKind, NodeStorage, NodeTree, Result, ShadeError, SocketValue, make_valid_identifier};

/// One index-addressed link of a flattened graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatLink {
	/// Source node index.
	pub from: usize,
	/// Source output identifier.
	pub from_socket: String,
	/// Destination node index.
	pub to: usize,
	/// Destination input identifier.
	pub to_socket: String,
}

/// Node arena of one material with every group inlined.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlatGraph {
	/// Nodes; names are unique.
	pub nodes: Vec<Node>,
	/// Links; at most one per destination input.
	pub links: Vec<FlatLink>,
}

impl FlatGraph {
	/// Index of a node by name.
	pub fn find(&self, name: &str) -> Option<usize> {
		self.nodes.iter().position(|node| node.name == name)
	}

	/// Link arriving at input `socket` of node `to`.
	pub fn input_link(&self, to: usize, socket: &str) -> Option<&FlatLink> {
		self.links.iter().find(|link| link.to == to && link.to_socket == socket)
	}

	/// The output node whose inputs bind the material: the active one, else the first unmuted.
	pub fn material_output(&self) -> Option<usize> {
		let candidates = || self.nodes.iter().enumerate().filter(|(_, node)| node.kind.is_material_output() && !node.muted);
		candidates()
			.find(|(_, node)| node.is_active_output)
			.or_else(|| candidates().next())
			.map(|(idx, _)| idx)
	}
}

struct Slot {
	node: Node,
	depth: u32,
	alive: bool,
}

#[derive(Default)]
struct Arena {
	slots: Vec<Slot>,
	links: Vec<FlatLink>,
	taken: HashSet<String>,
}

impl Arena {
	fn push(&mut self, mut node: Node, depth: u32) -> usize {
		node.name = unique_name(&self.taken, &node.name);
		self.taken.insert(make_valid_identifier(&node.name));
		self.slots.push(Slot { node, depth, alive: true });
		self.slots.len() - 1
	}

	/// Copy `tree` into the arena and return the arena index of each tree node.
	fn load(&mut self, tree: &NodeTree, depth: u32) -> Vec<usize> {
		let indices: Vec<usize> = tree.nodes.iter().map(|node| self.push(node.clone(), depth)).collect();

		for link in &tree.links {
			let (Some(from), Some(to)) = (tree.node_index(&link.from_node), tree.node_index(&link.to_node)) else {
				debug!(from = %link.from_node, to = %link.to_node, "dropping link with a missing endpoint");
				continue;
			};
			let (from, to) = (indices[from], indices[to]);
			let from_socket = self.slots[from].node.output_index(&link.from_socket).map(|idx| self.slots[from].node.outputs[idx].identifier.clone());
			let to_socket = self.slots[to].node.input_index(&link.to_socket).map(|idx| self.slots[to].node.inputs[idx].identifier.clone());
			let (Some(from_socket), Some(to_socket)) = (from_socket, to_socket) else {
				debug!(from = %link.from_node, socket = %link.from_socket, to = %link.to_node, input = %link.to_socket, "dropping link with a missing socket");
				continue;
			};
			self.links.push(FlatLink { from, from_socket, to, to_socket });
		}

		indices
	}

	fn kill(&mut self, idx: usize) {
		self.slots[idx].alive = false;
		self.links.retain(|link| link.from != idx && link.to != idx);
	}

	fn set_input_default(&mut self, node: usize, socket: &str, value: &SocketValue) {
		let target = &mut self.slots[node].node;
		if let Some(idx) = target.input_index(socket) {
			let converted = value.converted_like(&target.inputs[idx].value);
			target.inputs[idx].value = converted;
		}
	}

	fn expand(&mut self, instance: usize, library: &GroupLibrary, options: &FlattenOptions) -> Result<()> {
		let Some(group) = group_tree_name(&self.slots[instance].node) else {
			warn!(node = %self.slots[instance].node.name, "group node has no tree; dropping it");
			self.kill(instance);
			return Ok(());
		};
		let Some(tree) = library.get(&group) else {
			warn!(node = %self.slots[instance].node.name, group = %group, "group tree not found; dropping node");
			self.kill(instance);
			return Ok(());
		};

		let depth = self.slots[instance].depth;
		if depth >= options.max_depth {
			return Err(ShadeError::GroupRecursion { group, max_depth: options.max_depth });
		}

		let copied = self.load(tree, depth + 1);
		let boundary_inputs: Vec<usize> = copied.iter().copied().filter(|idx| self.slots[*idx].node.kind == NodeKind::GroupInput).collect();
		let group_outputs: Vec<usize> = copied.iter().copied().filter(|idx| self.slots[*idx].node.kind == NodeKind::GroupOutput).collect();
		let active_output = group_outputs
			.iter()
			.copied()
			.find(|idx| self.slots[*idx].node.is_active_output)
			.or_else(|| group_outputs.first().copied());

		let carried = self.splice_group_inputs(instance, &boundary_inputs);
		if let Some(output) = active_output {
			self.splice_group_output(instance, output, &carried);
		} else {
			self.links.retain(|link| link.from != instance);
		}

		debug!(group = %group, nodes = copied.len(), depth = depth + 1, "expanded group instance");
		self.kill(instance);
		for idx in boundary_inputs.into_iter().chain(group_outputs) {
			self.kill(idx);
		}
		Ok(())
	}

	/// Rewire links leaving the group-input boundaries; returns instance values that reach a
	/// group-output socket directly, keyed by `(output node, socket)`.
	fn splice_group_inputs(&mut self, instance: usize, boundary_inputs: &[usize]) -> Vec<(usize, String, SocketValue)> {
		let mut carried = Vec::new();
		let mut idx = 0;
		while idx < self.links.len() {
			let link = &self.links[idx];
			if !boundary_inputs.contains(&link.from) {
				idx += 1;
				continue;
			}

			let boundary = &self.slots[link.from].node;
			let socket = boundary.output(&link.from_socket);
			let instance_node = &self.slots[instance].node;
			let matched = socket.and_then(|socket| instance_node.input_index(&socket.identifier).or_else(|| instance_node.input_index(&socket.name)));

			let Some(matched) = matched else {
				debug!(socket = %link.from_socket, "group input has no matching instance socket; consumer keeps its default");
				self.links.remove(idx);
				continue;
			};

			let instance_socket = &instance_node.inputs[matched];
			let external = self
				.links
				.iter()
				.find(|external| external.to == instance && external.to_socket == instance_socket.identifier)
				.map(|external| (external.from, external.from_socket.clone()));

			match external {
				Some((from, from_socket)) => {
					let link = &mut self.links[idx];
					link.from = from;
					link.from_socket = from_socket;
					idx += 1;
				}
				None => {
					let value = instance_socket.value.clone();
					let link = self.links.remove(idx);
					if self.slots[link.to].node.kind == NodeKind::GroupOutput {
						carried.push((link.to, link.to_socket, value));
					} else {
						self.set_input_default(link.to, &link.to_socket, &value);
					}
				}
			}
		}
		carried
	}

	fn splice_group_output(&mut self, instance: usize, output: usize, carried: &[(usize, String, SocketValue)]) {
		let mut idx = 0;
		while idx < self.links.len() {
			if self.links[idx].from != instance {
				idx += 1;
				continue;
			}

			let instance_node = &self.slots[instance].node;
			let boundary = &self.slots[output].node;
			let matched = instance_node
				.output(&self.links[idx].from_socket)
				.and_then(|socket| boundary.input(&socket.identifier).or_else(|| boundary.input(&socket.name)))
				.map(|socket| socket.identifier.clone());

			let source = matched.as_ref().and_then(|socket| {
				self.links
					.iter()
					.find(|internal| internal.to == output && &internal.to_socket == socket)
					.map(|internal| (internal.from, internal.from_socket.clone()))
			});
			let passed = matched.as_ref().and_then(|socket| {
				carried
					.iter()
					.find(|(node, carried_socket, _)| *node == output && carried_socket == socket)
					.map(|(_, _, value)| value.clone())
			});

			match (source, passed) {
				(Some((from, from_socket)), _) => {
					let link = &mut self.links[idx];
					link.from = from;
					link.from_socket = from_socket;
					idx += 1;
				}
				(None, Some(value)) => {
					let link = self.links.remove(idx);
					self.set_input_default(link.to, &link.to_socket, &value);
				}
				(None, None) => {
					debug!(socket = %self.links[idx].from_socket, "group output socket is unlinked; consumer keeps its default");
					self.links.remove(idx);
				}
			}
		}
	}

	fn splice_reroute(&mut self, reroute: usize) {
		let incoming = self.links.iter().find(|link| link.to == reroute).map(|link| (link.from, link.from_socket.clone()));
		match incoming {
			Some((from, from_socket)) => {
				for link in self.links.iter_mut().filter(|link| link.from == reroute) {
					link.from = from;
					link.from_socket = from_socket.clone();
				}
			}
			None => self.links.retain(|link| link.from != reroute),
		}
		self.kill(reroute);
	}

	fn into_graph(self) -> FlatGraph {
		let mut remap = vec![None; self.slots.len()];
		let mut nodes = Vec::new();
		for (idx, slot) in self.slots.into_iter().enumerate() {
			if slot.alive {
				remap[idx] = Some(nodes.len());
				nodes.push(slot.node);
			}
		}

		let mut seen = HashSet::new();
		let mut links = Vec::new();
		for link in self.links {
			let (Some(from), Some(to)) = (remap[link.from], remap[link.to]) else {
				continue;
			};
			if !seen.insert((to, link.to_socket.clone())) {
				warn!(node = %nodes[to].name, input = %link.to_socket, "input has more than one link; keeping the first");
				continue;
			}
			links.push(FlatLink {
				from,
				from_socket: link.from_socket,
				to,
				to_socket: link.to_socket,
			});
		}

		FlatGraph { nodes, links }
	}
}

fn group_tree_name(node: &Node) -> Option<String> {
	match &node.storage {
		Some(NodeStorage::Group { tree }) => Some(tree.clone()),
		_ => None,
	}
}

/// `base`, or `base.NNN`, whose prim-name form is not yet in `taken`.
fn unique_name(taken: &HashSet<String>, base: &str) -> String {
	if !taken.contains(&make_valid_identifier(base)) {
		return base.to_owned();
	}
	let mut suffix = 1_u32;
	loop {
		let candidate = format!("{base}.{suffix:03}");
		if !taken.contains(&make_valid_identifier(&candidate)) {
			return candidate;
		}
		suffix += 1;
	}
}

/// Inline every group of `tree`, splice reroutes and drop layout nodes.
///
/// Groups are expanded breadth-first over the growing arena, so a nested group is expanded after
/// the group that contains it. Names of copied nodes are made unique with numeric suffixes.
pub fn flatten(tree: &NodeTree, library: &GroupLibrary, options: &FlattenOptions) -> Result<FlatGraph> {
	let mut arena = Arena::default();
	arena.load(tree, 0);

	let mut cursor = 0;
	while cursor < arena.slots.len() {
		if arena.slots[cursor].alive && arena.slots[cursor].node.kind.is_group() {
			arena.expand(cursor, library, options)?;
		}
		cursor += 1;
	}

	for idx in 0..arena.slots.len() {
		if !arena.slots[idx].alive {
			continue;
		}
		match arena.slots[idx].node.kind {
			NodeKind::Reroute => arena.splice_reroute(idx),
			NodeKind::Frame => arena.kill(idx),
			NodeKind::GroupInput | NodeKind::GroupOutput => {
				debug!(node = %arena.slots[idx].node.name, "dropping group boundary outside a group");
				arena.kill(idx);
			}
			_ => {}
		}
	}

	Ok(arena.into_graph())
}

#[cfg(test)]
mod tests;
