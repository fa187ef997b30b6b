use serde::{Deserialize, Serialize};

use crate::shade::{NodeKind, NodeStorage, socket_template};

/// Declared data type of one socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SocketType {
	/// Scalar float.
	Float,
	/// Integer.
	Int,
	/// Boolean.
	Bool,
	/// Three-component vector.
	Vector,
	/// RGBA color.
	Rgba,
	/// Text.
	String,
	/// Closure; carries no value.
	Shader,
}

impl SocketType {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Float => "float",
			Self::Int => "int",
			Self::Bool => "bool",
			Self::Vector => "vector",
			Self::Rgba => "rgba",
			Self::String => "string",
			Self::Shader => "shader",
		}
	}
}

/// Default value stored on a socket; its variant also fixes the socket type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SocketValue {
	/// Scalar float.
	Float(f32),
	/// Integer.
	Int(i32),
	/// Boolean.
	Bool(bool),
	/// Three-component vector.
	Vector([f32; 3]),
	/// RGBA color.
	Rgba([f32; 4]),
	/// Text.
	String(String),
	/// Closure marker.
	Shader,
}

impl SocketValue {
	/// Socket type implied by this value.
	pub fn socket_type(&self) -> SocketType {
		match self {
			Self::Float(_) => SocketType::Float,
			Self::Int(_) => SocketType::Int,
			Self::Bool(_) => SocketType::Bool,
			Self::Vector(_) => SocketType::Vector,
			Self::Rgba(_) => SocketType::Rgba,
			Self::String(_) => SocketType::String,
			Self::Shader => SocketType::Shader,
		}
	}

	/// Scalar view used by float-typed consumers.
	pub fn as_float(&self) -> Option<f32> {
		match self {
			Self::Float(v) => Some(*v),
			Self::Int(v) => Some(*v as f32),
			Self::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
			Self::Vector(v) => Some((v[0] + v[1] + v[2]) / 3.0),
			Self::Rgba(v) => Some(luminance(v)),
			Self::String(_) | Self::Shader => None,
		}
	}

	/// Convert this value to the type of `target`, the way implicit socket conversion does.
	///
	/// Values that cannot be converted leave `target` unchanged.
	pub fn converted_like(&self, target: &SocketValue) -> SocketValue {
		let converted = match target.socket_type() {
			SocketType::Float => self.as_float().map(SocketValue::Float),
			SocketType::Int => self.as_float().map(|v| SocketValue::Int(v as i32)),
			SocketType::Bool => self.as_float().map(|v| SocketValue::Bool(v > 0.0)),
			SocketType::Vector => match self {
				Self::Vector(v) => Some(Self::Vector(*v)),
				Self::Rgba(v) => Some(Self::Vector([v[0], v[1], v[2]])),
				other => other.as_float().map(|v| Self::Vector([v, v, v])),
			},
			SocketType::Rgba => match self {
				Self::Rgba(v) => Some(Self::Rgba(*v)),
				Self::Vector(v) => Some(Self::Rgba([v[0], v[1], v[2], 1.0])),
				other => other.as_float().map(|v| Self::Rgba([v, v, v, 1.0])),
			},
			SocketType::String => match self {
				Self::String(v) => Some(Self::String(v.clone())),
				_ => None,
			},
			SocketType::Shader => None,
		};
		converted.unwrap_or_else(|| target.clone())
	}
}

fn luminance(rgba: &[f32; 4]) -> f32 {
	0.2126 * rgba[0] + 0.7152 * rgba[1] + 0.0722 * rgba[2]
}

/// One input or output slot on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Socket {
	/// Stable identifier, unique per direction on one node. Empty identifiers take the name on load.
	#[serde(default)]
	pub identifier: String,
	/// Human-readable name shown in the editor.
	pub name: String,
	/// Default value used while no link arrives.
	pub value: SocketValue,
}

impl Socket {
	/// Create a socket whose identifier differs from its name.
	pub fn new(identifier: impl Into<String>, name: impl Into<String>, value: SocketValue) -> Self {
		Self {
			identifier: identifier.into(),
			name: name.into(),
			value,
		}
	}

	/// Create a socket whose identifier equals its name.
	pub fn named(name: impl Into<String>, value: SocketValue) -> Self {
		let name = name.into();
		Self {
			identifier: name.clone(),
			name,
			value,
		}
	}

	/// Declared socket type.
	pub fn socket_type(&self) -> SocketType {
		self.value.socket_type()
	}
}

/// One shader node as dumped by the host.
///
/// Nodes of an unknown idname keep it as their type label unless the host supplied one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NodeRecord")]
pub struct Node {
	/// Unique name inside its tree.
	pub name: String,
	/// Node type, stored as Blender idname.
	#[serde(rename = "type")]
	pub kind: NodeKind,
	/// Host-supplied type label; overrides [`NodeKind::ui_name`] when present.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ui_name: Option<String>,
	/// Generic integer slot 1.
	#[serde(default)]
	pub custom1: i32,
	/// Generic integer slot 2.
	#[serde(default)]
	pub custom2: i32,
	/// Generic integer slot 3.
	#[serde(default)]
	pub custom3: i32,
	/// Typed parameter block.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub storage: Option<NodeStorage>,
	/// Ordered input sockets.
	#[serde(default)]
	pub inputs: Vec<Socket>,
	/// Ordered output sockets.
	#[serde(default)]
	pub outputs: Vec<Socket>,
	/// Muted nodes produce no output.
	#[serde(default)]
	pub muted: bool,
	/// Active flag for output and group-output nodes.
	#[serde(default)]
	pub is_active_output: bool,
}

#[derive(Deserialize)]
struct NodeRecord {
	name: String,
	#[serde(rename = "type")]
	idname: String,
	#[serde(default)]
	ui_name: Option<String>,
	#[serde(default)]
	custom1: i32,
	#[serde(default)]
	custom2: i32,
	#[serde(default)]
	custom3: i32,
	#[serde(default)]
	storage: Option<NodeStorage>,
	#[serde(default)]
	inputs: Vec<Socket>,
	#[serde(default)]
	outputs: Vec<Socket>,
	#[serde(default)]
	muted: bool,
	#[serde(default)]
	is_active_output: bool,
}

impl From<NodeRecord> for Node {
	fn from(record: NodeRecord) -> Self {
		let kind = NodeKind::from_idname(&record.idname).unwrap_or(NodeKind::Unknown);
		let ui_name = match kind {
			NodeKind::Unknown => record.ui_name.or(Some(record.idname)),
			_ => record.ui_name,
		};
		Self {
			name: record.name,
			kind,
			ui_name,
			custom1: record.custom1,
			custom2: record.custom2,
			custom3: record.custom3,
			storage: record.storage,
			inputs: record.inputs,
			outputs: record.outputs,
			muted: record.muted,
			is_active_output: record.is_active_output,
		}
	}
}

impl Node {
	/// Create a node with the built-in socket layout for `kind`.
	pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
		let (inputs, outputs) = socket_template(kind);
		Self {
			name: name.into(),
			kind,
			ui_name: None,
			custom1: 0,
			custom2: 0,
			custom3: 0,
			storage: None,
			inputs,
			outputs,
			muted: false,
			is_active_output: matches!(kind, NodeKind::OutputMaterial | NodeKind::GroupOutput),
		}
	}

	/// Set an input default, appending the socket when the template lacks it.
	pub fn with_input(mut self, identifier: &str, value: SocketValue) -> Self {
		match self.input_index(identifier) {
			Some(idx) => self.inputs[idx].value = value,
			None => self.inputs.push(Socket::named(identifier, value)),
		}
		self
	}

	/// Set an output default, appending the socket when the template lacks it.
	pub fn with_output(mut self, identifier: &str, value: SocketValue) -> Self {
		match self.output_index(identifier) {
			Some(idx) => self.outputs[idx].value = value,
			None => self.outputs.push(Socket::named(identifier, value)),
		}
		self
	}

	/// Set the generic integer slots.
	pub fn with_custom(mut self, custom1: i32, custom2: i32, custom3: i32) -> Self {
		self.custom1 = custom1;
		self.custom2 = custom2;
		self.custom3 = custom3;
		self
	}

	/// Attach a typed parameter block.
	pub fn with_storage(mut self, storage: NodeStorage) -> Self {
		self.storage = Some(storage);
		self
	}

	/// Override the host type label.
	pub fn with_ui_name(mut self, ui_name: impl Into<String>) -> Self {
		self.ui_name = Some(ui_name.into());
		self
	}

	/// Mark the node muted.
	pub fn muted(mut self) -> Self {
		self.muted = true;
		self
	}

	/// Set the active-output flag.
	pub fn active_output(mut self, active: bool) -> Self {
		self.is_active_output = active;
		self
	}

	/// Type label used for renderer identifiers.
	pub fn type_label(&self) -> &str {
		self.ui_name.as_deref().unwrap_or(self.kind.ui_name())
	}

	/// Find an input by identifier, falling back to its name.
	pub fn input_index(&self, key: &str) -> Option<usize> {
		find_socket(&self.inputs, key)
	}

	/// Find an output by identifier, falling back to its name.
	pub fn output_index(&self, key: &str) -> Option<usize> {
		find_socket(&self.outputs, key)
	}

	/// Input socket by identifier or name.
	pub fn input(&self, key: &str) -> Option<&Socket> {
		self.input_index(key).map(|idx| &self.inputs[idx])
	}

	/// Output socket by identifier or name.
	pub fn output(&self, key: &str) -> Option<&Socket> {
		self.output_index(key).map(|idx| &self.outputs[idx])
	}

	/// Fill template sockets and identifiers for nodes dumped without them.
	pub(crate) fn normalize(&mut self) {
		if self.inputs.is_empty() && self.outputs.is_empty() {
			let (inputs, outputs) = socket_template(self.kind);
			self.inputs = inputs;
			self.outputs = outputs;
		}
		for socket in self.inputs.iter_mut().chain(self.outputs.iter_mut()) {
			if socket.identifier.is_empty() {
				socket.identifier = socket.name.clone();
			}
		}
	}
}

fn find_socket(sockets: &[Socket], key: &str) -> Option<usize> {
	sockets
		.iter()
		.position(|socket| socket.identifier == key)
		.or_else(|| sockets.iter().position(|socket| socket.name == key))
}

/// Directed edge between two named sockets of one tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
	/// Source node name.
	pub from_node: String,
	/// Source output identifier (or name).
	pub from_socket: String,
	/// Destination node name.
	pub to_node: String,
	/// Destination input identifier (or name).
	pub to_socket: String,
}

/// Nodes and links of one material or group tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeTree {
	/// Nodes in editor order.
	#[serde(default)]
	pub nodes: Vec<Node>,
	/// Links in editor order.
	#[serde(default)]
	pub links: Vec<Link>,
}

impl NodeTree {
	/// Create an empty tree.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a node.
	pub fn with_node(mut self, node: Node) -> Self {
		self.nodes.push(node);
		self
	}

	/// Append a link.
	pub fn with_link(mut self, from_node: &str, from_socket: &str, to_node: &str, to_socket: &str) -> Self {
		self.add_link(from_node, from_socket, to_node, to_socket);
		self
	}

	/// Append a node in place.
	pub fn add_node(&mut self, node: Node) -> &mut Self {
		self.nodes.push(node);
		self
	}

	/// Append a link in place.
	pub fn add_link(&mut self, from_node: &str, from_socket: &str, to_node: &str, to_socket: &str) -> &mut Self {
		self.links.push(Link {
			from_node: from_node.to_owned(),
			from_socket: from_socket.to_owned(),
			to_node: to_node.to_owned(),
			to_socket: to_socket.to_owned(),
		});
		self
	}

	/// Node by name.
	pub fn node(&self, name: &str) -> Option<&Node> {
		self.nodes.iter().find(|node| node.name == name)
	}

	/// Index of a node by name.
	pub fn node_index(&self, name: &str) -> Option<usize> {
		self.nodes.iter().position(|node| node.name == name)
	}

	pub(crate) fn normalize(&mut self) {
		for node in &mut self.nodes {
			node.normalize();
		}
	}
}
