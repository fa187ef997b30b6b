use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::shade::compression::decode_bytes;
use crate::shade::{Compression, NodeTree, Result, ShadeError};

/// Library of node-group trees keyed by group name.
pub type GroupLibrary = BTreeMap<String, NodeTree>;

/// Render settings stored on a material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSettings {
	/// Render pass index.
	pub pass_id: i32,
	/// Sample emission as a light.
	pub use_mis: bool,
	/// Let shadows pass through transparency.
	pub use_transparent_shadow: bool,
	/// Treat volumes as homogeneous.
	pub homogeneous_volume: bool,
	/// Volume sampling method code.
	pub volume_sampling: i32,
	/// Volume interpolation method code.
	pub volume_interpolation: i32,
	/// Volume step rate multiplier.
	pub volume_step_rate: f32,
	/// Displacement method code.
	pub displacement_method: i32,
}

impl Default for MaterialSettings {
	fn default() -> Self {
		Self {
			pass_id: 0,
			use_mis: true,
			use_transparent_shadow: true,
			homogeneous_volume: false,
			volume_sampling: 2,
			volume_interpolation: 0,
			volume_step_rate: 1.0,
			displacement_method: 0,
		}
	}
}

/// Viewport display values used when nodes are not exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportDisplay {
	/// Solid-mode diffuse color.
	pub diffuse_color: [f32; 3],
	/// Solid-mode roughness.
	pub roughness: f32,
	/// Solid-mode metallic.
	pub metallic: f32,
}

impl Default for ViewportDisplay {
	fn default() -> Self {
		Self {
			diffuse_color: [0.8, 0.8, 0.8],
			roughness: 0.4,
			metallic: 0.0,
		}
	}
}

/// One material as dumped by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
	/// Material name.
	pub name: String,
	/// Whether the node tree drives shading.
	#[serde(default)]
	pub use_nodes: bool,
	/// Shader node tree.
	#[serde(default)]
	pub node_tree: Option<NodeTree>,
	/// Render settings.
	#[serde(default)]
	pub settings: MaterialSettings,
	/// Viewport display values.
	#[serde(default)]
	pub viewport: ViewportDisplay,
}

impl Material {
	/// Create a node-driven material.
	pub fn with_tree(name: impl Into<String>, tree: NodeTree) -> Self {
		Self {
			name: name.into(),
			use_nodes: true,
			node_tree: Some(tree),
			settings: MaterialSettings::default(),
			viewport: ViewportDisplay::default(),
		}
	}

	/// Node tree when it drives shading.
	pub fn active_tree(&self) -> Option<&NodeTree> {
		if self.use_nodes { self.node_tree.as_ref() } else { None }
	}
}

/// Materials and node groups read from one dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShaderDocument {
	/// Materials in dump order.
	#[serde(default)]
	pub materials: Vec<Material>,
	/// Node-group library.
	#[serde(default)]
	pub node_groups: GroupLibrary,
	/// Compression the document was read with.
	#[serde(skip)]
	pub compression: Compression,
}

impl ShaderDocument {
	/// Open a JSON or zstd-compressed JSON document.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = std::fs::read(path)?;
		Self::from_bytes(raw)
	}

	/// Parse a document from raw bytes, detecting compression by magic.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		let mut document: Self = serde_json::from_slice(&bytes)?;
		document.compression = compression;
		document.normalize();
		Ok(document)
	}

	/// Parse a plain JSON document.
	pub fn from_json_str(text: &str) -> Result<Self> {
		let mut document: Self = serde_json::from_str(text)?;
		document.normalize();
		Ok(document)
	}

	/// Material by name.
	pub fn material(&self, name: &str) -> Result<&Material> {
		self.materials
			.iter()
			.find(|material| material.name == name)
			.ok_or_else(|| ShadeError::MaterialNotFound { name: name.to_owned() })
	}

	fn normalize(&mut self) {
		for tree in self.materials.iter_mut().filter_map(|material| material.node_tree.as_mut()) {
			tree.normalize();
		}
		for tree in self.node_groups.values_mut() {
			tree.normalize();
		}
	}
}

#[cfg(test)]
mod tests;
