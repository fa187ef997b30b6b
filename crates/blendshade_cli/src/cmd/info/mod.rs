use std::path::PathBuf;

use blendshade::shade::{Material, Result, ShaderDocument};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print the materials and node groups of one document.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;
	let document = ShaderDocument::open(&path)?;

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			compression: document.compression.as_str().to_owned(),
			materials: document.materials.iter().map(material_json).collect(),
			node_groups: document
				.node_groups
				.iter()
				.map(|(name, tree)| GroupJson {
					name: name.clone(),
					nodes: tree.nodes.len(),
					links: tree.links.len(),
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("compression: {}", document.compression.as_str());
	println!("materials: {}", document.materials.len());
	for material in &document.materials {
		let row = material_json(material);
		println!("  {}: use_nodes={} nodes={} links={} muted={}", row.name, row.use_nodes, row.nodes, row.links, row.muted);
	}
	println!("node_groups: {}", document.node_groups.len());
	for (name, tree) in &document.node_groups {
		println!("  {name}: nodes={} links={}", tree.nodes.len(), tree.links.len());
	}

	Ok(())
}

fn material_json(material: &Material) -> MaterialJson {
	let tree = material.node_tree.as_ref();
	MaterialJson {
		name: material.name.clone(),
		use_nodes: material.use_nodes,
		nodes: tree.map_or(0, |tree| tree.nodes.len()),
		links: tree.map_or(0, |tree| tree.links.len()),
		muted: tree.map_or(0, |tree| tree.nodes.iter().filter(|node| node.muted).count()),
	}
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: String,
	materials: Vec<MaterialJson>,
	node_groups: Vec<GroupJson>,
}

#[derive(serde::Serialize)]
struct MaterialJson {
	name: String,
	use_nodes: bool,
	nodes: usize,
	links: usize,
	muted: usize,
}

#[derive(serde::Serialize)]
struct GroupJson {
	name: String,
	nodes: usize,
	links: usize,
}

#[cfg(test)]
mod tests;
