use std::path::PathBuf;

use blendshade::shade::{FlatGraph, FlattenOptions, Result, ShaderDocument, flatten};
use tracing::debug;

use crate::cmd::util::{dot_escape, emit_json, select_materials};

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Format {
	Text,
	Dot,
	Json,
}

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long = "material")]
	pub materials: Vec<String>,
	#[arg(long, value_enum, default_value_t = Format::Text)]
	pub format: Format,
	#[arg(long)]
	pub max_depth: Option<u32>,
}

/// Inline groups of each selected material and print the resulting graph.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		materials,
		format,
		max_depth,
	} = args;

	let document = ShaderDocument::open(&path)?;
	let mut options = FlattenOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	let mut graphs = Vec::new();
	for material in select_materials(&document, &materials)? {
		let Some(tree) = material.active_tree() else {
			debug!(material = %material.name, "material does not use nodes; skipping");
			continue;
		};
		graphs.push((material.name.clone(), flatten(tree, &document.node_groups, &options)?));
	}

	match format {
		Format::Text => graphs.iter().for_each(|(name, graph)| print_text(name, graph)),
		Format::Dot => graphs.iter().for_each(|(name, graph)| print_dot(name, graph)),
		Format::Json => {
			let payload: Vec<FlattenJson<'_>> = graphs.iter().map(|(material, graph)| FlattenJson { material, graph }).collect();
			emit_json(&payload);
		}
	}

	Ok(())
}

fn print_text(material: &str, graph: &FlatGraph) {
	println!("material: {material}");
	println!("nodes: {}", graph.nodes.len());
	for (idx, node) in graph.nodes.iter().enumerate() {
		let muted = if node.muted { " muted" } else { "" };
		println!("  [{idx}] {} ({}){muted}", node.name, node.kind.idname());
	}
	println!("links: {}", graph.links.len());
	for link in &graph.links {
		println!(
			"  {}.{} -> {}.{}",
			graph.nodes[link.from].name, link.from_socket, graph.nodes[link.to].name, link.to_socket
		);
	}
}

fn print_dot(material: &str, graph: &FlatGraph) {
	println!("digraph \"{}\" {{", dot_escape(material));
	println!("  rankdir=LR;");
	for (idx, node) in graph.nodes.iter().enumerate() {
		let style = if node.muted { ", style=dashed" } else { "" };
		println!("  n{idx} [label=\"{}\\n{}\"{style}];", dot_escape(&node.name), node.kind.idname());
	}
	for link in &graph.links {
		println!(
			"  n{} -> n{} [label=\"{} -> {}\"];",
			link.from,
			link.to,
			dot_escape(&link.from_socket),
			dot_escape(&link.to_socket)
		);
	}
	println!("}}");
}

#[derive(serde::Serialize)]
struct FlattenJson<'a> {
	material: &'a str,
	#[serde(flatten)]
	graph: &'a FlatGraph,
}
