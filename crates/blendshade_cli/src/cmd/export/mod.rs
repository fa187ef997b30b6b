use std::path::PathBuf;

use blendshade::shade::{ExportConfig, MaterialNetwork, MemoryStage, Result, ShaderDocument, export_material};
use tracing::info;

use crate::cmd::util::{emit_json, select_materials};

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Format {
	Usda,
	Json,
}

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long = "material")]
	pub materials: Vec<String>,
	#[arg(long, value_enum, default_value_t = Format::Usda)]
	pub format: Format,
	#[arg(long)]
	pub config: Option<PathBuf>,
	#[command(flatten)]
	pub flags: ConfigFlags,
}

/// Flags layered over the default or file-loaded config.
#[derive(clap::Args)]
pub struct ConfigFlags {
	#[arg(long)]
	pub animated: bool,
	#[arg(long)]
	pub frame_start: Option<f64>,
	#[arg(long)]
	pub frame_end: Option<f64>,
	#[arg(long)]
	pub current_frame: Option<f64>,
	#[arg(long)]
	pub uv_set: Option<String>,
	#[arg(long)]
	pub uv_to_st: bool,
	#[arg(long)]
	pub overrides: bool,
	#[arg(long)]
	pub no_preview: bool,
	#[arg(long)]
	pub no_native: bool,
	#[arg(long)]
	pub material_root: Option<String>,
	#[arg(long)]
	pub max_depth: Option<u32>,
}

impl ConfigFlags {
	fn apply(self, config: &mut ExportConfig) {
		if self.animated {
			config.export_animated_textures = true;
		}
		if let Some(start) = self.frame_start {
			config.anim_tex_start = start;
		}
		if let Some(end) = self.frame_end {
			config.anim_tex_end = end;
		}
		if let Some(frame) = self.current_frame {
			config.current_frame = frame;
		}
		if let Some(uv_set) = self.uv_set {
			config.default_uv_set = uv_set;
		}
		if self.uv_to_st {
			config.convert_uv_to_st = true;
		}
		if self.overrides {
			config.export_as_overrides = true;
		}
		if self.no_preview {
			config.generate_preview_surface = false;
		}
		if self.no_native {
			config.generate_native_mirror = false;
		}
		if let Some(root) = self.material_root {
			config.material_root = root;
		}
		if let Some(max_depth) = self.max_depth {
			config.flatten.max_depth = max_depth;
		}
	}
}

/// Export the selected materials into one in-memory stage and print it.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		materials,
		format,
		config,
		flags,
	} = args;

	let mut config = match config {
		Some(config) => ExportConfig::from_json_file(config)?,
		None => ExportConfig::default(),
	};
	flags.apply(&mut config);
	config.validate()?;

	let document = ShaderDocument::open(&path)?;
	let mut stage = MemoryStage::new();
	let mut networks = Vec::new();
	for material in select_materials(&document, &materials)? {
		networks.push(export_material(material, &document.node_groups, &config, &mut stage)?);
	}
	info!(path = %path.display(), materials = networks.len(), prims = stage.paths().count(), "export finished");

	match format {
		Format::Usda => print!("{}", stage.to_usda()),
		Format::Json => emit_json(&ExportJson {
			materials: &networks,
			stage: &stage,
		}),
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct ExportJson<'a> {
	materials: &'a [MaterialNetwork],
	stage: &'a MemoryStage,
}
