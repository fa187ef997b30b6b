use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::shade::{PrimPath, Result, ShadeError};

/// Group expansion limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenOptions {
	/// Maximum group nesting depth before expansion fails.
	pub max_depth: u32,
}

impl Default for FlattenOptions {
	fn default() -> Self {
		Self { max_depth: 32 }
	}
}

/// Most output frames an animated texture may sample.
pub const MAX_ANIMATED_FRAMES: f64 = 100_000.0;

/// Export switches and frame settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
	/// Author one time sample per output frame for sequence textures.
	pub export_animated_textures: bool,
	/// First output frame for animated textures.
	pub anim_tex_start: f64,
	/// Last output frame for animated textures, inclusive.
	pub anim_tex_end: f64,
	/// Scene frame used for non-animated sequence and movie paths.
	pub current_frame: f64,
	/// UV primvar name bound by synthesized readers.
	pub default_uv_set: String,
	/// Bind readers to `st` instead of the UV map name.
	pub convert_uv_to_st: bool,
	/// Author `over` specifiers instead of `def`.
	pub export_as_overrides: bool,
	/// Build the approximate preview surface.
	pub generate_preview_surface: bool,
	/// Build the renderer-native mirror.
	pub generate_native_mirror: bool,
	/// Parent prim of exported materials.
	pub material_root: String,
	/// Group expansion limits.
	pub flatten: FlattenOptions,
}

impl Default for ExportConfig {
	fn default() -> Self {
		Self {
			export_animated_textures: false,
			anim_tex_start: 1.0,
			anim_tex_end: 1.0,
			current_frame: 1.0,
			default_uv_set: "UVMap".to_owned(),
			convert_uv_to_st: false,
			export_as_overrides: false,
			generate_preview_surface: true,
			generate_native_mirror: true,
			material_root: "/materials".to_owned(),
			flatten: FlattenOptions::default(),
		}
	}
}

impl ExportConfig {
	/// Load a config from a JSON file; missing fields take their defaults.
	pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
		let raw = std::fs::read(path)?;
		Ok(serde_json::from_slice(&raw)?)
	}

	/// Check the frame range and material root.
	pub fn validate(&self) -> Result<()> {
		if self.export_animated_textures {
			self.animated_frames()?;
		}
		self.material_root_path().map(|_| ())
	}

	/// Whole output frames sampled by animated textures, first and last inclusive.
	pub fn animated_frames(&self) -> Result<(i32, i32)> {
		let (start, end) = (self.anim_tex_start, self.anim_tex_end);
		if !start.is_finite() || !end.is_finite() || start > end || end - start > MAX_ANIMATED_FRAMES {
			return Err(ShadeError::InvalidFrameRange { start, end });
		}
		Ok((start.ceil() as i32, end.floor() as i32))
	}

	/// Parsed material root.
	pub fn material_root_path(&self) -> Result<PrimPath> {
		PrimPath::parse(&self.material_root)
	}

	/// UV set name bound when no UV map node names one.
	pub fn fallback_uv_set(&self) -> &str {
		if self.convert_uv_to_st { "st" } else { &self.default_uv_set }
	}
}
