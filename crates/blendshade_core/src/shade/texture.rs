//! Resolution of image references into authored texture inputs.

use serde::Serialize;
use tracing::{debug, warn};

use crate::shade::{ExportConfig, GeneratedImage, Image, ImageSource, ImageUser, Result, ShadeError, ShaderUnit, Value, ValueType, normalize_separators, sequence_path, udim_path};

/// File path authored for a texture.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TexturePath {
	/// One path for every frame.
	Static(String),
	/// One path per output frame.
	Sampled(Vec<(f64, String)>),
}

/// Sequence and movie playback parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SequenceInfo {
	/// Frame count.
	pub num_frames: i32,
	/// Scene frame the sequence starts at.
	pub start_frame: i32,
	/// Frame offset.
	pub frame_offset: i32,
	/// Loop playback.
	pub cyclic: bool,
	/// Movie deinterlace flag; `None` for sequences.
	pub deinterlace: Option<bool>,
}

/// A texture reference expanded into the values to author.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTexture {
	/// Image source.
	pub source: ImageSource,
	/// Path for file-backed sources.
	pub path: Option<TexturePath>,
	/// Playback parameters for sequences and movies with a path.
	pub sequence: Option<SequenceInfo>,
	/// Generator parameters for generated images.
	pub generated: Option<GeneratedImage>,
}

/// Expand the image of texture node `node` into a path, a sampled path sequence or generator values.
///
/// Sequences resolve the image frame through `user`; with animated export on, one sample is keyed
/// at each integer output frame of `[anim_tex_start, anim_tex_end]`. Movies always author the
/// current frame's path.
pub fn resolve_texture(node: &str, image: Option<&Image>, user: &ImageUser, config: &ExportConfig) -> Result<ResolvedTexture> {
	let Some(image) = image else {
		return Err(ShadeError::MissingResource { node: node.to_owned() });
	};

	let mut resolved = ResolvedTexture {
		source: image.source,
		path: None,
		sequence: None,
		generated: None,
	};

	match image.source {
		source if source.is_file_backed() => {
			let path = normalize_separators(&image.filepath);
			if path.is_empty() {
				warn!(node, image = %image.name, "image has an empty file path");
				resolved.path = Some(TexturePath::Static(String::new()));
				return Ok(resolved);
			}

			resolved.path = Some(match source {
				ImageSource::Tiled => TexturePath::Static(udim_path(&path)),
				ImageSource::Sequence | ImageSource::Movie => {
					resolved.sequence = Some(SequenceInfo {
						num_frames: user.frames,
						start_frame: user.start,
						frame_offset: user.offset,
						cyclic: user.cyclic,
						deinterlace: (source == ImageSource::Movie).then_some(image.deinterlace),
					});
					frame_paths(&path, source, user, config)?
				}
				_ => TexturePath::Static(path),
			});
		}
		ImageSource::Generated => resolved.generated = Some(image.generated.clone()),
		_ => debug!(node, source = image.source.as_str(), "image source has no authored path"),
	}

	Ok(resolved)
}

fn frame_paths(path: &str, source: ImageSource, user: &ImageUser, config: &ExportConfig) -> Result<TexturePath> {
	if source == ImageSource::Movie {
		return Ok(TexturePath::Static(path.to_owned()));
	}
	if !config.export_animated_textures {
		let frame = user.frame_for(config.current_frame as i32);
		return Ok(TexturePath::Static(sequence_path(path, frame)));
	}

	let (first, last) = config.animated_frames()?;
	let samples = (first..=last).map(|time| (f64::from(time), sequence_path(path, user.frame_for(time)))).collect();
	Ok(TexturePath::Sampled(samples))
}

impl ResolvedTexture {
	/// Author the resolved values on `unit`, naming the path input `asset_input`.
	pub fn write(&self, unit: &mut ShaderUnit, asset_input: &str) {
		unit.set("image_source", Value::Int(self.source.code()));

		if let Some(sequence) = &self.sequence {
			unit.set("num_frames", Value::Int(sequence.num_frames));
			unit.set("start_frame", Value::Int(sequence.start_frame));
			unit.set("frame_offset", Value::Int(sequence.frame_offset));
			unit.set("cyclic", Value::Bool(sequence.cyclic));
			if let Some(deinterlace) = sequence.deinterlace {
				unit.set("deinterlace", Value::Bool(deinterlace));
			}
		}

		match &self.path {
			Some(TexturePath::Static(path)) => unit.set(asset_input, Value::Asset(path.clone())),
			Some(TexturePath::Sampled(samples)) => {
				let samples = samples.iter().map(|(time, path)| (*time, Value::Asset(path.clone()))).collect();
				unit.set_samples(asset_input, ValueType::Asset, samples);
			}
			None => {}
		}

		if let Some(generated) = &self.generated {
			unit.set("gen_tex_x", Value::Int(generated.width));
			unit.set("gen_tex_y", Value::Int(generated.height));
			unit.set("gen_tex_type", Value::Int(generated.gen_type));
			unit.set("gen_tex_flag", Value::Int(generated.gen_flag));
			unit.set("gen_tex_color", Value::Float4(generated.color));
		}
	}
}

#[cfg(test)]
mod tests;
