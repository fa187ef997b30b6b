use serde::{Deserialize, Serialize};

/// Where an image's pixels come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
	/// Single still file.
	#[default]
	File,
	/// Numbered file sequence.
	Sequence,
	/// Movie container.
	Movie,
	/// Procedurally generated image.
	Generated,
	/// Render or compositor viewer buffer.
	Viewer,
	/// UDIM tile set.
	Tiled,
}

impl ImageSource {
	/// Integer code authored as `image_source`.
	pub fn code(self) -> i32 {
		match self {
			Self::File => 1,
			Self::Sequence => 2,
			Self::Movie => 3,
			Self::Generated => 4,
			Self::Viewer => 5,
			Self::Tiled => 6,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::File => "file",
			Self::Sequence => "sequence",
			Self::Movie => "movie",
			Self::Generated => "generated",
			Self::Viewer => "viewer",
			Self::Tiled => "tiled",
		}
	}

	/// Sources backed by a path on disk.
	pub fn is_file_backed(self) -> bool {
		matches!(self, Self::File | Self::Sequence | Self::Movie | Self::Tiled)
	}
}

/// Parameters of a generated image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedImage {
	/// Width in pixels.
	pub width: i32,
	/// Height in pixels.
	pub height: i32,
	/// Pattern code.
	pub gen_type: i32,
	/// Flag bits.
	pub gen_flag: i32,
	/// Fill color.
	pub color: [f32; 4],
}

impl Default for GeneratedImage {
	fn default() -> Self {
		Self {
			width: 1024,
			height: 1024,
			gen_type: 0,
			gen_flag: 0,
			color: [0.0, 0.0, 0.0, 1.0],
		}
	}
}

/// Image datablock referenced by texture nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
	/// Datablock name.
	pub name: String,
	/// Path as stored by the host, possibly with backslashes or frame digits.
	pub filepath: String,
	/// Pixel source.
	pub source: ImageSource,
	/// Alpha interpretation code.
	pub alpha_mode: i32,
	/// Color space name.
	pub colorspace: String,
	/// Movie deinterlace flag.
	pub deinterlace: bool,
	/// Generator parameters.
	pub generated: GeneratedImage,
}

/// Per-node frame selection for sequences and movies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageUser {
	/// Number of frames in the sequence.
	pub frames: i32,
	/// Scene frame the sequence starts at.
	pub start: i32,
	/// Offset added to the selected frame.
	pub offset: i32,
	/// Loop the sequence.
	pub cyclic: bool,
}

impl ImageUser {
	/// Map a scene frame to the image frame number.
	///
	/// Returns 0 for zero-length sequences; otherwise the frame is shifted by the start frame,
	/// wrapped when cyclic, clamped to `[0, frames]` and finally offset, saturating at the `i32` bounds.
	pub fn frame_for(&self, scene_frame: i32) -> i32 {
		let len = self.frames;
		if len <= 0 {
			return 0;
		}

		let len = i64::from(len);
		let mut frame = i64::from(scene_frame) - i64::from(self.start) + 1;
		if self.cyclic {
			frame = frame.rem_euclid(len);
			if frame == 0 {
				frame = len;
			}
		}
		frame = frame.clamp(0, len) + i64::from(self.offset);

		frame.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
	}
}

/// Normalize path separators to forward slashes.
pub fn normalize_separators(path: &str) -> String {
	path.replace('\\', "/")
}

/// Split `path` around the last digit run of its file stem.
///
/// Returns `(head, digits, tail)`. Without digits the split happens at the extension dot, or at
/// the end of the path when there is no extension.
pub fn split_frame_digits(path: &str) -> (&str, &str, &str) {
	let name_start = path.rfind('/').map_or(0, |idx| idx + 1);
	let name = &path[name_start..];
	let name_end = name_start + name.rfind('.').unwrap_or(name.len());

	let bytes = path.as_bytes();
	let mut end = name_end;
	while end > name_start && !bytes[end - 1].is_ascii_digit() {
		end -= 1;
	}
	if end == name_start {
		return (&path[..name_end], "", &path[name_end..]);
	}

	let mut start = end;
	while start > name_start && bytes[start - 1].is_ascii_digit() {
		start -= 1;
	}
	(&path[..start], &path[start..end], &path[end..])
}

/// Replace the frame digits of `path` with `frame`, zero-padded to the original digit count.
pub fn sequence_path(path: &str, frame: i32) -> String {
	let (head, digits, tail) = split_frame_digits(path);
	let width = digits.len();
	format!("{head}{:0width$}{tail}", frame.max(0))
}

/// Replace the tile digits of `path` with the `<UDIM>` marker.
pub fn udim_path(path: &str) -> String {
	let (head, _, tail) = split_frame_digits(path);
	format!("{head}<UDIM>{tail}")
}

#[cfg(test)]
mod tests;
