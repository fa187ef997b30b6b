use serde::{Deserialize, Serialize};

use crate::shade::{Image, ImageUser};

/// Typed parameter block attached to a node, shaped by its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeStorage {
	/// Image texture settings.
	Image(ImageTexture),
	/// Environment texture settings.
	Environment(EnvironmentTexture),
	/// Sky model settings.
	Sky {
		/// Sky model code.
		#[serde(default)]
		sky_model: i32,
		/// Sun direction.
		#[serde(default)]
		sun_direction: [f32; 3],
		/// Atmospheric turbidity.
		#[serde(default)]
		turbidity: f32,
		/// Ground albedo.
		#[serde(default)]
		ground_albedo: f32,
	},
	/// Brick pattern settings.
	Brick {
		/// Row offset frequency.
		#[serde(default)]
		offset_freq: i32,
		/// Row squash frequency.
		#[serde(default)]
		squash_freq: i32,
		/// Row offset amount.
		#[serde(default)]
		offset: f32,
		/// Row squash amount.
		#[serde(default)]
		squash: f32,
	},
	/// Gradient texture type.
	Gradient {
		/// Gradient type code.
		#[serde(default)]
		gradient_type: i32,
	},
	/// Noise texture dimensions.
	Noise {
		/// Dimension count code.
		#[serde(default)]
		dimensions: i32,
	},
	/// Voronoi texture settings.
	Voronoi {
		/// Dimension count code.
		#[serde(default)]
		dimensions: i32,
		/// Feature output code.
		#[serde(default)]
		feature: i32,
		/// Distance metric code.
		#[serde(default)]
		distance: i32,
	},
	/// Musgrave texture settings.
	Musgrave {
		/// Fractal type code.
		#[serde(default)]
		musgrave_type: i32,
		/// Dimension count code.
		#[serde(default)]
		dimensions: i32,
	},
	/// Wave texture settings.
	Wave {
		/// Wave type code.
		#[serde(default)]
		wave_type: i32,
		/// Bands direction code.
		#[serde(default)]
		bands_direction: i32,
		/// Rings direction code.
		#[serde(default)]
		rings_direction: i32,
		/// Profile code.
		#[serde(default)]
		wave_profile: i32,
	},
	/// Point density settings.
	PointDensity {
		/// Coordinate space code.
		#[serde(default)]
		space: i32,
		/// Interpolation code.
		#[serde(default)]
		interpolation: i32,
	},
	/// Magic texture depth.
	Magic {
		/// Iteration depth.
		#[serde(default)]
		depth: i32,
	},
	/// Color ramp stops.
	ColorRamp(ColorBand),
	/// Per-channel curves.
	Curves(CurveMapping),
	/// UV map selection.
	UvMap {
		/// UV layer name.
		#[serde(default)]
		uv_map: String,
	},
	/// Hue, saturation and value shifts.
	HueSat {
		/// Hue shift.
		#[serde(default)]
		hue: f32,
		/// Saturation scale.
		#[serde(default)]
		sat: f32,
		/// Value scale.
		#[serde(default)]
		val: f32,
	},
	/// Tangent generation settings.
	Tangent {
		/// Direction type code.
		#[serde(default)]
		direction_type: i32,
		/// Radial axis code.
		#[serde(default)]
		axis: i32,
		/// UV layer name.
		#[serde(default)]
		uv_map: String,
	},
	/// Normal map settings.
	NormalMap {
		/// Normal space code.
		#[serde(default)]
		space: i32,
		/// UV layer name.
		#[serde(default)]
		uv_map: String,
	},
	/// Vertex color layer.
	VertexColor {
		/// Color attribute name.
		#[serde(default)]
		layer_name: String,
	},
	/// IES light profile.
	Ies {
		/// Source mode code.
		#[serde(default)]
		mode: i32,
		/// Profile path.
		#[serde(default)]
		filepath: String,
	},
	/// Generic attribute lookup.
	Attribute {
		/// Attribute name.
		#[serde(default)]
		name: String,
	},
	/// Group instance target.
	Group {
		/// Name of the group tree in the document library.
		tree: String,
	},
}

/// Image texture node settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageTexture {
	/// Referenced image; `None` when the node has no image assigned.
	pub image: Option<Image>,
	/// Frame selection.
	pub image_user: ImageUser,
	/// Interpolation code.
	pub interpolation: i32,
	/// Projection code.
	pub projection: i32,
	/// Extension code.
	pub extension: i32,
}

/// Environment texture node settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentTexture {
	/// Referenced image; `None` when the node has no image assigned.
	pub image: Option<Image>,
	/// Frame selection.
	pub image_user: ImageUser,
	/// Projection code.
	pub projection: i32,
	/// Interpolation code.
	pub interpolation: i32,
}

/// Interpolation between color ramp stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RampInterpolation {
	/// Straight lines between stops.
	#[default]
	Linear,
	/// Smoothstep between stops.
	Ease,
	/// B-spline through stops.
	BSpline,
	/// Cardinal spline through stops.
	Cardinal,
	/// Hold the left stop's color.
	Constant,
}

/// One color ramp stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
	/// Stop position in `[0, 1]`.
	pub position: f32,
	/// RGBA color.
	pub color: [f32; 4],
}

/// Color ramp definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorBand {
	/// Interpolation mode.
	pub interpolation: RampInterpolation,
	/// Stops; evaluation sorts them by position.
	pub stops: Vec<ColorStop>,
}

/// One curve as control points in `[x, y]` form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveMap {
	/// Control points; evaluation sorts them by x.
	pub points: Vec<[f32; 2]>,
}

/// Curve set of an RGB or vector curves node.
///
/// Vector curves use indices 0 to 2 for X, Y and Z. RGB curves use 0 to 2 for R, G and B and
/// index 3 for the combined curve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveMapping {
	/// Curves by channel.
	pub curves: Vec<CurveMap>,
}
