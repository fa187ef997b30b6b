use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::shade::NodeKind;

type Entries = &'static [(i32, &'static str)];

const NOISE_DIMENSIONS: Entries = &[(1, "1D"), (2, "2D"), (3, "3D"), (4, "4D")];
const VORONOI_FEATURE: Entries = &[(0, "f1"), (1, "f2"), (2, "smooth_f1"), (3, "distance_to_edge"), (4, "n_sphere_radius")];
const VORONOI_METRIC: Entries = &[(0, "euclidean"), (1, "manhattan"), (2, "chebychev"), (3, "minkowski")];
const MUSGRAVE_TYPE: Entries = &[
	(0, "multifractal"),
	(1, "fBM"),
	(2, "hybrid_multifractal"),
	(3, "ridged_multifractal"),
	(4, "hetero_terrain"),
];
const WAVE_TYPE: Entries = &[(0, "bands"), (1, "rings")];
const WAVE_BANDS_DIRECTION: Entries = &[(0, "x"), (1, "y"), (2, "z"), (3, "diagonal")];
const WAVE_RINGS_DIRECTION: Entries = &[(0, "x"), (1, "y"), (2, "z"), (3, "spherical")];
const WAVE_PROFILE: Entries = &[(0, "sine"), (1, "saw"), (2, "tri")];
const POINT_DENSITY_SPACE: Entries = &[(0, "object"), (1, "world")];
const INTERPOLATION: Entries = &[(0, "linear"), (1, "closest"), (2, "cubic"), (3, "smart")];
const MAPPING_TYPE: Entries = &[(0, "point"), (1, "texture"), (2, "vector"), (3, "normal")];
const MIX_RGB_TYPE: Entries = &[
	(0, "mix"),
	(1, "add"),
	(2, "multiply"),
	(3, "subtract"),
	(4, "screen"),
	(5, "divide"),
	(6, "difference"),
	(7, "darken"),
	(8, "lighten"),
	(9, "overlay"),
	(10, "dodge"),
	(11, "burn"),
	(12, "hue"),
	(13, "saturation"),
	(14, "value"),
	(15, "color"),
	(16, "soft_light"),
	(17, "linear_light"),
];
const SPACE: Entries = &[(0, "tangent"), (1, "object"), (2, "world"), (3, "blender_object"), (4, "blender_world")];
const SSS_FALLOFF: Entries = &[(1, "cubic"), (2, "gaussian"), (3, "burley"), (4, "random_walk")];
const HAIR_PARAMETRIZATION: Entries = &[(0, "Direct coloring"), (1, "Melanin concentration"), (2, "Absorption coefficient")];
const CLAMP_TYPE: Entries = &[(0, "minmax"), (1, "range")];
const MATH_TYPE: Entries = &[
	(0, "add"),
	(1, "subtract"),
	(2, "multiply"),
	(3, "divide"),
	(4, "sine"),
	(5, "cosine"),
	(6, "tangent"),
	(7, "arcsine"),
	(8, "arccosine"),
	(9, "arctangent"),
	(10, "power"),
	(11, "logarithm"),
	(12, "minimum"),
	(13, "maximum"),
	(14, "round"),
	(15, "less_than"),
	(16, "greater_than"),
	(17, "modulo"),
	(18, "absolute"),
	(19, "arctan2"),
	(20, "floor"),
	(21, "ceil"),
	(22, "fraction"),
	(23, "sqrt"),
	(24, "inversesqrt"),
	(25, "sign"),
	(26, "exponent"),
	(27, "radians"),
	(28, "degrees"),
	(29, "sinh"),
	(30, "cosh"),
	(31, "tanh"),
	(32, "trunc"),
	(33, "snap"),
	(34, "wrap"),
	(35, "compare"),
	(36, "multiply_add"),
	(37, "pingpong"),
	(38, "smoothmin"),
	(39, "smoothmax"),
];
const VECTOR_MATH_TYPE: Entries = &[
	(0, "add"),
	(1, "subtract"),
	(2, "multiply"),
	(3, "divide"),
	(4, "cross_product"),
	(5, "project"),
	(6, "reflect"),
	(7, "dot_product"),
	(8, "distance"),
	(9, "length"),
	(10, "scale"),
	(11, "normalize"),
	(12, "snap"),
	(13, "floor"),
	(14, "ceil"),
	(15, "modulo"),
	(16, "fraction"),
	(17, "absolute"),
	(18, "minimum"),
	(19, "maximum"),
	(20, "wrap"),
	(21, "sine"),
	(22, "cosine"),
	(23, "tangent"),
];
const VECTOR_ROTATE_TYPE: Entries = &[(0, "axis"), (1, "x_axis"), (2, "y_axis"), (3, "z_axis"), (4, "euler_xyz")];
const VECTOR_TRANSFORM_TYPE: Entries = &[(0, "vector"), (1, "point"), (2, "normal")];
const VECTOR_TRANSFORM_SPACE: Entries = &[(0, "world"), (1, "object"), (2, "camera")];
const TANGENT_DIRECTION: Entries = &[(0, "radial"), (1, "uv_map")];
const TANGENT_AXIS: Entries = &[(0, "x"), (1, "y"), (2, "z")];
const ALPHA_TYPE: Entries = &[(0, "unassociated"), (1, "associated"), (2, "channel_packed"), (3, "ignore")];
const IMAGE_EXTENSION: Entries = &[(0, "periodic"), (1, "clamp"), (2, "black")];
const IMAGE_PROJECTION: Entries = &[(0, "flat"), (1, "box"), (2, "sphere"), (3, "tube")];
const ENVIRONMENT_PROJECTION: Entries = &[(0, "equirectangular"), (1, "mirror_ball")];
const SKY_TYPE: Entries = &[(0, "preetham"), (1, "hosek_wilkie"), (2, "nishita_improved")];
const GRADIENT_TYPE: Entries = &[
	(0, "linear"),
	(1, "quadratic"),
	(2, "easing"),
	(3, "diagonal"),
	(4, "radial"),
	(5, "quadratic_sphere"),
	(6, "spherical"),
];
const GLOSSY_DISTRIBUTION: Entries = &[(0, "beckmann"), (1, "sharp"), (2, "GGX"), (3, "ashikhmin_shirley"), (4, "Multiscatter GGX")];
const ANISOTROPIC_DISTRIBUTION: Entries = &[(0, "beckmann"), (2, "GGX"), (3, "ashikhmin_shirley"), (4, "Multiscatter GGX")];
const GLASS_DISTRIBUTION: Entries = &[(0, "beckmann"), (1, "sharp"), (2, "GGX"), (4, "Multiscatter GGX")];
const REFRACTION_DISTRIBUTION: Entries = &[(0, "beckmann"), (1, "sharp"), (2, "GGX")];
const PRINCIPLED_DISTRIBUTION: Entries = &[(2, "GGX"), (4, "Multiscatter GGX")];
const PRINCIPLED_SUBSURFACE: Entries = &[(3, "burley"), (4, "random_walk")];
const TOON_COMPONENT: Entries = &[(0, "diffuse"), (1, "glossy")];
const HAIR_COMPONENT: Entries = &[(0, "reflection"), (1, "transmission")];

const DISPLACEMENT_METHOD: Entries = &[(0, "displacement_bump"), (1, "displacement_true"), (2, "displacement_both")];
const VOLUME_SAMPLING: Entries = &[
	(0, "volume_sampling_distance"),
	(1, "volume_sampling_equiangular"),
	(2, "volume_sampling_multiple_importance"),
];
const VOLUME_INTERPOLATION: Entries = &[(0, "volume_interpolation_linear"), (1, "volume_interpolation_cubic")];

/// Material attribute holding the displacement method.
pub const MATERIAL_DISPLACEMENT_METHOD: &str = "cycles:material:displacement_method";
/// Material attribute holding the volume sampling method.
pub const MATERIAL_VOLUME_SAMPLING: &str = "cycles:material:volume_sampling_method";
/// Material attribute holding the volume interpolation method.
pub const MATERIAL_VOLUME_INTERPOLATION: &str = "cycles:material:volume_interpolation_method";

const NODE_TABLES: &[(NodeKind, &str, Entries)] = &[
	(NodeKind::TexWhiteNoise, "Dimensions", NOISE_DIMENSIONS),
	(NodeKind::Math, "Type", MATH_TYPE),
	(NodeKind::VectorMath, "Type", VECTOR_MATH_TYPE),
	(NodeKind::Mapping, "Type", MAPPING_TYPE),
	(NodeKind::MixRgb, "Type", MIX_RGB_TYPE),
	(NodeKind::VectorDisplacement, "Space", SPACE),
	(NodeKind::Displacement, "Space", SPACE),
	(NodeKind::VectorRotate, "Type", VECTOR_ROTATE_TYPE),
	(NodeKind::VectorTransform, "Type", VECTOR_TRANSFORM_TYPE),
	(NodeKind::VectorTransform, "Space", VECTOR_TRANSFORM_SPACE),
	(NodeKind::SubsurfaceScattering, "Falloff", SSS_FALLOFF),
	(NodeKind::Clamp, "Type", CLAMP_TYPE),
	(NodeKind::BsdfGlossy, "Distribution", GLOSSY_DISTRIBUTION),
	(NodeKind::BsdfRefraction, "Distribution", REFRACTION_DISTRIBUTION),
	(NodeKind::BsdfAnisotropic, "Distribution", ANISOTROPIC_DISTRIBUTION),
	(NodeKind::BsdfGlass, "Distribution", GLASS_DISTRIBUTION),
	(NodeKind::BsdfPrincipled, "Distribution", PRINCIPLED_DISTRIBUTION),
	(NodeKind::BsdfPrincipled, "Subsurface_Method", PRINCIPLED_SUBSURFACE),
	(NodeKind::BsdfToon, "component", TOON_COMPONENT),
	(NodeKind::BsdfHair, "component", HAIR_COMPONENT),
	(NodeKind::BsdfHairPrincipled, "parametrization", HAIR_PARAMETRIZATION),
	(NodeKind::TexSky, "type", SKY_TYPE),
	(NodeKind::TexImage, "interpolation", INTERPOLATION),
	(NodeKind::TexImage, "projection", IMAGE_PROJECTION),
	(NodeKind::TexImage, "extension", IMAGE_EXTENSION),
	(NodeKind::TexImage, "alpha_type", ALPHA_TYPE),
	(NodeKind::TexEnvironment, "projection", ENVIRONMENT_PROJECTION),
	(NodeKind::TexEnvironment, "interpolation", INTERPOLATION),
	(NodeKind::TexEnvironment, "alpha_type", ALPHA_TYPE),
	(NodeKind::TexGradient, "type", GRADIENT_TYPE),
	(NodeKind::TexNoise, "dimensions", NOISE_DIMENSIONS),
	(NodeKind::TexVoronoi, "dimensions", NOISE_DIMENSIONS),
	(NodeKind::TexVoronoi, "feature", VORONOI_FEATURE),
	(NodeKind::TexVoronoi, "metric", VORONOI_METRIC),
	(NodeKind::TexMusgrave, "type", MUSGRAVE_TYPE),
	(NodeKind::TexMusgrave, "dimensions", NOISE_DIMENSIONS),
	(NodeKind::TexWave, "type", WAVE_TYPE),
	(NodeKind::TexWave, "profile", WAVE_PROFILE),
	(NodeKind::TexWave, "rings_direction", WAVE_RINGS_DIRECTION),
	(NodeKind::TexWave, "bands_direction", WAVE_BANDS_DIRECTION),
	(NodeKind::TexPointDensity, "space", POINT_DENSITY_SPACE),
	(NodeKind::TexPointDensity, "interpolation", INTERPOLATION),
	(NodeKind::Tangent, "direction_type", TANGENT_DIRECTION),
	(NodeKind::Tangent, "axis", TANGENT_AXIS),
	(NodeKind::NormalMap, "Space", SPACE),
];

const MATERIAL_TABLES: &[(&str, Entries)] = &[
	(MATERIAL_DISPLACEMENT_METHOD, DISPLACEMENT_METHOD),
	(MATERIAL_VOLUME_SAMPLING, VOLUME_SAMPLING),
	(MATERIAL_VOLUME_INTERPOLATION, VOLUME_INTERPOLATION),
];

static NODE_INDEX: LazyLock<HashMap<(NodeKind, &'static str), Entries>> =
	LazyLock::new(|| NODE_TABLES.iter().map(|(kind, field, entries)| ((*kind, *field), *entries)).collect());

static MATERIAL_INDEX: LazyLock<HashMap<&'static str, Entries>> = LazyLock::new(|| MATERIAL_TABLES.iter().copied().collect());

/// Canonical token for `code` of `field` on `kind`, if the table knows it.
pub fn lookup(kind: NodeKind, field: &str, code: i32) -> Option<&'static str> {
	find(NODE_INDEX.get(&(kind, field)).copied()?, code)
}

/// Canonical token for a material-level setting code.
pub fn material_lookup(field: &str, code: i32) -> Option<&'static str> {
	find(MATERIAL_INDEX.get(field).copied()?, code)
}

fn find(entries: Entries, code: i32) -> Option<&'static str> {
	entries.iter().find(|(value, _)| *value == code).map(|(_, token)| *token)
}

/// An enum field as authored: a canonical token or the raw code when no token is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EnumValue {
	/// Known code.
	Token(&'static str),
	/// Unknown code, authored verbatim.
	Raw(i32),
}

impl EnumValue {
	/// Resolve a node field code.
	pub fn for_node(kind: NodeKind, field: &str, code: i32) -> Self {
		lookup(kind, field, code).map_or(Self::Raw(code), Self::Token)
	}

	/// Resolve a material setting code.
	pub fn for_material(field: &str, code: i32) -> Self {
		material_lookup(field, code).map_or(Self::Raw(code), Self::Token)
	}
}

/// One enum table as exposed for listing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TokenTable {
	/// Owning node kind; `None` for material settings.
	pub kind: Option<NodeKind>,
	/// Field or attribute name the table applies to.
	pub field: &'static str,
	/// `(code, token)` pairs.
	pub entries: &'static [(i32, &'static str)],
}

/// Every node table followed by every material table.
pub fn token_tables() -> impl Iterator<Item = TokenTable> {
	let nodes = NODE_TABLES.iter().map(|(kind, field, entries)| TokenTable {
		kind: Some(*kind),
		field: *field,
		entries: *entries,
	});
	let materials = MATERIAL_TABLES.iter().map(|(field, entries)| TokenTable {
		kind: None,
		field: *field,
		entries: *entries,
	});
	nodes.chain(materials)
}
