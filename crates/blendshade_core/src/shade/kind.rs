use serde::{Deserialize, Serialize};

/// Closed enumeration of shader node types, named by Blender idname in documents.
///
/// Idnames the enumeration does not know deserialize to [`NodeKind::Unknown`]; such nodes
/// translate with their host-supplied type name and generic socket defaults only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeKind {
	/// Material Output.
	#[serde(rename = "ShaderNodeOutputMaterial")]
	OutputMaterial,
	/// World Output.
	#[serde(rename = "ShaderNodeOutputWorld")]
	OutputWorld,
	/// Light Output.
	#[serde(rename = "ShaderNodeOutputLight")]
	OutputLight,
	/// Principled BSDF.
	#[serde(rename = "ShaderNodeBsdfPrincipled")]
	BsdfPrincipled,
	/// Diffuse BSDF.
	#[serde(rename = "ShaderNodeBsdfDiffuse")]
	BsdfDiffuse,
	/// Glossy BSDF.
	#[serde(rename = "ShaderNodeBsdfGlossy")]
	BsdfGlossy,
	/// Glass BSDF.
	#[serde(rename = "ShaderNodeBsdfGlass")]
	BsdfGlass,
	/// Refraction BSDF.
	#[serde(rename = "ShaderNodeBsdfRefraction")]
	BsdfRefraction,
	/// Translucent BSDF.
	#[serde(rename = "ShaderNodeBsdfTranslucent")]
	BsdfTranslucent,
	/// Transparent BSDF.
	#[serde(rename = "ShaderNodeBsdfTransparent")]
	BsdfTransparent,
	/// Velvet BSDF.
	#[serde(rename = "ShaderNodeBsdfVelvet")]
	BsdfVelvet,
	/// Toon BSDF.
	#[serde(rename = "ShaderNodeBsdfToon")]
	BsdfToon,
	/// Anisotropic BSDF.
	#[serde(rename = "ShaderNodeBsdfAnisotropic")]
	BsdfAnisotropic,
	/// Hair BSDF.
	#[serde(rename = "ShaderNodeBsdfHair")]
	BsdfHair,
	/// Principled Hair BSDF.
	#[serde(rename = "ShaderNodeBsdfHairPrincipled")]
	BsdfHairPrincipled,
	/// Subsurface Scattering.
	#[serde(rename = "ShaderNodeSubsurfaceScattering")]
	SubsurfaceScattering,
	/// Emission.
	#[serde(rename = "ShaderNodeEmission")]
	Emission,
	/// Background.
	#[serde(rename = "ShaderNodeBackground")]
	Background,
	/// Holdout.
	#[serde(rename = "ShaderNodeHoldout")]
	Holdout,
	/// Volume Absorption.
	#[serde(rename = "ShaderNodeVolumeAbsorption")]
	VolumeAbsorption,
	/// Volume Scatter.
	#[serde(rename = "ShaderNodeVolumeScatter")]
	VolumeScatter,
	/// Principled Volume.
	#[serde(rename = "ShaderNodeVolumePrincipled")]
	VolumePrincipled,
	/// Mix Shader.
	#[serde(rename = "ShaderNodeMixShader")]
	MixShader,
	/// Add Shader.
	#[serde(rename = "ShaderNodeAddShader")]
	AddShader,
	/// Image Texture.
	#[serde(rename = "ShaderNodeTexImage")]
	TexImage,
	/// Environment Texture.
	#[serde(rename = "ShaderNodeTexEnvironment")]
	TexEnvironment,
	/// Sky Texture.
	#[serde(rename = "ShaderNodeTexSky")]
	TexSky,
	/// Noise Texture.
	#[serde(rename = "ShaderNodeTexNoise")]
	TexNoise,
	/// Voronoi Texture.
	#[serde(rename = "ShaderNodeTexVoronoi")]
	TexVoronoi,
	/// Musgrave Texture.
	#[serde(rename = "ShaderNodeTexMusgrave")]
	TexMusgrave,
	/// Wave Texture.
	#[serde(rename = "ShaderNodeTexWave")]
	TexWave,
	/// Magic Texture.
	#[serde(rename = "ShaderNodeTexMagic")]
	TexMagic,
	/// Checker Texture.
	#[serde(rename = "ShaderNodeTexChecker")]
	TexChecker,
	/// Brick Texture.
	#[serde(rename = "ShaderNodeTexBrick")]
	TexBrick,
	/// Gradient Texture.
	#[serde(rename = "ShaderNodeTexGradient")]
	TexGradient,
	/// White Noise Texture.
	#[serde(rename = "ShaderNodeTexWhiteNoise")]
	TexWhiteNoise,
	/// Point Density.
	#[serde(rename = "ShaderNodeTexPointDensity")]
	TexPointDensity,
	/// IES Texture.
	#[serde(rename = "ShaderNodeTexIES")]
	TexIes,
	/// Mix.
	#[serde(rename = "ShaderNodeMixRGB")]
	MixRgb,
	/// RGB Curves.
	#[serde(rename = "ShaderNodeRGBCurve")]
	RgbCurve,
	/// Invert.
	#[serde(rename = "ShaderNodeInvert")]
	Invert,
	/// Light Falloff.
	#[serde(rename = "ShaderNodeLightFalloff")]
	LightFalloff,
	/// Hue Saturation Value.
	#[serde(rename = "ShaderNodeHueSaturation")]
	HueSaturation,
	/// Gamma.
	#[serde(rename = "ShaderNodeGamma")]
	Gamma,
	/// Bright Contrast.
	#[serde(rename = "ShaderNodeBrightContrast")]
	BrightContrast,
	/// Mapping.
	#[serde(rename = "ShaderNodeMapping")]
	Mapping,
	/// Bump.
	#[serde(rename = "ShaderNodeBump")]
	Bump,
	/// Normal Map.
	#[serde(rename = "ShaderNodeNormalMap")]
	NormalMap,
	/// Normal.
	#[serde(rename = "ShaderNodeNormal")]
	Normal,
	/// Vector Curves.
	#[serde(rename = "ShaderNodeVectorCurve")]
	VectorCurve,
	/// Vector Displacement.
	#[serde(rename = "ShaderNodeVectorDisplacement")]
	VectorDisplacement,
	/// Displacement.
	#[serde(rename = "ShaderNodeDisplacement")]
	Displacement,
	/// Vector Rotate.
	#[serde(rename = "ShaderNodeVectorRotate")]
	VectorRotate,
	/// Vector Transform.
	#[serde(rename = "ShaderNodeVectorTransform")]
	VectorTransform,
	/// Math.
	#[serde(rename = "ShaderNodeMath")]
	Math,
	/// Vector Math.
	#[serde(rename = "ShaderNodeVectorMath")]
	VectorMath,
	/// ColorRamp.
	#[serde(rename = "ShaderNodeValToRGB")]
	ValToRgb,
	/// RGB to BW.
	#[serde(rename = "ShaderNodeRGBToBW")]
	RgbToBw,
	/// Separate RGB.
	#[serde(rename = "ShaderNodeSeparateRGB")]
	SeparateRgb,
	/// Combine RGB.
	#[serde(rename = "ShaderNodeCombineRGB")]
	CombineRgb,
	/// Separate XYZ.
	#[serde(rename = "ShaderNodeSeparateXYZ")]
	SeparateXyz,
	/// Combine XYZ.
	#[serde(rename = "ShaderNodeCombineXYZ")]
	CombineXyz,
	/// Separate HSV.
	#[serde(rename = "ShaderNodeSeparateHSV")]
	SeparateHsv,
	/// Combine HSV.
	#[serde(rename = "ShaderNodeCombineHSV")]
	CombineHsv,
	/// Clamp.
	#[serde(rename = "ShaderNodeClamp")]
	Clamp,
	/// Map Range.
	#[serde(rename = "ShaderNodeMapRange")]
	MapRange,
	/// Blackbody.
	#[serde(rename = "ShaderNodeBlackbody")]
	Blackbody,
	/// Wavelength.
	#[serde(rename = "ShaderNodeWavelength")]
	Wavelength,
	/// Shader to RGB.
	#[serde(rename = "ShaderNodeShaderToRGB")]
	ShaderToRgb,
	/// Texture Coordinate.
	#[serde(rename = "ShaderNodeTexCoord")]
	TexCoord,
	/// UV Map.
	#[serde(rename = "ShaderNodeUVMap")]
	UvMap,
	/// Attribute.
	#[serde(rename = "ShaderNodeAttribute")]
	Attribute,
	/// Vertex Color.
	#[serde(rename = "ShaderNodeVertexColor")]
	VertexColor,
	/// Tangent.
	#[serde(rename = "ShaderNodeTangent")]
	Tangent,
	/// Value.
	#[serde(rename = "ShaderNodeValue")]
	Value,
	/// RGB.
	#[serde(rename = "ShaderNodeRGB")]
	Rgb,
	/// Fresnel.
	#[serde(rename = "ShaderNodeFresnel")]
	Fresnel,
	/// Layer Weight.
	#[serde(rename = "ShaderNodeLayerWeight")]
	LayerWeight,
	/// Geometry.
	#[serde(rename = "ShaderNodeNewGeometry")]
	NewGeometry,
	/// Object Info.
	#[serde(rename = "ShaderNodeObjectInfo")]
	ObjectInfo,
	/// Particle Info.
	#[serde(rename = "ShaderNodeParticleInfo")]
	ParticleInfo,
	/// Hair Info.
	#[serde(rename = "ShaderNodeHairInfo")]
	HairInfo,
	/// Light Path.
	#[serde(rename = "ShaderNodeLightPath")]
	LightPath,
	/// Camera Data.
	#[serde(rename = "ShaderNodeCameraData")]
	CameraData,
	/// Wireframe.
	#[serde(rename = "ShaderNodeWireframe")]
	Wireframe,
	/// Ambient Occlusion.
	#[serde(rename = "ShaderNodeAmbientOcclusion")]
	AmbientOcclusion,
	/// Bevel.
	#[serde(rename = "ShaderNodeBevel")]
	Bevel,
	/// Group.
	#[serde(rename = "ShaderNodeGroup")]
	Group,
	/// Group Input.
	#[serde(rename = "NodeGroupInput")]
	GroupInput,
	/// Group Output.
	#[serde(rename = "NodeGroupOutput")]
	GroupOutput,
	/// Reroute.
	#[serde(rename = "NodeReroute")]
	Reroute,
	/// Frame.
	#[serde(rename = "NodeFrame")]
	Frame,
	/// Any type not listed above.
	#[serde(other)]
	Unknown,
}

impl NodeKind {
	/// Every known kind, in declaration order.
	pub const ALL: &'static [NodeKind] = &[
		NodeKind::OutputMaterial,
		NodeKind::OutputWorld,
		NodeKind::OutputLight,
		NodeKind::BsdfPrincipled,
		NodeKind::BsdfDiffuse,
		NodeKind::BsdfGlossy,
		NodeKind::BsdfGlass,
		NodeKind::BsdfRefraction,
		NodeKind::BsdfTranslucent,
		NodeKind::BsdfTransparent,
		NodeKind::BsdfVelvet,
		NodeKind::BsdfToon,
		NodeKind::BsdfAnisotropic,
		NodeKind::BsdfHair,
		NodeKind::BsdfHairPrincipled,
		NodeKind::SubsurfaceScattering,
		NodeKind::Emission,
		NodeKind::Background,
		NodeKind::Holdout,
		NodeKind::VolumeAbsorption,
		NodeKind::VolumeScatter,
		NodeKind::VolumePrincipled,
		NodeKind::MixShader,
		NodeKind::AddShader,
		NodeKind::TexImage,
		NodeKind::TexEnvironment,
		NodeKind::TexSky,
		NodeKind::TexNoise,
		NodeKind::TexVoronoi,
		NodeKind::TexMusgrave,
		NodeKind::TexWave,
		NodeKind::TexMagic,
		NodeKind::TexChecker,
		NodeKind::TexBrick,
		NodeKind::TexGradient,
		NodeKind::TexWhiteNoise,
		NodeKind::TexPointDensity,
		NodeKind::TexIes,
		NodeKind::MixRgb,
		NodeKind::RgbCurve,
		NodeKind::Invert,
		NodeKind::LightFalloff,
		NodeKind::HueSaturation,
		NodeKind::Gamma,
		NodeKind::BrightContrast,
		NodeKind::Mapping,
		NodeKind::Bump,
		NodeKind::NormalMap,
		NodeKind::Normal,
		NodeKind::VectorCurve,
		NodeKind::VectorDisplacement,
		NodeKind::Displacement,
		NodeKind::VectorRotate,
		NodeKind::VectorTransform,
		NodeKind::Math,
		NodeKind::VectorMath,
		NodeKind::ValToRgb,
		NodeKind::RgbToBw,
		NodeKind::SeparateRgb,
		NodeKind::CombineRgb,
		NodeKind::SeparateXyz,
		NodeKind::CombineXyz,
		NodeKind::SeparateHsv,
		NodeKind::CombineHsv,
		NodeKind::Clamp,
		NodeKind::MapRange,
		NodeKind::Blackbody,
		NodeKind::Wavelength,
		NodeKind::ShaderToRgb,
		NodeKind::TexCoord,
		NodeKind::UvMap,
		NodeKind::Attribute,
		NodeKind::VertexColor,
		NodeKind::Tangent,
		NodeKind::Value,
		NodeKind::Rgb,
		NodeKind::Fresnel,
		NodeKind::LayerWeight,
		NodeKind::NewGeometry,
		NodeKind::ObjectInfo,
		NodeKind::ParticleInfo,
		NodeKind::HairInfo,
		NodeKind::LightPath,
		NodeKind::CameraData,
		NodeKind::Wireframe,
		NodeKind::AmbientOcclusion,
		NodeKind::Bevel,
		NodeKind::Group,
		NodeKind::GroupInput,
		NodeKind::GroupOutput,
		NodeKind::Reroute,
		NodeKind::Frame,
	];

	/// Blender idname used in documents.
	pub fn idname(self) -> &'static str {
		match self {
			Self::OutputMaterial => "ShaderNodeOutputMaterial",
			Self::OutputWorld => "ShaderNodeOutputWorld",
			Self::OutputLight => "ShaderNodeOutputLight",
			Self::BsdfPrincipled => "ShaderNodeBsdfPrincipled",
			Self::BsdfDiffuse => "ShaderNodeBsdfDiffuse",
			Self::BsdfGlossy => "ShaderNodeBsdfGlossy",
			Self::BsdfGlass => "ShaderNodeBsdfGlass",
			Self::BsdfRefraction => "ShaderNodeBsdfRefraction",
			Self::BsdfTranslucent => "ShaderNodeBsdfTranslucent",
			Self::BsdfTransparent => "ShaderNodeBsdfTransparent",
			Self::BsdfVelvet => "ShaderNodeBsdfVelvet",
			Self::BsdfToon => "ShaderNodeBsdfToon",
			Self::BsdfAnisotropic => "ShaderNodeBsdfAnisotropic",
			Self::BsdfHair => "ShaderNodeBsdfHair",
			Self::BsdfHairPrincipled => "ShaderNodeBsdfHairPrincipled",
			Self::SubsurfaceScattering => "ShaderNodeSubsurfaceScattering",
			Self::Emission => "ShaderNodeEmission",
			Self::Background => "ShaderNodeBackground",
			Self::Holdout => "ShaderNodeHoldout",
			Self::VolumeAbsorption => "ShaderNodeVolumeAbsorption",
			Self::VolumeScatter => "ShaderNodeVolumeScatter",
			Self::VolumePrincipled => "ShaderNodeVolumePrincipled",
			Self::MixShader => "ShaderNodeMixShader",
			Self::AddShader => "ShaderNodeAddShader",
			Self::TexImage => "ShaderNodeTexImage",
			Self::TexEnvironment => "ShaderNodeTexEnvironment",
			Self::TexSky => "ShaderNodeTexSky",
			Self::TexNoise => "ShaderNodeTexNoise",
			Self::TexVoronoi => "ShaderNodeTexVoronoi",
			Self::TexMusgrave => "ShaderNodeTexMusgrave",
			Self::TexWave => "ShaderNodeTexWave",
			Self::TexMagic => "ShaderNodeTexMagic",
			Self::TexChecker => "ShaderNodeTexChecker",
			Self::TexBrick => "ShaderNodeTexBrick",
			Self::TexGradient => "ShaderNodeTexGradient",
			Self::TexWhiteNoise => "ShaderNodeTexWhiteNoise",
			Self::TexPointDensity => "ShaderNodeTexPointDensity",
			Self::TexIes => "ShaderNodeTexIES",
			Self::MixRgb => "ShaderNodeMixRGB",
			Self::RgbCurve => "ShaderNodeRGBCurve",
			Self::Invert => "ShaderNodeInvert",
			Self::LightFalloff => "ShaderNodeLightFalloff",
			Self::HueSaturation => "ShaderNodeHueSaturation",
			Self::Gamma => "ShaderNodeGamma",
			Self::BrightContrast => "ShaderNodeBrightContrast",
			Self::Mapping => "ShaderNodeMapping",
			Self::Bump => "ShaderNodeBump",
			Self::NormalMap => "ShaderNodeNormalMap",
			Self::Normal => "ShaderNodeNormal",
			Self::VectorCurve => "ShaderNodeVectorCurve",
			Self::VectorDisplacement => "ShaderNodeVectorDisplacement",
			Self::Displacement => "ShaderNodeDisplacement",
			Self::VectorRotate => "ShaderNodeVectorRotate",
			Self::VectorTransform => "ShaderNodeVectorTransform",
			Self::Math => "ShaderNodeMath",
			Self::VectorMath => "ShaderNodeVectorMath",
			Self::ValToRgb => "ShaderNodeValToRGB",
			Self::RgbToBw => "ShaderNodeRGBToBW",
			Self::SeparateRgb => "ShaderNodeSeparateRGB",
			Self::CombineRgb => "ShaderNodeCombineRGB",
			Self::SeparateXyz => "ShaderNodeSeparateXYZ",
			Self::CombineXyz => "ShaderNodeCombineXYZ",
			Self::SeparateHsv => "ShaderNodeSeparateHSV",
			Self::CombineHsv => "ShaderNodeCombineHSV",
			Self::Clamp => "ShaderNodeClamp",
			Self::MapRange => "ShaderNodeMapRange",
			Self::Blackbody => "ShaderNodeBlackbody",
			Self::Wavelength => "ShaderNodeWavelength",
			Self::ShaderToRgb => "ShaderNodeShaderToRGB",
			Self::TexCoord => "ShaderNodeTexCoord",
			Self::UvMap => "ShaderNodeUVMap",
			Self::Attribute => "ShaderNodeAttribute",
			Self::VertexColor => "ShaderNodeVertexColor",
			Self::Tangent => "ShaderNodeTangent",
			Self::Value => "ShaderNodeValue",
			Self::Rgb => "ShaderNodeRGB",
			Self::Fresnel => "ShaderNodeFresnel",
			Self::LayerWeight => "ShaderNodeLayerWeight",
			Self::NewGeometry => "ShaderNodeNewGeometry",
			Self::ObjectInfo => "ShaderNodeObjectInfo",
			Self::ParticleInfo => "ShaderNodeParticleInfo",
			Self::HairInfo => "ShaderNodeHairInfo",
			Self::LightPath => "ShaderNodeLightPath",
			Self::CameraData => "ShaderNodeCameraData",
			Self::Wireframe => "ShaderNodeWireframe",
			Self::AmbientOcclusion => "ShaderNodeAmbientOcclusion",
			Self::Bevel => "ShaderNodeBevel",
			Self::Group => "ShaderNodeGroup",
			Self::GroupInput => "NodeGroupInput",
			Self::GroupOutput => "NodeGroupOutput",
			Self::Reroute => "NodeReroute",
			Self::Frame => "NodeFrame",
			Self::Unknown => "Unknown",
		}
	}

	/// Human-readable type name shown in the node editor header.
	pub fn ui_name(self) -> &'static str {
		match self {
			Self::OutputMaterial => "Material Output",
			Self::OutputWorld => "World Output",
			Self::OutputLight => "Light Output",
			Self::BsdfPrincipled => "Principled BSDF",
			Self::BsdfDiffuse => "Diffuse BSDF",
			Self::BsdfGlossy => "Glossy BSDF",
			Self::BsdfGlass => "Glass BSDF",
			Self::BsdfRefraction => "Refraction BSDF",
			Self::BsdfTranslucent => "Translucent BSDF",
			Self::BsdfTransparent => "Transparent BSDF",
			Self::BsdfVelvet => "Velvet BSDF",
			Self::BsdfToon => "Toon BSDF",
			Self::BsdfAnisotropic => "Anisotropic BSDF",
			Self::BsdfHair => "Hair BSDF",
			Self::BsdfHairPrincipled => "Principled Hair BSDF",
			Self::SubsurfaceScattering => "Subsurface Scattering",
			Self::Emission => "Emission",
			Self::Background => "Background",
			Self::Holdout => "Holdout",
			Self::VolumeAbsorption => "Volume Absorption",
			Self::VolumeScatter => "Volume Scatter",
			Self::VolumePrincipled => "Principled Volume",
			Self::MixShader => "Mix Shader",
			Self::AddShader => "Add Shader",
			Self::TexImage => "Image Texture",
			Self::TexEnvironment => "Environment Texture",
			Self::TexSky => "Sky Texture",
			Self::TexNoise => "Noise Texture",
			Self::TexVoronoi => "Voronoi Texture",
			Self::TexMusgrave => "Musgrave Texture",
			Self::TexWave => "Wave Texture",
			Self::TexMagic => "Magic Texture",
			Self::TexChecker => "Checker Texture",
			Self::TexBrick => "Brick Texture",
			Self::TexGradient => "Gradient Texture",
			Self::TexWhiteNoise => "White Noise Texture",
			Self::TexPointDensity => "Point Density",
			Self::TexIes => "IES Texture",
			Self::MixRgb => "Mix",
			Self::RgbCurve => "RGB Curves",
			Self::Invert => "Invert",
			Self::LightFalloff => "Light Falloff",
			Self::HueSaturation => "Hue Saturation Value",
			Self::Gamma => "Gamma",
			Self::BrightContrast => "Bright Contrast",
			Self::Mapping => "Mapping",
			Self::Bump => "Bump",
			Self::NormalMap => "Normal Map",
			Self::Normal => "Normal",
			Self::VectorCurve => "Vector Curves",
			Self::VectorDisplacement => "Vector Displacement",
			Self::Displacement => "Displacement",
			Self::VectorRotate => "Vector Rotate",
			Self::VectorTransform => "Vector Transform",
			Self::Math => "Math",
			Self::VectorMath => "Vector Math",
			Self::ValToRgb => "ColorRamp",
			Self::RgbToBw => "RGB to BW",
			Self::SeparateRgb => "Separate RGB",
			Self::CombineRgb => "Combine RGB",
			Self::SeparateXyz => "Separate XYZ",
			Self::CombineXyz => "Combine XYZ",
			Self::SeparateHsv => "Separate HSV",
			Self::CombineHsv => "Combine HSV",
			Self::Clamp => "Clamp",
			Self::MapRange => "Map Range",
			Self::Blackbody => "Blackbody",
			Self::Wavelength => "Wavelength",
			Self::ShaderToRgb => "Shader to RGB",
			Self::TexCoord => "Texture Coordinate",
			Self::UvMap => "UV Map",
			Self::Attribute => "Attribute",
			Self::VertexColor => "Vertex Color",
			Self::Tangent => "Tangent",
			Self::Value => "Value",
			Self::Rgb => "RGB",
			Self::Fresnel => "Fresnel",
			Self::LayerWeight => "Layer Weight",
			Self::NewGeometry => "Geometry",
			Self::ObjectInfo => "Object Info",
			Self::ParticleInfo => "Particle Info",
			Self::HairInfo => "Hair Info",
			Self::LightPath => "Light Path",
			Self::CameraData => "Camera Data",
			Self::Wireframe => "Wireframe",
			Self::AmbientOcclusion => "Ambient Occlusion",
			Self::Bevel => "Bevel",
			Self::Group => "Group",
			Self::GroupInput => "Group Input",
			Self::GroupOutput => "Group Output",
			Self::Reroute => "Reroute",
			Self::Frame => "Frame",
			Self::Unknown => "Unknown",
		}
	}

	/// Look up a kind by idname.
	pub fn from_idname(idname: &str) -> Option<Self> {
		Self::ALL.iter().copied().find(|kind| kind.idname() == idname)
	}

	/// Group instance node.
	pub fn is_group(self) -> bool {
		self == Self::Group
	}

	/// Group boundary pass-through node.
	pub fn is_group_boundary(self) -> bool {
		matches!(self, Self::GroupInput | Self::GroupOutput)
	}

	/// Editor-only layout node.
	pub fn is_layout(self) -> bool {
		matches!(self, Self::Reroute | Self::Frame)
	}

	/// Node whose inputs bind a material's final results.
	pub fn is_material_output(self) -> bool {
		self == Self::OutputMaterial
	}

	/// Surface node eligible to seed the approximate preview surface.
	pub fn is_preview_surface(self) -> bool {
		matches!(self, Self::BsdfPrincipled | Self::BsdfDiffuse)
	}

	/// Texture node that samples an image resource.
	pub fn is_image_texture(self) -> bool {
		matches!(self, Self::TexImage | Self::TexEnvironment)
	}

	/// Closure-combination node with a single unified output.
	pub fn is_closure_combiner(self) -> bool {
		matches!(self, Self::MixShader | Self::AddShader)
	}
}
