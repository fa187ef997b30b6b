mod compression;
mod config;
mod document;
mod error;
mod export;
mod flatten;
mod image;
mod kind;
mod link;
mod network;
mod node;
mod path;
mod preview;
mod ramp;
mod sink;
mod sockets;
mod stage;
mod storage;
mod template;
mod texture;
mod tokens;
mod translate;
mod unit;
mod value;

/// Compression detection for shader documents.
pub use compression::{Compression, ZSTD_MAGIC, decode_bytes};
/// Export and flattening options.
pub use config::{ExportConfig, FlattenOptions, MAX_ANIMATED_FRAMES};
/// Shader document, materials and the group library.
pub use document::{GroupLibrary, Material, MaterialSettings, ShaderDocument, ViewportDisplay};
/// Error and result aliases.
pub use error::{Result, ShadeError};
/// Material export entry points.
pub use export::{NATIVE_SCOPE, VIEWPORT_SHADER, build_approximate_surface, build_native_mirror, build_viewport_surface, export_material};
/// Group inlining into a flat node arena.
pub use flatten::{FlatGraph, FlatLink, flatten};
/// Image datablocks and file path rules.
pub use image::{GeneratedImage, Image, ImageSource, ImageUser, normalize_separators, sequence_path, split_frame_digits, udim_path};
/// Closed node type enumeration.
pub use kind::NodeKind;
/// Link wiring and terminal binding.
pub use link::resolve_links;
/// Material network data model.
pub use network::{MaterialAttribute, MaterialNetwork, RENDER_CONTEXT, RenderTerminals, TerminalBinding, UnitScope};
/// Node graph model.
pub use node::{Link, Node, NodeTree, Socket, SocketType, SocketValue};
/// Prim paths and identifier sanitizing.
pub use path::{PrimPath, input_identifier, make_valid_identifier};
/// Approximate preview surface synthesis.
pub use preview::{FALLBACK_READER, PREVIEW_SCOPE, PREVIEW_SURFACE_ID, PRIMVAR_READER_ID, PreviewSurface, UV_TEXTURE_ID, synthesize_preview};
/// Ramp and curve baking.
pub use ramp::BAKE_RESOLUTION;
/// Scene-description sink interface.
pub use sink::{PrimKind, SceneSink, TerminalKind};
/// Socket renames for multi-slot nodes.
pub use sockets::{input_name, output_name};
/// In-memory sink.
pub use stage::{MemoryStage, Specifier, StageAttr, StageAttribute, StagePrim};
/// Typed node parameter blocks.
pub use storage::{ColorBand, ColorStop, CurveMap, CurveMapping, EnvironmentTexture, ImageTexture, NodeStorage, RampInterpolation};
/// Built-in socket layouts.
pub use template::socket_template;
/// Texture resource resolution.
pub use texture::{ResolvedTexture, SequenceInfo, TexturePath, resolve_texture};
/// Enum token tables.
pub use tokens::{
	EnumValue, MATERIAL_DISPLACEMENT_METHOD, MATERIAL_VOLUME_INTERPOLATION, MATERIAL_VOLUME_SAMPLING, TokenTable, lookup, material_lookup, token_tables,
};
/// Node translation.
pub use translate::{node_identifier, translate_graph, translate_node};
/// Shader units and their inputs.
pub use unit::{InputValue, ShaderInput, ShaderUnit};
/// Authored value types.
pub use value::{Value, ValueType};
