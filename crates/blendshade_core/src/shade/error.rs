use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ShadeError>;

/// Errors produced while loading documents and translating materials.
#[derive(Debug, Error)]
pub enum ShadeError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Document JSON failed to parse.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Unknown leading document magic.
	#[error("unsupported compression or not a shader document (magic={magic:?})")]
	UnknownMagic {
		/// First up-to-4 bytes of the stream.
		magic: [u8; 4],
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Requested material name is not present in the document.
	#[error("material not found: {name}")]
	MaterialNotFound {
		/// Requested material name.
		name: String,
	},
	/// A texture-bearing node references no image.
	#[error("image texture has not been specified for texture node {node}")]
	MissingResource {
		/// Name of the offending node.
		node: String,
	},
	/// Group expansion nested deeper than the configured limit.
	#[error("node group {group} nested deeper than {max_depth} levels")]
	GroupRecursion {
		/// Group tree whose expansion hit the limit.
		group: String,
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Prim path text is malformed.
	#[error("invalid prim path: {path}")]
	InvalidPrimPath {
		/// Original path string.
		path: String,
	},
	/// Animated texture frame range is inverted or not finite.
	#[error("invalid animated texture frame range {start}..={end}")]
	InvalidFrameRange {
		/// Requested first output frame.
		start: f64,
		/// Requested last output frame.
		end: f64,
	},
	/// Scene-description sink rejected an operation.
	#[error("sink: {message}")]
	Sink {
		/// Sink-provided failure description.
		message: String,
	},
}
