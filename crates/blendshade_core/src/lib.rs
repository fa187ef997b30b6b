//! Public library API for translating Blender shader node trees into USD shade networks.

/// Node-graph model, flattening, translation, and scene-description output.
pub mod shade;
