//! Scene Grid Renderer
//!
//! WGPU rendering for the reference grid defined in `sg-core`.
//!
//! # Module Structure
//!
//! ```text
//! sg-renderer/
//! ├── constants.rs   # Marker mesh resolution, buffer labels
//! ├── pipeline.rs    # Pipeline states and creation
//! ├── vertex.rs      # Vertex formats
//! ├── grid.rs        # Grid lines and backing quad
//! └── marker.rs      # Snap marker sphere
//! ```

pub mod constants;
pub mod grid;
pub mod marker;
pub mod pipeline;
pub mod vertex;

pub use grid::{GridRenderer, back_quad_vertices, line_vertices};
pub use marker::{MarkerInstance, SnapMarkerRenderer};
pub use pipeline::{
    PipelineState, PipelineTargets, create_camera_bind_group, create_pipeline, create_shader,
};
pub use vertex::{PositionColorVertex, PositionVertex};
