//! Scene Grid Core
//!
//! Ground-plane reference grid and snapping helpers for a 3D scene editor:
//! - Grid: visibility, spacing/extent, line batches, snapping
//! - LineBatch: pen-style line segment collection
//! - SceneGraph: scenegraph abstraction the grid attaches to
//! - GridConfig: serializable grid settings

pub mod config;
pub mod constants;
pub mod grid;
pub mod layout;
pub mod line_batch;
pub mod scene;
pub mod snap;

pub use config::*;
pub use constants::*;
pub use grid::*;
pub use layout::*;
pub use line_batch::*;
pub use scene::*;
pub use snap::*;
