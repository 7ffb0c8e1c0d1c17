//! Global constants for sg-core

/// Default grid extent (half-size in each direction)
pub const DEFAULT_GRID_SIZE: f32 = 100.0;

/// Default distance between adjacent grid lines
pub const DEFAULT_GRID_SPACING: f32 = 5.0;

/// Default angular snap increment in degrees
pub const DEFAULT_SNAP_ANGLE: f32 = 15.0;

/// Every n-th line from the center is drawn as a major line
pub const MAJOR_LINE_INTERVAL: i32 = 5;

/// Upper bound on lines drawn on each side of the origin
pub const MAX_GRID_LINES: u32 = 10_000;

/// Model loaded for the translucent plane behind the lines
pub const GRID_BACK_MODEL: &str = "models/misc/gridBack";

/// Model loaded for the snap marker
pub const SNAP_MARKER_MODEL: &str = "models/misc/sphere";

/// Scenegraph node names
pub mod names {
    /// Grid root node
    pub const ROOT: &str = "DirectGrid";
    /// Backing quad
    pub const BACK: &str = "gridBack";
    /// Snap marker sphere
    pub const SNAP_MARKER: &str = "gridSnapMarker";
    /// Minor line batch
    pub const MINOR_LINES: &str = "minorLines";
    /// Major line batch
    pub const MAJOR_LINES: &str = "majorLines";
    /// Center line batch
    pub const CENTER_LINES: &str = "centerLines";
}

/// Default colors (RGBA)
pub mod colors {
    /// Minor and major lines (light blue)
    pub const LINE: [f32; 4] = [0.3, 0.55, 1.0, 1.0];
    /// Center lines (red, fully transparent as in the classic editor)
    pub const CENTER: [f32; 4] = [1.0, 0.0, 0.0, 0.0];
    /// Backing quad (half transparent gray)
    pub const BACK: [f32; 4] = [0.5, 0.5, 0.5, 0.5];
    /// Snap marker (red)
    pub const MARKER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

/// Default line thicknesses in pixels
pub mod thickness {
    /// Minor lines
    pub const MINOR: f32 = 1.0;
    /// Major lines
    pub const MAJOR: f32 = 5.0;
    /// Center lines
    pub const CENTER: f32 = 3.0;
}

/// Default uniform scale of the snap marker
pub const DEFAULT_MARKER_SCALE: f32 = 0.3;
