//! Rendering constants

/// Snap marker (sphere) rendering constants
pub mod marker {
    /// Number of horizontal segments for sphere
    pub const SEGMENTS: u32 = 16;
    /// Number of vertical rings for sphere
    pub const RINGS: u32 = 12;
}
