//! Ground-plane reference grid with position and angle snapping
//!
//! The grid draws center, major and minor lines on the XY plane together
//! with a translucent backing quad, and snaps points to the line spacing for
//! manipulation tools. It holds handles to its scenegraph nodes; every call
//! that touches the scene receives the scene explicitly.

use std::fmt;

use glam::Vec3;

use crate::config::{ConfigError, GridConfig, is_positive};
use crate::constants::{GRID_BACK_MODEL, SNAP_MARKER_MODEL, names};
use crate::layout::{GridLayout, LineClass};
use crate::line_batch::LineBatch;
use crate::scene::{SceneError, SceneGraph};
use crate::snap::{round_to, snap_point};

/// Grid-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("Grid spacing must be positive, got {0}")]
    InvalidSpacing(f32),
    #[error("Grid extent must be positive, got {0}")]
    InvalidExtent(f32),
    #[error("Snap angle must be positive, got {0}")]
    InvalidSnapAngle(f32),
    #[error("Grid of extent {extent} and spacing {spacing} needs more than {max} lines per side")]
    TooManyLines { extent: f32, spacing: f32, max: u32 },
    #[error("Grid of extent {extent} and spacing {spacing} has no drawable lines")]
    DegenerateLayout { extent: f32, spacing: f32 },
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Reference grid and snapping helper
#[derive(Debug, Clone)]
pub struct Grid<N> {
    root: N,
    back: N,
    marker: N,

    enabled: bool,
    extent: f32,
    layout: GridLayout,
    snap_angle: f32,
    snap_to_position: bool,
    snap_to_orientation: bool,
    last_snapped_point: Vec3,

    center: LineBatch,
    major: LineBatch,
    minor: LineBatch,

    back_color: [f32; 4],
    marker_color: [f32; 4],
    marker_scale: f32,
    revision: u64,
}

impl<N: Copy + Eq + fmt::Debug> Grid<N> {
    /// Create a grid with default settings, enabled under `parent`.
    pub fn new<S>(scene: &mut S, parent: N) -> Result<Self, GridError>
    where
        S: SceneGraph<Node = N>,
    {
        Self::with_config(scene, parent, GridConfig::default())
    }

    /// Create a grid from `config`.
    ///
    /// The grid's nodes are built under the scene's hidden area. If
    /// `config.enabled` is set the grid is then enabled under `parent`,
    /// otherwise it stays hidden with its geometry already generated.
    pub fn with_config<S>(scene: &mut S, parent: N, config: GridConfig) -> Result<Self, GridError>
    where
        S: SceneGraph<Node = N>,
    {
        config.validate()?;
        let layout = GridLayout::compute(config.size, config.spacing)?;

        let hidden = scene.hidden();
        let root = scene.attach_new_node(hidden, names::ROOT)?;

        let back = scene.load_model(root, GRID_BACK_MODEL)?;
        scene.set_name(back, names::BACK)?;
        scene.set_color(back, config.back_color)?;

        let marker = scene.load_model(root, SNAP_MARKER_MODEL)?;
        scene.set_name(marker, names::SNAP_MARKER)?;
        scene.set_color(marker, config.marker_color)?;
        scene.set_scale(marker, config.marker_scale)?;

        let mut grid = Self {
            root,
            back,
            marker,
            enabled: false,
            extent: config.size,
            layout,
            snap_angle: config.snap_angle,
            snap_to_position: config.snap_to_position,
            snap_to_orientation: config.snap_to_orientation,
            last_snapped_point: Vec3::ZERO,
            center: LineBatch::new(names::CENTER_LINES)
                .with_color(config.center_color)
                .with_thickness(config.center_thickness),
            major: LineBatch::new(names::MAJOR_LINES)
                .with_color(config.major_color)
                .with_thickness(config.major_thickness),
            minor: LineBatch::new(names::MINOR_LINES)
                .with_color(config.minor_color)
                .with_thickness(config.minor_thickness),
            back_color: config.back_color,
            marker_color: config.marker_color,
            marker_scale: config.marker_scale,
            revision: 0,
        };

        if config.enabled {
            grid.enable(scene, parent)?;
        } else {
            grid.regenerate(scene, layout)?;
        }
        Ok(grid)
    }

    // ============== Visibility ==============

    /// Attach the grid under `parent` and regenerate its geometry.
    ///
    /// Calling this while already enabled re-parents again, which is harmless.
    /// The grid is attached last, so a failed call leaves it where it was.
    pub fn enable<S>(&mut self, scene: &mut S, parent: N) -> Result<(), GridError>
    where
        S: SceneGraph<Node = N>,
    {
        self.regenerate(scene, self.layout)?;
        scene.reparent(self.root, parent)?;
        if !self.enabled {
            tracing::info!("Grid enabled under {:?}", parent);
        }
        self.enabled = true;
        Ok(())
    }

    /// Move the grid to the scene's hidden area.
    pub fn disable<S>(&mut self, scene: &mut S) -> Result<(), GridError>
    where
        S: SceneGraph<Node = N>,
    {
        let hidden = scene.hidden();
        scene.reparent(self.root, hidden)?;
        if self.enabled {
            tracing::info!("Grid disabled");
        }
        self.enabled = false;
        Ok(())
    }

    /// Enable the grid if it is disabled, disable it otherwise.
    pub fn toggle<S>(&mut self, scene: &mut S, parent: N) -> Result<(), GridError>
    where
        S: SceneGraph<Node = N>,
    {
        if self.enabled {
            self.disable(scene)
        } else {
            self.enable(scene, parent)
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    // ============== Geometry parameters ==============

    /// Set the distance between grid lines and redraw.
    ///
    /// Non-positive or non-finite values, and values that would need more
    /// than [`MAX_GRID_LINES`](crate::constants::MAX_GRID_LINES) lines per
    /// side, are rejected without touching the current geometry.
    pub fn set_spacing<S>(&mut self, scene: &mut S, spacing: f32) -> Result<(), GridError>
    where
        S: SceneGraph<Node = N>,
    {
        if !is_positive(spacing) {
            return Err(GridError::InvalidSpacing(spacing));
        }
        let layout = GridLayout::compute(self.extent, spacing)?;
        self.regenerate(scene, layout)?;
        Ok(())
    }

    pub fn spacing(&self) -> f32 {
        self.layout.spacing()
    }

    /// Set the grid half-size and redraw.
    ///
    /// Same rejection rules as [`set_spacing`](Self::set_spacing).
    pub fn set_extent<S>(&mut self, scene: &mut S, extent: f32) -> Result<(), GridError>
    where
        S: SceneGraph<Node = N>,
    {
        if !is_positive(extent) {
            return Err(GridError::InvalidExtent(extent));
        }
        let layout = GridLayout::compute(extent, self.spacing())?;
        self.regenerate(scene, layout)?;
        self.extent = extent;
        Ok(())
    }

    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Current line count and rounded-out size
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    // ============== Snapping ==============

    pub fn set_snap_to_position(&mut self, snap: bool) {
        self.snap_to_position = snap;
    }

    pub fn snap_to_position(&self) -> bool {
        self.snap_to_position
    }

    pub fn set_snap_to_orientation(&mut self, snap: bool) {
        self.snap_to_orientation = snap;
    }

    pub fn snap_to_orientation(&self) -> bool {
        self.snap_to_orientation
    }

    /// Set the angular snap increment in degrees. The drawn grid is unaffected.
    pub fn set_snap_angle(&mut self, angle: f32) -> Result<(), GridError> {
        if !is_positive(angle) {
            return Err(GridError::InvalidSnapAngle(angle));
        }
        self.snap_angle = angle;
        Ok(())
    }

    pub fn snap_angle(&self) -> f32 {
        self.snap_angle
    }

    /// Snap `point` to the nearest grid intersection and move the marker there.
    ///
    /// With position snapping off the point is returned unchanged, but the
    /// marker still follows it.
    pub fn compute_snap_point<S>(&mut self, scene: &mut S, point: Vec3) -> Vec3
    where
        S: SceneGraph<Node = N>,
    {
        let snapped = if self.snap_to_position {
            snap_point(point, self.spacing())
        } else {
            point
        };

        self.last_snapped_point = snapped;
        if let Err(e) = scene.set_position(self.marker, snapped) {
            tracing::warn!("Failed to move snap marker: {}", e);
        }
        snapped
    }

    /// Round `angle` to the nearest multiple of the snap angle.
    ///
    /// This does not look at [`snap_to_orientation`](Self::snap_to_orientation);
    /// callers decide whether to apply it.
    pub fn compute_snap_angle(&self, angle: f32) -> f32 {
        round_to(angle, self.snap_angle)
    }

    /// Like [`compute_snap_angle`](Self::compute_snap_angle), but returns
    /// `angle` unchanged when orientation snapping is off.
    pub fn snap_angle_if_enabled(&self, angle: f32) -> f32 {
        if self.snap_to_orientation {
            self.compute_snap_angle(angle)
        } else {
            angle
        }
    }

    pub fn last_snapped_point(&self) -> Vec3 {
        self.last_snapped_point
    }

    // ============== Geometry ==============

    /// Rescale the backing quad, then rebuild all line batches for `layout`.
    ///
    /// The scene is touched first: if it fails, nothing on the grid changes.
    fn regenerate<S>(&mut self, scene: &mut S, layout: GridLayout) -> Result<(), SceneError>
    where
        S: SceneGraph<Node = N>,
    {
        let size = layout.scaled_size();
        scene.set_scale(self.back, size)?;

        self.center.reset();
        self.major.reset();
        self.minor.reset();

        for i in layout.indices() {
            let offset = layout.offset(i);
            let batch = match LineClass::classify(i) {
                LineClass::Center => &mut self.center,
                LineClass::Major => &mut self.major,
                LineClass::Minor => &mut self.minor,
            };
            batch.move_to(Vec3::new(offset, -size, 0.0));
            batch.draw_to(Vec3::new(offset, size, 0.0));
            batch.move_to(Vec3::new(-size, offset, 0.0));
            batch.draw_to(Vec3::new(size, offset, 0.0));
        }

        self.center.create();
        self.major.create();
        self.minor.create();
        self.layout = layout;
        self.revision += 1;

        tracing::debug!(
            "Regenerated grid: {} lines per side, size {}, segments center={} major={} minor={}",
            layout.line_count(),
            size,
            self.center.len(),
            self.major.len(),
            self.minor.len()
        );
        Ok(())
    }

    pub fn center_lines(&self) -> &LineBatch {
        &self.center
    }

    pub fn major_lines(&self) -> &LineBatch {
        &self.major
    }

    pub fn minor_lines(&self) -> &LineBatch {
        &self.minor
    }

    /// All batches in draw order: minor, major, center
    pub fn batches(&self) -> [&LineBatch; 3] {
        [&self.minor, &self.major, &self.center]
    }

    /// Uniform scale of the backing quad
    pub fn back_scale(&self) -> f32 {
        self.layout.scaled_size()
    }

    pub fn back_color(&self) -> [f32; 4] {
        self.back_color
    }

    pub fn marker_color(&self) -> [f32; 4] {
        self.marker_color
    }

    pub fn marker_scale(&self) -> f32 {
        self.marker_scale
    }

    /// Incremented every time the geometry is rebuilt
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ============== Nodes ==============

    pub fn root(&self) -> N {
        self.root
    }

    pub fn back(&self) -> N {
        self.back
    }

    pub fn marker(&self) -> N {
        self.marker
    }

    /// Snapshot of the current settings
    pub fn config(&self) -> GridConfig {
        GridConfig {
            enabled: self.enabled,
            size: self.extent,
            spacing: self.spacing(),
            snap_angle: self.snap_angle,
            snap_to_position: self.snap_to_position,
            snap_to_orientation: self.snap_to_orientation,
            minor_color: self.minor.color(),
            major_color: self.major.color(),
            center_color: self.center.color(),
            back_color: self.back_color,
            marker_color: self.marker_color,
            minor_thickness: self.minor.thickness(),
            major_thickness: self.major.thickness(),
            center_thickness: self.center.thickness(),
            marker_scale: self.marker_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_GRID_LINES;
    use crate::scene::{NodeId, SceneTree};

    fn setup() -> (SceneTree, Grid<NodeId>) {
        let mut scene = SceneTree::with_grid_models();
        let parent = scene.render();
        let grid = Grid::new(&mut scene, parent).unwrap();
        (scene, grid)
    }

    #[test]
    fn test_defaults() {
        let (_, grid) = setup();
        assert!(grid.is_enabled());
        assert_eq!(grid.extent(), 100.0);
        assert_eq!(grid.spacing(), 5.0);
        assert_eq!(grid.snap_angle(), 15.0);
        assert!(grid.snap_to_position());
        assert!(grid.snap_to_orientation());
        assert_eq!(grid.last_snapped_point(), Vec3::ZERO);
        assert_eq!(grid.revision(), 1);
    }

    #[test]
    fn test_segment_counts() {
        let (_, grid) = setup();
        // 41 lines: 1 center, 8 major, 32 minor; two segments each
        assert_eq!(grid.center_lines().len(), 2);
        assert_eq!(grid.major_lines().len(), 16);
        assert_eq!(grid.minor_lines().len(), 64);
        assert!(grid.batches().iter().all(|b| b.is_finalized()));
    }

    #[test]
    fn test_segments_span_scaled_size() {
        let mut scene = SceneTree::with_grid_models();
        let parent = scene.render();
        let config = GridConfig {
            size: 12.0,
            ..Default::default()
        };
        let grid = Grid::with_config(&mut scene, parent, config).unwrap();
        assert_eq!(grid.back_scale(), 15.0);

        for batch in grid.batches() {
            for segment in batch.segments() {
                assert_eq!(segment.start.z, 0.0);
                assert_eq!(segment.end.z, 0.0);
                assert_eq!(segment.length(), 30.0);
            }
        }
        let center = grid.center_lines().segments();
        assert_eq!(center[0].start, Vec3::new(0.0, -15.0, 0.0));
        assert_eq!(center[0].end, Vec3::new(0.0, 15.0, 0.0));
        assert_eq!(center[1].start, Vec3::new(-15.0, 0.0, 0.0));
        assert_eq!(center[1].end, Vec3::new(15.0, 0.0, 0.0));
    }

    #[test]
    fn test_back_scale_follows_parameters() {
        let (mut scene, mut grid) = setup();
        assert_eq!(scene.node(grid.back()).unwrap().scale, 100.0);

        grid.set_spacing(&mut scene, 3.0).unwrap();
        // ceil(100 / 3) = 34
        assert_eq!(grid.layout().line_count(), 34);
        assert_eq!(scene.node(grid.back()).unwrap().scale, 102.0);

        grid.set_extent(&mut scene, 10.0).unwrap();
        assert_eq!(scene.node(grid.back()).unwrap().scale, 12.0);
        assert_eq!(grid.revision(), 3);
    }

    #[test]
    fn test_invalid_spacing_leaves_state() {
        let (mut scene, mut grid) = setup();
        let before = grid.minor_lines().clone();
        let revision = grid.revision();

        assert_eq!(
            grid.set_spacing(&mut scene, 0.0),
            Err(GridError::InvalidSpacing(0.0))
        );
        assert!(grid.set_spacing(&mut scene, -1.0).is_err());
        assert!(grid.set_spacing(&mut scene, f32::INFINITY).is_err());

        assert_eq!(grid.spacing(), 5.0);
        assert_eq!(grid.revision(), revision);
        assert_eq!(grid.minor_lines(), &before);
    }

    #[test]
    fn test_invalid_extent_leaves_state() {
        let (mut scene, mut grid) = setup();
        assert_eq!(
            grid.set_extent(&mut scene, -5.0),
            Err(GridError::InvalidExtent(-5.0))
        );
        assert_eq!(grid.extent(), 100.0);
        assert_eq!(scene.node(grid.back()).unwrap().scale, 100.0);
    }

    #[test]
    fn test_too_many_lines_leaves_state() {
        let (mut scene, mut grid) = setup();
        let before = grid.minor_lines().clone();
        let revision = grid.revision();

        assert_eq!(
            grid.set_extent(&mut scene, 1e10),
            Err(GridError::TooManyLines {
                extent: 1e10,
                spacing: 5.0,
                max: MAX_GRID_LINES,
            })
        );
        assert!(matches!(
            grid.set_spacing(&mut scene, 1e-6),
            Err(GridError::TooManyLines { .. })
        ));

        assert_eq!(grid.extent(), 100.0);
        assert_eq!(grid.spacing(), 5.0);
        assert_eq!(grid.revision(), revision);
        assert_eq!(grid.minor_lines(), &before);
        assert_eq!(scene.node(grid.back()).unwrap().scale, 100.0);
    }

    #[test]
    fn test_line_limit_is_reachable() {
        let (mut scene, mut grid) = setup();
        grid.set_spacing(&mut scene, 1.0).unwrap();
        grid.set_extent(&mut scene, MAX_GRID_LINES as f32).unwrap();
        assert_eq!(grid.layout().line_count(), MAX_GRID_LINES);
        assert_eq!(grid.center_lines().len(), 2);
    }

    /// Scene that can be told to fail scale or reparent calls
    struct FlakyScene {
        tree: SceneTree,
        fail_scale: bool,
        fail_reparent: bool,
    }

    impl FlakyScene {
        fn new() -> Self {
            Self {
                tree: SceneTree::with_grid_models(),
                fail_scale: false,
                fail_reparent: false,
            }
        }

        fn refused() -> SceneError {
            SceneError::NodeNotFound("refused".to_string())
        }
    }

    impl SceneGraph for FlakyScene {
        type Node = NodeId;

        fn hidden(&self) -> NodeId {
            self.tree.hidden()
        }

        fn attach_new_node(&mut self, parent: NodeId, name: &str) -> Result<NodeId, SceneError> {
            self.tree.attach_new_node(parent, name)
        }

        fn load_model(&mut self, parent: NodeId, model: &str) -> Result<NodeId, SceneError> {
            self.tree.load_model(parent, model)
        }

        fn reparent(&mut self, node: NodeId, parent: NodeId) -> Result<(), SceneError> {
            if self.fail_reparent {
                return Err(Self::refused());
            }
            self.tree.reparent(node, parent)
        }

        fn set_name(&mut self, node: NodeId, name: &str) -> Result<(), SceneError> {
            self.tree.set_name(node, name)
        }

        fn set_position(&mut self, node: NodeId, position: Vec3) -> Result<(), SceneError> {
            self.tree.set_position(node, position)
        }

        fn set_scale(&mut self, node: NodeId, scale: f32) -> Result<(), SceneError> {
            if self.fail_scale {
                return Err(Self::refused());
            }
            self.tree.set_scale(node, scale)
        }

        fn set_color(&mut self, node: NodeId, color: [f32; 4]) -> Result<(), SceneError> {
            self.tree.set_color(node, color)
        }
    }

    #[test]
    fn test_scene_failure_leaves_parameters() {
        let mut scene = FlakyScene::new();
        let parent = scene.tree.render();
        let mut grid = Grid::new(&mut scene, parent).unwrap();
        let before = grid.minor_lines().clone();
        let revision = grid.revision();

        scene.fail_scale = true;
        assert_eq!(
            grid.set_spacing(&mut scene, 2.0),
            Err(GridError::Scene(FlakyScene::refused()))
        );
        assert!(grid.set_extent(&mut scene, 40.0).is_err());

        assert_eq!(grid.spacing(), 5.0);
        assert_eq!(grid.extent(), 100.0);
        assert_eq!(grid.revision(), revision);
        assert_eq!(grid.minor_lines(), &before);
        assert_eq!(grid.back_scale(), 100.0);
        assert_eq!(scene.tree.node(grid.back()).unwrap().scale, 100.0);
    }

    #[test]
    fn test_failed_enable_stays_disabled() {
        let mut scene = FlakyScene::new();
        let parent = scene.tree.render();
        let config = GridConfig {
            enabled: false,
            ..Default::default()
        };
        let mut grid = Grid::with_config(&mut scene, parent, config).unwrap();

        scene.fail_reparent = true;
        assert!(grid.enable(&mut scene, parent).is_err());
        assert!(!grid.is_enabled());
        assert!(!scene.tree.is_visible(grid.root()));

        scene.fail_reparent = false;
        scene.fail_scale = true;
        assert!(grid.enable(&mut scene, parent).is_err());
        assert!(!grid.is_enabled());
        assert!(!scene.tree.is_visible(grid.root()));

        scene.fail_scale = false;
        grid.enable(&mut scene, parent).unwrap();
        assert!(grid.is_enabled());
        assert!(scene.tree.is_visible(grid.root()));
    }

    #[test]
    fn test_snap_point() {
        let (mut scene, mut grid) = setup();
        let snapped = grid.compute_snap_point(&mut scene, Vec3::new(7.0, -3.0, 12.0));
        assert_eq!(snapped, Vec3::new(5.0, -5.0, 10.0));
        assert_eq!(grid.last_snapped_point(), snapped);
        assert_eq!(scene.node(grid.marker()).unwrap().position, snapped);
    }

    #[test]
    fn test_snap_point_tie() {
        let (mut scene, mut grid) = setup();
        let snapped = grid.compute_snap_point(&mut scene, Vec3::new(2.5, -2.5, 0.0));
        assert_eq!(snapped, Vec3::new(5.0, -5.0, 0.0));
    }

    #[test]
    fn test_snap_point_disabled() {
        let (mut scene, mut grid) = setup();
        grid.set_snap_to_position(false);
        let point = Vec3::new(7.0, -3.0, 12.0);
        assert_eq!(grid.compute_snap_point(&mut scene, point), point);
        assert_eq!(grid.last_snapped_point(), point);
        assert_eq!(scene.node(grid.marker()).unwrap().position, point);
    }

    #[test]
    fn test_snap_angle() {
        let (_, grid) = setup();
        assert_eq!(grid.compute_snap_angle(37.0), 45.0);
        let snapped = grid.compute_snap_angle(-7.0);
        assert_eq!(snapped, 0.0);
        assert!(snapped.is_sign_positive());
    }

    #[test]
    fn test_snap_angle_ignores_orientation_toggle() {
        let (_, mut grid) = setup();
        grid.set_snap_to_orientation(false);
        assert_eq!(grid.compute_snap_angle(37.0), 45.0);
        assert_eq!(grid.snap_angle_if_enabled(37.0), 37.0);

        grid.set_snap_to_orientation(true);
        assert_eq!(grid.snap_angle_if_enabled(37.0), 45.0);
    }

    #[test]
    fn test_set_snap_angle() {
        let (_, mut grid) = setup();
        let revision = grid.revision();
        grid.set_snap_angle(90.0).unwrap();
        assert_eq!(grid.compute_snap_angle(50.0), 90.0);
        assert_eq!(grid.revision(), revision);
        assert_eq!(
            grid.set_snap_angle(0.0),
            Err(GridError::InvalidSnapAngle(0.0))
        );
        assert_eq!(grid.snap_angle(), 90.0);
    }

    #[test]
    fn test_toggle() {
        let (mut scene, mut grid) = setup();
        let parent = scene.render();
        assert!(scene.is_visible(grid.root()));

        grid.toggle(&mut scene, parent).unwrap();
        assert!(!grid.is_enabled());
        assert!(!scene.is_visible(grid.root()));

        grid.toggle(&mut scene, parent).unwrap();
        assert!(grid.is_enabled());
        assert!(scene.is_visible(grid.root()));
    }

    #[test]
    fn test_enable_disable_idempotent() {
        let (mut scene, mut grid) = setup();
        let parent = scene.render();
        grid.enable(&mut scene, parent).unwrap();
        grid.enable(&mut scene, parent).unwrap();
        assert!(grid.is_enabled());

        grid.disable(&mut scene).unwrap();
        grid.disable(&mut scene).unwrap();
        assert!(!grid.is_enabled());
        assert!(!scene.is_visible(grid.marker()));
    }

    #[test]
    fn test_missing_model() {
        let mut scene = SceneTree::new();
        let parent = scene.render();
        let result = Grid::new(&mut scene, parent);
        assert_eq!(
            result.err(),
            Some(GridError::Scene(SceneError::ModelNotFound(
                GRID_BACK_MODEL.to_string()
            )))
        );
    }

    #[test]
    fn test_invalid_config() {
        let mut scene = SceneTree::with_grid_models();
        let parent = scene.render();
        let config = GridConfig {
            spacing: 0.0,
            ..Default::default()
        };
        let result = Grid::with_config(&mut scene, parent, config);
        assert!(matches!(result, Err(GridError::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_config_snapshot() {
        let (mut scene, mut grid) = setup();
        grid.set_spacing(&mut scene, 2.0).unwrap();
        grid.set_snap_to_orientation(false);

        let config = grid.config();
        assert_eq!(config.spacing, 2.0);
        assert!(!config.snap_to_orientation);
        assert_eq!(config.major_thickness, 5.0);
        assert_eq!(config.center_color, [1.0, 0.0, 0.0, 0.0]);
    }
}
