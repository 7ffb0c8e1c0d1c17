//! Pen-style line batches
//!
//! A [`LineBatch`] collects line segments with a move/draw pen API and is
//! finalized with [`LineBatch::create`] once drawing is done. Renderers read
//! the segments and the batch color and thickness.

use glam::Vec3;

/// A single line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl LineSegment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Segment length
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// A batch of line segments sharing one color and thickness
#[derive(Debug, Clone, PartialEq)]
pub struct LineBatch {
    name: String,
    color: [f32; 4],
    thickness: f32,
    segments: Vec<LineSegment>,
    pen: Option<Vec3>,
    finalized: bool,
}

impl LineBatch {
    /// Create an empty batch with white one-pixel lines.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: [1.0, 1.0, 1.0, 1.0],
            thickness: 1.0,
            segments: Vec::new(),
            pen: None,
            finalized: false,
        }
    }

    /// Builder-style color setter
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Builder-style thickness setter
    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn set_thickness(&mut self, thickness: f32) {
        self.thickness = thickness;
    }

    /// Drop all segments and the pen position. Color and thickness are kept.
    pub fn reset(&mut self) {
        self.segments.clear();
        self.pen = None;
        self.finalized = false;
    }

    /// Move the pen without drawing.
    pub fn move_to(&mut self, point: Vec3) {
        self.pen = Some(point);
    }

    /// Draw from the pen position to `point` and leave the pen there.
    ///
    /// Without a previous [`move_to`](Self::move_to) the segment starts at
    /// the origin.
    pub fn draw_to(&mut self, point: Vec3) {
        let start = self.pen.unwrap_or(Vec3::ZERO);
        self.segments.push(LineSegment::new(start, point));
        self.pen = Some(point);
    }

    /// Finalize the batch for rendering.
    pub fn create(&mut self) {
        self.finalized = true;
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_and_draw() {
        let mut batch = LineBatch::new("test");
        batch.move_to(Vec3::new(0.0, -1.0, 0.0));
        batch.draw_to(Vec3::new(0.0, 1.0, 0.0));
        batch.draw_to(Vec3::new(1.0, 1.0, 0.0));

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.segments()[0].length(), 2.0);
        // Second segment continues from the pen
        assert_eq!(batch.segments()[1].start, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_draw_without_move_starts_at_origin() {
        let mut batch = LineBatch::new("test");
        batch.draw_to(Vec3::X);
        assert_eq!(batch.segments()[0], LineSegment::new(Vec3::ZERO, Vec3::X));
    }

    #[test]
    fn test_reset_keeps_style() {
        let mut batch = LineBatch::new("test")
            .with_color([0.1, 0.2, 0.3, 1.0])
            .with_thickness(5.0);
        batch.move_to(Vec3::ZERO);
        batch.draw_to(Vec3::Y);
        batch.create();
        assert!(batch.is_finalized());

        batch.reset();
        assert!(batch.is_empty());
        assert!(!batch.is_finalized());
        assert_eq!(batch.color(), [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(batch.thickness(), 5.0);

        // Pen is cleared too
        batch.draw_to(Vec3::Y);
        assert_eq!(batch.segments()[0].start, Vec3::ZERO);
    }
}
