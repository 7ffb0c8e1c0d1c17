//! Grid line layout
//!
//! Computes how many lines are drawn for a given extent and spacing, and
//! which class each line index belongs to.

use std::ops::RangeInclusive;

use crate::constants::{MAJOR_LINE_INTERVAL, MAX_GRID_LINES};
use crate::grid::GridError;

/// Visual class of a grid line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineClass {
    /// The two lines through the origin
    Center,
    /// Every fifth line from the center
    Major,
    /// All remaining lines
    Minor,
}

impl LineClass {
    /// Classify the line at integer offset `index` from the center.
    pub fn classify(index: i32) -> Self {
        if index == 0 {
            LineClass::Center
        } else if index % MAJOR_LINE_INTERVAL == 0 {
            LineClass::Major
        } else {
            LineClass::Minor
        }
    }
}

/// Number of lines and rounded-out size of a grid
///
/// Only obtainable through [`GridLayout::compute`], so `line_count` is
/// always in `1..=MAX_GRID_LINES` and `scaled_size` is finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    line_count: u32,
    scaled_size: f32,
    spacing: f32,
}

impl GridLayout {
    /// Compute the layout for `extent` and `spacing`.
    ///
    /// The drawn size rounds outward to a whole number of spacing units, so
    /// `scaled_size >= extent`. Fails when the ratio needs more than
    /// [`MAX_GRID_LINES`] lines per side, or when it rounds to no line at
    /// all or to an infinite size.
    pub fn compute(extent: f32, spacing: f32) -> Result<Self, GridError> {
        let ratio = (extent / spacing).ceil();
        if ratio.is_nan() || ratio < 1.0 {
            return Err(GridError::DegenerateLayout { extent, spacing });
        }

        // Saturating cast; anything past u32 fails the conversion below
        let line_count = u32::try_from(ratio as i64)
            .ok()
            .filter(|&n| n <= MAX_GRID_LINES)
            .ok_or(GridError::TooManyLines {
                extent,
                spacing,
                max: MAX_GRID_LINES,
            })?;

        let scaled_size = line_count as f32 * spacing;
        if !scaled_size.is_finite() {
            return Err(GridError::DegenerateLayout { extent, spacing });
        }

        Ok(Self {
            line_count,
            scaled_size,
            spacing,
        })
    }

    /// Lines on each side of the origin
    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    /// Half-size actually drawn: `spacing * line_count`
    pub fn scaled_size(&self) -> f32 {
        self.scaled_size
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Line indices from `-line_count` to `line_count` inclusive.
    pub fn indices(&self) -> RangeInclusive<i32> {
        // line_count <= MAX_GRID_LINES, well inside i32
        let n = i32::try_from(self.line_count).unwrap_or(MAX_GRID_LINES as i32);
        -n..=n
    }

    /// Offset of the line at `index` from the origin.
    pub fn offset(&self, index: i32) -> f32 {
        index as f32 * self.spacing
    }

    /// Total number of classified lines (`2 * line_count + 1`).
    pub fn total_lines(&self) -> usize {
        2 * self.line_count as usize + 1
    }
}
