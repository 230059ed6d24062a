// Ring chart domain models
use serde::Serialize;

/// One colored arc of a day's goal ring. Fractions for a day sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingSegment {
    pub color: String,
    pub fraction: f64,
}

/// Shared geometry for a row of day cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub cell_size: f64,
    pub diameter: f64,
    pub inset: f64,
}

impl RingLayout {
    /// Geometry of the ring in the `index`-th cell, left to right.
    pub fn cell(&self, index: usize) -> CellGeometry {
        CellGeometry {
            x: index as f64 * self.cell_size + self.inset,
            y: self.inset,
            diameter: self.diameter,
            size: self.cell_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellGeometry {
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
    pub size: f64,
}
