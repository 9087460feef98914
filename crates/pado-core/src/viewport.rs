//! Virtual pixel surface dimensions.

/// Dimensions of the drawing surface in virtual pixels.
///
/// A terminal cell is coarser than a pixel, so the effects draw on a finer
/// virtual grid: with the braille marker every cell contributes 2×4 dots,
/// which plays the role the device pixel ratio plays on a real canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface width in virtual pixels.
    pub width: f64,
    /// Surface height in virtual pixels.
    pub height: f64,
}

/// Dots per terminal cell when drawing with the braille marker.
pub const BRAILLE_DOTS: (u16, u16) = (2, 4);

/// Dots per terminal cell when drawing with the plain dot marker.
pub const SINGLE_DOT: (u16, u16) = (1, 1);

impl Viewport {
    /// Create a viewport with the given virtual pixel dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Compute the viewport for a terminal area of `cols`×`rows` cells,
    /// given the marker's dot resolution per cell.
    pub fn from_cells(cols: u16, rows: u16, dots_per_cell: (u16, u16)) -> Self {
        Self {
            width: (cols * dots_per_cell.0) as f64,
            height: (rows * dots_per_cell.1) as f64,
        }
    }

    /// Surface area in virtual pixels.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when the surface cannot hold any drawing.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
