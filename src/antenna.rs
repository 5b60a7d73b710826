//! Antenna array descriptors
//!
//! An antenna array, for the purposes of channel synthesis, is a set of
//! element positions plus a per-direction polarized field pattern. The
//! `AntennaArray` trait captures exactly that surface; the concrete arrays
//! here cover the common geometries (uniform linear, uniform planar,
//! arbitrary placements) with isotropic elements.
//!
//! # Example
//!
//! ```rust
//! use raychan::antenna::{AntennaArray, UniformLinearArray};
//!
//! // 4-element ULA with half-wavelength spacing
//! let ula = UniformLinearArray::new(4, 0.5);
//! assert_eq!(ula.num_elements(), 4);
//! assert_eq!(ula.element_position(2).x, 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::{Angles, Position};

/// The antenna surface consumed by the channel synthesizer.
///
/// `element_field_pattern` returns the `(horizontal, vertical)` polarized
/// gain pair toward a direction; the synthesizer reads only the vertical
/// (co-polarized) component.
pub trait AntennaArray {
    /// Number of antenna elements.
    fn num_elements(&self) -> usize;

    /// Position of element `index` in meters, relative to the array
    /// reference point.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_elements()`.
    fn element_position(&self, index: usize) -> Position;

    /// Polarized field pattern toward `direction` as `(horizontal, vertical)`
    /// linear gains.
    fn element_field_pattern(&self, direction: Angles) -> (f64, f64);
}

/// Uniform Linear Array along the x-axis.
///
/// Element *n* sits at `(n * spacing_m, 0, 0)`. Elements are isotropic with
/// a configurable co-polarized gain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformLinearArray {
    num_elements: usize,
    spacing_m: f64,
    gain: f64,
}

impl UniformLinearArray {
    pub fn new(num_elements: usize, spacing_m: f64) -> Self {
        Self {
            num_elements,
            spacing_m,
            gain: 1.0,
        }
    }

    /// Override the element co-polarized gain (linear, default 1.0).
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }
}

impl AntennaArray for UniformLinearArray {
    fn num_elements(&self) -> usize {
        self.num_elements
    }

    fn element_position(&self, index: usize) -> Position {
        assert!(index < self.num_elements, "element index out of range");
        Position::new(index as f64 * self.spacing_m, 0.0, 0.0)
    }

    fn element_field_pattern(&self, _direction: Angles) -> (f64, f64) {
        (0.0, self.gain)
    }
}

/// Uniform Planar Array in the y-z plane (boresight along +x).
///
/// Elements are laid out row-major: element `r * cols + c` sits at
/// `(0, c * spacing_m, r * spacing_m)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformPlanarArray {
    rows: usize,
    cols: usize,
    spacing_m: f64,
    gain: f64,
}

impl UniformPlanarArray {
    pub fn new(rows: usize, cols: usize, spacing_m: f64) -> Self {
        Self {
            rows,
            cols,
            spacing_m,
            gain: 1.0,
        }
    }

    /// Override the element co-polarized gain (linear, default 1.0).
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }
}

impl AntennaArray for UniformPlanarArray {
    fn num_elements(&self) -> usize {
        self.rows * self.cols
    }

    fn element_position(&self, index: usize) -> Position {
        assert!(index < self.num_elements(), "element index out of range");
        let row = index / self.cols;
        let col = index % self.cols;
        Position::new(0.0, col as f64 * self.spacing_m, row as f64 * self.spacing_m)
    }

    fn element_field_pattern(&self, _direction: Angles) -> (f64, f64) {
        (0.0, self.gain)
    }
}

/// Arbitrary element placements with isotropic elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomArray {
    positions: Vec<Position>,
    gain: f64,
}

impl CustomArray {
    pub fn new(positions: Vec<Position>) -> Self {
        Self {
            positions,
            gain: 1.0,
        }
    }

    /// A single isotropic element at the array reference point.
    pub fn single_element() -> Self {
        Self::new(vec![Position::default()])
    }

    /// Override the element co-polarized gain (linear, default 1.0).
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }
}

impl AntennaArray for CustomArray {
    fn num_elements(&self) -> usize {
        self.positions.len()
    }

    fn element_position(&self, index: usize) -> Position {
        self.positions[index]
    }

    fn element_field_pattern(&self, _direction: Angles) -> (f64, f64) {
        (0.0, self.gain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ula_positions() {
        let ula = UniformLinearArray::new(4, 0.5);
        assert_eq!(ula.num_elements(), 4);
        assert_eq!(ula.element_position(0), Position::new(0.0, 0.0, 0.0));
        assert_eq!(ula.element_position(3), Position::new(1.5, 0.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "element index out of range")]
    fn test_ula_index_out_of_range() {
        UniformLinearArray::new(2, 0.5).element_position(2);
    }

    #[test]
    fn test_upa_layout() {
        let upa = UniformPlanarArray::new(2, 3, 0.5);
        assert_eq!(upa.num_elements(), 6);
        // Second row, first column
        assert_eq!(upa.element_position(3), Position::new(0.0, 0.0, 0.5));
        // First row, last column
        assert_eq!(upa.element_position(2), Position::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_isotropic_pattern() {
        let ula = UniformLinearArray::new(1, 0.5);
        let g1 = ula.element_field_pattern(Angles::from_degrees(0.0, 90.0));
        let g2 = ula.element_field_pattern(Angles::from_degrees(135.0, 30.0));
        assert_eq!(g1, (0.0, 1.0));
        assert_eq!(g1, g2);
    }

    #[test]
    fn test_gain_override() {
        let arr = CustomArray::single_element().with_gain(2.0);
        let (_h, v) = arr.element_field_pattern(Angles::from_degrees(0.0, 90.0));
        assert_eq!(v, 2.0);
    }

    #[test]
    fn test_custom_empty() {
        let arr = CustomArray::new(Vec::new());
        assert_eq!(arr.num_elements(), 0);
    }
}
