//! Grid encoding for bipolar patterns
//!
//! Deterministic bridges between a caller's grid of scalar values (for
//! example, pixel intensities) and the bipolar patterns the memory works
//! on. Decoding real image files is out of scope; callers hand over plain
//! value slices in row-major order.

use crate::pattern::Pattern;

/// Threshold encoder mapping scalar grid values to bipolar signs
///
/// A value strictly greater than the threshold becomes +1, everything else
/// becomes -1.
#[derive(Debug, Clone, Copy)]
pub struct GridEncoder {
    /// Binarization threshold
    pub threshold: f64,
}

impl Default for GridEncoder {
    fn default() -> Self {
        Self { threshold: 0.0 }
    }
}

impl GridEncoder {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Encode row-major grid values into a bipolar pattern
    pub fn encode(&self, values: &[f64]) -> Pattern {
        Pattern::from_raw(
            values
                .iter()
                .map(|&v| if v > self.threshold { 1 } else { -1 })
                .collect(),
        )
    }
}

/// Lay a pattern out as rows of bits for display: +1 -> 1, -1 -> 0.
///
/// The last row is short when the pattern length is not a multiple of the
/// width. A zero width yields no rows.
pub fn to_grid_rows(pattern: &Pattern, width: usize) -> Vec<Vec<u8>> {
    if width == 0 {
        return Vec::new();
    }
    pattern
        .as_signs()
        .chunks(width)
        .map(|row| row.iter().map(|&v| u8::from(v > 0)).collect())
        .collect()
}

/// Render a pattern as an ASCII grid, '#' for +1 and '.' for -1
pub fn render_ascii(pattern: &Pattern, width: usize) -> String {
    to_grid_rows(pattern, width)
        .iter()
        .map(|row| {
            row.iter()
                .map(|&bit| if bit == 1 { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join("\n")
}
