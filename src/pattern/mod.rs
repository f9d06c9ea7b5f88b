//! Bipolar pattern type and its plain-text codec
//!
//! A [`Pattern`] is an ordered sequence of bipolar values, each +1 or -1.
//! Patterns can be built from bipolar signs or from {0, 1} bits, and can be
//! written to / read from the plain-text dump format used by the store
//! export: values in row-major order, '1' for +1 and '0' for -1, wrapped
//! every [`ROW_WRAP`] values.

use crate::error::{MemoryError, Result};

/// Number of values per line in the text dump format
pub const ROW_WRAP: usize = 10;

/// An ordered sequence of bipolar values, each in {+1, -1}
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<i8>,
}

impl Pattern {
    /// Build a pattern from bipolar signs. Every value must be +1 or -1.
    pub fn from_signs(values: &[i8]) -> Result<Self> {
        for &v in values {
            if v != 1 && v != -1 {
                return Err(MemoryError::InvalidValue(v as i64));
            }
        }
        Ok(Self {
            cells: values.to_vec(),
        })
    }

    /// Build a pattern from binary values, mapping 1 -> +1 and 0 -> -1.
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        let mut cells = Vec::with_capacity(bits.len());
        for &b in bits {
            match b {
                1 => cells.push(1),
                0 => cells.push(-1),
                other => return Err(MemoryError::InvalidValue(other as i64)),
            }
        }
        Ok(Self { cells })
    }

    /// Internal constructor for cells already known to be bipolar.
    pub(crate) fn from_raw(cells: Vec<i8>) -> Self {
        debug_assert!(cells.iter().all(|&v| v == 1 || v == -1));
        Self { cells }
    }

    /// Number of values in the pattern
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The bipolar values, in order
    pub fn as_signs(&self) -> &[i8] {
        &self.cells
    }

    /// The values mapped back to bits (+1 -> 1, -1 -> 0)
    pub fn to_bits(&self) -> Vec<u8> {
        self.cells.iter().map(|&v| u8::from(v > 0)).collect()
    }

    /// Render the pattern as one text block: '1' for +1, '0' for -1,
    /// wrapped every [`ROW_WRAP`] values.
    pub fn to_text_block(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.cells.len() / ROW_WRAP + 1);
        for (i, &v) in self.cells.iter().enumerate() {
            if i > 0 && i % ROW_WRAP == 0 {
                out.push('\n');
            }
            out.push(if v > 0 { '1' } else { '0' });
        }
        out
    }

    /// Parse one text block produced by [`Pattern::to_text_block`].
    /// Whitespace is ignored; any character other than '0' or '1' is an error.
    pub fn from_text_block(block: &str) -> Result<Self> {
        let mut cells = Vec::new();
        for c in block.chars() {
            match c {
                '1' => cells.push(1),
                '0' => cells.push(-1),
                c if c.is_whitespace() => {}
                other => {
                    return Err(MemoryError::Parse(format!("unexpected character '{other}'")));
                }
            }
        }
        if cells.is_empty() {
            return Err(MemoryError::Parse("empty pattern block".to_string()));
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_signs_rejects_non_bipolar() {
        assert!(Pattern::from_signs(&[1, -1, 1]).is_ok());
        assert_eq!(
            Pattern::from_signs(&[1, 0, -1]),
            Err(MemoryError::InvalidValue(0))
        );
    }

    #[test]
    fn test_from_bits_mapping() {
        let p = Pattern::from_bits(&[1, 0, 0, 1]).unwrap();
        assert_eq!(p.as_signs(), &[1, -1, -1, 1]);
        assert_eq!(p.to_bits(), vec![1, 0, 0, 1]);
        assert_eq!(
            Pattern::from_bits(&[1, 2]),
            Err(MemoryError::InvalidValue(2))
        );
    }

    #[test]
    fn test_text_block_wraps_every_ten() {
        let p = Pattern::from_bits(&[1; 25]).unwrap();
        let block = p.to_text_block();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines, vec!["1111111111", "1111111111", "11111"]);
    }

    #[test]
    fn test_text_block_round_trip() {
        let p = Pattern::from_bits(&[1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 1, 0]).unwrap();
        let parsed = Pattern::from_text_block(&p.to_text_block()).unwrap();
        assert_eq!(parsed, p);
    }

    #[test]
    fn test_text_block_rejects_garbage() {
        assert!(matches!(
            Pattern::from_text_block("10x1"),
            Err(MemoryError::Parse(_))
        ));
        assert!(matches!(
            Pattern::from_text_block("  \n"),
            Err(MemoryError::Parse(_))
        ));
    }
}
