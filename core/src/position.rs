// gridcell-core/src/position.rs
// Cell addressing: Position (row/column identity) and Size (bounding box).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SheetConfig;

/// A zero-based row/column pair identifying one cell.
///
/// Two positions compare and hash by value; validity is judged against a
/// `SheetConfig`, not baked into the type itself, since the bound is fixed
/// per-sheet rather than universal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub fn new(row: u32, col: u32) -> Self {
        Position { row, col }
    }

    /// Whether this position falls inside the given sheet's bounds.
    pub fn is_valid(&self, config: &SheetConfig) -> bool {
        self.row < config.max_rows && self.col < config.max_cols
    }

    /// Parse A1-style notation: base-26 column letters followed by a
    /// 1-based row number, e.g. `"A1"`, `"AZ137"`.
    pub fn from_a1(reference: &str) -> Option<Self> {
        let split = reference.find(|c: char| c.is_ascii_digit())?;
        let (col_str, row_str) = reference.split_at(split);

        if col_str.is_empty() || row_str.is_empty() {
            return None;
        }
        if !col_str.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        let col = col_str
            .chars()
            .try_fold(0u64, |acc, c| {
                let digit = (c.to_ascii_uppercase() as u64) - ('A' as u64) + 1;
                acc.checked_mul(26)?.checked_add(digit)
            })?
            .checked_sub(1)?;

        let row_one_based: u64 = row_str.parse().ok()?;
        let row = row_one_based.checked_sub(1)?;

        Some(Position {
            row: row.try_into().ok()?,
            col: col.try_into().ok()?,
        })
    }

    /// Render back to A1 notation.
    pub fn to_a1(&self) -> String {
        let mut col_str = String::new();
        let mut col_num = self.col as u64 + 1;

        while col_num > 0 {
            let remainder = (col_num - 1) % 26;
            col_str.push((b'A' + remainder as u8) as char);
            col_num = (col_num - 1) / 26;
        }

        format!("{}{}", col_str.chars().rev().collect::<String>(), self.row + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1())
    }
}

/// The tight bounding box of the occupied region: `(rows, cols)`, half-open.
/// `(0, 0)` means an empty sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub rows: u32,
    pub cols: u32,
}

impl Size {
    pub fn new(rows: u32, cols: u32) -> Self {
        Size { rows, cols }
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a1_round_trips() {
        for s in ["A1", "Z1", "AA1", "AZ137", "BA1"] {
            let pos = Position::from_a1(s).expect("should parse");
            assert_eq!(pos.to_a1(), s);
        }
    }

    #[test]
    fn a1_rejects_malformed_references() {
        assert!(Position::from_a1("").is_none());
        assert!(Position::from_a1("1A").is_none());
        assert!(Position::from_a1("A").is_none());
        assert!(Position::from_a1("1").is_none());
        assert!(Position::from_a1("A-1").is_none());
    }

    #[test]
    fn validity_respects_config() {
        let cfg = SheetConfig::new(10, 10);
        assert!(Position::new(9, 9).is_valid(&cfg));
        assert!(!Position::new(10, 0).is_valid(&cfg));
        assert!(!Position::new(0, 10).is_valid(&cfg));
    }
}
