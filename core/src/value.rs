// gridcell-core/src/value.rs
// Computed cell values and the in-band formula error taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An in-band computational error. These flow through dependent formulas as
/// values rather than aborting the operation that produced them — see
/// `SheetError` for the structural/parse/dependency failures that do abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum FormulaErrorKind {
    #[error("#REF!")]
    Ref,
    #[error("#VALUE!")]
    Value,
    #[error("#DIV/0!")]
    Div0,
}

/// The value a cell evaluates to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Error(FormulaErrorKind),
}

impl CellValue {
    pub fn as_error(&self) -> Option<FormulaErrorKind> {
        match self {
            CellValue::Error(e) => Some(*e),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}
