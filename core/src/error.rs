// gridcell-core/src/error.rs
// Errors surfaced by the Sheet API; these abort the originating operation
// rather than being stored in a cell (see value.rs for FormulaErrorKind).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum SheetError {
    #[error("position {0} is out of bounds")]
    InvalidPosition(Position),

    #[error("formula parse error: {0}")]
    FormulaParseError(String),

    #[error("circular dependency detected at {0}")]
    CircularDependency(Position),
}
