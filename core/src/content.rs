// gridcell-core/src/content.rs
// CellContent: what a cell actually holds, independent of its cache.

use crate::formula::{self, Ast, CellLookup};
use crate::position::Position;
use crate::value::{CellValue, FormulaErrorKind};

/// The escape character: a leading `'` in `Text` content hides that
/// apostrophe from value rendering but not from text rendering.
pub const ESCAPE_CHAR: char = '\'';

#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Empty,
    Text(String),
    Formula(Ast),
}

impl CellContent {
    /// Build tentative content from a raw user string. Does not touch any
    /// sheet state; parse failures are reported, not mutated around.
    pub fn parse(raw: &str) -> Result<CellContent, String> {
        if raw.is_empty() {
            return Ok(CellContent::Empty);
        }
        if raw.len() >= 2 && raw.starts_with('=') {
            let body = &raw[1..];
            let ast = formula::parse(body)?;
            return Ok(CellContent::Formula(ast));
        }
        Ok(CellContent::Text(raw.to_string()))
    }

    /// The text that would be redisplayed for editing (what `SetCell` was
    /// given back, for non-formula content; `"=" + canonical` for formulas).
    pub fn display_text(&self) -> String {
        match self {
            CellContent::Empty => String::new(),
            CellContent::Text(raw) => raw.clone(),
            CellContent::Formula(ast) => format!("={}", ast.canonical_expression()),
        }
    }

    /// The displayed *value* — differs from `display_text` only for
    /// escaped text (`'hello` displays as `hello`) and formulas (which
    /// evaluate).
    pub fn evaluated_value(&self, lookup: &mut dyn CellLookup) -> CellValue {
        match self {
            CellContent::Empty => CellValue::Number(0.0),
            CellContent::Text(raw) => {
                let display = unescape(raw);
                match display.parse::<f64>() {
                    Ok(n) if n.is_finite() => CellValue::Number(n),
                    _ => CellValue::Text(display),
                }
            }
            CellContent::Formula(ast) => match ast.execute(lookup) {
                Ok(n) => CellValue::Number(n),
                Err(e) => CellValue::Error(e),
            },
        }
    }

    /// Positions referenced by this content, deduplicated in
    /// first-occurrence order. Empty for non-formula content.
    pub fn referenced_positions(&self) -> Vec<Position> {
        match self {
            CellContent::Formula(ast) => dedup_first_occurrence(ast.referenced_positions()),
            _ => Vec::new(),
        }
    }
}

/// Strip a single leading escape character from value rendering, leaving
/// the raw text (and its escape) untouched for `display_text`.
fn unescape(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix(ESCAPE_CHAR) {
        rest.to_string()
    } else {
        raw.to_string()
    }
}

fn dedup_first_occurrence(positions: Vec<Position>) -> Vec<Position> {
    let mut seen = std::collections::HashSet::with_capacity(positions.len());
    let mut out = Vec::with_capacity(positions.len());
    for pos in positions {
        if seen.insert(pos) {
            out.push(pos);
        }
    }
    out
}
