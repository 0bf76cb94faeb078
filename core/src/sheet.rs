// gridcell-core/src/sheet.rs
// Sheet: the coordinator. Owns every CellNode, enforces the structural
// invariants, and drives invalidation and rendering.

use hashbrown::HashMap;

use crate::config::SheetConfig;
use crate::content::CellContent;
use crate::error::SheetError;
use crate::formula::CellLookup;
use crate::graph;
use crate::node::{Cache, CellNode};
use crate::position::{Position, Size};
use crate::value::{CellValue, FormulaErrorKind};

/// A small in-memory spreadsheet: a sparse grid of cells plus the
/// dependency/recomputation machinery.
///
/// Single-threaded and non-reentrant: every public method runs to
/// completion before the next begins. `get_value` and the `print_*`
/// methods mutate per-cell caches as a memoization side effect, so they
/// take `&mut self` even though they look read-only from the outside.
pub struct Sheet {
    config: SheetConfig,
    nodes: HashMap<Position, CellNode>,
    size: Size,
}

impl Sheet {
    pub fn new() -> Self {
        Self::with_config(SheetConfig::default())
    }

    pub fn with_config(config: SheetConfig) -> Self {
        Sheet {
            config,
            nodes: HashMap::new(),
            size: Size::default(),
        }
    }

    pub fn config(&self) -> SheetConfig {
        self.config
    }

    pub fn printable_size(&self) -> Size {
        self.size
    }

    /// Whether a cell exists at `pos` with non-`Empty` content, i.e.
    /// whether `get_cell` would report it present or absent.
    pub fn contains(&self, pos: Position) -> Result<bool, SheetError> {
        self.require_valid(pos)?;
        Ok(self.nodes.get(&pos).map_or(false, |n| !n.is_empty()))
    }

    /// The text that would be redisplayed for editing, or `None` if the
    /// cell is absent/empty.
    pub fn get_text(&self, pos: Position) -> Result<Option<String>, SheetError> {
        self.require_valid(pos)?;
        Ok(self
            .nodes
            .get(&pos)
            .filter(|n| !n.is_empty())
            .map(|n| n.content.display_text()))
    }

    /// The cell's current value, lazily evaluating and memoizing as needed.
    /// `None` if the cell is absent/empty.
    pub fn get_value(&mut self, pos: Position) -> Result<Option<CellValue>, SheetError> {
        self.require_valid(pos)?;
        if !self.nodes.get(&pos).map_or(false, |n| !n.is_empty()) {
            return Ok(None);
        }
        Ok(Some(self.value_at(pos)))
    }

    /// Set the content of `pos` from raw user text. Atomic: on any
    /// `Err`, the sheet is left exactly as it was.
    pub fn set_cell(&mut self, pos: Position, text: &str) -> Result<(), SheetError> {
        self.require_valid(pos)?;

        if let Some(node) = self.nodes.get(&pos) {
            if node.content.display_text() == text {
                return Ok(());
            }
        }

        let tentative = CellContent::parse(text).map_err(SheetError::FormulaParseError)?;
        let new_refs = tentative.referenced_positions();
        for r in &new_refs {
            if !r.is_valid(&self.config) {
                return Err(SheetError::FormulaParseError(format!(
                    "reference {r} is out of bounds"
                )));
            }
        }

        if graph::would_cycle(&self.nodes, pos, &new_refs) {
            log::debug!("rejecting formula at {pos}: would introduce a cycle");
            return Err(SheetError::CircularDependency(pos));
        }

        let old_refs = self.nodes.get(&pos).map(|n| n.refs_out.clone()).unwrap_or_default();

        self.nodes.entry(pos).or_insert_with(CellNode::empty).content = tentative;
        graph::rewire(&mut self.nodes, pos, &old_refs, &new_refs);
        self.grow_to_include(pos);
        self.invalidate_transitive(pos);

        log::trace!("set_cell({pos}) committed, {} reference(s)", new_refs.len());
        Ok(())
    }

    /// Clear `pos` back to `Empty`. A no-op if no node exists there.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), SheetError> {
        self.require_valid(pos)?;

        if !self.nodes.contains_key(&pos) {
            return Ok(());
        }

        let old_refs = self.nodes[&pos].refs_out.clone();
        self.invalidate_transitive(pos);
        self.nodes.get_mut(&pos).unwrap().content = CellContent::Empty;
        graph::rewire(&mut self.nodes, pos, &old_refs, &[]);

        if pos.row + 1 == self.size.rows || pos.col + 1 == self.size.cols {
            self.shrink_to_fit();
        }

        log::trace!("clear_cell({pos})");
        Ok(())
    }

    /// Row-major dump of displayed text: `\t`-separated columns, `\n`
    /// terminated rows, over the printable bounding box.
    pub fn print_texts(&self, out: &mut dyn std::fmt::Write) -> std::fmt::Result {
        for row in 0..self.size.rows {
            for col in 0..self.size.cols {
                if col > 0 {
                    out.write_char('\t')?;
                }
                if let Some(node) = self.nodes.get(&Position::new(row, col)) {
                    if !node.is_empty() {
                        out.write_str(&node.content.display_text())?;
                    }
                }
            }
            out.write_char('\n')?;
        }
        Ok(())
    }

    /// Row-major dump of evaluated values, same delimiter rules as
    /// `print_texts`.
    pub fn print_values(&mut self, out: &mut dyn std::fmt::Write) -> std::fmt::Result {
        for row in 0..self.size.rows {
            for col in 0..self.size.cols {
                if col > 0 {
                    out.write_char('\t')?;
                }
                let pos = Position::new(row, col);
                if self.nodes.get(&pos).map_or(false, |n| !n.is_empty()) {
                    let value = self.value_at(pos);
                    out.write_str(&value.to_string())?;
                }
            }
            out.write_char('\n')?;
        }
        Ok(())
    }

    fn require_valid(&self, pos: Position) -> Result<(), SheetError> {
        if pos.is_valid(&self.config) {
            Ok(())
        } else {
            Err(SheetError::InvalidPosition(pos))
        }
    }

    fn grow_to_include(&mut self, pos: Position) {
        self.size.rows = self.size.rows.max(pos.row + 1);
        self.size.cols = self.size.cols.max(pos.col + 1);
    }

    fn shrink_to_fit(&mut self) {
        let mut max_row: Option<u32> = None;
        let mut max_col: Option<u32> = None;
        for (pos, node) in self.nodes.iter() {
            if !node.is_empty() {
                max_row = Some(max_row.map_or(pos.row, |m| m.max(pos.row)));
                max_col = Some(max_col.map_or(pos.col, |m| m.max(pos.col)));
            }
        }
        self.size = match (max_row, max_col) {
            (Some(r), Some(c)) => Size::new(r + 1, c + 1),
            _ => Size::default(),
        };
    }

    /// Mark `pos` and every transitive dependent (reachable via `refs_in`)
    /// invalid, pruning at nodes already invalid.
    fn invalidate_transitive(&mut self, start: Position) {
        let mut stack = vec![start];
        let mut first = true;
        while let Some(p) = stack.pop() {
            let Some(node) = self.nodes.get_mut(&p) else {
                continue;
            };
            let was_valid = node.cache.valid;
            node.cache.valid = false;
            if first || was_valid {
                stack.extend(self.nodes[&p].refs_in.iter().copied());
            }
            first = false;
        }
    }

    /// Compute (or return the memoized) value of `pos`. Caller must have
    /// already confirmed the node exists.
    fn value_at(&mut self, pos: Position) -> CellValue {
        if let Some(node) = self.nodes.get(&pos) {
            if node.cache.valid {
                return node.cache.value.clone();
            }
        }

        let content = self.nodes[&pos].content.clone();
        let mut lookup = SheetLookup { sheet: self };
        let value = content.evaluated_value(&mut lookup);

        let node = self.nodes.entry(pos).or_insert_with(CellNode::empty);
        node.cache = Cache {
            valid: true,
            value: value.clone(),
        };
        value
    }

    /// Numeric value of `pos` as seen from formula execution: a
    /// nonexistent cell contributes `0.0`, non-numeric `Text` propagates
    /// `Value`, an `Error` propagates its category, and an out-of-bounds
    /// position propagates `Ref`.
    fn numeric_at(&mut self, pos: Position) -> Result<f64, FormulaErrorKind> {
        if !pos.is_valid(&self.config) {
            return Err(FormulaErrorKind::Ref);
        }
        if !self.nodes.contains_key(&pos) {
            return Ok(0.0);
        }
        match self.value_at(pos) {
            CellValue::Number(n) => Ok(n),
            CellValue::Text(s) => s
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or(FormulaErrorKind::Value),
            CellValue::Error(e) => Err(e),
        }
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

struct SheetLookup<'a> {
    sheet: &'a mut Sheet,
}

impl<'a> CellLookup for SheetLookup<'a> {
    fn lookup(&mut self, pos: Position) -> Result<f64, FormulaErrorKind> {
        self.sheet.numeric_at(pos)
    }
}
