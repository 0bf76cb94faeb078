// gridcell-core/src/formula/eval.rs
// Executing a parsed Ast against a CellLookup.

use super::ast::{Arg, CellLookup, Expr, Op};
use super::Ast;
use crate::value::FormulaErrorKind;

impl Ast {
    /// Execute this formula, resolving cell references through `lookup`.
    pub fn execute(&self, lookup: &mut dyn CellLookup) -> Result<f64, FormulaErrorKind> {
        eval(&self.root, lookup)
    }
}

fn eval(expr: &Expr, lookup: &mut dyn CellLookup) -> Result<f64, FormulaErrorKind> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Cell(pos) => lookup.lookup(*pos),
        Expr::Neg(inner) => Ok(-eval(inner, lookup)?),
        Expr::BinOp(op, l, r) => {
            let lv = eval(l, lookup)?;
            let rv = eval(r, lookup)?;
            match op {
                Op::Add => Ok(lv + rv),
                Op::Sub => Ok(lv - rv),
                Op::Mul => Ok(lv * rv),
                Op::Div => {
                    if rv == 0.0 {
                        Err(FormulaErrorKind::Div0)
                    } else {
                        Ok(lv / rv)
                    }
                }
                Op::Pow => {
                    let result = lv.powf(rv);
                    if result.is_finite() {
                        Ok(result)
                    } else {
                        Err(FormulaErrorKind::Div0)
                    }
                }
            }
        }
        Expr::Call(name, args) => eval_call(name, args, lookup),
    }
}

fn eval_call(name: &str, args: &[Arg], lookup: &mut dyn CellLookup) -> Result<f64, FormulaErrorKind> {
    let values = flatten_args(args, lookup)?;
    match name.to_ascii_uppercase().as_str() {
        "SUM" => Ok(values.iter().sum()),
        "AVERAGE" => {
            if values.is_empty() {
                Err(FormulaErrorKind::Div0)
            } else {
                Ok(values.iter().sum::<f64>() / values.len() as f64)
            }
        }
        "MIN" => values
            .into_iter()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))))
            .ok_or(FormulaErrorKind::Value),
        "MAX" => values
            .into_iter()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
            .ok_or(FormulaErrorKind::Value),
        "IF" => {
            if values.len() != 3 {
                return Err(FormulaErrorKind::Value);
            }
            Ok(if values[0] != 0.0 { values[1] } else { values[2] })
        }
        _ => Err(FormulaErrorKind::Value),
    }
}

fn flatten_args(args: &[Arg], lookup: &mut dyn CellLookup) -> Result<Vec<f64>, FormulaErrorKind> {
    let mut out = Vec::new();
    for arg in args {
        match arg {
            Arg::Scalar(expr) => out.push(eval(expr, lookup)?),
            Arg::Range(start, end) => {
                let (min_row, max_row) = (start.row.min(end.row), start.row.max(end.row));
                let (min_col, max_col) = (start.col.min(end.col), start.col.max(end.col));
                for row in min_row..=max_row {
                    for col in min_col..=max_col {
                        out.push(lookup.lookup(crate::position::Position::new(row, col))?);
                    }
                }
            }
        }
    }
    Ok(out)
}
