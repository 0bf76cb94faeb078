// gridcell-core/src/formula/parser.rs
// Turns formula source text into an Ast, using a pest grammar.

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use super::ast::{Arg, Ast, Expr, Op};
use crate::position::Position;

#[derive(Parser)]
#[grammar = "formula/grammar.pest"]
struct FormulaParser;

/// Parse the body of a formula (the text after the leading `=`).
pub fn parse(input: &str) -> Result<Ast, String> {
    let mut pairs = FormulaParser::parse(Rule::formula, input).map_err(|e| e.to_string())?;
    let formula = pairs.next().expect("formula rule always produces a pair");
    let mut inner = formula.into_inner();
    let expr_pair = inner.next().expect("formula = expr ~ EOI");
    let root = build_expr(expr_pair)?;
    Ok(Ast::new(root))
}

fn build_expr(pair: Pair<Rule>) -> Result<Expr, String> {
    match pair.as_rule() {
        Rule::expr => {
            let mut inner = pair.into_inner();
            let mut acc = build_expr(inner.next().expect("expr has a first term"))?;
            let mut rest = inner.peekable();
            while let Some(op_pair) = rest.next() {
                let op = match op_pair.as_str() {
                    "+" => Op::Add,
                    "-" => Op::Sub,
                    other => return Err(format!("unexpected additive operator `{other}`")),
                };
                let rhs_pair = rest.next().expect("add_op is followed by a term");
                let rhs = build_expr(rhs_pair)?;
                acc = Expr::BinOp(op, Box::new(acc), Box::new(rhs));
            }
            Ok(acc)
        }
        Rule::term => {
            let mut inner = pair.into_inner();
            let mut acc = build_expr(inner.next().expect("term has a first unary"))?;
            let mut rest = inner.peekable();
            while let Some(op_pair) = rest.next() {
                let op = match op_pair.as_str() {
                    "*" => Op::Mul,
                    "/" => Op::Div,
                    other => return Err(format!("unexpected multiplicative operator `{other}`")),
                };
                let rhs_pair = rest.next().expect("mul_op is followed by a unary");
                let rhs = build_expr(rhs_pair)?;
                acc = Expr::BinOp(op, Box::new(acc), Box::new(rhs));
            }
            Ok(acc)
        }
        Rule::unary => {
            let mut inner = pair.into_inner();
            let first = inner.next().expect("unary has at least one child");
            if first.as_rule() == Rule::neg_op {
                let operand = build_expr(inner.next().expect("neg_op is followed by a power"))?;
                Ok(Expr::Neg(Box::new(operand)))
            } else {
                build_expr(first)
            }
        }
        Rule::power => {
            let mut inner = pair.into_inner();
            let base = build_expr(inner.next().expect("power has a base atom"))?;
            match (inner.next(), inner.next()) {
                (Some(_pow_op), Some(exponent_pair)) => {
                    let exponent = build_expr(exponent_pair)?;
                    Ok(Expr::BinOp(Op::Pow, Box::new(base), Box::new(exponent)))
                }
                _ => Ok(base),
            }
        }
        Rule::atom => build_expr(pair.into_inner().next().expect("atom wraps one child")),
        Rule::number => pair
            .as_str()
            .parse::<f64>()
            .map(Expr::Number)
            .map_err(|e| e.to_string()),
        Rule::cell_ref => parse_cell_ref(pair.as_str())
            .map(Expr::Cell)
            .ok_or_else(|| format!("invalid cell reference `{}`", pair.as_str())),
        Rule::call => {
            let mut inner = pair.into_inner();
            let name = inner.next().expect("call has a name").as_str().to_string();
            let args = inner.map(build_arg).collect::<Result<Vec<_>, _>>()?;
            Ok(Expr::Call(name, args))
        }
        other => Err(format!("unexpected grammar rule {other:?} in expression position")),
    }
}

fn build_arg(pair: Pair<Rule>) -> Result<Arg, String> {
    match pair.as_rule() {
        Rule::arg => build_arg(pair.into_inner().next().expect("arg wraps one child")),
        Rule::range => {
            let mut inner = pair.into_inner();
            let start = parse_cell_ref(inner.next().expect("range has a start").as_str())
                .ok_or_else(|| "invalid range start".to_string())?;
            let end = parse_cell_ref(inner.next().expect("range has an end").as_str())
                .ok_or_else(|| "invalid range end".to_string())?;
            Ok(Arg::Range(start, end))
        }
        _ => build_expr(pair).map(Arg::Scalar),
    }
}

fn parse_cell_ref(text: &str) -> Option<Position> {
    Position::from_a1(text)
}
