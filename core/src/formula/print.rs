// gridcell-core/src/formula/print.rs
// Precedence-aware, parentheses-minimal pretty-printing of an Ast.

use std::fmt::Write as _;

use super::ast::{Arg, Expr, Op};
use super::Ast;

impl Ast {
    /// The canonical textual form of this formula body (no leading `=`).
    pub fn canonical_expression(&self) -> String {
        let mut out = String::new();
        write_expr(&self.root, 0, &mut out);
        out
    }
}

// Binding power, loosest to tightest.
fn precedence(op: Op) -> u8 {
    match op {
        Op::Add | Op::Sub => 1,
        Op::Mul | Op::Div => 2,
        Op::Pow => 3,
    }
}

fn write_expr(expr: &Expr, parent_prec: u8, out: &mut String) {
    match expr {
        Expr::Number(n) => {
            let _ = write!(out, "{}", n);
        }
        Expr::Cell(pos) => {
            let _ = write!(out, "{}", pos.to_a1());
        }
        Expr::Neg(inner) => {
            let prec = precedence(Op::Pow);
            // `power`'s base must be an `atom`, which never admits a raw
            // `neg_op` — so a `Neg` used as the base of a `Pow` (parent_prec
            // is `Pow`'s precedence + 1 there) must parenthesize itself.
            // Everywhere else (exponent position, term/expr operands) a
            // bare `unary` is legal and no parens are needed.
            let needs_parens = parent_prec > prec;
            if needs_parens {
                out.push('(');
            }
            out.push('-');
            // `neg_op` in the grammar attaches directly to a `power`, so a
            // `Pow` child round-trips unparenthesized but anything looser
            // (Add/Sub/Mul/Div) does not.
            write_expr(inner, prec, out);
            if needs_parens {
                out.push(')');
            }
        }
        Expr::BinOp(Op::Pow, l, r) => {
            let prec = precedence(Op::Pow);
            // Right-associative: only the left child needs parens at equal
            // precedence (`(A1^A2)^A3` vs `A1^A2^A3`).
            let needs_parens = prec < parent_prec;
            if needs_parens {
                out.push('(');
            }
            write_expr(l, prec + 1, out);
            out.push('^');
            write_expr(r, prec, out);
            if needs_parens {
                out.push(')');
            }
        }
        Expr::BinOp(op, l, r) => {
            let prec = precedence(*op);
            let needs_parens = prec < parent_prec;
            if needs_parens {
                out.push('(');
            }
            write_expr(l, prec, out);
            out.push_str(match op {
                Op::Add => "+",
                Op::Sub => "-",
                Op::Mul => "*",
                Op::Div => "/",
                Op::Pow => unreachable!("handled above"),
            });
            // Right operand binds tighter than its own operator so that
            // `a-(b-c)` never collapses into the (wrong) `a-b-c`.
            write_expr(r, prec + 1, out);
            if needs_parens {
                out.push(')');
            }
        }
        Expr::Call(name, args) => {
            let _ = write!(out, "{}(", name);
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                match arg {
                    Arg::Scalar(e) => write_expr(e, 0, out),
                    Arg::Range(start, end) => {
                        let _ = write!(out, "{}:{}", start.to_a1(), end.to_a1());
                    }
                }
            }
            out.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::parser::parse;

    #[test]
    fn drops_redundant_parens() {
        let ast = parse("((A1))").unwrap();
        assert_eq!(ast.canonical_expression(), "A1");
    }

    #[test]
    fn keeps_required_parens() {
        let ast = parse("(1+2)*3").unwrap();
        assert_eq!(ast.canonical_expression(), "(1+2)*3");
    }

    #[test]
    fn right_associative_subtraction_keeps_parens() {
        let ast = parse("1-(2-3)").unwrap();
        assert_eq!(ast.canonical_expression(), "1-(2-3)");
    }

    #[test]
    fn division_round_trips() {
        let ast = parse("A2/A1").unwrap();
        assert_eq!(ast.canonical_expression(), "A2/A1");
    }

    #[test]
    fn negated_power_base_keeps_parens_but_negated_whole_power_does_not() {
        let ast = parse("(-A1)^2").unwrap();
        assert_eq!(ast.canonical_expression(), "(-A1)^2");

        let ast = parse("-A1^2").unwrap();
        assert_eq!(ast.canonical_expression(), "-A1^2");
    }
}
