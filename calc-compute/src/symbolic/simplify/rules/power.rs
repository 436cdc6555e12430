//! Simplification rules for powers.

use calc_parser::parser::{ast::{binary::Binary, expr::Expr, nary::Nary}, token::op::{BinOpKind, NaryOpKind}};
use crate::symbolic::simplify::simplify_nary;

/// Simplifies `base^exp`, given a simplified base and exponent.
///
/// - `1^a = 1`
/// - `a^0 = 1`, `a^1 = a`
/// - `(a^b)^c = a^(b*c)`
/// - `(a*b)^n = a^n * b^n` for integer `n`
///
/// Powers of two numbers are evaluated.
pub fn simplify_power(base: Expr, exp: Expr) -> Expr {
    if base.is_number(1.0) {
        return Expr::Number(1.0);
    }
    if let (Expr::Number(b), Expr::Number(e)) = (&base, &exp) {
        return Expr::Number(b.powf(*e));
    }

    let base = match base {
        Expr::Binary(Binary { lhs, op: BinOpKind::Exp, rhs }) => {
            return simplify_power(*lhs, simplify_nary(NaryOpKind::Product, vec![*rhs, exp]));
        },
        base => base,
    };

    let n = match exp {
        Expr::Number(n) => n,
        exp => return base.pow(exp),
    };
    if n == 0.0 {
        return Expr::Number(1.0);
    }
    if n == 1.0 {
        return base;
    }

    match base {
        Expr::Nary(Nary { op: NaryOpKind::Product, args }) if n.fract() == 0.0 => simplify_nary(
            NaryOpKind::Product,
            args.into_iter().map(|factor| simplify_power(factor, Expr::Number(n))).collect(),
        ),
        base => base.pow(n),
    }
}

#[cfg(test)]
mod tests {
    use calc_parser::parser::parse;
    use crate::symbolic::simplify::canonical;
    use pretty_assertions::assert_eq;
    use super::*;

    fn canon(source: &str) -> Expr {
        canonical(&parse(source).unwrap())
    }

    #[test]
    fn trivial_powers() {
        assert_eq!(simplify_power(Expr::Number(1.0), Expr::var("x")), Expr::Number(1.0));
        assert_eq!(simplify_power(Expr::var("x"), Expr::Number(0.0)), Expr::Number(1.0));
        assert_eq!(simplify_power(Expr::var("x"), Expr::Number(1.0)), Expr::var("x"));
        assert_eq!(simplify_power(Expr::Number(2.0), Expr::Number(10.0)), Expr::Number(1024.0));
    }

    #[test]
    fn nested_powers() {
        assert_eq!(simplify_power(canon("x^3"), Expr::Number(2.0)), canon("x^6"));
        assert_eq!(simplify_power(canon("x^y"), Expr::Number(2.0)), canon("x^(2y)"));
        assert_eq!(simplify_power(canon("x^2"), Expr::Number(0.5)), Expr::var("x"));
        assert_eq!(simplify_power(canon("x^y"), Expr::var("z")), canon("x^(y * z)"));
    }

    #[test]
    fn integer_powers_distribute_over_products() {
        assert_eq!(simplify_power(canon("3x"), Expr::Number(2.0)), canon("9 * x^2"));
        assert_eq!(simplify_power(canon("x * y"), Expr::Number(-1.0)), canon("x^-1 * y^-1"));
        assert_eq!(simplify_power(canon("x * y"), Expr::var("n")), canon("x * y").pow(Expr::var("n")));
    }
}
