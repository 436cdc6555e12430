use crate::parser::{
    ast::{binary::Binary, call::{Call, Derivative}, nary::Nary, unary::Unary},
    token::op::{BinOpKind, NaryOpKind, UnaryOpKind},
    Precedence,
};
use std::{collections::HashMap, ops};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression in the language.
///
/// Every node exclusively owns its children. Use [`Clone`] to obtain an independent deep copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A number literal, or a number produced by a transformation.
    Number(f64),

    /// A variable or constant, such as `x` or `pi`.
    Variable(String),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),

    /// A unary operation, such as `-x`.
    Unary(Unary),

    /// A function call, such as `f(x)`.
    Call(Call),

    /// A numeric derivative request, such as `f'(x)`.
    Derivative(Derivative),

    /// A flattened sum or product, only used during simplification.
    Nary(Nary),
}

impl Expr {
    /// Creates a variable expression.
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    /// Creates a function call expression.
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call(Call::new(name, args))
    }

    /// Creates a binary expression.
    pub fn binary(lhs: Expr, op: BinOpKind, rhs: Expr) -> Self {
        Expr::Binary(Binary::new(lhs, op, rhs))
    }

    /// Creates an n-ary expression.
    pub fn nary(op: NaryOpKind, args: Vec<Expr>) -> Self {
        Expr::Nary(Nary { op, args })
    }

    /// Creates the expression `self ^ exp`.
    pub fn pow(self, exp: impl Into<Expr>) -> Self {
        Expr::binary(self, BinOpKind::Exp, exp.into())
    }

    /// Returns the value of this expression if it is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expr::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if this expression is exactly the given number.
    pub fn is_number(&self, value: f64) -> bool {
        self.as_number() == Some(value)
    }

    /// Returns the name of this expression if it is a variable.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Expr::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the precedence of the expression, used to decide where parentheses are needed when
    /// it is printed as the operand of another expression.
    pub fn precedence(&self) -> Precedence {
        match self {
            Expr::Number(n) if n.is_sign_negative() => Precedence::Neg,
            Expr::Number(_) | Expr::Variable(_) | Expr::Call(_) | Expr::Derivative(_) => Precedence::Atom,
            Expr::Binary(binary) => binary.precedence(),
            Expr::Unary(unary) => unary.precedence(),
            Expr::Nary(nary) => nary.precedence(),
        }
    }

    /// Rebuilds the tree bottom-up: every node first has its children transformed, then is passed
    /// to `f`, whose output replaces it.
    ///
    /// The first error returned by `f` aborts the whole traversal.
    pub fn transform_post_order<F, E>(self, f: &mut F) -> Result<Expr, E>
    where
        F: FnMut(Expr) -> Result<Expr, E>,
    {
        let rebuilt = match self {
            Expr::Number(_) | Expr::Variable(_) => self,
            Expr::Binary(Binary { lhs, op, rhs }) => {
                let lhs = (*lhs).transform_post_order(f)?;
                let rhs = (*rhs).transform_post_order(f)?;
                Expr::binary(lhs, op, rhs)
            },
            Expr::Unary(Unary { operand, op }) => Expr::Unary(Unary {
                operand: Box::new((*operand).transform_post_order(f)?),
                op,
            }),
            Expr::Call(Call { name, args }) => Expr::Call(Call {
                name,
                args: transform_all(args, f)?,
            }),
            Expr::Derivative(Derivative { name, args, order }) => Expr::Derivative(Derivative {
                name,
                args: transform_all(args, f)?,
                order,
            }),
            Expr::Nary(Nary { op, args }) => Expr::Nary(Nary {
                op,
                args: transform_all(args, f)?,
            }),
        };
        f(rebuilt)
    }

    /// Returns a copy of this expression where every variable named in `bindings` is replaced by
    /// a copy of the bound expression.
    ///
    /// Function names are not variables and are never replaced.
    pub fn substitute(&self, bindings: &HashMap<&str, &Expr>) -> Expr {
        let sub = |expr: &Expr| expr.substitute(bindings);
        match self {
            Expr::Number(n) => Expr::Number(*n),
            Expr::Variable(name) => bindings
                .get(name.as_str())
                .map(|&expr| expr.clone())
                .unwrap_or_else(|| Expr::Variable(name.clone())),
            Expr::Binary(binary) => Expr::binary(sub(&binary.lhs), binary.op, sub(&binary.rhs)),
            Expr::Unary(unary) => Expr::Unary(Unary {
                operand: Box::new(sub(&unary.operand)),
                op: unary.op,
            }),
            Expr::Call(call) => Expr::call(call.name.clone(), call.args.iter().map(sub).collect()),
            Expr::Derivative(derivative) => Expr::Derivative(Derivative {
                name: derivative.name.clone(),
                args: derivative.args.iter().map(sub).collect(),
                order: derivative.order,
            }),
            Expr::Nary(nary) => Expr::nary(nary.op, nary.args.iter().map(sub).collect()),
        }
    }
}

/// Transforms each expression in the list, stopping at the first error.
fn transform_all<F, E>(args: Vec<Expr>, f: &mut F) -> Result<Vec<Expr>, E>
where
    F: FnMut(Expr) -> Result<Expr, E>,
{
    args.into_iter()
        .map(|arg| arg.transform_post_order(f))
        .collect()
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Number(value)
    }
}

/// Implements a binary operator trait for [`Expr`] that builds the corresponding (unsimplified)
/// binary node.
macro_rules! impl_bin_op {
    ($trait:ident, $method:ident, $kind:ident) => {
        impl<T: Into<Expr>> ops::$trait<T> for Expr {
            type Output = Expr;

            fn $method(self, rhs: T) -> Expr {
                Expr::binary(self, BinOpKind::$kind, rhs.into())
            }
        }
    };
}

impl_bin_op!(Add, add, Add);
impl_bin_op!(Sub, sub, Sub);
impl_bin_op!(Mul, mul, Mul);
impl_bin_op!(Div, div, Div);

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Unary(Unary {
            operand: Box::new(self),
            op: UnaryOpKind::Neg,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn operators_build_unsimplified_nodes() {
        let expr = Expr::var("x") * 2.0 + -Expr::var("y");
        assert_eq!(expr, Expr::binary(
            Expr::binary(Expr::var("x"), BinOpKind::Mul, Expr::Number(2.0)),
            BinOpKind::Add,
            Expr::Unary(Unary {
                operand: Box::new(Expr::var("y")),
                op: UnaryOpKind::Neg,
            }),
        ));
    }

    #[test]
    fn copy_is_independent() {
        let original = Expr::call("f", vec![Expr::var("x") + 1.0]);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        if let Expr::Call(call) = &mut copy {
            call.args.push(Expr::Number(2.0));
        }
        assert_ne!(copy, original);
        assert_eq!(original, Expr::call("f", vec![Expr::var("x") + 1.0]));
    }

    #[test]
    fn transform_visits_children_first() {
        let expr = Expr::call("f", vec![Expr::var("a"), Expr::var("b") * 3.0]);
        let mut visited = Vec::new();
        let out = expr.clone().transform_post_order(&mut |node| {
            visited.push(node.to_string());
            Ok::<_, ()>(node)
        }).unwrap();

        assert_eq!(out, expr);
        assert_eq!(visited, vec!["a", "b", "3", "b * 3", "f(a, b * 3)"]);
    }

    #[test]
    fn transform_stops_at_first_error() {
        let expr = Expr::var("a") + Expr::var("b");
        let result = expr.transform_post_order(&mut |node| match node {
            Expr::Variable(name) if name == "b" => Err(name),
            node => Ok(node),
        });
        assert_eq!(result, Err("b".to_string()));
    }

    #[test]
    fn substitute_replaces_variables_only() {
        let body = Expr::call("x", vec![Expr::var("x")]) * Expr::var("y");
        let arg = Expr::var("t") + 1.0;
        let bindings = HashMap::from([("x", &arg)]);

        assert_eq!(
            body.substitute(&bindings),
            Expr::call("x", vec![Expr::var("t") + 1.0]) * Expr::var("y"),
        );
    }
}
