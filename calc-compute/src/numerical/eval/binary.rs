use calc_parser::parser::{
    ast::{binary::Binary, expr::Expr},
    error::kind::InvalidAssignTarget,
    token::op::BinOpKind,
};
use crate::numerical::{ctxt::Ctxt, error::Error};
use super::Eval;

/// Converts a comparison result to `1.0` or `0.0`.
fn truth(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Applies an integer operation to the truncated operands. A zero divisor yields NaN.
fn integer_op(lhs: f64, rhs: f64, op: fn(i64, i64) -> i64) -> f64 {
    let (lhs, rhs) = (lhs as i64, rhs as i64);
    if rhs == 0 {
        f64::NAN
    } else {
        op(lhs, rhs) as f64
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// Assignment is not an arithmetic operation; for it this returns the right operand, which is
/// the value an assignment to a variable produces.
pub fn apply_binary(op: BinOpKind, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinOpKind::Exp => lhs.powf(rhs),
        BinOpKind::Mul => lhs * rhs,
        BinOpKind::Div => lhs / rhs,
        BinOpKind::IntDiv => integer_op(lhs, rhs, i64::wrapping_div),
        BinOpKind::Mod => integer_op(lhs, rhs, i64::wrapping_rem),
        BinOpKind::Add => lhs + rhs,
        BinOpKind::Sub => lhs - rhs,
        BinOpKind::Greater => truth(lhs > rhs),
        BinOpKind::GreaterEq => truth(lhs >= rhs),
        BinOpKind::Less => truth(lhs < rhs),
        BinOpKind::LessEq => truth(lhs <= rhs),
        BinOpKind::Eq => truth(lhs == rhs),
        BinOpKind::NotEq => truth(lhs != rhs),
        BinOpKind::Assign => rhs,
    }
}

/// Evaluates an assignment. Variables are set to the value of the right side; function headers
/// define a function whose body is a copy of the right side, and evaluate to NaN.
fn assign(binary: &Binary, ctxt: &mut Ctxt) -> Result<f64, Error> {
    match &*binary.lhs {
        Expr::Variable(name) => {
            let value = binary.rhs.eval(ctxt)?;
            ctxt.add_var(name, value);
            Ok(value)
        },
        Expr::Call(header) => {
            ctxt.define_func(header, (*binary.rhs).clone())?;
            Ok(f64::NAN)
        },
        _ => Err(Error::spanless(InvalidAssignTarget)),
    }
}

impl Eval for Binary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        if self.op == BinOpKind::Assign {
            return assign(self, ctxt);
        }

        let lhs = self.lhs.eval(ctxt)?;
        let rhs = self.rhs.eval(ctxt)?;
        Ok(apply_binary(self.op, lhs, rhs))
    }
}
