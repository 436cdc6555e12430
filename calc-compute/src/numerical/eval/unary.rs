use calc_parser::parser::{ast::unary::Unary, token::op::UnaryOpKind};
use crate::numerical::{ctxt::Ctxt, error::Error};
use super::Eval;

impl Eval for Unary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        let operand = self.operand.eval(ctxt)?;
        match self.op {
            UnaryOpKind::Neg => Ok(-operand),
        }
    }
}
