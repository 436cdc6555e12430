use calc_parser::parser::ast::call::Call;
use crate::numerical::{
    ctxt::Ctxt,
    error::{Error, UndefinedFunction},
    func::Func,
};
use super::Eval;

/// Looks up a function by name, returning an error with suggestions if it does not exist.
///
/// The function is cloned out of the context so that the context can be borrowed mutably while
/// the function runs. User-defined functions are reference counted, so this is cheap.
pub(crate) fn lookup(name: &str, ctxt: &Ctxt) -> Result<Func, Error> {
    ctxt.get_func(name)
        .cloned()
        .ok_or_else(|| Error::spanless(UndefinedFunction::new(name, ctxt)))
}

impl Eval for Call {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        lookup(&self.name, ctxt)?.call(&self.name, &self.args, ctxt)
    }
}
