//! Macros: calls that are rewritten into other trees before evaluation.
//!
//! [`expand`] walks the tree children-first and replaces every call to a name in the macro table
//! with the tree the macro returns. Each macro receives the call node by value, so it can move the
//! argument trees wherever it needs to.

pub mod builtin;
pub mod error;
pub mod graph;

use calc_parser::parser::ast::{call::Call, expr::Expr};
use crate::numerical::{ctxt::Ctxt, error::{Error, WrongArgumentCount}};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::trace;

/// A macro. Receives the call node and returns the tree that replaces it.
pub type Macro = fn(Call, &mut Ctxt) -> Result<Expr, Error>;

/// Every macro registered in a default context, by name.
pub static BUILTINS: Lazy<HashMap<&'static str, Macro>> = Lazy::new(|| {
    use builtin::*;
    use graph::*;

    [
        ("deriv", deriv as Macro),
        ("simplify", simplify as Macro),
        ("print_tree", print_tree as Macro),
        ("ans", ans as Macro),
        ("graph", graph as Macro),
        ("ungraph", ungraph as Macro),
    ]
        .into_iter()
        .collect()
});

/// Expands every macro call in the tree, innermost calls first.
pub fn expand(expr: Expr, ctxt: &mut Ctxt) -> Result<Expr, Error> {
    expr.transform_post_order(&mut |node| match node {
        Expr::Call(call) => match ctxt.get_macro(&call.name) {
            Some(mac) => {
                trace!(name = %call.name, "expanding macro");
                mac(call, ctxt)
            },
            None => Ok(Expr::Call(call)),
        },
        node => Ok(node),
    })
}

/// Takes exactly `N` arguments out of the call.
pub(crate) fn take_args<const N: usize>(call: Call) -> Result<[Expr; N], Error> {
    let given = call.args.len();
    <[Expr; N]>::try_from(call.args).map_err(|_| Error::spanless(WrongArgumentCount {
        name: call.name,
        expected: N,
        given,
    }))
}
