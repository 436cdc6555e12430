//! Handing expressions to a graphing collaborator.
//!
//! Drawing is left to whoever installs a [`GraphSink`] on the context. [`Plot`] is a simple sink
//! that stores the expressions in numbered slots, and [`sample`] evaluates an expression over an
//! interval of its free variable.

use calc_parser::parser::ast::{call::Call, expr::Expr};
use crate::{
    funcs::calculus::eval_at,
    numerical::{ctxt::Ctxt, error::Error, eval::Eval},
};
use std::fmt::Debug;
use super::{error::{GraphFull, NoGraphSink}, take_args};
use tracing::debug;

/// The maximum number of expressions a [`Plot`] can hold.
pub const MAX_GRAPH_FUNCTIONS: usize = 30;

/// Receives expressions to graph.
pub trait GraphSink: Debug {
    /// Takes ownership of an expression, returning the index it is stored at, or [`None`] if the
    /// sink is full.
    fn add(&mut self, expr: Expr) -> Option<usize>;

    /// Removes the expression at the index. Returns false if there was none.
    fn remove(&mut self, index: usize) -> bool;

    /// Returns the expression at the index.
    fn get(&self, index: usize) -> Option<&Expr>;
}

/// A graph sink with [`MAX_GRAPH_FUNCTIONS`] slots. New expressions fill the lowest free slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    slots: Vec<Option<Expr>>,
}

impl Default for Plot {
    fn default() -> Self {
        Self { slots: vec![None; MAX_GRAPH_FUNCTIONS] }
    }
}

impl Plot {
    /// Returns the graphed expressions with their indices.
    pub fn graphed(&self) -> impl Iterator<Item = (usize, &Expr)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|expr| (i, expr)))
    }
}

impl GraphSink for Plot {
    fn add(&mut self, expr: Expr) -> Option<usize> {
        let (index, slot) = self.slots.iter_mut().enumerate().find(|(_, slot)| slot.is_none())?;
        *slot = Some(expr);
        Some(index)
    }

    fn remove(&mut self, index: usize) -> bool {
        self.slots.get_mut(index).and_then(Option::take).is_some()
    }

    fn get(&self, index: usize) -> Option<&Expr> {
        self.slots.get(index).and_then(Option::as_ref)
    }
}

/// Evaluates `expr` at `count` evenly spaced values of `var` from `lo` to `hi`, inclusive.
///
/// Points where the expression is not finite are kept, so the caller can break the curve there.
pub fn sample(
    expr: &Expr,
    var: &str,
    lo: f64,
    hi: f64,
    count: usize,
    ctxt: &mut Ctxt,
) -> Result<Vec<(f64, f64)>, Error> {
    let step = if count > 1 { (hi - lo) / (count - 1) as f64 } else { 0.0 };
    (0..count)
        .map(|i| {
            let x = lo + i as f64 * step;
            Ok((x, eval_at(expr, var, x, ctxt)?))
        })
        .collect()
}

/// `graph(expr)`: moves `expr` into the graph sink of the context.
pub fn graph(call: Call, ctxt: &mut Ctxt) -> Result<Expr, Error> {
    let [expr] = take_args(call)?;
    let sink = ctxt.graph_sink_mut().ok_or_else(|| Error::spanless(NoGraphSink))?;
    let shown = expr.to_string();
    let index = sink.add(expr).ok_or_else(|| Error::spanless(GraphFull))?;
    debug!(index, expr = %shown, "graphed");
    Ok(Expr::Number(f64::NAN))
}

/// `ungraph(index)`: removes the expression at `index` from the graph sink. The index defaults
/// to `0`.
pub fn ungraph(call: Call, ctxt: &mut Ctxt) -> Result<Expr, Error> {
    let index = match call.args.first() {
        Some(arg) => arg.eval(ctxt)?,
        None => 0.0,
    };
    let sink = ctxt.graph_sink_mut().ok_or_else(|| Error::spanless(NoGraphSink))?;
    if index >= 0.0 {
        let removed = sink.remove(index as usize);
        debug!(index, removed, "ungraphed");
    }
    Ok(Expr::Number(f64::NAN))
}
