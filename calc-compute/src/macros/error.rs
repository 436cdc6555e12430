//! Errors raised while expanding macros.

use calc_attrs::ErrorKind;

/// `graph` or `ungraph` was used, but no graph sink is installed in the context.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "graphing is not available",
    labels = ["this call"],
    help = "install a graph sink on the context with `Ctxt::set_graph_sink`",
)]
pub struct NoGraphSink;

/// The graph sink cannot hold any more expressions.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the graph is full",
    labels = ["this call"],
    help = "remove a graphed expression with `ungraph(index)` first",
)]
pub struct GraphFull;
