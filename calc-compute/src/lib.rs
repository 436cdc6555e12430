//! Evaluation, macro expansion, differentiation and simplification of calc expressions.
//!
//! A statement goes through three stages:
//!
//! 1. It is parsed into an [`Expr`] tree by [`calc_parser`].
//! 2. Macro calls such as `deriv` and `simplify` are [expanded](macros::expand), innermost
//!    first, rewriting the tree.
//! 3. The expanded tree is [evaluated](numerical::eval::Eval) to a number against a
//!    [`Ctxt`](numerical::ctxt::Ctxt), which holds the variables, functions and macros.
//!
//! ```
//! use calc_compute::{calculate, numerical::ctxt::Ctxt};
//!
//! let mut ctxt = Ctxt::default();
//! assert_eq!(calculate("f(x) = x^2 + 1", &mut ctxt), "NaN");
//! assert_eq!(calculate("f(3)", &mut ctxt), "10");
//! assert_eq!(calculate("simplify(deriv(f(x), x))", &mut ctxt), "0");
//! ```

pub mod consts;
pub mod funcs;
pub mod macros;
pub mod numerical;
pub mod symbolic;

use calc_parser::parser::{ast::expr::Expr, parse};
use numerical::{ctxt::Ctxt, error::Error, eval::Eval, fmt::format_number};
use tracing::debug;

/// Parses, expands and evaluates a statement, returning the parsed tree, the expanded tree and
/// the value.
fn run(input: &str, ctxt: &mut Ctxt) -> Result<(Expr, Expr, f64), Error> {
    let parsed = parse(input)?;
    let expanded = macros::expand(parsed.clone(), ctxt)?;
    let value = expanded.eval(ctxt)?;
    debug!(%parsed, %expanded, value, "evaluated statement");
    Ok((parsed, expanded, value))
}

/// Parses, expands and evaluates a statement.
pub fn evaluate(input: &str, ctxt: &mut Ctxt) -> Result<f64, Error> {
    run(input, ctxt).map(|(_, _, value)| value)
}

/// Evaluates a statement and formats the result for display.
///
/// Errors are rendered as `"<Kind>: <message>."` instead of being returned. On success, the value
/// is stored as the context's last answer. Lines written by `print_tree` come first, and when the
/// `ECHO` identifier is nonzero, the parsed tree (and the expanded tree, if any macro changed it)
/// is echoed before the result.
pub fn calculate(input: &str, ctxt: &mut Ctxt) -> String {
    let result = run(input, ctxt);

    let mut out = String::new();
    for line in ctxt.take_output() {
        out.push_str(&line);
        out.push('\n');
    }

    match result {
        Ok((parsed, expanded, value)) => {
            if ctxt.echo() {
                out.push_str(&format!(">   {}\n", parsed));
                if expanded != parsed {
                    out.push_str(&format!("=>  {}\n", expanded));
                }
            }
            ctxt.last_answer = value;
            out.push_str(&format_number(value));
        },
        Err(err) => {
            debug!(%err, "statement failed");
            out.push_str(&err.to_string());
        },
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::macros::graph::Plot;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Runs each statement in a fresh default context, returning the output of the last one.
    fn run_all(statements: &[&str]) -> String {
        let mut ctxt = Ctxt::default();
        statements
            .iter()
            .map(|statement| calculate(statement, &mut ctxt))
            .last()
            .unwrap_or_default()
    }

    #[test]
    fn arithmetic() {
        assert_eq!(run_all(&["3 + 4 * 2"]), "11");
        assert_eq!(run_all(&["2 ^ 10"]), "1024");
        assert_eq!(run_all(&["2 ** 3 ** 2"]), "512");
        assert_eq!(run_all(&["7 // 2 + 7 % 2"]), "4");
        assert_eq!(run_all(&["5 // 0"]), "NaN");
        assert_eq!(run_all(&["1 / 3"]), "0.333333");
        assert_eq!(run_all(&["-1 / 0"]), "-inf");
        assert_eq!(run_all(&["0x1F + 0b101"]), "36");
        assert_eq!(run_all(&["2pi - 2 * pi"]), "0");
    }

    #[test]
    fn variables_and_functions() {
        assert_eq!(run_all(&["x = 4", "x * x"]), "16");
        assert_eq!(run_all(&["f(x) = x^2 + 1", "f(3)"]), "10");
        assert_eq!(run_all(&["f(a, b) = a - b", "f(10, 4)"]), "6");
        assert_eq!(run_all(&["unknown + 1"]), "1");
    }

    #[test]
    fn native_functions() {
        assert_eq!(run_all(&["max(3, 9, 4) - min(3, 9, 4)"]), "6");
        assert_eq!(run_all(&["comb(5, 2) + perm(4, 2)"]), "22");
        assert_eq!(run_all(&["sqrt(16) + abs(-2) + floor(2.7)"]), "8");
        assert_eq!(run_all(&["nintegral(x^2, x, 0, 3)"]), "8.999775");
        assert_eq!(run_all(&["sin(pi / 2)"]), "1");
    }

    #[test]
    fn numeric_derivatives() {
        assert_eq!(run_all(&["f(x) = x^3", "f'(2)"]), "12");
        assert_eq!(run_all(&["nderiv(x^2, x, 3)"]), "6");
    }

    #[test]
    fn symbolic_macros() {
        assert_eq!(run_all(&["simplify(deriv(x^3, x))"]), "0");
        assert_eq!(run_all(&["x = 2", "simplify(deriv(x^3, x))"]), "12");
        assert_eq!(run_all(&["x = 5", "simplify((x + 1) + (x + 1))"]), "12");
    }

    #[test]
    fn last_answer() {
        let mut ctxt = Ctxt::default();
        assert_eq!(calculate("6 * 7", &mut ctxt), "42");
        assert_eq!(calculate("ans() + 1", &mut ctxt), "43");
        assert!(calculate("1 +", &mut ctxt).starts_with("ExpressionError"));
        assert_eq!(ctxt.last_answer, 43.0);
    }

    #[test]
    fn errors() {
        assert_eq!(run_all(&["1 / 2)"]), "ExpressionError: unmatched parenthesis.");
        assert_eq!(run_all(&["(1 + 2"]), "ExpressionError: unclosed parenthesis.");
        assert!(run_all(&["2 $ 3"]).starts_with("TokenError: invalid token at char 2"));
        assert_eq!(run_all(&[""]), "ExpressionError: empty expression.");
        assert_eq!(run_all(&["foo(1)"]), "FunctionCallError: no such function: `foo`.");
        assert_eq!(run_all(&["sin(1, 2)"]), "FunctionCallError: wrong number of arguments (2 given, 1 expected).");
        assert_eq!(run_all(&["factorial(-1)"]), "ArgumentError: argument 1 of `factorial` must be a non-negative integer.");
        assert_eq!(run_all(&["f(x) = f(x)", "f(1)"]), "FunctionCallError: maximum call depth of 128 exceeded.");
    }

    #[test]
    fn long_chains() {
        assert_eq!(
            run_all(&[format!("{}1", "1+".repeat(3_000)).as_str()]),
            "ExpressionError: expression is more than 512 operations deep.",
        );
        assert_eq!(run_all(&[format!("{}1", "1+".repeat(499)).as_str()]), "500");
        assert_eq!(run_all(&["x = 2", format!("simplify({}x)", "x+".repeat(450)).as_str()]), "902");
    }

    #[test]
    fn echo() {
        let mut ctxt = Ctxt::default();
        assert_eq!(calculate("ECHO = 1", &mut ctxt), ">   ECHO = 1\n1");
        assert_eq!(calculate("x = 3", &mut ctxt), ">   x = 3\n3");
        assert_eq!(
            calculate("simplify(x + x)", &mut ctxt),
            ">   simplify(x + x)\n=>  2 * x\n6",
        );
    }

    #[test]
    fn print_tree_output_comes_first() {
        let mut ctxt = Ctxt::default();
        assert_eq!(calculate("print_tree(x + 1, deriv(x, x))", &mut ctxt), "x + 1\n1\nNaN");
    }

    #[test]
    fn graphing() {
        let mut ctxt = Ctxt::default();
        assert_eq!(calculate("graph(x^2)", &mut ctxt), "ExpressionError: graphing is not available.");

        ctxt.set_graph_sink(Box::new(Plot::default()));
        assert_eq!(calculate("graph(x^2)", &mut ctxt), "NaN");
        assert_eq!(ctxt.graph_sink().and_then(|sink| sink.get(0)).map(ToString::to_string), Some("x^2".to_string()));
        assert_eq!(calculate("ungraph(0)", &mut ctxt), "NaN");
        assert_eq!(ctxt.graph_sink().and_then(|sink| sink.get(0)), None);
    }
}
