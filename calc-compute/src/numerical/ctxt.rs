use calc_parser::parser::{
    ast::{call::Call, expr::Expr},
    error::kind::{DuplicateParam, NonIdentifierParam},
};
use crate::{
    consts,
    funcs,
    macros::{self, graph::GraphSink, Macro},
};
use levenshtein::levenshtein;
use std::{
    collections::{HashMap, HashSet},
    ops::{Deref, DerefMut},
    sync::Arc,
};
use super::{
    error::{Error, NameConflict, StackOverflow},
    func::{Func, UserFunc},
};
use tracing::debug;

/// The default maximum number of nested user-defined function calls.
pub const MAX_CALL_DEPTH: usize = 128;

/// The parameter bindings of one user-defined function call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    bindings: HashMap<String, f64>,
}

impl Frame {
    /// Creates a frame from `(name, value)` pairs.
    pub fn new(bindings: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self { bindings: bindings.into_iter().collect() }
    }

    /// Binds a name in this frame, replacing any previous binding.
    pub fn bind(&mut self, name: impl Into<String>, value: f64) {
        self.bindings.insert(name.into(), value);
    }

    /// Returns the value bound to the name, if any.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }
}

/// Gives access to a [`Ctxt`] while a call frame is pushed onto it. The frame is popped when the
/// guard is dropped.
#[derive(Debug)]
pub struct FrameGuard<'a> {
    ctxt: &'a mut Ctxt,
}

impl Deref for FrameGuard<'_> {
    type Target = Ctxt;

    fn deref(&self) -> &Ctxt {
        self.ctxt
    }
}

impl DerefMut for FrameGuard<'_> {
    fn deref_mut(&mut self) -> &mut Ctxt {
        self.ctxt
    }
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.ctxt.frames.pop();
    }
}

/// A context to use when evaluating an expression, containing the variables, functions, and
/// macros that can be used within the expression.
#[derive(Debug)]
pub struct Ctxt {
    /// The global variables in the context.
    vars: HashMap<String, f64>,

    /// The functions in the context.
    funcs: HashMap<String, Func>,

    /// The macros in the context.
    macros: HashMap<String, Macro>,

    /// The call frames of the user-defined functions currently being evaluated.
    frames: Vec<Frame>,

    /// The maximum number of nested user-defined function calls.
    pub max_call_depth: usize,

    /// The value of the last statement that evaluated successfully.
    pub last_answer: f64,

    /// Lines written by `print_tree`.
    output: Vec<String>,

    /// The sink that receives graphed expressions.
    graph_sink: Option<Box<dyn GraphSink>>,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            vars: consts::all()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            funcs: funcs::BUILTINS
                .iter()
                .map(|(name, func)| (name.to_string(), func.clone()))
                .collect(),
            macros: macros::BUILTINS
                .iter()
                .map(|(name, mac)| (name.to_string(), *mac))
                .collect(),
            ..Self::new()
        }
    }
}

impl Ctxt {
    /// Creates a new empty context.
    ///
    /// The empty context is probably not very useful, as it does not contain any variables,
    /// functions, or macros. Consider using the [`Default`] implementation instead.
    pub fn new() -> Ctxt {
        Ctxt {
            vars: HashMap::new(),
            funcs: HashMap::new(),
            macros: HashMap::new(),
            frames: Vec::new(),
            max_call_depth: MAX_CALL_DEPTH,
            last_answer: 0.0,
            output: Vec::new(),
            graph_sink: None,
        }
    }

    /// Add a global variable to the context.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable.
    ///
    /// Parameters of the innermost function call shadow global variables. Unknown names read as
    /// `0`.
    pub fn get_var(&self, name: &str) -> f64 {
        self.frames
            .last()
            .and_then(|frame| frame.get(name))
            .or_else(|| self.vars.get(name).copied())
            .unwrap_or(0.0)
    }

    /// Returns the global variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Defines a user function from the header of an assignment, overwriting any user function
    /// with the same name.
    pub fn define_func(&mut self, header: &Call, body: Expr) -> Result<(), Error> {
        let params = header.header_params().map_err(|param| Error::spanless(NonIdentifierParam {
            name: header.name.clone(),
            param: param.to_string(),
        }))?;

        let mut seen = HashSet::new();
        if let Some(param) = params.iter().find(|param| !seen.insert(**param)) {
            return Err(Error::spanless(DuplicateParam { param: param.to_string() }));
        }

        let existing = if self.macros.contains_key(&header.name) {
            Some("macro")
        } else {
            match self.funcs.get(&header.name) {
                Some(Func::UserDefined(_)) | None => None,
                Some(_) => Some("built-in function"),
            }
        };
        if let Some(existing) = existing {
            return Err(Error::spanless(NameConflict { name: header.name.clone(), existing }));
        }

        debug!(name = %header.name, ?params, %body, "defining function");
        let params = params.into_iter().map(str::to_string).collect();
        self.funcs.insert(header.name.clone(), Func::UserDefined(Arc::new(UserFunc { params, body })));
        Ok(())
    }

    /// Add a function to the context, replacing any function with the same name.
    pub fn add_func(&mut self, name: &str, func: Func) {
        self.funcs.insert(name.to_string(), func);
    }

    /// Get a function in the context.
    pub fn get_func(&self, name: &str) -> Option<&Func> {
        self.funcs.get(name)
    }

    /// Returns the functions in the context.
    pub fn get_funcs(&self) -> &HashMap<String, Func> {
        &self.funcs
    }

    /// Returns all functions in the context with a name similar to the given name, sorted by
    /// name.
    pub fn get_similar_funcs(&self, name: &str) -> Vec<&str> {
        let mut similar = self.funcs
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(String::as_str)
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }

    /// Add a macro to the context.
    pub fn add_macro(&mut self, name: &str, mac: Macro) {
        self.macros.insert(name.to_string(), mac);
    }

    /// Get a macro in the context.
    pub fn get_macro(&self, name: &str) -> Option<Macro> {
        self.macros.get(name).copied()
    }

    /// Pushes a call frame, returning a guard that pops it when dropped.
    ///
    /// Returns an error if the context already holds [`Ctxt::max_call_depth`] frames.
    pub fn push_frame(&mut self, frame: Frame) -> Result<FrameGuard<'_>, Error> {
        if self.frames.len() >= self.max_call_depth {
            return Err(Error::spanless(StackOverflow { max: self.max_call_depth }));
        }
        self.frames.push(frame);
        Ok(FrameGuard { ctxt: self })
    }

    /// Returns the innermost call frame.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Returns the number of call frames currently pushed.
    pub fn call_depth(&self) -> usize {
        self.frames.len()
    }

    /// Appends a line to the output buffer.
    pub fn print(&mut self, line: String) {
        self.output.push(line);
    }

    /// Removes and returns everything written to the output buffer.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    /// Installs the sink that receives graphed expressions.
    pub fn set_graph_sink(&mut self, sink: Box<dyn GraphSink>) {
        self.graph_sink = Some(sink);
    }

    /// Returns the installed graph sink.
    pub fn graph_sink(&self) -> Option<&(dyn GraphSink + 'static)> {
        self.graph_sink.as_deref()
    }

    /// Returns the installed graph sink.
    pub fn graph_sink_mut(&mut self) -> Option<&mut (dyn GraphSink + 'static)> {
        self.graph_sink.as_deref_mut()
    }

    /// The step size used by numeric differentiation.
    pub fn deriv_step(&self) -> f64 {
        self.get_var(consts::DERIV_STEP)
    }

    /// The number of rectangles used by numeric integration.
    pub fn int_num_rects(&self) -> f64 {
        self.get_var(consts::INT_NUM_RECTS)
    }

    /// Whether symbolic differentiation treats other variables as constants.
    pub fn partial(&self) -> bool {
        self.get_var(consts::PARTIAL) != 0.0
    }

    /// Whether `calculate` echoes the statement before its result.
    pub fn echo(&self) -> bool {
        self.get_var(consts::ECHO) != 0.0
    }
}
