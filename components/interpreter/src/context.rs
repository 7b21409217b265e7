//! Evaluation context threaded through the evaluator.

use std::collections::HashMap;
use std::rc::Rc;

use parser::ast::{FuncDecl, FuncKind};

use crate::tasks::ScriptTask;
use crate::value::ValueRef;

/// Pending break/continue/return signal.
///
/// Set by the corresponding statements and consumed by the nearest
/// enclosing loop (break/continue) or call frame (return). Blocks and
/// loops stop running siblings as soon as the signal is not `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowControl {
    /// Normal execution
    None,
    /// A `break` is pending
    Break,
    /// A `continue` is pending
    Continue,
    /// A `return` is pending, carrying the returned cell
    Return(ValueRef),
}

/// The evaluator's environment: function table, variable frame, pending
/// flow control, spawned tasks, and the current frame kind.
///
/// Scopes are explicit copy-on-write: block and loop entry snapshots the
/// variable map, exit puts the snapshot back, so shadowing never destroys
/// outer bindings.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Declared functions by name
    pub funcs: HashMap<String, Rc<FuncDecl>>,
    /// Variable frame: name to cell
    pub vars: HashMap<String, ValueRef>,
    /// Pending flow-control signal
    pub flow: FlowControl,
    /// Tasks spawned in the current frame, not yet run
    pub tasks: Vec<ScriptTask>,
    /// Whether the current frame is sync or async
    pub func_kind: FuncKind,
}

impl EvalContext {
    /// An empty context: no functions, no variables, sync frame.
    pub fn new() -> Self {
        EvalContext {
            funcs: HashMap::new(),
            vars: HashMap::new(),
            flow: FlowControl::None,
            tasks: Vec::new(),
            func_kind: FuncKind::Sync,
        }
    }

    /// Look up a variable's cell.
    pub fn get_var(&self, name: &str) -> Option<ValueRef> {
        self.vars.get(name).copied()
    }

    /// Bind or rebind a variable to a cell in the current frame.
    pub fn set_var(&mut self, name: impl Into<String>, value_ref: ValueRef) {
        self.vars.insert(name.into(), value_ref);
    }

    /// Register a declared function.
    pub fn add_func(&mut self, func: Rc<FuncDecl>) {
        self.funcs.insert(func.name.clone(), func);
    }

    /// Look up a declared function.
    pub fn get_func(&self, name: &str) -> Option<Rc<FuncDecl>> {
        self.funcs.get(name).cloned()
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        EvalContext::new()
    }
}
