//! Deferred task handles for `task`/`await`.
//!
//! Script evaluation is a single logical thread. A `task` statement does
//! not start running anything; it snapshots the captured environment and
//! queues the body. Queued tasks run at the next barrier: an `await`
//! statement, the end of the spawning call frame, or the end of the
//! script. Within one barrier tasks run in spawn order, and a task may
//! queue further tasks, which the same barrier also runs.
//!
//! A task body runs in its own disconnected context, so its failure is
//! reported and dropped rather than aborting the spawner.

use std::rc::Rc;

use parser::ast::Stmt;

use crate::context::EvalContext;

/// A queued task: the body to run and the context it runs in.
#[derive(Debug, Clone)]
pub struct ScriptTask {
    /// The spawned statement
    pub body: Rc<Stmt>,
    /// The task's disconnected environment, seeded from capture analysis
    pub ctx: EvalContext,
}

impl ScriptTask {
    /// Queue a body with its captured context.
    pub fn new(body: Rc<Stmt>, ctx: EvalContext) -> Self {
        ScriptTask { body, ctx }
    }
}
