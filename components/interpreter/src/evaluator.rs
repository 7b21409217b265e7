//! Tree-walking evaluator.
//!
//! Evaluation is recursive over the AST with an explicit [`EvalContext`]
//! threaded through every call. Expression evaluation yields the cell
//! holding the result; statement evaluation mutates the context. A
//! runtime failure aborts the whole script, leaving already-performed
//! side effects in place.

use std::collections::HashMap;
use std::rc::Rc;

use core_types::{ErrorKind, ScriptError, ScriptResult};
use parser::ast::*;
use parser::capture::{capture_lambda, capture_stmt, CaptureKind};
use tracing::warn;

use crate::command::CommandProvider;
use crate::context::{EvalContext, FlowControl};
use crate::tasks::ScriptTask;
use crate::value::{Callable, Value, ValueArena, ValueRef};

/// The script evaluator: value arena plus the command boundary.
pub struct Evaluator {
    arena: ValueArena,
    provider: Box<dyn CommandProvider>,
}

impl Evaluator {
    /// Create an evaluator that dispatches command lines to `provider`.
    pub fn new(provider: Box<dyn CommandProvider>) -> Self {
        Evaluator {
            arena: ValueArena::new(),
            provider,
        }
    }

    /// Run a script in an empty environment.
    pub fn eval_script(&mut self, script: &Script) -> ScriptResult<()> {
        let mut ctx = EvalContext::new();
        self.eval_script_in(script, &mut ctx)
    }

    /// Run a script in an existing environment, leaving its bindings in
    /// place afterwards. This is what keeps REPL state across lines.
    pub fn eval_script_in(&mut self, script: &Script, ctx: &mut EvalContext) -> ScriptResult<()> {
        // declarations are visible to every statement, regardless of order
        for element in &script.elements {
            if let ScriptElement::Func(func) = element {
                ctx.add_func(Rc::new(func.clone()));
            }
        }

        for element in &script.elements {
            if let ScriptElement::Stmt(stmt) = element {
                self.eval_stmt(stmt, ctx)?;
            }
        }

        // tasks still queued at script end run before we report completion
        self.drain_tasks(ctx);
        Ok(())
    }

    /// Read access to a cell, for hosts inspecting results.
    pub fn value(&self, value_ref: ValueRef) -> &Value {
        self.arena.get(value_ref)
    }

    // ---- values ----

    fn get_int(&self, value_ref: ValueRef, what: &str) -> ScriptResult<i32> {
        match self.arena.get(value_ref) {
            Value::Int(value) => Ok(*value),
            _ => Err(ScriptError::type_error(format!("{} must be an int", what))),
        }
    }

    fn get_bool(&self, value_ref: ValueRef, what: &str) -> ScriptResult<bool> {
        match self.arena.get(value_ref) {
            Value::Bool(value) => Ok(*value),
            _ => Err(ScriptError::type_error(format!("{} must be a bool", what))),
        }
    }

    fn display(&self, value_ref: ValueRef) -> ScriptResult<String> {
        match self.arena.get(value_ref) {
            Value::String(value) => Ok(value.clone()),
            Value::Int(value) => Ok(value.to_string()),
            Value::Bool(true) => Ok("true".to_string()),
            Value::Bool(false) => Ok("false".to_string()),
            Value::Null => Err(ScriptError::type_error("cannot interpolate a null value")),
            Value::Callable(_) => {
                Err(ScriptError::type_error("cannot interpolate a callable value"))
            }
        }
    }

    fn capture_cells(
        &mut self,
        spec: &HashMap<String, CaptureKind>,
        ctx: &EvalContext,
    ) -> ScriptResult<HashMap<String, ValueRef>> {
        let mut captures = HashMap::new();
        for (name, kind) in spec {
            let cell = ctx
                .get_var(name)
                .ok_or_else(|| ScriptError::name_error(format!("{} is not defined", name)))?;
            let cell = match kind {
                CaptureKind::Copy => self.arena.make_copy(cell),
                CaptureKind::Ref => cell,
            };
            captures.insert(name.clone(), cell);
        }
        Ok(captures)
    }

    // ---- expressions ----

    /// Evaluate an expression to the cell holding its result.
    pub fn eval_exp(&mut self, exp: &Exp, ctx: &mut EvalContext) -> ScriptResult<ValueRef> {
        match exp {
            Exp::Identifier(name) => ctx
                .get_var(name)
                .ok_or_else(|| ScriptError::name_error(format!("{} is not defined", name))),
            Exp::IntLiteral(value) => Ok(self.arena.alloc(Value::Int(*value))),
            Exp::BoolLiteral(value) => Ok(self.arena.alloc(Value::Bool(*value))),
            Exp::String(string_exp) => {
                let text = self.eval_string_exp(string_exp, ctx)?;
                Ok(self.arena.alloc(Value::String(text)))
            }
            Exp::UnaryOp { kind, operand } => self.eval_unary_op(*kind, operand, ctx),
            Exp::BinaryOp {
                kind,
                operand0,
                operand1,
            } => self.eval_binary_op(*kind, operand0, operand1, ctx),
            Exp::Call { callee, args } => self.eval_call(callee, args, ctx),
            Exp::Lambda(lambda) => self.eval_lambda_exp(lambda, ctx),
        }
    }

    /// Interpolate a string expression against the current environment.
    pub fn eval_string_exp(
        &mut self,
        string_exp: &StringExp,
        ctx: &mut EvalContext,
    ) -> ScriptResult<String> {
        let mut out = String::new();
        for element in &string_exp.elements {
            match element {
                StringExpElement::Text(text) => out.push_str(text),
                StringExpElement::Exp(exp) => {
                    let cell = self.eval_exp(exp, ctx)?;
                    out.push_str(&self.display(cell)?);
                }
            }
        }
        Ok(out)
    }

    fn eval_unary_op(
        &mut self,
        kind: UnaryOpKind,
        operand: &Exp,
        ctx: &mut EvalContext,
    ) -> ScriptResult<ValueRef> {
        let cell = self.eval_exp(operand, ctx)?;

        match kind {
            UnaryOpKind::LogicalNot => {
                let value = self.get_bool(cell, "operand of !")?;
                Ok(self.arena.alloc(Value::Bool(!value)))
            }
            UnaryOpKind::PostfixInc | UnaryOpKind::PostfixDec => {
                let value = self.get_int(cell, "operand of ++/--")?;
                let pre = self.arena.alloc(Value::Int(value));
                self.step_int_cell(cell, value, kind == UnaryOpKind::PostfixInc)?;
                Ok(pre)
            }
            UnaryOpKind::PrefixInc | UnaryOpKind::PrefixDec => {
                let value = self.get_int(cell, "operand of ++/--")?;
                self.step_int_cell(cell, value, kind == UnaryOpKind::PrefixInc)?;
                Ok(cell)
            }
        }
    }

    fn step_int_cell(&mut self, cell: ValueRef, value: i32, up: bool) -> ScriptResult<()> {
        let next = if up {
            value.checked_add(1)
        } else {
            value.checked_sub(1)
        };
        let next = next
            .ok_or_else(|| ScriptError::new(ErrorKind::OverflowError, "integer out of range"))?;
        self.arena.set(cell, Value::Int(next));
        Ok(())
    }

    fn eval_binary_op(
        &mut self,
        kind: BinaryOpKind,
        operand0: &Exp,
        operand1: &Exp,
        ctx: &mut EvalContext,
    ) -> ScriptResult<ValueRef> {
        let cell0 = self.eval_exp(operand0, ctx)?;
        let cell1 = self.eval_exp(operand1, ctx)?;

        match kind {
            BinaryOpKind::Assign => {
                self.arena.assign(cell0, cell1)?;
                Ok(cell0)
            }
            BinaryOpKind::Equal => {
                let eq = self.arena.payload_eq(cell0, cell1);
                Ok(self.arena.alloc(Value::Bool(eq)))
            }
            BinaryOpKind::NotEqual => {
                let eq = self.arena.payload_eq(cell0, cell1);
                Ok(self.arena.alloc(Value::Bool(!eq)))
            }
            BinaryOpKind::Add => self.eval_add(cell0, cell1),
            BinaryOpKind::Subtract => self.eval_arith(cell0, cell1, "-", i32::checked_sub),
            BinaryOpKind::Multiply => self.eval_arith(cell0, cell1, "*", i32::checked_mul),
            BinaryOpKind::Divide => self.eval_div_mod(cell0, cell1, "/", i32::checked_div),
            BinaryOpKind::Modulo => self.eval_div_mod(cell0, cell1, "%", i32::checked_rem),
            BinaryOpKind::LessThan => self.eval_compare(cell0, cell1, "<", |o| o.is_lt()),
            BinaryOpKind::GreaterThan => self.eval_compare(cell0, cell1, ">", |o| o.is_gt()),
            BinaryOpKind::LessThanOrEqual => self.eval_compare(cell0, cell1, "<=", |o| o.is_le()),
            BinaryOpKind::GreaterThanOrEqual => {
                self.eval_compare(cell0, cell1, ">=", |o| o.is_ge())
            }
        }
    }

    fn eval_add(&mut self, cell0: ValueRef, cell1: ValueRef) -> ScriptResult<ValueRef> {
        match (self.arena.get(cell0), self.arena.get(cell1)) {
            (Value::Int(a), Value::Int(b)) => {
                let sum = a.checked_add(*b).ok_or_else(|| {
                    ScriptError::new(ErrorKind::OverflowError, "integer out of range in +")
                })?;
                Ok(self.arena.alloc(Value::Int(sum)))
            }
            (Value::String(a), Value::String(b)) => {
                let joined = format!("{}{}", a, b);
                Ok(self.arena.alloc(Value::String(joined)))
            }
            _ => Err(ScriptError::type_error(
                "operands of + must both be int or both be string",
            )),
        }
    }

    fn eval_arith(
        &mut self,
        cell0: ValueRef,
        cell1: ValueRef,
        op: &str,
        apply: fn(i32, i32) -> Option<i32>,
    ) -> ScriptResult<ValueRef> {
        let a = self.get_int(cell0, &format!("left operand of {}", op))?;
        let b = self.get_int(cell1, &format!("right operand of {}", op))?;
        let result = apply(a, b).ok_or_else(|| {
            ScriptError::new(
                ErrorKind::OverflowError,
                format!("integer out of range in {}", op),
            )
        })?;
        Ok(self.arena.alloc(Value::Int(result)))
    }

    fn eval_div_mod(
        &mut self,
        cell0: ValueRef,
        cell1: ValueRef,
        op: &str,
        apply: fn(i32, i32) -> Option<i32>,
    ) -> ScriptResult<ValueRef> {
        self.get_int(cell0, &format!("left operand of {}", op))?;
        let b = self.get_int(cell1, &format!("right operand of {}", op))?;
        if b == 0 {
            return Err(ScriptError::new(
                ErrorKind::DivideByZero,
                format!("{} by zero", op),
            ));
        }
        self.eval_arith(cell0, cell1, op, apply)
    }

    fn eval_compare(
        &mut self,
        cell0: ValueRef,
        cell1: ValueRef,
        op: &str,
        accept: fn(std::cmp::Ordering) -> bool,
    ) -> ScriptResult<ValueRef> {
        let ordering = match (self.arena.get(cell0), self.arena.get(cell1)) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            _ => {
                return Err(ScriptError::type_error(format!(
                    "operands of {} must both be int or both be string",
                    op
                )))
            }
        };
        Ok(self.arena.alloc(Value::Bool(accept(ordering))))
    }

    fn eval_lambda_exp(
        &mut self,
        lambda: &LambdaExp,
        ctx: &mut EvalContext,
    ) -> ScriptResult<ValueRef> {
        let spec = capture_lambda(lambda)?;
        let captures = self.capture_cells(&spec, ctx)?;
        Ok(self.arena.alloc(Value::Callable(Callable::Lambda {
            exp: Rc::new(lambda.clone()),
            captures,
        })))
    }

    // ---- calls ----

    fn resolve_callable(
        &mut self,
        callee: &Callee,
        ctx: &mut EvalContext,
    ) -> ScriptResult<Callable> {
        match callee {
            Callee::Decl(func) => Ok(Callable::Func(Rc::clone(func))),
            Callee::Exp(exp) => {
                // a bare name not shadowed by a variable is a function
                // lookup, not an expression
                if let Exp::Identifier(name) = exp.as_ref() {
                    if ctx.get_var(name).is_none() {
                        let func = ctx.get_func(name).ok_or_else(|| {
                            ScriptError::name_error(format!("{} is not defined", name))
                        })?;
                        return Ok(Callable::Func(func));
                    }
                }

                let cell = self.eval_exp(exp, ctx)?;
                match self.arena.get(cell) {
                    Value::Callable(callable) => Ok(callable.clone()),
                    _ => Err(ScriptError::type_error("value is not callable")),
                }
            }
        }
    }

    fn eval_call(
        &mut self,
        callee: &Callee,
        args: &[Exp],
        ctx: &mut EvalContext,
    ) -> ScriptResult<ValueRef> {
        match self.resolve_callable(callee, ctx)? {
            Callable::Func(func) => {
                self.check_arity(&func.name, func.params.len(), args.len())?;

                let mut vars = HashMap::new();
                for (param, arg) in func.params.iter().zip(args) {
                    let cell = self.eval_exp(arg, ctx)?;
                    vars.insert(param.name.clone(), cell);
                }

                self.run_frame(func.kind, vars, ctx, |this, ctx| {
                    this.eval_block_stmts(&func.body, ctx)
                })
            }
            Callable::Lambda { exp, captures } => {
                self.check_arity("lambda", exp.params.len(), args.len())?;

                // parameters bind after captures, so they shadow them
                let mut vars = captures;
                for (param, arg) in exp.params.iter().zip(args) {
                    let cell = self.eval_exp(arg, ctx)?;
                    vars.insert(param.name.clone(), cell);
                }

                self.run_frame(exp.kind, vars, ctx, |this, ctx| {
                    this.eval_stmt(&exp.body, ctx)
                })
            }
        }
    }

    fn check_arity(&self, name: &str, expected: usize, got: usize) -> ScriptResult<()> {
        if expected != got {
            return Err(ScriptError::arity_error(format!(
                "{} takes {} argument(s), got {}",
                name, expected, got
            )));
        }
        Ok(())
    }

    fn run_frame(
        &mut self,
        kind: FuncKind,
        vars: HashMap<String, ValueRef>,
        ctx: &mut EvalContext,
        run: impl FnOnce(&mut Self, &mut EvalContext) -> ScriptResult<()>,
    ) -> ScriptResult<ValueRef> {
        let prev_vars = std::mem::replace(&mut ctx.vars, vars);
        let prev_tasks = std::mem::take(&mut ctx.tasks);
        let prev_kind = ctx.func_kind;
        ctx.func_kind = kind;

        let result = run(self, ctx);

        if result.is_ok() {
            // tasks the frame spawned but never awaited run before it returns
            self.drain_tasks(ctx);
        }

        ctx.vars = prev_vars;
        ctx.tasks = prev_tasks;
        ctx.func_kind = prev_kind;
        result?;

        let flow = std::mem::replace(&mut ctx.flow, FlowControl::None);
        match flow {
            FlowControl::Return(cell) => Ok(cell),
            _ => Ok(self.arena.alloc(Value::Null)),
        }
    }

    // ---- statements ----

    /// Evaluate one statement against the context.
    pub fn eval_stmt(&mut self, stmt: &Stmt, ctx: &mut EvalContext) -> ScriptResult<()> {
        match stmt {
            Stmt::Command(commands) => self.eval_command_stmt(commands, ctx),
            Stmt::VarDecl(var_decl) => self.eval_var_decl(var_decl, ctx),
            Stmt::If {
                cond,
                body,
                else_body,
            } => {
                let cond_cell = self.eval_exp(cond, ctx)?;
                if self.get_bool(cond_cell, "if condition")? {
                    self.eval_stmt(body, ctx)
                } else if let Some(else_body) = else_body {
                    self.eval_stmt(else_body, ctx)
                } else {
                    Ok(())
                }
            }
            Stmt::For {
                initializer,
                cond,
                cont,
                body,
            } => self.eval_for_stmt(initializer.as_ref(), cond.as_ref(), cont.as_ref(), body, ctx),
            Stmt::Continue => {
                ctx.flow = FlowControl::Continue;
                Ok(())
            }
            Stmt::Break => {
                ctx.flow = FlowControl::Break;
                Ok(())
            }
            Stmt::Return(value) => {
                let cell = match value {
                    Some(exp) => self.eval_exp(exp, ctx)?,
                    None => self.arena.alloc(Value::Null),
                };
                ctx.flow = FlowControl::Return(cell);
                Ok(())
            }
            Stmt::Block(block) => {
                let prev_vars = ctx.vars.clone();
                let result = self.eval_block_stmts(block, ctx);
                ctx.vars = prev_vars;
                result
            }
            Stmt::Blank => Ok(()),
            Stmt::Exp(exp) => {
                self.eval_exp(exp, ctx)?;
                Ok(())
            }
            Stmt::Task(body) | Stmt::Async(body) => self.spawn_task(body, ctx),
            Stmt::Await(body) => {
                let prev_vars = ctx.vars.clone();
                let result = self.eval_stmt(body, ctx);
                if result.is_ok() {
                    self.drain_tasks(ctx);
                }
                ctx.vars = prev_vars;
                result
            }
        }
    }

    fn eval_block_stmts(&mut self, block: &BlockStmt, ctx: &mut EvalContext) -> ScriptResult<()> {
        for stmt in &block.stmts {
            self.eval_stmt(stmt, ctx)?;
            if ctx.flow != FlowControl::None {
                break;
            }
        }
        Ok(())
    }

    fn eval_var_decl(&mut self, var_decl: &VarDecl, ctx: &mut EvalContext) -> ScriptResult<()> {
        for element in &var_decl.elements {
            let cell = match &element.init {
                Some(exp) => self.eval_exp(exp, ctx)?,
                None => self.arena.alloc(Value::Null),
            };
            ctx.set_var(element.name.clone(), cell);
        }
        Ok(())
    }

    fn eval_for_stmt(
        &mut self,
        initializer: Option<&ForInitializer>,
        cond: Option<&Exp>,
        cont: Option<&Exp>,
        body: &Stmt,
        ctx: &mut EvalContext,
    ) -> ScriptResult<()> {
        let prev_vars = ctx.vars.clone();
        let result = self.eval_for_loop(initializer, cond, cont, body, ctx);
        ctx.vars = prev_vars;
        result
    }

    fn eval_for_loop(
        &mut self,
        initializer: Option<&ForInitializer>,
        cond: Option<&Exp>,
        cont: Option<&Exp>,
        body: &Stmt,
        ctx: &mut EvalContext,
    ) -> ScriptResult<()> {
        match initializer {
            Some(ForInitializer::VarDecl(var_decl)) => self.eval_var_decl(var_decl, ctx)?,
            Some(ForInitializer::Exp(exp)) => {
                self.eval_exp(exp, ctx)?;
            }
            None => {}
        }

        loop {
            if let Some(cond) = cond {
                let cond_cell = self.eval_exp(cond, ctx)?;
                if !self.get_bool(cond_cell, "for condition")? {
                    break;
                }
            }

            self.eval_stmt(body, ctx)?;

            match ctx.flow {
                FlowControl::Break => {
                    ctx.flow = FlowControl::None;
                    break;
                }
                FlowControl::Continue => {
                    ctx.flow = FlowControl::None;
                }
                FlowControl::Return(_) => break,
                FlowControl::None => {}
            }

            if let Some(cont) = cont {
                self.eval_exp(cont, ctx)?;
            }
        }

        Ok(())
    }

    fn eval_command_stmt(
        &mut self,
        commands: &[StringExp],
        ctx: &mut EvalContext,
    ) -> ScriptResult<()> {
        for command in commands {
            let text = self.eval_string_exp(command, ctx)?;
            self.provider.execute(&text)?;
        }
        Ok(())
    }

    // ---- tasks ----

    fn spawn_task(&mut self, body: &Stmt, ctx: &mut EvalContext) -> ScriptResult<()> {
        let spec = capture_stmt(body)?;
        let captures = self.capture_cells(&spec, ctx)?;

        let mut task_ctx = EvalContext::new();
        task_ctx.vars = captures;
        task_ctx.func_kind = FuncKind::Async;

        ctx.tasks.push(ScriptTask::new(Rc::new(body.clone()), task_ctx));
        Ok(())
    }

    /// Run every queued task to completion, in spawn order. Tasks queued
    /// while draining run in the same pass. A failing task is reported
    /// and dropped; it does not abort the spawner.
    fn drain_tasks(&mut self, ctx: &mut EvalContext) {
        while !ctx.tasks.is_empty() {
            let batch: Vec<ScriptTask> = ctx.tasks.drain(..).collect();
            for task in batch {
                let mut task_ctx = task.ctx;
                if let Err(error) = self.eval_stmt(&task.body, &mut task_ctx) {
                    warn!(%error, "spawned task failed");
                }
                ctx.tasks.append(&mut task_ctx.tasks);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parser::Parser;
    use std::cell::RefCell;

    /// Provider that records each command line instead of running it.
    struct RecordingProvider(Rc<RefCell<Vec<String>>>);

    impl CommandProvider for RecordingProvider {
        fn execute(&mut self, command: &str) -> ScriptResult<()> {
            self.0.borrow_mut().push(command.to_string());
            Ok(())
        }
    }

    fn run(source: &str) -> (ScriptResult<()>, Vec<String>) {
        let commands = Rc::new(RefCell::new(Vec::new()));
        let mut evaluator = Evaluator::new(Box::new(RecordingProvider(Rc::clone(&commands))));
        let script = Parser::new().parse(source).expect("script parses");
        let result = evaluator.eval_script(&script);
        let commands = commands.borrow().clone();
        (result, commands)
    }

    fn run_ok(source: &str) -> Vec<String> {
        let (result, commands) = run(source);
        result.expect("script evaluates");
        commands
    }

    #[test]
    fn test_arithmetic_and_interpolation() {
        assert_eq!(run_ok("int x = 2 + 3 * 4; @echo ${x}"), vec!["echo 14"]);
    }

    #[test]
    fn test_string_concat() {
        assert_eq!(
            run_ok("string s = \"ab\" + \"cd\"; @echo $s"),
            vec!["echo abcd"]
        );
    }

    #[test]
    fn test_postfix_returns_pre_value() {
        assert_eq!(
            run_ok("int i = 5; int j = i++; @echo ${i} ${j}"),
            vec!["echo 6 5"]
        );
    }

    #[test]
    fn test_prefix_returns_operand_cell() {
        assert_eq!(
            run_ok("int i = 5; int j = ++i + 0; @echo ${i} ${j}"),
            vec!["echo 6 6"]
        );
    }

    #[test]
    fn test_divide_by_zero_fails() {
        let (result, _) = run("int x = 1 / 0;");
        assert_eq!(result.unwrap_err().kind, ErrorKind::DivideByZero);
    }

    #[test]
    fn test_overflow_fails() {
        let (result, _) = run("int x = 2147483647; x++;");
        assert_eq!(result.unwrap_err().kind, ErrorKind::OverflowError);
    }

    #[test]
    fn test_unbound_name_fails() {
        let (result, _) = run("@echo ${nope}");
        assert_eq!(result.unwrap_err().kind, ErrorKind::NameError);
    }

    #[test]
    fn test_assign_kind_mismatch_fails() {
        let (result, _) = run("int x = 1; x = \"s\";");
        assert_eq!(result.unwrap_err().kind, ErrorKind::TypeError);
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(
            run_ok("string a = \"x\"; string b = \"x\"; if (a == b) @echo same"),
            vec!["echo same"]
        );
    }

    #[test]
    fn test_if_condition_must_be_bool() {
        let (result, _) = run("if (1) {}");
        assert_eq!(result.unwrap_err().kind, ErrorKind::TypeError);
    }

    #[test]
    fn test_call_binds_argument_cells() {
        // the parameter aliases the caller's cell, so the mutation is
        // visible after the call
        assert_eq!(
            run_ok("void f(int x) { x = x + 1; } int a = 0; f(a); @echo ${a}"),
            vec!["echo 1"]
        );
    }

    #[test]
    fn test_call_arity_mismatch_fails() {
        let (result, _) = run("void f(int x) {} f();");
        assert_eq!(result.unwrap_err().kind, ErrorKind::ArityError);
    }

    #[test]
    fn test_return_value() {
        assert_eq!(
            run_ok("int double(int x) { return x + x; } @echo ${double(21)}"),
            vec!["echo 42"]
        );
    }

    #[test]
    fn test_func_vars_do_not_leak() {
        let (result, _) = run("void f() { int inner = 1; } f(); @echo ${inner}");
        assert_eq!(result.unwrap_err().kind, ErrorKind::NameError);
    }
}
