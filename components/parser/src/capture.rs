//! Free-variable capture analysis for lambdas and spawned task bodies.
//!
//! Closure bodies run against a snapshot environment rather than the
//! caller's live frame, so before one is built the body is scanned for
//! names it uses from enclosing scopes. Each such name is classified:
//!
//! - plain reads capture a copy of the value
//! - assignment targets and inc/dec operands capture the cell by
//!   reference, so the mutation stays visible outside
//!
//! Reference always wins when a name sees both uses. The bound set tracks
//! names introduced locally (parameters, variable declarations, loop
//! initializers); those are not captured. Scope exits restore the bound
//! set the same way evaluation scoping does.

use std::collections::{HashMap, HashSet};

use crate::ast::*;
use crate::error::capture_error;
use core_types::{ScriptError, ScriptResult};

/// How a free variable is carried into a closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureKind {
    /// Snapshot the value at closure creation
    Copy,
    /// Share the variable's cell
    Ref,
}

/// Compute the captures of a lambda body. Parameters are bound, not
/// captured.
pub fn capture_lambda(exp: &LambdaExp) -> ScriptResult<HashMap<String, CaptureKind>> {
    let mut capturer = Capturer::default();
    capturer.capture_lambda_exp(exp)?;
    Ok(capturer.captures)
}

/// Compute the captures of a spawned task or async body.
pub fn capture_stmt(stmt: &Stmt) -> ScriptResult<HashMap<String, CaptureKind>> {
    let mut capturer = Capturer::default();
    capturer.capture_stmt(stmt)?;
    Ok(capturer.captures)
}

#[derive(Debug, Default)]
struct Capturer {
    bound: HashSet<String>,
    captures: HashMap<String, CaptureKind>,
}

impl Capturer {
    fn add_capture(&mut self, name: &str, kind: CaptureKind) {
        match self.captures.get(name) {
            // never downgrade a reference capture
            Some(CaptureKind::Ref) => {}
            Some(prev) if *prev == kind => {}
            _ => {
                self.captures.insert(name.to_string(), kind);
            }
        }
    }

    fn capture_name(&mut self, name: &str, kind: CaptureKind) {
        if !self.bound.contains(name) {
            self.add_capture(name, kind);
        }
    }

    fn ref_capture_exp(&mut self, exp: &Exp) -> Result<(), ScriptError> {
        match exp {
            Exp::Identifier(name) => {
                self.capture_name(name, CaptureKind::Ref);
                Ok(())
            }
            _ => Err(capture_error("mutation target must be a variable")),
        }
    }

    fn capture_exp(&mut self, exp: &Exp) -> Result<(), ScriptError> {
        match exp {
            Exp::Identifier(name) => {
                self.capture_name(name, CaptureKind::Copy);
                Ok(())
            }
            Exp::IntLiteral(_) | Exp::BoolLiteral(_) => Ok(()),
            Exp::String(string_exp) => self.capture_string_exp(string_exp),
            Exp::UnaryOp { kind, operand } => match kind {
                UnaryOpKind::PostfixInc
                | UnaryOpKind::PostfixDec
                | UnaryOpKind::PrefixInc
                | UnaryOpKind::PrefixDec => self.ref_capture_exp(operand),
                UnaryOpKind::LogicalNot => self.capture_exp(operand),
            },
            Exp::BinaryOp {
                kind,
                operand0,
                operand1,
            } => {
                if *kind == BinaryOpKind::Assign {
                    self.ref_capture_exp(operand0)?;
                } else {
                    self.capture_exp(operand0)?;
                }
                self.capture_exp(operand1)
            }
            Exp::Call { callee, args } => {
                match callee {
                    Callee::Decl(_) => {}
                    Callee::Exp(exp) => self.capture_exp(exp)?,
                }
                for arg in args {
                    self.capture_exp(arg)?;
                }
                Ok(())
            }
            Exp::Lambda(lambda) => self.capture_lambda_exp(lambda),
        }
    }

    fn capture_string_exp(&mut self, string_exp: &StringExp) -> Result<(), ScriptError> {
        for element in &string_exp.elements {
            if let StringExpElement::Exp(exp) = element {
                self.capture_exp(exp)?;
            }
        }
        Ok(())
    }

    fn capture_var_decl(&mut self, var_decl: &VarDecl) {
        for element in &var_decl.elements {
            self.bound.insert(element.name.clone());
        }
    }

    fn capture_scoped_stmt(&mut self, stmt: &Stmt) -> Result<(), ScriptError> {
        let prev_bound = self.bound.clone();
        let result = self.capture_stmt(stmt);
        self.bound = prev_bound;
        result
    }

    fn capture_stmt(&mut self, stmt: &Stmt) -> Result<(), ScriptError> {
        match stmt {
            Stmt::Command(commands) => {
                for command in commands {
                    self.capture_string_exp(command)?;
                }
                Ok(())
            }
            Stmt::VarDecl(var_decl) => {
                self.capture_var_decl(var_decl);
                Ok(())
            }
            Stmt::If {
                cond,
                body,
                else_body,
            } => {
                self.capture_exp(cond)?;
                self.capture_stmt(body)?;
                if let Some(else_body) = else_body {
                    self.capture_stmt(else_body)?;
                }
                Ok(())
            }
            Stmt::For {
                initializer,
                cond,
                cont,
                body,
            } => {
                let prev_bound = self.bound.clone();

                let result = (|| {
                    match initializer {
                        Some(ForInitializer::VarDecl(var_decl)) => self.capture_var_decl(var_decl),
                        Some(ForInitializer::Exp(exp)) => self.capture_exp(exp)?,
                        None => {}
                    }
                    if let Some(cond) = cond {
                        self.capture_exp(cond)?;
                    }
                    if let Some(cont) = cont {
                        self.capture_exp(cont)?;
                    }
                    self.capture_stmt(body)
                })();

                self.bound = prev_bound;
                result
            }
            Stmt::Continue | Stmt::Break | Stmt::Blank => Ok(()),
            Stmt::Return(value) => match value {
                Some(exp) => self.capture_exp(exp),
                None => Ok(()),
            },
            Stmt::Block(block) => {
                let prev_bound = self.bound.clone();
                let mut result = Ok(());
                for stmt in &block.stmts {
                    result = self.capture_stmt(stmt);
                    if result.is_err() {
                        break;
                    }
                }
                self.bound = prev_bound;
                result
            }
            Stmt::Exp(exp) => self.capture_exp(exp),
            Stmt::Task(body) | Stmt::Await(body) | Stmt::Async(body) => {
                self.capture_scoped_stmt(body)
            }
        }
    }

    fn capture_lambda_exp(&mut self, exp: &LambdaExp) -> Result<(), ScriptError> {
        let prev_bound = self.bound.clone();

        for param in &exp.params {
            self.bound.insert(param.name.clone());
        }

        let result = self.capture_stmt(&exp.body);
        self.bound = prev_bound;
        result
    }
}
