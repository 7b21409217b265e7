//! Runtime values and the cell arena.
//!
//! Script values are mutable cells shared by identity: assigning to a
//! variable overwrites the payload of the cell it is bound to, and every
//! scope or closure holding that cell sees the change. Cells live in a
//! [`ValueArena`] owned by the evaluator; everything else holds plain
//! [`ValueRef`] indices, which keeps ownership acyclic.

use std::collections::HashMap;
use std::rc::Rc;

use core_types::{ScriptError, ScriptResult};
use parser::ast::{FuncDecl, LambdaExp};

/// A function or lambda value.
#[derive(Debug, Clone)]
pub enum Callable {
    /// A declared function
    Func(Rc<FuncDecl>),
    /// A lambda closure: the lambda node plus its captured cells
    Lambda {
        /// The lambda expression this closure was created from
        exp: Rc<LambdaExp>,
        /// Captured name to cell bindings, fixed at creation time
        captures: HashMap<String, ValueRef>,
    },
}

impl PartialEq for Callable {
    /// Callables compare by identity, not structure.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Callable::Func(a), Callable::Func(b)) => Rc::ptr_eq(a, b),
            (Callable::Lambda { exp: a, .. }, Callable::Lambda { exp: b, .. }) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// One cell payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The uninitialized / no-result value
    Null,
    /// Boolean
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// String
    String(String),
    /// Function or lambda
    Callable(Callable),
}

impl Value {
    fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::String(_) => "string",
            Value::Callable(_) => "callable",
        }
    }

    fn same_kind(&self, other: &Value) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Index of a cell in a [`ValueArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRef(usize);

/// Owner of all value cells created during one evaluation.
///
/// Cells are never freed before the arena drops; scripts are short-lived
/// and the per-cell cost is small.
#[derive(Debug, Default)]
pub struct ValueArena {
    slots: Vec<Value>,
}

impl ValueArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        ValueArena { slots: Vec::new() }
    }

    /// Allocate a fresh cell.
    pub fn alloc(&mut self, value: Value) -> ValueRef {
        self.slots.push(value);
        ValueRef(self.slots.len() - 1)
    }

    /// Read a cell's payload.
    pub fn get(&self, value_ref: ValueRef) -> &Value {
        &self.slots[value_ref.0]
    }

    /// Overwrite a cell's payload without any kind check.
    pub fn set(&mut self, value_ref: ValueRef, value: Value) {
        self.slots[value_ref.0] = value;
    }

    /// Allocate a new cell holding a copy of another cell's payload.
    pub fn make_copy(&mut self, value_ref: ValueRef) -> ValueRef {
        let value = self.get(value_ref).clone();
        self.alloc(value)
    }

    /// Copy the payload of `src` into `dst` in place.
    ///
    /// Fails when the payload kinds differ, except that a null cell may
    /// take on any kind (a declared but uninitialized variable).
    pub fn assign(&mut self, dst: ValueRef, src: ValueRef) -> ScriptResult<()> {
        let src_value = self.get(src).clone();
        let dst_value = self.get(dst);
        if !dst_value.same_kind(&src_value) && *dst_value != Value::Null {
            return Err(ScriptError::type_error(format!(
                "cannot assign {} to {}",
                src_value.kind_name(),
                dst_value.kind_name()
            )));
        }
        self.set(dst, src_value);
        Ok(())
    }

    /// Structural payload equality between two cells.
    pub fn payload_eq(&self, a: ValueRef, b: ValueRef) -> bool {
        self.get(a) == self.get(b)
    }
}
