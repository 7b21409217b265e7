//! Abstract syntax tree for qsh scripts.
//!
//! Every node derives `PartialEq` so parser tests can assert whole trees.
//! Function declarations are shared behind `Rc` once they reach the
//! evaluator; here they are plain owned data.

use std::rc::Rc;

/// Binary operator kinds, in rough precedence groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOpKind {
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `<=`
    LessThanOrEqual,
    /// `>=`
    GreaterThanOrEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `=`
    Assign,
}

/// Unary operator kinds.
///
/// There is no general unary minus; `-` directly before an integer literal
/// folds into a negative literal at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOpKind {
    /// `x++`
    PostfixInc,
    /// `x--`
    PostfixDec,
    /// `!x`
    LogicalNot,
    /// `++x`
    PrefixInc,
    /// `--x`
    PrefixDec,
}

/// Whether a function or lambda body runs synchronously or as an async
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuncKind {
    /// Plain call frame
    Sync,
    /// `async` call frame
    Async,
}

/// A type id, as written. No checking happens beyond recording the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExp {
    /// The type name
    pub name: String,
}

impl TypeExp {
    /// Construct a type id.
    pub fn new(name: impl Into<String>) -> Self {
        TypeExp { name: name.into() }
    }
}

/// One piece of an interpolated string.
#[derive(Debug, Clone, PartialEq)]
pub enum StringExpElement {
    /// Literal text
    Text(String),
    /// An interpolated expression (`$name` or `${exp}`)
    Exp(Exp),
}

/// An interpolated string: a sequence of text and expression elements.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExp {
    /// The elements in source order
    pub elements: Vec<StringExpElement>,
}

impl StringExp {
    /// Construct from elements.
    pub fn new(elements: Vec<StringExpElement>) -> Self {
        StringExp { elements }
    }

    /// A string of a single literal text element.
    pub fn from_text(text: impl Into<String>) -> Self {
        StringExp {
            elements: vec![StringExpElement::Text(text.into())],
        }
    }
}

/// What a call expression calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Callee {
    /// A function declaration bound directly (not produced by the parser)
    Decl(Rc<FuncDecl>),
    /// An expression that must name a function or evaluate to a callable
    Exp(Box<Exp>),
}

/// A lambda parameter: optional type id and a name.
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaParam {
    /// Declared type, when written
    pub type_exp: Option<TypeExp>,
    /// Parameter name
    pub name: String,
}

/// A lambda literal.
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaExp {
    /// Sync or async frame kind
    pub kind: FuncKind,
    /// Parameters in order
    pub params: Vec<LambdaParam>,
    /// The body; a bare expression body is wrapped in a return statement
    pub body: Box<Stmt>,
}

/// Expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Exp {
    /// A name reference
    Identifier(String),
    /// Integer literal
    IntLiteral(i32),
    /// Boolean literal
    BoolLiteral(bool),
    /// Interpolated string literal
    String(StringExp),
    /// Binary operation
    BinaryOp {
        /// Operator
        kind: BinaryOpKind,
        /// Left operand
        operand0: Box<Exp>,
        /// Right operand
        operand1: Box<Exp>,
    },
    /// Unary operation
    UnaryOp {
        /// Operator
        kind: UnaryOpKind,
        /// Operand
        operand: Box<Exp>,
    },
    /// Call
    Call {
        /// Callee
        callee: Callee,
        /// Arguments in order
        args: Vec<Exp>,
    },
    /// Lambda literal
    Lambda(LambdaExp),
}

impl Exp {
    /// Shorthand for an identifier expression.
    pub fn ident(name: impl Into<String>) -> Self {
        Exp::Identifier(name.into())
    }

    /// Shorthand for a binary operation.
    pub fn binary(kind: BinaryOpKind, operand0: Exp, operand1: Exp) -> Self {
        Exp::BinaryOp {
            kind,
            operand0: Box::new(operand0),
            operand1: Box::new(operand1),
        }
    }

    /// Shorthand for a unary operation.
    pub fn unary(kind: UnaryOpKind, operand: Exp) -> Self {
        Exp::UnaryOp {
            kind,
            operand: Box::new(operand),
        }
    }
}

/// One declared variable: name and optional initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclElement {
    /// Variable name
    pub name: String,
    /// Initializer expression, when written
    pub init: Option<Exp>,
}

/// A variable declaration: one type id, one or more elements.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// Declared type
    pub type_exp: TypeExp,
    /// Declared variables in order
    pub elements: Vec<VarDeclElement>,
}

/// The first slot of a `for` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum ForInitializer {
    /// `for (int i = 0; ...`
    VarDecl(VarDecl),
    /// `for (i = 0; ...`
    Exp(Exp),
}

/// A braced statement list.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    /// The statements in order
    pub stmts: Vec<Stmt>,
}

impl BlockStmt {
    /// Construct from statements.
    pub fn new(stmts: Vec<Stmt>) -> Self {
        BlockStmt { stmts }
    }
}

/// Statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `@cmd ...` or `@{ ... }`; one string expression per command line
    Command(Vec<StringExp>),
    /// Variable declaration statement
    VarDecl(VarDecl),
    /// `if (cond) body [else else_body]`
    If {
        /// Condition, must evaluate to a bool
        cond: Exp,
        /// Then branch
        body: Box<Stmt>,
        /// Else branch (an `if` statement again for `else if` chains)
        else_body: Option<Box<Stmt>>,
    },
    /// `for ([init]; [cond]; [cont]) body`
    For {
        /// Initializer slot
        initializer: Option<ForInitializer>,
        /// Loop condition slot
        cond: Option<Exp>,
        /// Continue-expression slot, run after each iteration
        cont: Option<Exp>,
        /// Loop body
        body: Box<Stmt>,
    },
    /// `continue;`
    Continue,
    /// `break;`
    Break,
    /// `return [exp];`
    Return(Option<Exp>),
    /// `{ ... }`
    Block(BlockStmt),
    /// A bare `;`
    Blank,
    /// Expression statement
    Exp(Exp),
    /// `task stmt` spawns the body as a deferred task
    Task(Box<Stmt>),
    /// `await stmt` runs the body then drains pending tasks
    Await(Box<Stmt>),
    /// `async stmt` spawns like `task`
    Async(Box<Stmt>),
}

/// A function declaration parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDeclParam {
    /// Declared type
    pub type_exp: TypeExp,
    /// Parameter name
    pub name: String,
}

/// A top-level function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    /// Sync or async
    pub kind: FuncKind,
    /// Declared return type
    pub ret_type: TypeExp,
    /// Function name
    pub name: String,
    /// Parameters in order
    pub params: Vec<FuncDeclParam>,
    /// Index of the `params`-marked variadic parameter, when present.
    /// Recorded at parse time; calls still bind arguments one to one.
    pub variadic_param_index: Option<usize>,
    /// Function body
    pub body: BlockStmt,
}

/// One top-level script element.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptElement {
    /// A statement
    Stmt(Stmt),
    /// A function declaration
    Func(FuncDecl),
}

/// A parsed script.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    /// Elements in source order
    pub elements: Vec<ScriptElement>,
}

impl Script {
    /// Construct from elements.
    pub fn new(elements: Vec<ScriptElement>) -> Self {
        Script { elements }
    }
}
