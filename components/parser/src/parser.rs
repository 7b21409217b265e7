//! Recursive descent parser for qsh.
//!
//! Parsing routines are backtracking probes: each takes a position and
//! returns `Some((node, next_pos))` or `None`, and callers simply try the
//! next alternative from the position they held. The expression grammar is
//! precedence climbing; every left-associative level goes through one shared
//! fold helper.
//!
//! The parser drives the lexer mode by mode: normal mode for code, string
//! mode inside `"..."`, command mode inside `@` statements.

use crate::ast::*;
use crate::error::syntax_error;
use crate::lexer::{Lexed, Lexer, Token};
use core_types::{ScriptResult, SourceBuffer, SourcePos};

/// Result of one parse probe: the parsed node and the position after it.
pub type Parse<T> = Option<(T, SourcePos)>;

/// The qsh parser.
#[derive(Debug, Default)]
pub struct Parser {
    lexer: Lexer,
}

fn accept(lexed: Option<Lexed>, expected: &Token, pos: &mut SourcePos) -> bool {
    if let Some(lexed) = lexed {
        if lexed.token == *expected {
            *pos = lexed.next;
            return true;
        }
    }
    false
}

fn accept_identifier(lexed: Option<Lexed>, pos: &mut SourcePos) -> Option<String> {
    if let Some(Lexed {
        token: Token::Identifier(name),
        next,
    }) = lexed
    {
        *pos = next;
        return Some(name);
    }
    None
}

fn accept_text(lexed: Option<Lexed>, pos: &mut SourcePos) -> Option<String> {
    if let Some(Lexed {
        token: Token::Text(text),
        next,
    }) = lexed
    {
        *pos = next;
        return Some(text);
    }
    None
}

fn peek(lexed: &Option<Lexed>, expected: &Token) -> bool {
    matches!(lexed, Some(lexed) if lexed.token == *expected)
}

/// Binary operator table rows: token to operator kind.
type BinaryOpInfos = &'static [(Token, BinaryOpKind)];

const MULTIPLICATIVE_INFOS: BinaryOpInfos = &[
    (Token::Star, BinaryOpKind::Multiply),
    (Token::Slash, BinaryOpKind::Divide),
    (Token::Percent, BinaryOpKind::Modulo),
];

const ADDITIVE_INFOS: BinaryOpInfos = &[
    (Token::Plus, BinaryOpKind::Add),
    (Token::Minus, BinaryOpKind::Subtract),
];

const TEST_INFOS: BinaryOpInfos = &[
    (Token::GreaterThanEqual, BinaryOpKind::GreaterThanOrEqual),
    (Token::LessThanEqual, BinaryOpKind::LessThanOrEqual),
    (Token::LessThan, BinaryOpKind::LessThan),
    (Token::GreaterThan, BinaryOpKind::GreaterThan),
];

const EQUALITY_INFOS: BinaryOpInfos = &[
    (Token::EqualEqual, BinaryOpKind::Equal),
    (Token::ExclEqual, BinaryOpKind::NotEqual),
];

impl Parser {
    /// Create a parser.
    pub fn new() -> Self {
        Parser { lexer: Lexer::new() }
    }

    /// Parse a whole script, turning a failed parse into a syntax error.
    pub fn parse(&self, source: &str) -> ScriptResult<Script> {
        let buffer = SourceBuffer::new(source);
        match self.parse_script(&buffer.first_pos()) {
            Some((script, _)) => Ok(script),
            None => Err(syntax_error("script does not parse")),
        }
    }

    fn lex(&self, pos: &SourcePos) -> Option<Lexed> {
        self.lexer.lex_normal(pos, true)
    }

    // ---- expressions ----

    /// Parse one expression.
    pub fn parse_exp(&self, pos: &SourcePos) -> Parse<Exp> {
        self.parse_assign_exp(pos)
    }

    fn parse_left_assoc_binary_op_exp(
        &self,
        pos: &SourcePos,
        parse_base: fn(&Parser, &SourcePos) -> Parse<Exp>,
        infos: BinaryOpInfos,
    ) -> Parse<Exp> {
        let (mut exp, mut pos) = parse_base(self, pos)?;

        loop {
            let mut op_kind = None;
            if let Some(lexed) = self.lex(&pos) {
                for (token, kind) in infos {
                    if *token == lexed.token {
                        op_kind = Some(*kind);
                        pos = lexed.next;
                        break;
                    }
                }
            }

            let Some(op_kind) = op_kind else {
                return Some((exp, pos));
            };

            let (operand1, next) = parse_base(self, &pos)?;
            pos = next;

            exp = Exp::binary(op_kind, exp, operand1);
        }
    }

    fn parse_assign_exp(&self, pos: &SourcePos) -> Parse<Exp> {
        // lambda must go first so `a => ...` does not parse as the plain
        // identifier `a`
        if let Some(result) = self.parse_lambda_exp(pos) {
            return Some(result);
        }

        let (operand0, mut pos) = self.parse_equality_exp(pos)?;

        if !accept(self.lex(&pos), &Token::Equal, &mut pos) {
            return Some((operand0, pos));
        }

        // right associative
        let (operand1, pos) = self.parse_assign_exp(&pos)?;

        Some((Exp::binary(BinaryOpKind::Assign, operand0, operand1), pos))
    }

    fn parse_lambda_exp(&self, pos: &SourcePos) -> Parse<Exp> {
        let mut pos = pos.clone();

        let kind = if accept(self.lex(&pos), &Token::Async, &mut pos) {
            FuncKind::Async
        } else {
            FuncKind::Sync
        };

        // a  |  ()  |  (a, b)  |  (int a, b)
        let mut params = Vec::new();
        if let Some(name) = accept_identifier(self.lex(&pos), &mut pos) {
            params.push(LambdaParam {
                type_exp: None,
                name,
            });
        } else if accept(self.lex(&pos), &Token::LParen, &mut pos) {
            while !accept(self.lex(&pos), &Token::RParen, &mut pos) {
                if !params.is_empty() && !accept(self.lex(&pos), &Token::Comma, &mut pos) {
                    return None;
                }

                let first = accept_identifier(self.lex(&pos), &mut pos)?;

                match accept_identifier(self.lex(&pos), &mut pos) {
                    Some(second) => params.push(LambdaParam {
                        type_exp: Some(TypeExp::new(first)),
                        name: second,
                    }),
                    None => params.push(LambdaParam {
                        type_exp: None,
                        name: first,
                    }),
                }
            }
        }

        if !accept(self.lex(&pos), &Token::EqualGreaterThan, &mut pos) {
            return None;
        }

        // `exp` bodies desugar to `return exp;`
        let body = if peek(&self.lex(&pos), &Token::LBrace) {
            let (stmt, next) = self.parse_stmt(&pos)?;
            pos = next;
            stmt
        } else {
            let (exp, next) = self.parse_exp(&pos)?;
            pos = next;
            Stmt::Return(Some(exp))
        };

        Some((
            Exp::Lambda(LambdaExp {
                kind,
                params,
                body: Box::new(body),
            }),
            pos,
        ))
    }

    fn parse_equality_exp(&self, pos: &SourcePos) -> Parse<Exp> {
        self.parse_left_assoc_binary_op_exp(pos, Parser::parse_test_exp, EQUALITY_INFOS)
    }

    fn parse_test_exp(&self, pos: &SourcePos) -> Parse<Exp> {
        self.parse_left_assoc_binary_op_exp(pos, Parser::parse_additive_exp, TEST_INFOS)
    }

    fn parse_additive_exp(&self, pos: &SourcePos) -> Parse<Exp> {
        self.parse_left_assoc_binary_op_exp(pos, Parser::parse_multiplicative_exp, ADDITIVE_INFOS)
    }

    fn parse_multiplicative_exp(&self, pos: &SourcePos) -> Parse<Exp> {
        self.parse_left_assoc_binary_op_exp(pos, Parser::parse_unary_exp, MULTIPLICATIVE_INFOS)
    }

    fn parse_unary_exp(&self, pos: &SourcePos) -> Parse<Exp> {
        let mut pos = pos.clone();

        // minus is only valid directly before an integer literal, where it
        // folds into the literal
        let mut op_kind = None;
        let mut minus = false;
        if let Some(lexed) = self.lex(&pos) {
            match lexed.token {
                Token::Excl => op_kind = Some(UnaryOpKind::LogicalNot),
                Token::PlusPlus => op_kind = Some(UnaryOpKind::PrefixInc),
                Token::MinusMinus => op_kind = Some(UnaryOpKind::PrefixDec),
                Token::Minus => minus = true,
                _ => {}
            }
            if op_kind.is_some() || minus {
                pos = lexed.next;
            }
        }

        if minus {
            let (operand, pos) = self.parse_unary_exp(&pos)?;
            return match operand {
                Exp::IntLiteral(value) => Some((Exp::IntLiteral(-value), pos)),
                _ => None,
            };
        }

        if let Some(kind) = op_kind {
            let (operand, pos) = self.parse_unary_exp(&pos)?;
            return Some((Exp::unary(kind, operand), pos));
        }

        self.parse_primary_exp(&pos)
    }

    fn parse_primary_exp(&self, pos: &SourcePos) -> Parse<Exp> {
        let (mut exp, mut pos) = self.parse_single_exp(pos)?;

        loop {
            let Some(lexed) = self.lex(&pos) else { break };

            let postfix_kind = match lexed.token {
                Token::PlusPlus => Some(UnaryOpKind::PostfixInc),
                Token::MinusMinus => Some(UnaryOpKind::PostfixDec),
                _ => None,
            };

            if let Some(kind) = postfix_kind {
                pos = lexed.next;
                exp = Exp::unary(kind, exp);
                continue;
            }

            if lexed.token == Token::LParen {
                pos = lexed.next;

                let mut args = Vec::new();
                while !accept(self.lex(&pos), &Token::RParen, &mut pos) {
                    if !args.is_empty() && !accept(self.lex(&pos), &Token::Comma, &mut pos) {
                        return None;
                    }

                    let (arg, next) = self.parse_exp(&pos)?;
                    pos = next;
                    args.push(arg);
                }

                exp = Exp::Call {
                    callee: Callee::Exp(Box::new(exp)),
                    args,
                };
                continue;
            }

            break;
        }

        Some((exp, pos))
    }

    fn parse_single_exp(&self, pos: &SourcePos) -> Parse<Exp> {
        if let Some(result) = self.parse_paren_exp(pos) {
            return Some(result);
        }

        if let Some(Lexed {
            token: Token::Bool(value),
            next,
        }) = self.lex(pos)
        {
            return Some((Exp::BoolLiteral(value), next));
        }

        if let Some(Lexed {
            token: Token::Int(value),
            next,
        }) = self.lex(pos)
        {
            return Some((Exp::IntLiteral(value), next));
        }

        if let Some((string_exp, next)) = self.parse_string_exp(pos) {
            return Some((Exp::String(string_exp), next));
        }

        let mut pos = pos.clone();
        let name = accept_identifier(self.lex(&pos), &mut pos)?;
        Some((Exp::Identifier(name), pos))
    }

    fn parse_paren_exp(&self, pos: &SourcePos) -> Parse<Exp> {
        let mut pos = pos.clone();
        if !accept(self.lex(&pos), &Token::LParen, &mut pos) {
            return None;
        }

        let (exp, mut pos) = self.parse_exp(&pos)?;

        if !accept(self.lex(&pos), &Token::RParen, &mut pos) {
            return None;
        }

        Some((exp, pos))
    }

    /// Parse a `"..."` string literal, switching the lexer into string mode.
    pub fn parse_string_exp(&self, pos: &SourcePos) -> Parse<StringExp> {
        let mut pos = pos.clone();
        if !accept(self.lex(&pos), &Token::DoubleQuote, &mut pos) {
            return None;
        }

        let mut elements = Vec::new();
        while !accept(self.lexer.lex_string(&pos), &Token::DoubleQuote, &mut pos) {
            if let Some(text) = accept_text(self.lexer.lex_string(&pos), &mut pos) {
                elements.push(StringExpElement::Text(text));
                continue;
            }

            if let Some(name) = accept_identifier(self.lexer.lex_string(&pos), &mut pos) {
                elements.push(StringExpElement::Exp(Exp::Identifier(name)));
                continue;
            }

            if accept(self.lexer.lex_string(&pos), &Token::DollarLBrace, &mut pos) {
                let (exp, next) = self.parse_exp(&pos)?;
                pos = next;

                // the closing brace is ordinary code, lex it in normal mode
                if !accept(self.lex(&pos), &Token::RBrace, &mut pos) {
                    return None;
                }

                elements.push(StringExpElement::Exp(exp));
                continue;
            }

            return None;
        }

        Some((StringExp::new(elements), pos))
    }

    // ---- statements ----

    /// Parse one statement, trying each alternative in order.
    pub fn parse_stmt(&self, pos: &SourcePos) -> Parse<Stmt> {
        if let Some((_, next)) = self.parse_blank_stmt(pos) {
            return Some((Stmt::Blank, next));
        }

        if let Some((block, next)) = self.parse_block_stmt(pos) {
            return Some((Stmt::Block(block), next));
        }

        if let Some(result) = self.parse_continue_stmt(pos) {
            return Some(result);
        }

        if let Some(result) = self.parse_break_stmt(pos) {
            return Some(result);
        }

        if let Some(result) = self.parse_return_stmt(pos) {
            return Some(result);
        }

        if let Some(result) = self.parse_var_decl_stmt(pos) {
            return Some(result);
        }

        if let Some(result) = self.parse_if_stmt(pos) {
            return Some(result);
        }

        if let Some(result) = self.parse_for_stmt(pos) {
            return Some(result);
        }

        if let Some(result) = self.parse_exp_stmt(pos) {
            return Some(result);
        }

        if let Some(result) = self.parse_task_stmt(pos) {
            return Some(result);
        }

        if let Some(result) = self.parse_await_stmt(pos) {
            return Some(result);
        }

        if let Some(result) = self.parse_async_stmt(pos) {
            return Some(result);
        }

        if let Some(result) = self.parse_command_stmt(pos) {
            return Some(result);
        }

        None
    }

    fn parse_blank_stmt(&self, pos: &SourcePos) -> Parse<()> {
        let mut pos = pos.clone();
        if accept(self.lex(&pos), &Token::SemiColon, &mut pos) {
            Some(((), pos))
        } else {
            None
        }
    }

    /// Parse a `{ ... }` statement list.
    pub fn parse_block_stmt(&self, pos: &SourcePos) -> Parse<BlockStmt> {
        let mut pos = pos.clone();
        if !accept(self.lex(&pos), &Token::LBrace, &mut pos) {
            return None;
        }

        let mut stmts = Vec::new();
        while !accept(self.lex(&pos), &Token::RBrace, &mut pos) {
            let (stmt, next) = self.parse_stmt(&pos)?;
            pos = next;
            stmts.push(stmt);
        }

        Some((BlockStmt::new(stmts), pos))
    }

    fn parse_continue_stmt(&self, pos: &SourcePos) -> Parse<Stmt> {
        let mut pos = pos.clone();
        if !accept(self.lex(&pos), &Token::Continue, &mut pos) {
            return None;
        }
        if !accept(self.lex(&pos), &Token::SemiColon, &mut pos) {
            return None;
        }
        Some((Stmt::Continue, pos))
    }

    fn parse_break_stmt(&self, pos: &SourcePos) -> Parse<Stmt> {
        let mut pos = pos.clone();
        if !accept(self.lex(&pos), &Token::Break, &mut pos) {
            return None;
        }
        if !accept(self.lex(&pos), &Token::SemiColon, &mut pos) {
            return None;
        }
        Some((Stmt::Break, pos))
    }

    fn parse_return_stmt(&self, pos: &SourcePos) -> Parse<Stmt> {
        let mut pos = pos.clone();
        if !accept(self.lex(&pos), &Token::Return, &mut pos) {
            return None;
        }

        let mut value = None;
        if let Some((exp, next)) = self.parse_exp(&pos) {
            pos = next;
            value = Some(exp);
        }

        if !accept(self.lex(&pos), &Token::SemiColon, &mut pos) {
            return None;
        }

        Some((Stmt::Return(value), pos))
    }

    fn parse_var_decl(&self, pos: &SourcePos) -> Parse<VarDecl> {
        let mut pos = pos.clone();

        let type_name = accept_identifier(self.lex(&pos), &mut pos)?;

        let mut elements = Vec::new();
        loop {
            let name = accept_identifier(self.lex(&pos), &mut pos)?;

            let mut init = None;
            if accept(self.lex(&pos), &Token::Equal, &mut pos) {
                let (exp, next) = self.parse_exp(&pos)?;
                pos = next;
                init = Some(exp);
            }

            elements.push(VarDeclElement { name, init });

            if !accept(self.lex(&pos), &Token::Comma, &mut pos) {
                break;
            }
        }

        Some((
            VarDecl {
                type_exp: TypeExp::new(type_name),
                elements,
            },
            pos,
        ))
    }

    fn parse_var_decl_stmt(&self, pos: &SourcePos) -> Parse<Stmt> {
        let (var_decl, mut pos) = self.parse_var_decl(pos)?;

        // the terminating semicolon may be omitted at end of input
        if !pos.is_end() && !accept(self.lex(&pos), &Token::SemiColon, &mut pos) {
            return None;
        }

        Some((Stmt::VarDecl(var_decl), pos))
    }

    fn parse_if_stmt(&self, pos: &SourcePos) -> Parse<Stmt> {
        let mut pos = pos.clone();
        if !accept(self.lex(&pos), &Token::If, &mut pos) {
            return None;
        }
        if !accept(self.lex(&pos), &Token::LParen, &mut pos) {
            return None;
        }

        let (cond, mut pos) = self.parse_exp(&pos)?;

        if !accept(self.lex(&pos), &Token::RParen, &mut pos) {
            return None;
        }

        let (body, mut pos) = self.parse_stmt(&pos)?;

        let mut else_body = None;
        if accept(self.lex(&pos), &Token::Else, &mut pos) {
            let (stmt, next) = self.parse_stmt(&pos)?;
            pos = next;
            else_body = Some(Box::new(stmt));
        }

        Some((
            Stmt::If {
                cond,
                body: Box::new(body),
                else_body,
            },
            pos,
        ))
    }

    fn parse_for_stmt_initializer(&self, pos: &SourcePos) -> Parse<ForInitializer> {
        if let Some((var_decl, next)) = self.parse_var_decl(pos) {
            return Some((ForInitializer::VarDecl(var_decl), next));
        }

        if let Some((exp, next)) = self.parse_exp(pos) {
            return Some((ForInitializer::Exp(exp), next));
        }

        None
    }

    fn parse_for_stmt(&self, pos: &SourcePos) -> Parse<Stmt> {
        let mut pos = pos.clone();
        if !accept(self.lex(&pos), &Token::For, &mut pos) {
            return None;
        }
        if !accept(self.lex(&pos), &Token::LParen, &mut pos) {
            return None;
        }

        let mut initializer = None;
        if let Some((init, next)) = self.parse_for_stmt_initializer(&pos) {
            initializer = Some(init);
            pos = next;
        }

        if !accept(self.lex(&pos), &Token::SemiColon, &mut pos) {
            return None;
        }

        let mut cond = None;
        if let Some((exp, next)) = self.parse_exp(&pos) {
            cond = Some(exp);
            pos = next;
        }

        if !accept(self.lex(&pos), &Token::SemiColon, &mut pos) {
            return None;
        }

        let mut cont = None;
        if let Some((exp, next)) = self.parse_exp(&pos) {
            cont = Some(exp);
            pos = next;
        }

        if !accept(self.lex(&pos), &Token::RParen, &mut pos) {
            return None;
        }

        let (body, pos) = self.parse_stmt(&pos)?;

        Some((
            Stmt::For {
                initializer,
                cond,
                cont,
                body: Box::new(body),
            },
            pos,
        ))
    }

    fn parse_exp_stmt(&self, pos: &SourcePos) -> Parse<Stmt> {
        let (exp, mut pos) = self.parse_exp(pos)?;

        if !accept(self.lex(&pos), &Token::SemiColon, &mut pos) {
            return None;
        }

        Some((Stmt::Exp(exp), pos))
    }

    fn parse_task_stmt(&self, pos: &SourcePos) -> Parse<Stmt> {
        let mut pos = pos.clone();
        if !accept(self.lex(&pos), &Token::Task, &mut pos) {
            return None;
        }

        let (body, pos) = self.parse_stmt(&pos)?;
        Some((Stmt::Task(Box::new(body)), pos))
    }

    fn parse_await_stmt(&self, pos: &SourcePos) -> Parse<Stmt> {
        let mut pos = pos.clone();
        if !accept(self.lex(&pos), &Token::Await, &mut pos) {
            return None;
        }

        let (body, pos) = self.parse_stmt(&pos)?;
        Some((Stmt::Await(Box::new(body)), pos))
    }

    fn parse_async_stmt(&self, pos: &SourcePos) -> Parse<Stmt> {
        let mut pos = pos.clone();
        if !accept(self.lex(&pos), &Token::Async, &mut pos) {
            return None;
        }

        let (body, pos) = self.parse_stmt(&pos)?;
        Some((Stmt::Async(Box::new(body)), pos))
    }

    /// Parse one command line in command mode, until a newline, end of
    /// input, or a closing brace. The brace is left unconsumed so the
    /// enclosing command block or block statement can claim it.
    fn parse_single_command(&self, pos: &SourcePos) -> Parse<StringExp> {
        let mut pos = pos.clone();
        let mut elements = Vec::new();

        while !pos.is_end() {
            if peek(&self.lexer.lex_command(&pos), &Token::RBrace) {
                break;
            }

            if accept(self.lexer.lex_command(&pos), &Token::NewLine, &mut pos) {
                break;
            }

            if accept(self.lexer.lex_command(&pos), &Token::DollarLBrace, &mut pos) {
                let (exp, next) = self.parse_exp(&pos)?;
                pos = next;

                if !accept(self.lex(&pos), &Token::RBrace, &mut pos) {
                    return None;
                }

                elements.push(StringExpElement::Exp(exp));
                continue;
            }

            if let Some(name) = accept_identifier(self.lexer.lex_command(&pos), &mut pos) {
                elements.push(StringExpElement::Exp(Exp::Identifier(name)));
                continue;
            }

            if let Some(text) = accept_text(self.lexer.lex_command(&pos), &mut pos) {
                elements.push(StringExpElement::Text(text));
                continue;
            }

            return None;
        }

        Some((StringExp::new(elements), pos))
    }

    /// Parse an `@` command statement: either a single command to end of
    /// line or a `{ ... }` block of commands.
    pub fn parse_command_stmt(&self, pos: &SourcePos) -> Parse<Stmt> {
        let mut pos = pos.clone();
        if !accept(self.lex(&pos), &Token::Exec, &mut pos) {
            return None;
        }

        if accept(self.lex(&pos), &Token::LBrace, &mut pos) {
            let mut commands = Vec::new();
            loop {
                if accept(self.lexer.lex_command(&pos), &Token::RBrace, &mut pos) {
                    break;
                }

                let (command, next) = self.parse_single_command(&pos)?;
                pos = next;

                // blank or whitespace-only lines are dropped
                if command.elements.is_empty() {
                    continue;
                }
                if command.elements.len() == 1 {
                    if let StringExpElement::Text(text) = &command.elements[0] {
                        if text.trim().is_empty() {
                            continue;
                        }
                    }
                }

                commands.push(command);
            }

            return Some((Stmt::Command(commands), pos));
        }

        let (command, pos) = self.parse_single_command(&pos)?;
        if command.elements.is_empty() {
            return None;
        }
        Some((Stmt::Command(vec![command]), pos))
    }

    // ---- declarations and scripts ----

    fn parse_type_exp(&self, pos: &SourcePos) -> Parse<TypeExp> {
        let mut pos = pos.clone();
        let name = accept_identifier(self.lex(&pos), &mut pos)?;
        Some((TypeExp::new(name), pos))
    }

    fn parse_func_decl_param(&self, pos: &SourcePos) -> Parse<(FuncDeclParam, bool)> {
        let mut pos = pos.clone();
        let variadic = accept(self.lex(&pos), &Token::Params, &mut pos);

        let (type_exp, mut pos) = self.parse_type_exp(&pos)?;

        let name = accept_identifier(self.lex(&pos), &mut pos)?;

        Some(((FuncDeclParam { type_exp, name }, variadic), pos))
    }

    /// Parse a function declaration.
    pub fn parse_func_decl(&self, pos: &SourcePos) -> Parse<FuncDecl> {
        let mut pos = pos.clone();

        let kind = if accept(self.lex(&pos), &Token::Async, &mut pos) {
            FuncKind::Async
        } else {
            FuncKind::Sync
        };

        let (ret_type, mut pos) = self.parse_type_exp(&pos)?;

        let name = accept_identifier(self.lex(&pos), &mut pos)?;

        if !accept(self.lex(&pos), &Token::LParen, &mut pos) {
            return None;
        }

        let mut params = Vec::new();
        let mut variadic_param_index = None;
        while !accept(self.lex(&pos), &Token::RParen, &mut pos) {
            if !params.is_empty() && !accept(self.lex(&pos), &Token::Comma, &mut pos) {
                return None;
            }

            let ((param, variadic), next) = self.parse_func_decl_param(&pos)?;
            if variadic {
                variadic_param_index = Some(params.len());
            }
            params.push(param);
            pos = next;
        }

        let (body, pos) = self.parse_block_stmt(&pos)?;

        Some((
            FuncDecl {
                kind,
                ret_type,
                name,
                params,
                variadic_param_index,
                body,
            },
            pos,
        ))
    }

    fn parse_script_element(&self, pos: &SourcePos) -> Parse<ScriptElement> {
        if let Some((func_decl, next)) = self.parse_func_decl(pos) {
            return Some((ScriptElement::Func(func_decl), next));
        }

        if let Some((stmt, next)) = self.parse_stmt(pos) {
            return Some((ScriptElement::Stmt(stmt), next));
        }

        None
    }

    /// Parse a whole script to end of input.
    pub fn parse_script(&self, pos: &SourcePos) -> Parse<Script> {
        let mut pos = pos.clone();
        let mut elements = Vec::new();

        while !accept(self.lex(&pos), &Token::EndOfFile, &mut pos) {
            let (element, next) = self.parse_script_element(&pos)?;
            elements.push(element);
            pos = next;
        }

        Some((Script::new(elements), pos))
    }
}
