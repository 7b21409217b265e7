//! Three-mode lexer for qsh source.
//!
//! The lexer has no state of its own; every entry point takes a [`SourcePos`]
//! and returns the lexed token together with the position after it, or `None`
//! when nothing lexes at that position. The parser decides which mode to lex
//! in: normal mode for ordinary code, string mode inside `"..."` literals,
//! and command mode inside `@` command statements.

use core_types::SourcePos;

/// A lexed token.
///
/// Unit variants are punctuators and keywords; payload variants carry the
/// lexed literal or name. `Whitespace` and `NewLine` are real tokens because
/// command mode and the line-continuation rules need them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Integer literal
    Int(i32),
    /// `true` or `false`
    Bool(bool),
    /// Raw text run (string and command modes)
    Text(String),
    /// Identifier
    Identifier(String),

    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `continue`
    Continue,
    /// `break`
    Break,
    /// `task`
    Task,
    /// `await`
    Await,
    /// `async`
    Async,
    /// `exec` or `@`
    Exec,
    /// `params`
    Params,
    /// `return`
    Return,

    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `<=`
    LessThanEqual,
    /// `>=`
    GreaterThanEqual,
    /// `==`
    EqualEqual,
    /// `!=`
    ExclEqual,
    /// `=>`
    EqualGreaterThan,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `;`
    SemiColon,
    /// `,`
    Comma,
    /// `=`
    Equal,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `!`
    Excl,

    /// A run of skipped whitespace and comments
    Whitespace,
    /// A run of `\r`/`\n` chars
    NewLine,
    /// `"`
    DoubleQuote,
    /// `${`
    DollarLBrace,
    /// End of input
    EndOfFile,
}

/// A successful lex: the token and the position after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    /// The lexed token
    pub token: Token,
    /// Position of the first char after the token
    pub next: SourcePos,
}

fn lexed(token: Token, next: SourcePos) -> Option<Lexed> {
    Some(Lexed { token, next })
}

/// Keywords and punctuators tried in order after int and bool literals.
/// Two-char punctuators come before their one-char prefixes; keywords match
/// by prefix with no word-boundary check.
const KEYWORD_INFOS: &[(&str, Token)] = &[
    ("if", Token::If),
    ("else", Token::Else),
    ("for", Token::For),
    ("continue", Token::Continue),
    ("break", Token::Break),
    ("task", Token::Task),
    ("await", Token::Await),
    ("async", Token::Async),
    ("exec", Token::Exec),
    ("params", Token::Params),
    ("return", Token::Return),
    ("++", Token::PlusPlus),
    ("--", Token::MinusMinus),
    ("<=", Token::LessThanEqual),
    (">=", Token::GreaterThanEqual),
    ("==", Token::EqualEqual),
    ("!=", Token::ExclEqual),
    ("=>", Token::EqualGreaterThan),
    ("@", Token::Exec),
    ("<", Token::LessThan),
    (">", Token::GreaterThan),
    (";", Token::SemiColon),
    (",", Token::Comma),
    ("=", Token::Equal),
    ("{", Token::LBrace),
    ("}", Token::RBrace),
    ("(", Token::LParen),
    (")", Token::RParen),
    ("+", Token::Plus),
    ("-", Token::Minus),
    ("*", Token::Star),
    ("/", Token::Slash),
    ("%", Token::Percent),
    ("!", Token::Excl),
];

/// The qsh lexer. Stateless; see the module docs for the mode protocol.
#[derive(Debug, Default)]
pub struct Lexer;

impl Lexer {
    /// Create a lexer.
    pub fn new() -> Self {
        Lexer
    }

    /// Lex one token in normal mode.
    ///
    /// Skips whitespace and `//` comments first; `skip_newline` additionally
    /// folds newlines into the skipped run, otherwise a newline run is
    /// returned as a [`Token::NewLine`].
    pub fn lex_normal(&self, pos: &SourcePos, skip_newline: bool) -> Option<Lexed> {
        let mut pos = pos.clone();
        if let Some(ws) = self.lex_whitespace(&pos, skip_newline) {
            pos = ws.next;
        }

        if pos.is_end() {
            return lexed(Token::EndOfFile, pos);
        }

        if let Some(nl) = self.lex_newline(&pos) {
            return Some(nl);
        }

        if let Some(int) = self.lex_int(&pos) {
            return Some(int);
        }

        if let Some(b) = self.lex_bool(&pos) {
            return Some(b);
        }

        for (text, token) in KEYWORD_INFOS {
            if let Some(next) = consume(text, &pos) {
                return lexed(token.clone(), next);
            }
        }

        if pos.is_char('"') {
            return lexed(Token::DoubleQuote, pos.next());
        }

        self.lex_identifier(&pos, true)
    }

    /// Lex one token in string mode (inside a `"..."` literal).
    pub fn lex_string(&self, pos: &SourcePos) -> Option<Lexed> {
        if let Some(text) = self.lex_string_text(pos) {
            return Some(text);
        }

        if pos.is_char('"') {
            return lexed(Token::DoubleQuote, pos.next());
        }

        if pos.is_char('$') {
            let next = pos.next();

            if next.is_char('{') {
                return lexed(Token::DollarLBrace, next.next());
            }

            if let Some(id) = self.lex_identifier(&next, false) {
                return Some(id);
            }
        }

        None
    }

    /// Lex one token in command mode (inside an `@` command statement).
    pub fn lex_command(&self, pos: &SourcePos) -> Option<Lexed> {
        if let Some(nl) = self.lex_newline(pos) {
            return Some(nl);
        }

        if pos.is_char('}') {
            return lexed(Token::RBrace, pos.next());
        }

        if pos.is_char('$') {
            let next = pos.next();

            if next.is_char('{') {
                return lexed(Token::DollarLBrace, next.next());
            }

            if !next.is_char('$') {
                if let Some(id) = self.lex_identifier(&next, false) {
                    return Some(id);
                }
            }
        }

        let mut pos = pos.clone();
        let mut text = String::new();
        loop {
            if pos.is_end() || pos.is_char('\r') || pos.is_char('\n') || pos.is_char('}') {
                break;
            }

            if pos.is_char('$') {
                let next = pos.next();
                if next.is_char('$') {
                    text.push('$');
                    pos = next.next();
                    continue;
                }
                break;
            }

            pos.append_to(&mut text);
            pos = pos.next();
        }

        if text.is_empty() {
            return None;
        }
        lexed(Token::Text(text), pos)
    }

    /// Lex a raw text run in string mode. `""` and `$$` are escapes for a
    /// literal quote and dollar; a lone `"` or `$` ends the run.
    fn lex_string_text(&self, pos: &SourcePos) -> Option<Lexed> {
        let mut pos = pos.clone();
        let mut text = String::new();

        loop {
            if pos.is_end() {
                break;
            }

            if pos.is_char('"') {
                let next = pos.next();
                if next.is_char('"') {
                    text.push('"');
                    pos = next.next();
                    continue;
                }
                break;
            }

            if pos.is_char('$') {
                let next = pos.next();
                if next.is_char('$') {
                    text.push('$');
                    pos = next.next();
                    continue;
                }
                break;
            }

            pos.append_to(&mut text);
            pos = pos.next();
        }

        if text.is_empty() {
            return None;
        }
        lexed(Token::Text(text), pos)
    }

    /// Lex a whitespace/comment run, handling `\` line continuations.
    ///
    /// A backslash records a fallback (the run lexed so far, or a failed lex
    /// if nothing was consumed yet); if a newline follows, the continuation
    /// succeeds and skipping resumes, otherwise the fallback is returned.
    pub fn lex_whitespace(&self, pos: &SourcePos, include_newline: bool) -> Option<Lexed> {
        let mut pos = pos.clone();
        let mut consumed = false;
        let mut continuation_fallback: Option<Option<Lexed>> = None;

        loop {
            if pos.is_char('\\') {
                continuation_fallback = Some(if consumed {
                    lexed(Token::Whitespace, pos.clone())
                } else {
                    None
                });
                pos = pos.next();
                continue;
            }

            if let Some(comment_begin) = consume("//", &pos) {
                pos = comment_begin;
                while !pos.is_end() && !pos.is_char('\r') && !pos.is_char('\n') {
                    pos = pos.next();
                    consumed = true;
                }
                continue;
            }

            if pos.is_whitespace() {
                pos = pos.next();
                consumed = true;
                continue;
            }

            if include_newline && (pos.is_char('\r') || pos.is_char('\n')) {
                pos = pos.next();
                consumed = true;
                continue;
            }

            if let Some(fallback) = continuation_fallback.take() {
                if let Some(rn) = consume("\r\n", &pos) {
                    pos = rn;
                    consumed = true;
                    continue;
                }
                if pos.is_char('\r') || pos.is_char('\n') {
                    pos = pos.next();
                    consumed = true;
                    continue;
                }
                // the backslash did not continue a line; report up to just
                // before it
                return fallback;
            }

            break;
        }

        if consumed {
            lexed(Token::Whitespace, pos)
        } else {
            None
        }
    }

    /// Lex a run of `\r`/`\n` chars.
    pub fn lex_newline(&self, pos: &SourcePos) -> Option<Lexed> {
        let mut pos = pos.clone();
        let mut consumed = false;
        while pos.is_char('\r') || pos.is_char('\n') {
            pos = pos.next();
            consumed = true;
        }

        if consumed {
            lexed(Token::NewLine, pos)
        } else {
            None
        }
    }

    /// Lex a maximal ASCII digit run as an integer literal.
    pub fn lex_int(&self, pos: &SourcePos) -> Option<Lexed> {
        let mut cur = pos.clone();
        let mut digits = String::new();
        while cur.is_digit() {
            cur.append_to(&mut digits);
            cur = cur.next();
        }

        if digits.is_empty() {
            return None;
        }

        let value = digits.parse().ok()?;
        lexed(Token::Int(value), cur)
    }

    /// Lex `true` or `false` by prefix match.
    pub fn lex_bool(&self, pos: &SourcePos) -> Option<Lexed> {
        if let Some(next) = consume("true", pos) {
            return lexed(Token::Bool(true), next);
        }
        if let Some(next) = consume("false", pos) {
            return lexed(Token::Bool(false), next);
        }
        None
    }

    /// Lex an identifier. `allow_raw_mark` permits a leading `@` which is
    /// consumed but not part of the name, letting keywords be used as plain
    /// identifiers.
    fn lex_identifier(&self, pos: &SourcePos, allow_raw_mark: bool) -> Option<Lexed> {
        let mut name = String::new();
        let mut cur = pos.clone();

        if allow_raw_mark && cur.is_char('@') {
            cur = cur.next();
        } else if cur.is_identifier_start() {
            cur.append_to(&mut name);
            cur = cur.next();
        } else {
            return None;
        }

        while cur.is_identifier_cont() {
            cur.append_to(&mut name);
            cur = cur.next();
        }

        if name.is_empty() {
            return None;
        }
        lexed(Token::Identifier(name), cur)
    }
}

fn consume(text: &str, pos: &SourcePos) -> Option<SourcePos> {
    let mut pos = pos.clone();
    for c in text.chars() {
        if !pos.is_char(c) {
            return None;
        }
        pos = pos.next();
    }
    Some(pos)
}
