//! Source text access and cursor positions.
//!
//! Script source is decoded into a shared char sequence once; everything
//! downstream (lexer, parser) works with [`SourcePos`] cursors that are
//! cheap to clone, which is what makes backtracking parse attempts cheap.

use std::rc::Rc;

/// Immutable script source text.
///
/// # Examples
///
/// ```
/// use core_types::SourceBuffer;
///
/// let buffer = SourceBuffer::new("ab");
/// let pos = buffer.first_pos();
/// assert_eq!(pos.ch(), Some('a'));
/// assert_eq!(pos.next().ch(), Some('b'));
/// assert!(pos.next().next().is_end());
/// ```
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    chars: Rc<[char]>,
}

impl SourceBuffer {
    /// Decode source text into a buffer.
    pub fn new(text: &str) -> Self {
        SourceBuffer {
            chars: text.chars().collect::<Vec<_>>().into(),
        }
    }

    /// Cursor at the start of the buffer.
    pub fn first_pos(&self) -> SourcePos {
        SourcePos {
            chars: Rc::clone(&self.chars),
            index: 0,
        }
    }

    /// Number of chars in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the buffer holds no chars.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// A cursor into a [`SourceBuffer`].
///
/// Positions share the underlying buffer, so cloning one is an `Rc` bump
/// plus an index copy. Two positions are equal when they point at the same
/// buffer and index.
#[derive(Debug, Clone)]
pub struct SourcePos {
    chars: Rc<[char]>,
    index: usize,
}

impl SourcePos {
    /// Whether the cursor is past the last char.
    pub fn is_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// The char under the cursor, or `None` at end of input.
    pub fn ch(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    /// The position one char further. Advancing past the end stays at end.
    pub fn next(&self) -> SourcePos {
        SourcePos {
            chars: Rc::clone(&self.chars),
            index: (self.index + 1).min(self.chars.len()),
        }
    }

    /// Char offset from the start of the buffer.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the cursor sits on the given char.
    pub fn is_char(&self, c: char) -> bool {
        self.ch() == Some(c)
    }

    /// Whether the cursor sits on whitespace other than `\r` or `\n`.
    ///
    /// Newlines are significant in command mode, so they are never folded
    /// into plain whitespace.
    pub fn is_whitespace(&self) -> bool {
        matches!(self.ch(), Some(c) if c.is_whitespace() && c != '\r' && c != '\n')
    }

    /// Whether the cursor sits on a char that may start an identifier.
    pub fn is_identifier_start(&self) -> bool {
        matches!(self.ch(), Some(c) if c == '_' || c.is_alphabetic())
    }

    /// Whether the cursor sits on a char that may continue an identifier.
    pub fn is_identifier_cont(&self) -> bool {
        matches!(self.ch(), Some(c) if c == '_' || c.is_alphanumeric())
    }

    /// Whether the cursor sits on an ASCII decimal digit.
    pub fn is_digit(&self) -> bool {
        matches!(self.ch(), Some(c) if c.is_ascii_digit())
    }

    /// Append the char under the cursor to a string. No-op at end of input.
    pub fn append_to(&self, out: &mut String) {
        if let Some(c) = self.ch() {
            out.push(c);
        }
    }
}

impl PartialEq for SourcePos {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.chars, &other.chars) && self.index == other.index
    }
}

impl Eq for SourcePos {}
