use std::rc::Rc;

/// An immutable position in a sequence of symbols
///
/// Every parser receives a state and hands back a new one; nothing is ever
/// mutated in place. The sequence itself is shared, so cloning a state only
/// bumps a reference count and any state can be kept around as a
/// backtracking point.
///
/// The cursor may sit past the end of the sequence. Such a state behaves
/// exactly like one positioned at the end: there is no current symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseState<T> {
    sequence: Rc<[T]>,
    /// Index of the next symbol to be read
    cursor: usize,
}

impl<T> ParseState<T> {
    /// Create a state positioned at the start of `sequence`
    pub fn new(sequence: impl Into<Rc<[T]>>) -> Self {
        Self::at(sequence, 0)
    }

    /// Create a state positioned at an arbitrary cursor
    pub fn at(sequence: impl Into<Rc<[T]>>, cursor: usize) -> Self {
        Self {
            sequence: sequence.into(),
            cursor,
        }
    }

    pub fn sequence(&self) -> &[T] {
        &self.sequence
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The symbol under the cursor, or `None` at (or past) the end
    pub fn current(&self) -> Option<&T> {
        self.sequence.get(self.cursor)
    }

    /// Symbols that have not been consumed yet
    pub fn remaining(&self) -> &[T] {
        self.sequence.get(self.cursor..).unwrap_or(&[])
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.sequence.len()
    }

    /// A new state one symbol further along, sharing the same sequence
    pub fn advance(&self) -> Self {
        self.advance_by(1)
    }

    pub(crate) fn advance_by(&self, count: usize) -> Self {
        Self {
            sequence: Rc::clone(&self.sequence),
            cursor: self.cursor + count,
        }
    }
}

impl ParseState<char> {
    /// Split `text` into one symbol per character
    pub fn from_text(text: &str) -> Self {
        Self::new(text.chars().collect::<Rc<[char]>>())
    }
}
