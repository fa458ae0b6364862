use std::fmt;

/// A named piece of source text.
///
/// The name is only a label for error messages (a path, `<stdin>`, ...);
/// nothing is ever read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    name: String,
    text: String,
}

impl Source {
    /// Creates a source from a label and its full text.
    ///
    /// # Example
    /// ```
    /// use soch::util::position::Source;
    ///
    /// let source = Source::new("<stdin>", "soch x 5 hai");
    /// assert_eq!(source.name(), "<stdin>");
    /// assert_eq!(source.text(), "soch x 5 hai");
    /// ```
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { name: name.into(),
               text: text.into(), }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text of the zero-based line `line`, without its line
    /// terminator. Lines past the end of the text are empty.
    #[must_use]
    pub fn line(&self, line: usize) -> &str {
        self.text
            .split('\n')
            .nth(line)
            .map_or("", |l| l.strip_suffix('\r').unwrap_or(l))
    }
}

/// A cursor into source text.
///
/// `index` is a byte offset into the text, so it can be used to slice the
/// source directly. `line` and `column` are zero-based and count characters,
/// which is what error pointers are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Position {
    /// Byte offset into the source text.
    pub index:  usize,
    /// Zero-based line number.
    pub line:   usize,
    /// Zero-based column, in characters.
    pub column: usize,
}

impl Position {
    /// Creates a position from its raw parts.
    #[must_use]
    pub const fn new(index: usize, line: usize, column: usize) -> Self {
        Self { index,
               line,
               column }
    }

    /// Moves the cursor past `consumed`.
    ///
    /// A newline moves to column zero of the next line; any other character
    /// moves one column to the right.
    ///
    /// # Example
    /// ```
    /// use soch::util::position::Position;
    ///
    /// let mut pos = Position::default();
    /// pos.advance('a').advance('\n').advance('b');
    ///
    /// assert_eq!(pos, Position::new(3, 1, 1));
    /// ```
    pub const fn advance(&mut self, consumed: char) -> &mut Self {
        self.index += consumed.len_utf8();
        if consumed == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self
    }

    /// Returns a copy of this position moved past `consumed`.
    #[must_use]
    pub const fn advanced(mut self, consumed: char) -> Self {
        self.advance(consumed);
        self
    }
}

/// A half-open `[start, end)` range of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: Position,
    pub end:   Position,
}

impl Span {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A zero-width span sitting at `at`.
    #[must_use]
    pub const fn empty(at: Position) -> Self {
        Self { start: at,
               end:   at, }
    }

    /// Joins two spans into one covering both, assuming `self` starts first.
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self { start: self.start,
               end:   other.end, }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start.index == self.end.index
    }

    /// Returns `true` when `other` lies entirely within `self`.
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.start.index <= other.start.index && other.end.index <= self.end.index
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{}:{}-{}:{}",
               self.start.line + 1,
               self.start.column + 1,
               self.end.line + 1,
               self.end.column + 1)
    }
}
