use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::{
    error::LexError,
    util::position::{Position, Span},
};

/// Result type returned by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Reserved words. Identifiers may never take these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `soch`, opens an assignment.
    AssignStart,
    /// `hai`, closes an assignment.
    AssignEnd,
    /// `aur`, logical and.
    And,
    /// `ya`, logical or.
    Or,
    /// `ulta`, logical not.
    Not,
    /// `if`
    If,
    /// `then`
    Then,
    /// `elif`
    Elif,
    /// `else`
    Else,
}

impl Keyword {
    const ALL: [Self; 9] = [Self::AssignStart,
                            Self::AssignEnd,
                            Self::And,
                            Self::Or,
                            Self::Not,
                            Self::If,
                            Self::Then,
                            Self::Elif,
                            Self::Else];

    /// The source spelling of this keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AssignStart => "soch",
            Self::AssignEnd => "hai",
            Self::And => "aur",
            Self::Or => "ya",
            Self::Not => "ulta",
            Self::If => "if",
            Self::Then => "then",
            Self::Elif => "elif",
            Self::Else => "else",
        }
    }

    /// Looks up the keyword spelled exactly `word`.
    ///
    /// # Example
    /// ```
    /// use soch::interpreter::lexer::Keyword;
    ///
    /// assert_eq!(Keyword::from_word("soch"), Some(Keyword::AssignStart));
    /// assert_eq!(Keyword::from_word("sochna"), None);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == word)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a token, with its literal value where it has one.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// End of input. Always the last token, zero-width.
    Eof,
    /// Integer literal, such as `42`.
    Int(i64),
    /// Float literal, such as `3.14`, `2.` or `.5`.
    Float(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Variable name: a letter or `_` followed by letters, digits or `_`.
    /// Letters and digits from any script count, so `नाम` is a name.
    Identifier(String),
    /// Reserved word.
    Keyword(Keyword),
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanEqual,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eof => write!(f, "end of input"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Multiply => write!(f, "'*'"),
            Self::Divide => write!(f, "'/'"),
            Self::Power => write!(f, "'^'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Keyword(k) => write!(f, "'{k}'"),
            Self::Equal => write!(f, "'='"),
            Self::NotEqual => write!(f, "'!='"),
            Self::LessThan => write!(f, "'<'"),
            Self::LessThanEqual => write!(f, "'<='"),
            Self::GreaterThan => write!(f, "'>'"),
            Self::GreaterThanEqual => write!(f, "'>='"),
        }
    }
}

/// A classified piece of source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns `true` if this token is the keyword `keyword`.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }
}

/// Raw lexemes recognized by the scanner, before positions are attached and
/// the error rules for `!` are applied.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum Lexeme {
    #[regex(r"[0-9]+\.[0-9]*")]
    #[regex(r"\.[0-9]+")]
    Float,
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r"[_\p{Alphabetic}][_\p{Alphabetic}\p{Nd}]*")]
    Word,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Multiply,
    #[token("/")]
    Divide,
    #[token("^")]
    Power,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("=")]
    Equal,
    #[token("!=")]
    NotEqual,
    /// A `!` that is not part of `!=`; always an error.
    #[token("!")]
    Bang,
    #[token("<")]
    LessThan,
    #[token("<=")]
    LessThanEqual,
    #[token(">")]
    GreaterThan,
    #[token(">=")]
    GreaterThanEqual,
}

/// Walks a [`Position`] forward through the text so that line and column
/// stay in step with the scanner's byte offsets.
struct Cursor<'src> {
    text:     &'src str,
    position: Position,
}

impl<'src> Cursor<'src> {
    const fn new(text: &'src str) -> Self {
        Self { text,
               position: Position::new(0, 0, 0) }
    }

    /// Advances to byte `offset`, which must not lie behind the cursor.
    fn seek(&mut self, offset: usize) -> Position {
        let end = offset.min(self.text.len());
        if let Some(skipped) = self.text.get(self.position.index..end) {
            for c in skipped.chars() {
                self.position.advance(c);
            }
        }
        self.position
    }

    /// The character at the cursor, if any.
    fn peek(&self) -> Option<char> {
        self.text.get(self.position.index..)?.chars().next()
    }
}

/// Converts source text into tokens.
///
/// Scans left to right in a single pass. Spaces, tabs and line breaks
/// separate tokens and are otherwise ignored. The returned sequence always
/// ends with a zero-width [`TokenKind::Eof`] token.
///
/// # Errors
/// - [`LexError::InvalidCharacter`] for the first character that cannot start
///   a token.
/// - [`LexError::ExpectedCharacter`] for a `!` not followed by `=`.
///
/// # Example
/// ```
/// use soch::interpreter::lexer::{Keyword, TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("soch x 1.5 hai").unwrap()
///                                               .into_iter()
///                                               .map(|t| t.kind)
///                                               .collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Keyword(Keyword::AssignStart),
///                 TokenKind::Identifier("x".into()),
///                 TokenKind::Float(1.5),
///                 TokenKind::Keyword(Keyword::AssignEnd),
///                 TokenKind::Eof]);
/// ```
pub fn tokenize(text: &str) -> LexResult<Vec<Token>> {
    let mut cursor = Cursor::new(text);
    let mut scanner = Lexeme::lexer(text);
    let mut tokens = Vec::new();

    while let Some(lexeme) = scanner.next() {
        let range = scanner.span();
        let start = cursor.seek(range.start);

        let Ok(lexeme) = lexeme else {
            return Err(invalid_character(&cursor, start));
        };
        let Some(kind) = classify(lexeme, scanner.slice()) else {
            return Err(expected_equals(&mut cursor, start, range.end));
        };

        let end = cursor.seek(range.end);
        trace!(kind = ?kind, offset = start.index, "token");
        tokens.push(Token::new(kind, Span::new(start, end)));
    }

    let eof = cursor.seek(text.len());
    tokens.push(Token::new(TokenKind::Eof, Span::empty(eof)));
    Ok(tokens)
}

/// Attaches the literal value or keyword tag to a scanned lexeme.
///
/// Returns `None` for a lone `!`, which never forms a token on its own.
fn classify(lexeme: Lexeme, slice: &str) -> Option<TokenKind> {
    let kind = match lexeme {
        // Integers too large for i64 are kept as floats rather than rejected.
        Lexeme::Int => slice.parse()
                            .map_or_else(|_| TokenKind::Float(parse_float(slice)), TokenKind::Int),
        Lexeme::Float => TokenKind::Float(parse_float(slice)),
        Lexeme::Word => Keyword::from_word(slice).map_or_else(|| TokenKind::Identifier(slice.to_owned()),
                                                               TokenKind::Keyword),
        Lexeme::Plus => TokenKind::Plus,
        Lexeme::Minus => TokenKind::Minus,
        Lexeme::Multiply => TokenKind::Multiply,
        Lexeme::Divide => TokenKind::Divide,
        Lexeme::Power => TokenKind::Power,
        Lexeme::LParen => TokenKind::LParen,
        Lexeme::RParen => TokenKind::RParen,
        Lexeme::Equal => TokenKind::Equal,
        Lexeme::NotEqual => TokenKind::NotEqual,
        Lexeme::LessThan => TokenKind::LessThan,
        Lexeme::LessThanEqual => TokenKind::LessThanEqual,
        Lexeme::GreaterThan => TokenKind::GreaterThan,
        Lexeme::GreaterThanEqual => TokenKind::GreaterThanEqual,
        Lexeme::Bang => return None,
    };
    Some(kind)
}

/// Parses a digit run that the scanner has already validated.
fn parse_float(slice: &str) -> f64 {
    slice.parse().unwrap_or(f64::INFINITY)
}

/// Builds the error for the character at `start`, which nothing matched.
fn invalid_character(cursor: &Cursor<'_>, start: Position) -> LexError {
    let (details, end) = match cursor.peek() {
        Some(c) => (format!("'{c}'"), start.advanced(c)),
        None => (String::from("end of input"), start),
    };
    LexError::InvalidCharacter { details,
                                 span: Span::new(start, end) }
}

/// Builds the error for a `!` that is not followed by `=`.
///
/// The span covers the `!` and the character after it, unless that
/// character is a line break or the input ends.
fn expected_equals(cursor: &mut Cursor<'_>, start: Position, bang_end: usize) -> LexError {
    let mut end = cursor.seek(bang_end);
    if let Some(next) = cursor.peek()
       && next != '\n'
       && next != '\r'
    {
        end = end.advanced(next);
    }
    LexError::ExpectedCharacter { details: String::from("'=' after !"),
                                  span:    Span::new(start, end), }
}
