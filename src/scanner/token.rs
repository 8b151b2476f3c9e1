use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Less,
    Plus,
    Minus,
    Comma,
    Semicolon,

    // Runs
    Identifier,
    Number,
    Whitespace,

    Unknown,
    Eof,
}

impl TokenKind {
    /// Kind of a single-character punctuation token, if `c` is one.
    pub fn punctuation(c: char) -> Option<Self> {
        let kind = match c {
            '(' => Self::LeftParen,
            ')' => Self::RightParen,
            '{' => Self::LeftBrace,
            '}' => Self::RightBrace,
            '[' => Self::LeftBracket,
            ']' => Self::RightBracket,
            '<' => Self::Less,
            '+' => Self::Plus,
            '-' => Self::Minus,
            ',' => Self::Comma,
            ';' => Self::Semicolon,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether tokens of this kind carry their lexeme as text.
    pub fn has_text(self) -> bool {
        matches!(self, Self::Identifier | Self::Number | Self::Unknown)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
            Self::LeftBracket => write!(f, "["),
            Self::RightBracket => write!(f, "]"),
            Self::Less => write!(f, "<"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::Identifier => write!(f, "IDENTIFIER"),
            Self::Number => write!(f, "NUMBER"),
            Self::Whitespace => write!(f, "WHITESPACE"),
            Self::Unknown => write!(f, "UNKNOWN"),
            Self::Eof => write!(f, "EOF"),
        }
    }
}

/// Byte range of a token in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.offset.into(), span.len)
    }
}

/// 1-based line and column of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: Location,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: Location, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
            span,
        }
    }

    /// False only for the end-of-input token.
    pub fn has_more(&self) -> bool {
        self.kind != TokenKind::Eof
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.has_text() {
            write!(f, "{:?} '{}' @{}", self.kind, self.text, self.location)
        } else {
            write!(f, "{:?} @{}", self.kind, self.location)
        }
    }
}
