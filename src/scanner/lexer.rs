use tracing::{debug, trace};

use crate::scanner::token::{Location, Span, Token, TokenKind};

/// Pull-based character scanner with a single character of pushback.
///
/// The source is held as lines, each keeping its terminating `'\n'`, so the
/// cursor is a (line, column) pair. Maximal munch only ever peeks, which
/// leaves the pushback slot free for the caller after every token.
#[derive(Debug, Clone)]
pub struct Scanner {
    lines: Vec<Vec<char>>,
    line: usize,
    column: usize,
    offset: usize,
    pushback: Option<char>,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        let mut scanner = Self {
            lines: Vec::new(),
            line: 0,
            column: 0,
            offset: 0,
            pushback: None,
        };
        scanner.initialize(source);
        scanner
    }

    /// Start scanning `source`, discarding all prior state.
    pub fn initialize(&mut self, source: &str) {
        let mut lines: Vec<Vec<char>> = source.split('\n').map(|l| l.chars().collect()).collect();
        let last = lines.len() - 1;
        for line in &mut lines[..last] {
            line.push('\n');
        }
        self.lines = lines;
        self.line = 0;
        self.column = 0;
        self.offset = 0;
        self.pushback = None;
        debug!(lines = self.lines.len(), bytes = source.len(), "scanner initialized");
    }

    /// True once every character has been consumed and nothing is pushed back.
    pub fn is_at_end(&self) -> bool {
        self.pushback.is_none() && self.stream_peek().is_none()
    }

    /// 1-based location of the next character to be consumed. A pushed-back
    /// character is taken to sit just before the stream cursor.
    pub fn current_location(&self) -> Location {
        if self.pushback.is_none() {
            return Location::new(self.line + 1, self.column + 1);
        }
        if self.column > 0 {
            Location::new(self.line + 1, self.column)
        } else if self.line > 0 {
            Location::new(self.line, self.lines[self.line - 1].len())
        } else {
            Location::new(1, 1)
        }
    }

    /// Consume one raw character, honoring pushback first.
    pub fn next_char(&mut self) -> Option<char> {
        self.pushback.take().or_else(|| self.stream_next())
    }

    pub fn peek_char(&self) -> Option<char> {
        self.pushback.or_else(|| self.stream_peek())
    }

    /// Return `c` to be read again by the next pull.
    ///
    /// # Panics
    ///
    /// Panics if a character is already pushed back; the slot holds one.
    pub fn push_back(&mut self, c: char) {
        assert!(
            self.pushback.is_none(),
            "scanner pushback slot already holds {:?}, cannot push back {c:?}",
            self.pushback
        );
        self.pushback = Some(c);
    }

    /// Scan one token. Whitespace runs come back as `Whitespace` tokens; the
    /// end of input is an `Eof` token, returned again on every later call.
    pub fn next_token(&mut self) -> Token {
        let location = self.current_location();
        let start = self.current_offset();

        let Some(c) = self.next_char() else {
            return Token::new(TokenKind::Eof, "", location, Span::new(start, 0));
        };

        let (kind, text) = if c.is_ascii_alphabetic() {
            let text = self.take_run(c, |c| c.is_ascii_alphanumeric() || c == '_');
            (TokenKind::Identifier, text)
        } else if c.is_ascii_digit() {
            (TokenKind::Number, self.take_run(c, |c| c.is_ascii_digit()))
        } else if c.is_ascii_whitespace() {
            self.skip_run(|c| c.is_ascii_whitespace());
            (TokenKind::Whitespace, String::new())
        } else if let Some(kind) = TokenKind::punctuation(c) {
            (kind, String::new())
        } else {
            (TokenKind::Unknown, c.to_string())
        };

        let end = self.current_offset();
        let token = Token::new(kind, text, location, Span::new(start, end.saturating_sub(start)));
        trace!(kind = ?token.kind, text = %token.text, at = %token.location, "token");
        token
    }

    /// Like [`Scanner::next_token`] but steps over whitespace tokens.
    pub fn next_significant_token(&mut self) -> Token {
        loop {
            let token = self.next_token();
            if !token.is_whitespace() {
                return token;
            }
        }
    }

    fn take_run(&mut self, first: char, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::from(first);
        while let Some(next) = self.peek_char() {
            if !accept(next) {
                break;
            }
            self.next_char();
            text.push(next);
        }
        text
    }

    fn skip_run(&mut self, accept: impl Fn(char) -> bool) {
        while let Some(next) = self.peek_char() {
            if !accept(next) {
                break;
            }
            self.next_char();
        }
    }

    fn current_offset(&self) -> usize {
        let pending = self.pushback.map_or(0, char::len_utf8);
        self.offset.saturating_sub(pending)
    }

    fn stream_peek(&self) -> Option<char> {
        self.lines.get(self.line)?.get(self.column).copied()
    }

    fn stream_next(&mut self) -> Option<char> {
        let c = self.stream_peek()?;
        self.column += 1;
        self.offset += c.len_utf8();
        if self.column == self.lines[self.line].len() && self.line + 1 < self.lines.len() {
            self.line += 1;
            self.column = 0;
        }
        Some(c)
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Significant tokens up to, not including, end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_significant_token();
        token.has_more().then_some(token)
    }
}
