pub mod lexer;
pub mod token;

use crate::error::CompileError;
pub use lexer::Scanner;
use token::{Token, TokenKind};

/// Options for the collecting helpers below.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Keep `Whitespace` tokens in the output instead of dropping them.
    pub keep_whitespace: bool,
}

/// Scan the whole of `source`. The result always ends with the `Eof` token.
pub fn tokenize(source: &str, options: ScanOptions) -> Vec<Token> {
    drain(&mut Scanner::new(source), options)
}

/// Pull tokens from `scanner` through `Eof` inclusive.
pub fn drain(scanner: &mut Scanner, options: ScanOptions) -> Vec<Token> {
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let more = token.has_more();
        if options.keep_whitespace || !token.is_whitespace() {
            tokens.push(token);
        }
        if !more {
            return tokens;
        }
    }
}

/// One token per line, in `Token`'s display form.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut buf = String::new();
    for token in tokens {
        buf.push_str(&token.to_string());
        buf.push('\n');
    }
    buf
}

/// Scan source code into a list of significant tokens, reporting every
/// `Unknown` token as an error.
pub fn scan(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    let tokens = tokenize(source, ScanOptions::default());
    let errors: Vec<CompileError> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Unknown)
        .map(|t| CompileError::scan(format!("unexpected character '{}'", t.text), t.span))
        .collect();
    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_drops_whitespace_by_default() {
        let tokens = tokenize("a b", ScanOptions::default());
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn tokenize_can_keep_whitespace() {
        let tokens = tokenize(
            "a b",
            ScanOptions {
                keep_whitespace: true,
            },
        );
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
    }

    #[test]
    fn render_one_token_per_line() {
        let tokens = tokenize("f(1)", ScanOptions::default());
        assert_eq!(
            render_tokens(&tokens),
            "Identifier 'f' @1:1\nLeftParen @1:2\nNumber '1' @1:3\nRightParen @1:4\nEof @1:5\n"
        );
    }

    #[test]
    fn scan_reports_each_unknown_character() {
        let errors = scan("f(x) = @y").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].to_string().contains('='));
        assert!(errors[1].to_string().contains('@'));
    }

    #[test]
    fn scan_clean_source() {
        let tokens = scan("if x < 1 { return 0; }").expect("scan should succeed");
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(tokens.len(), 10);
    }
}
