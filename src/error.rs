use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::scanner::token::Span;

#[derive(Error, Debug, Diagnostic)]
pub enum CompileError {
    #[error("scan error: {message}")]
    #[diagnostic(code(fnlang::scan))]
    Scan {
        message: String,
        #[label("here")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },

    #[error("unknown {category} kind '{tag}'")]
    #[diagnostic(code(fnlang::node_kind))]
    UnknownNodeKind { category: &'static str, tag: String },
}

impl CompileError {
    pub fn scan(message: impl Into<String>, span: Span) -> Self {
        Self::Scan {
            message: message.into(),
            span: span.into(),
            src: miette::NamedSource::new("input", String::new()),
        }
    }

    pub fn unknown_node_kind(category: &'static str, tag: impl Into<String>) -> Self {
        Self::UnknownNodeKind {
            category,
            tag: tag.into(),
        }
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        match self {
            Self::Scan { message, span, .. } => Self::Scan {
                message,
                span,
                src: miette::NamedSource::new(name.into(), source.into()),
            },
            other => other,
        }
    }
}
