use crate::diagnostic::{Diagnostic, Label, Span};
use crate::token::TokenKind;

/// The only failure the interpreter reports. Lexical and grammatical
/// mismatches share it; the extra fields only feed diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingError {
    pub span: Span,
    pub expected: Option<TokenKind>,
    pub found: Option<String>,
}

impl ParsingError {
    pub const MESSAGE: &'static str = "Error parsing input";

    pub fn new(span: Span) -> Self {
        Self {
            span,
            expected: None,
            found: None,
        }
    }

    /// A character the tokenizer has no token for.
    pub fn unexpected_char(ch: char, span: Span) -> Self {
        Self::new(span).with_found(format!("`{}`", ch))
    }

    pub fn with_expected(mut self, expected: TokenKind) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }

    /// Shift the span, used when the source was one line of a larger text.
    pub fn offset_by(mut self, base: usize) -> Self {
        self.span = self.span.offset(base);
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match (&self.expected, &self.found) {
            (Some(expected), Some(found)) => format!("expected {}, found {}", expected, found),
            (Some(expected), None) => format!("expected {}", expected),
            (None, Some(found)) => format!("unexpected character {}", found),
            (None, None) => String::new(),
        };

        let mut diag = Diagnostic::error(Self::MESSAGE)
            .with_code("E0101")
            .with_label(Label::primary(self.span, label));

        if self.expected.is_none() {
            diag = diag.with_help("input may only contain single digits and `+`");
        } else {
            diag = diag.with_note("expressions have the form INTEGER + INTEGER, e.g. `3+5`");
        }

        diag
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Self::MESSAGE)
    }
}

impl std::error::Error for ParsingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_fixed() {
        let lexical = ParsingError::unexpected_char('&', Span::new(1, 2));
        let grammar = ParsingError::new(Span::new(0, 1))
            .with_expected(TokenKind::Integer)
            .with_found("PLUS");
        assert_eq!(lexical.to_string(), "Error parsing input");
        assert_eq!(grammar.to_string(), "Error parsing input");
    }

    #[test]
    fn test_diagnostic_label() {
        let err = ParsingError::new(Span::new(1, 2))
            .with_expected(TokenKind::Plus)
            .with_found("INTEGER");
        let diag = err.to_diagnostic();
        assert_eq!(diag.code.as_deref(), Some("E0101"));
        assert_eq!(diag.message, "Error parsing input");
        assert_eq!(diag.labels[0].message, "expected PLUS, found INTEGER");
        assert_eq!(diag.labels[0].span, Span::new(1, 2));
    }

    #[test]
    fn test_offset_by() {
        let err = ParsingError::new(Span::new(1, 2)).offset_by(10);
        assert_eq!(err.span, Span::new(11, 12));
    }
}
