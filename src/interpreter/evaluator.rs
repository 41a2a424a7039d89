use crate::diagnostic::{Diagnostic, Span};
use crate::interpreter::error::ParsingError;
use crate::token::{Token, TokenKind};

/// One evaluation session over a single input string.
///
/// Tokens are scanned lazily from `pos`; only the current one is held.
#[derive(Debug)]
pub struct Interpreter<'a> {
    text: &'a str,
    pos: usize,
    current_token: Option<Token>,
    current_span: Span,
}

impl<'a> Interpreter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            current_token: None,
            current_span: Span::default(),
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn current_token(&self) -> Option<Token> {
        self.current_token
    }

    /// Scan the token at the cursor. Past the end this keeps returning `Eof`
    /// without moving.
    pub fn next_token(&mut self) -> Result<Token, ParsingError> {
        self.scan().map(|(token, _)| token)
    }

    fn scan(&mut self) -> Result<(Token, Span), ParsingError> {
        let start = self.pos;
        let current_char = match self.text.get(start..).and_then(|rest| rest.chars().next()) {
            Some(ch) => ch,
            None => {
                let end = self.text.len();
                return Ok((Token::Eof, Span::new(end, end)));
            }
        };

        let token = if let Some(digit) = current_char.to_digit(10) {
            Token::Integer(i64::from(digit))
        } else if current_char == '+' {
            Token::Plus(current_char)
        } else {
            let span = Span::new(start, start + current_char.len_utf8());
            return Err(ParsingError::unexpected_char(current_char, span));
        };

        self.pos += 1;
        Ok((token, Span::new(start, self.pos)))
    }

    fn advance(&mut self) -> Result<(), ParsingError> {
        let (token, span) = self.scan()?;
        self.current_token = Some(token);
        self.current_span = span;
        Ok(())
    }

    fn unexpected(&self, expected: TokenKind) -> ParsingError {
        let found = match self.current_token {
            Some(token) => token.kind().to_string(),
            None => "nothing".to_string(),
        };
        ParsingError::new(self.current_span)
            .with_expected(expected)
            .with_found(found)
    }

    /// Consume the current token if it has the expected kind and scan the next.
    pub fn eat(&mut self, expected: TokenKind) -> Result<(), ParsingError> {
        match self.current_token {
            Some(token) if token.kind() == expected => self.advance(),
            _ => Err(self.unexpected(expected)),
        }
    }

    fn integer(&mut self) -> Result<i64, ParsingError> {
        match self.current_token {
            Some(Token::Integer(value)) => {
                self.eat(TokenKind::Integer)?;
                Ok(value)
            }
            _ => Err(self.unexpected(TokenKind::Integer)),
        }
    }

    /// expr : INTEGER PLUS INTEGER
    ///
    /// Nothing after the right operand is validated beyond the single token
    /// `eat` scans when it consumes that operand.
    pub fn expr(&mut self) -> Result<i64, ParsingError> {
        self.advance()?;

        let left = self.integer()?;
        self.eat(TokenKind::Plus)?;
        let right = self.integer()?;

        Ok(left + right)
    }
}

pub fn evaluate(source: &str) -> Result<i64, ParsingError> {
    Interpreter::new(source).expr()
}

pub fn evaluate_with_diagnostics(source: &str) -> Result<i64, Vec<Diagnostic>> {
    evaluate(source).map_err(|e| vec![e.to_diagnostic()])
}
