use std::fmt;

/// The kind of a token, without its payload. `Interpreter::eat` matches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Integer,
    Plus,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Integer => write!(f, "INTEGER"),
            TokenKind::Plus => write!(f, "PLUS"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Integer(i64),
    Plus(char),
    Eof,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Integer(_) => TokenKind::Integer,
            Token::Plus(_) => TokenKind::Plus,
            Token::Eof => TokenKind::Eof,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Token::Integer(n) = self {
            Some(*n)
        } else {
            None
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Integer(n) => write!(f, "Token({}, {})", self.kind(), n),
            Token::Plus(c) => write!(f, "Token({}, '{}')", self.kind(), c),
            Token::Eof => write!(f, "Token({}, None)", self.kind()),
        }
    }
}
