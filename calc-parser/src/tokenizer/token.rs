use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    #[token("==")]
    Eq,

    #[token("!=")]
    NotEq,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("//")]
    IntDiv,

    #[token("%")]
    Mod,

    #[token("^")]
    #[token("**")]
    Exp,

    #[token(">")]
    Greater,

    #[token(">=")]
    GreaterEq,

    #[token("<")]
    Less,

    #[token("<=")]
    LessEq,

    #[token("=")]
    Assign,

    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("'")]
    Quote,

    #[regex(r"[a-zA-Z_][a-zA-Z_0-9]*")]
    Name,

    #[regex(r"([0-9]*\.[0-9]+|[0-9]+)([eE]-?[0-9]+)?")]
    Decimal,

    #[regex(r"0[bB][01]+")]
    Bin,

    #[regex(r"0[xX][0-9a-fA-F]+")]
    Hex,
}

impl TokenKind {
    /// Returns true if the token is a number literal of any base.
    pub fn is_number(self) -> bool {
        matches!(self, TokenKind::Decimal | TokenKind::Bin | TokenKind::Hex)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns the numeric value of a number token, or [`None`] if the token is not a number.
    ///
    /// Binary and hexadecimal literals are accumulated digit by digit into a float, so literals
    /// wider than 64 bits lose precision instead of overflowing.
    pub fn number_value(&self) -> Option<f64> {
        let from_radix = |digits: &str, radix: u32| {
            digits.chars()
                .filter_map(|c| c.to_digit(radix))
                .fold(0.0, |acc, digit| acc * radix as f64 + digit as f64)
        };

        match self.kind {
            TokenKind::Decimal => self.lexeme.parse().ok(),
            TokenKind::Bin => Some(from_radix(&self.lexeme[2..], 2)),
            TokenKind::Hex => Some(from_radix(&self.lexeme[2..], 16)),
            _ => None,
        }
    }
}
