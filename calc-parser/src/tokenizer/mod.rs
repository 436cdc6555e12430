pub mod token;

use calc_error::Error;
use crate::parser::error::kind::InvalidToken;
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer.
///
/// Returns an error pointing at the first character that does not begin any token.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token {
                span,
                kind,
                lexeme: lexer.slice(),
            }),
            Err(()) => {
                let found = lexer.slice().chars().next().unwrap_or_default();
                return Err(Error::new(vec![span.clone()], InvalidToken {
                    index: input[..span.start].chars().count(),
                    found,
                }));
            },
        }
    }

    Ok(tokens.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use calc_error::ErrorCategory;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Decimal, "1"),
                (TokenKind::Add, "+"),
                (TokenKind::Decimal, "2"),
            ],
        );
    }

    #[test]
    fn radix_literals() {
        compare_tokens(
            "3x - 0xff + 0b101 * 0B0000111",
            [
                (TokenKind::Decimal, "3"),
                (TokenKind::Name, "x"),
                (TokenKind::Sub, "-"),
                (TokenKind::Hex, "0xff"),
                (TokenKind::Add, "+"),
                (TokenKind::Bin, "0b101"),
                (TokenKind::Mul, "*"),
                (TokenKind::Bin, "0B0000111"),
            ],
        );
    }

    #[test]
    fn scientific_notation() {
        compare_tokens(
            "(2.0e2) * .5 / 5E7 + 1e-3",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Decimal, "2.0e2"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Mul, "*"),
                (TokenKind::Decimal, ".5"),
                (TokenKind::Div, "/"),
                (TokenKind::Decimal, "5E7"),
                (TokenKind::Add, "+"),
                (TokenKind::Decimal, "1e-3"),
            ],
        );
    }

    #[test]
    fn longest_operator_wins() {
        compare_tokens(
            "a // b ** c == d != e <= f >= g",
            [
                (TokenKind::Name, "a"),
                (TokenKind::IntDiv, "//"),
                (TokenKind::Name, "b"),
                (TokenKind::Exp, "**"),
                (TokenKind::Name, "c"),
                (TokenKind::Eq, "=="),
                (TokenKind::Name, "d"),
                (TokenKind::NotEq, "!="),
                (TokenKind::Name, "e"),
                (TokenKind::LessEq, "<="),
                (TokenKind::Name, "f"),
                (TokenKind::GreaterEq, ">="),
                (TokenKind::Name, "g"),
            ],
        );
    }

    #[test]
    fn derivative_markers() {
        compare_tokens(
            "f''(x_1)",
            [
                (TokenKind::Name, "f"),
                (TokenKind::Quote, "'"),
                (TokenKind::Quote, "'"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x_1"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn number_values() {
        let tokens = tokenize_complete("0x1F 0b101 .25 1E3").unwrap();
        let values = tokens.iter().map(|t| t.number_value().unwrap()).collect::<Vec<_>>();
        assert_eq!(values, vec![31.0, 5.0, 0.25, 1000.0]);
    }

    #[test]
    fn invalid_token() {
        let err = tokenize_complete("1 + $").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Token);
        assert_eq!(err.to_string(), "TokenError: invalid token at char 4 ($).");

        let err = tokenize_complete("2\t* é").unwrap_err();
        assert_eq!(err.message(), "invalid token at char 4 (é)");
    }
}
