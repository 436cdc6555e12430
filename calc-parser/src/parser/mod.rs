pub mod ast;
pub mod error;
pub mod fmt;
pub mod token;

use ast::{call::{Call, Derivative}, expr::Expr};
use calc_error::ErrorKind;
use error::{Error, kind};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::{collections::HashSet, ops::Range};
use token::op::BinOpKind;

/// The maximum number of nested parenthesized expressions, argument lists, and exponents. This is
/// used to reject pathological input before it exhausts the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The maximum height of a parsed tree, counting every operation between the root and the
/// deepest leaf. Long chains like `1 + 1 + ... + 1` are limited by this instead of
/// [`MAX_NESTING_DEPTH`].
pub const MAX_TREE_HEIGHT: usize = 512;

/// A recursive-descent parser for the language. This is the type to use to parse an arbitrary
/// statement into an abstract syntax tree.
///
/// The grammar, from lowest to highest precedence:
///
/// ```text
/// S    -> E $
/// E    -> T { (+|-) T } [ (==|!=|<|<=|>|>=|=) E ]
/// T    -> F { (*|/|//|%|<implicit>) F }
/// F    -> [-] X [ (^|**) F ]
/// X    -> ( E ) | NUM | VAR { ' } [ ( ARGS ) ]
/// ARGS -> [ E { , E } ]
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The current nesting depth.
    depth: usize,

    /// The height of the tree most recently returned by one of the parsing functions.
    height: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    ///
    /// Returns an error if the source contains a character that does not begin any token.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Ok(Self {
            tokens: tokenize_complete(source)?,
            cursor: 0,
            depth: 0,
            height: 0,
        })
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Advances the cursor past the current token and returns it, but only if it is of the given
    /// kind.
    fn eat(&mut self, kind: TokenKind) -> Option<Token<'source>> {
        let token = self.current_token().filter(|token| token.kind == kind)?.clone();
        self.cursor += 1;
        Some(token)
    }

    /// Parses a complete statement. All the tokens must be consumed by the parser; if not, an
    /// error is returned.
    pub fn parse_statement(&mut self) -> Result<Expr, Error> {
        if self.tokens.is_empty() {
            return Err(self.error(kind::EmptyExpression));
        }

        let expr = self.parse_expr()?;
        match (expr, self.current_token()) {
            (Some(expr), None) => Ok(expr),
            (_, Some(token)) if token.kind == TokenKind::CloseParen => {
                Err(self.error(kind::UnclosedParenthesis { opening: false }))
            },
            (_, Some(token)) => Err(self.error(kind::UnexpectedToken {
                found: token.lexeme.to_string(),
            })),
            (None, None) => Err(self.error(kind::EmptyExpression)),
        }
    }

    /// Runs the given parsing function one nesting level deeper.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(kind::NestingTooDeep { max: MAX_NESTING_DEPTH }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Returns the height of an operation whose operands have the given heights, or an error
    /// pointing at the operator if that exceeds [`MAX_TREE_HEIGHT`].
    fn grow(&self, lhs: usize, rhs: usize, op: &Token) -> Result<usize, Error> {
        let height = 1 + lhs.max(rhs);
        if height > MAX_TREE_HEIGHT {
            return Err(Error::new(vec![op.span.clone()], kind::TooManyOperations {
                max: MAX_TREE_HEIGHT,
            }));
        }
        Ok(height)
    }

    /// Parses a sequence of terms, optionally followed by a comparison or assignment whose right
    /// side is a whole expression.
    ///
    /// Returns [`None`] without consuming anything if no expression starts at the cursor.
    fn parse_expr(&mut self) -> Result<Option<Expr>, Error> {
        self.nested(|input| {
            let Some(mut lhs) = input.parse_term()? else {
                return Ok(None);
            };
            let mut height = input.height;

            while let Some(token) = input.current_token().cloned() {
                let op = match BinOpKind::from_token(token.kind) {
                    Some(op @ (BinOpKind::Add | BinOpKind::Sub | BinOpKind::Assign)) => op,
                    Some(op) if op.is_comparison() => op,
                    _ => break,
                };
                input.cursor += 1;

                if op == BinOpKind::Assign {
                    validate_assign_target(&lhs, &token)?;
                }

                let is_term = matches!(op, BinOpKind::Add | BinOpKind::Sub);
                let rhs = if is_term {
                    input.parse_term()?
                } else {
                    input.parse_expr()?
                };
                let rhs = rhs.ok_or_else(|| Error::new(vec![token.span.clone()], kind::ExpectedOperand {
                    op: token.lexeme.to_string(),
                }))?;

                height = input.grow(height, input.height, &token)?;
                lhs = Expr::binary(lhs, op, rhs);
                if !is_term {
                    break;
                }
            }

            input.height = height;
            Ok(Some(lhs))
        })
    }

    /// Parses a sequence of factors joined by explicit or implicit multiplicative operators.
    fn parse_term(&mut self) -> Result<Option<Expr>, Error> {
        let Some(mut lhs) = self.parse_factor(false)? else {
            return Ok(None);
        };
        let mut height = self.height;

        while let Some(token) = self.current_token().cloned() {
            let explicit = match BinOpKind::from_token(token.kind) {
                Some(op @ (BinOpKind::Mul | BinOpKind::Div | BinOpKind::IntDiv | BinOpKind::Mod)) => {
                    self.cursor += 1;
                    Some(op)
                },
                _ => None,
            };

            // a `-` directly after a factor is a subtraction, so it must not start the implicit
            // right operand
            match (self.parse_factor(explicit.is_none())?, explicit) {
                (Some(rhs), op) => {
                    height = self.grow(height, self.height, &token)?;
                    lhs = Expr::binary(lhs, op.unwrap_or(BinOpKind::Mul), rhs);
                },
                (None, None) => break,
                (None, Some(_)) => return Err(Error::new(vec![token.span], kind::ExpectedOperand {
                    op: token.lexeme.to_string(),
                })),
            }
        }

        self.height = height;
        Ok(Some(lhs))
    }

    /// Parses an optionally negated primary expression, optionally raised to a power.
    ///
    /// Negation applies to the whole power, so `-x^2` is `-(x^2)`.
    fn parse_factor(&mut self, implicit: bool) -> Result<Option<Expr>, Error> {
        let negation = if implicit {
            None
        } else {
            self.eat(TokenKind::Sub)
        };

        let Some(mut expr) = self.parse_primary()? else {
            return match negation {
                Some(token) => Err(Error::new(vec![token.span], kind::UnexpectedNegation)),
                None => Ok(None),
            };
        };

        let mut height = self.height;

        if let Some(token) = self.eat(TokenKind::Exp) {
            let exponent = self.nested(|input| input.parse_factor(false))?
                .ok_or_else(|| Error::new(vec![token.span.clone()], kind::ExpectedOperand {
                    op: token.lexeme.to_string(),
                }))?;
            height = self.grow(height, self.height, &token)?;
            expr = expr.pow(exponent);
        }

        if let Some(token) = &negation {
            height = self.grow(height, 0, token)?;
            expr = -expr;
        }

        self.height = height;
        Ok(Some(expr))
    }

    /// Parses a parenthesized expression, a number, a variable, a function call, or a derivative.
    ///
    /// Returns [`None`] without consuming anything if the current token cannot start one.
    fn parse_primary(&mut self) -> Result<Option<Expr>, Error> {
        let Some(token) = self.current_token().cloned() else {
            return Ok(None);
        };

        match token.kind {
            TokenKind::Decimal | TokenKind::Bin | TokenKind::Hex => {
                self.cursor += 1;
                self.height = 1;
                Ok(Some(Expr::Number(token.number_value().unwrap_or(f64::NAN))))
            },
            TokenKind::OpenParen => {
                self.cursor += 1;
                let inner = self.parse_expr()?
                    .ok_or_else(|| Error::new(vec![token.span.clone()], kind::EmptyParenthesis))?;
                self.expect_close_paren(&token)?;
                Ok(Some(inner))
            },
            TokenKind::Name => {
                self.cursor += 1;
                let name = token.lexeme.to_string();

                let mut order = 0;
                let mut quotes_span = self.span();
                while let Some(quote) = self.eat(TokenKind::Quote) {
                    order += 1;
                    quotes_span.end = quote.span.end;
                }

                let Some(open) = self.eat(TokenKind::OpenParen) else {
                    return if order > 0 {
                        Err(Error::new(vec![quotes_span], kind::TrailingApostrophe))
                    } else {
                        self.height = 1;
                        Ok(Some(Expr::Variable(name)))
                    };
                };

                let args = self.parse_args()?;
                self.expect_close_paren(&open)?;
                self.height = self.grow(self.height, 0, &open)?;
                Ok(Some(if order == 0 {
                    Expr::Call(Call { name, args })
                } else {
                    Expr::Derivative(Derivative { name, args, order })
                }))
            },
            _ => Ok(None),
        }
    }

    /// Parses a possibly empty, comma-separated list of arguments.
    fn parse_args(&mut self) -> Result<Vec<Expr>, Error> {
        let mut args = Vec::new();
        let Some(first) = self.parse_expr()? else {
            self.height = 0;
            return Ok(args);
        };
        args.push(first);
        let mut height = self.height;

        while let Some(comma) = self.eat(TokenKind::Comma) {
            let arg = self.parse_expr()?
                .ok_or_else(|| Error::new(vec![comma.span], kind::ExpectedArgument))?;
            height = height.max(self.height);
            args.push(arg);
        }

        self.height = height;
        Ok(args)
    }

    /// Consumes the closing parenthesis matching the given opening parenthesis.
    fn expect_close_paren(&mut self, open: &Token) -> Result<(), Error> {
        if self.eat(TokenKind::CloseParen).is_some() {
            return Ok(());
        }

        match self.current_token() {
            Some(token) => Err(self.error(kind::UnexpectedToken {
                found: token.lexeme.to_string(),
            })),
            None => Err(Error::new(vec![open.span.clone()], kind::UnclosedParenthesis {
                opening: true,
            })),
        }
    }
}

/// Checks that the left side of an assignment is a variable or a function header whose
/// parameters are distinct identifiers.
pub fn validate_assign_target(target: &Expr, assign: &Token) -> Result<(), Error> {
    let spans = vec![assign.span.clone()];
    match target {
        Expr::Variable(_) => Ok(()),
        Expr::Call(call) => {
            let params = call.header_params().map_err(|param| Error::new(spans.clone(), kind::NonIdentifierParam {
                name: call.name.clone(),
                param: param.to_string(),
            }))?;

            let mut seen = HashSet::new();
            for param in params {
                if !seen.insert(param) {
                    return Err(Error::new(spans, kind::DuplicateParam {
                        param: param.to_string(),
                    }));
                }
            }
            Ok(())
        },
        _ => Err(Error::new(spans, kind::InvalidAssignTarget)),
    }
}

/// Parses a complete statement from the given source.
pub fn parse(source: &str) -> Result<Expr, Error> {
    Parser::new(source)?.parse_statement()
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary / unary operation is left-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary / unary operation is right-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of assignment (`=`).
    Assign,

    /// Precedence of comparisons (`>`, `>=`, `<`, `<=`, `==`, and `!=`).
    Compare,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`), division (`/`, `//`), and modulo (`%`), which separate
    /// factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of expressions that never need parentheses, such as numbers and calls.
    Atom,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}
