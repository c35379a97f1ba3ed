use super::ast::*;
use super::error::{ParseError, ParseErrorKind};
use super::lexer::*;
use crate::common::*;
use logos_iter::LogosIter;
use std::ops::Range;

type PResult<T = Expression> = Result<T, ParseError>;

/// Recursive-descent parser over the grammar
///
/// ```text
/// expr   = term   { ("+"|"-") term }
/// term   = factor { ("*"|"/") factor }
/// factor = Symbol | Dice | Number | "(" expr ")"
/// ```
pub(crate) struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    const ADDITION_OPS: &'static [TokenKind] = &[TokenKind::Plus, TokenKind::Minus];

    const MULTIPLICATION_OPS: &'static [TokenKind] = &[TokenKind::Star, TokenKind::Slash];

    const OPERANDS: &'static [TokenKind] = &[
        TokenKind::Symbol,
        TokenKind::Dice,
        TokenKind::Number,
        TokenKind::LeftParen,
    ];

    pub fn new(s: &'a str) -> Self {
        Self {
            source: s,
            lexer: lexer(s),
        }
    }

    pub fn parse(mut self) -> PResult {
        if self.lexer.peek().is_none() {
            return self.error_at_end(ParseErrorKind::Empty);
        }

        let expr = self.parse_expression()?;

        match self.advance() {
            None => Ok(expr),
            Some(found) => self.error(found.as_lex_error().unwrap_or(ParseErrorKind::TrailingInput)),
        }
    }

    fn advance(&mut self) -> Option<TokenKind> {
        self.lexer.next()
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    /// Consumes the next token if it is one of `ops`, returning its operator.
    fn match_op(&mut self, ops: &[TokenKind]) -> Option<BinaryOperator> {
        let op = self
            .lexer
            .peek()
            .filter(|peeked| ops.contains(*peeked))
            .and_then(TokenKind::as_binary_op)?;
        self.advance();
        Some(op)
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        if self.matches(expected) {
            self.advance();
            Ok(())
        } else {
            self.unexpected_token(vec![expected])
        }
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        let span = self.lexer.span();
        self.error_at(kind, span)
    }

    fn error_at<T>(&self, kind: ParseErrorKind, span: Range<usize>) -> PResult<T> {
        Err(ParseError::new(kind, self.source, span))
    }

    fn error_at_end<T>(&self, kind: ParseErrorKind) -> PResult<T> {
        let end = self.source.len();
        self.error_at(kind, end..end)
    }

    fn unexpected_token<T>(&mut self, expected: Vec<TokenKind>) -> PResult<T> {
        match self.advance() {
            None => self.error_at_end(ParseErrorKind::UnexpectedEnd { expected }),
            Some(found) => {
                let kind = found
                    .as_lex_error()
                    .unwrap_or(ParseErrorKind::UnexpectedToken { found, expected });
                self.error(kind)
            }
        }
    }

    fn parse_expression(&mut self) -> PResult {
        let mut lhs = self.parse_term()?;

        while let Some(op) = self.match_op(Self::ADDITION_OPS) {
            let rhs = self.parse_term()?;
            lhs = Operation::new(op, lhs, rhs).into();
        }

        Ok(lhs)
    }

    fn parse_term(&mut self) -> PResult {
        let mut lhs = self.parse_factor()?;

        while let Some(op) = self.match_op(Self::MULTIPLICATION_OPS) {
            let rhs = self.parse_factor()?;
            lhs = Operation::new(op, lhs, rhs).into();
        }

        Ok(lhs)
    }

    fn parse_factor(&mut self) -> PResult {
        match self.lexer.peek() {
            Some(TokenKind::LeftParen) => self.parse_grouping(),
            Some(TokenKind::Symbol) => self.parse_reference(),
            Some(TokenKind::Dice) => self.parse_roll(),
            Some(TokenKind::Number) => self.parse_number(),
            _ => self.unexpected_token(Self::OPERANDS.to_vec()),
        }
    }

    fn parse_grouping(&mut self) -> PResult {
        self.consume(TokenKind::LeftParen)?;
        let inner = self.parse_expression()?;
        self.consume(TokenKind::RightParen)?;
        Ok(inner)
    }

    fn parse_reference(&mut self) -> PResult {
        self.consume(TokenKind::Symbol)?;
        Ok(Reference::new(self.lexer.slice()).into())
    }

    fn parse_roll(&mut self) -> PResult {
        self.consume(TokenKind::Dice)?;
        match self.lexer.slice().parse::<Roll>() {
            Ok(roll) => Ok(roll.into()),
            Err(kind) => self.error(kind),
        }
    }

    fn parse_number(&mut self) -> PResult<Expression> {
        self.consume(TokenKind::Number)?;
        match self.lexer.slice().parse::<Float>() {
            Ok(x) => Ok(Literal::new(x).into()),
            Err(_) => self.error(ParseErrorKind::InvalidToken),
        }
    }
}
