use std::{cell::Cell, iter::Peekable};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_logical_or},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many sub-expressions may be open at once, counting prefix operators,
/// brackets, postfix operators and links in an operator chain.
pub const MAX_NESTING_DEPTH: usize = 128;

thread_local! {
    static NESTING: Cell<usize> = const { Cell::new(0) };
}

/// One open level of nesting, released on drop.
///
/// Keeps the recursive descent (and the tree it builds) shallow enough that
/// neither parsing nor evaluation can exhaust the stack.
pub(in crate::interpreter::parser) struct NestingGuard(());

impl NestingGuard {
    /// Opens a level.
    ///
    /// # Errors
    /// `NestingTooDeep` once [`MAX_NESTING_DEPTH`] levels are open.
    pub(in crate::interpreter::parser) fn enter(line: usize) -> ParseResult<Self> {
        NESTING.with(|depth| {
                   if depth.get() >= MAX_NESTING_DEPTH {
                       return Err(ParseError::NestingTooDeep { line });
                   }
                   depth.set(depth.get() + 1);
                   Ok(Self(()))
               })
    }
}

impl Drop for NestingGuard {
    fn drop(&mut self) {
        NESTING.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens)
}

/// Returns the line of the next token, or `fallback` at the end of input.
pub(in crate::interpreter::parser) fn peek_line<'a, I>(tokens: &mut Peekable<I>,
                                                       fallback: usize)
                                                       -> usize
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().map_or(fallback, |(_, line)| *line)
}

/// Consumes `expected` or reports what was found instead.
///
/// # Errors
/// `UnexpectedEndOfInput` when the stream is exhausted, `missing` when a
/// different token is next.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          missing: ParseError,
                                                          line: usize)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((tok, _)) if tok == expected => {
            tokens.next();
            Ok(())
        },
        Some(_) => Err(missing),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
