use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, expect_token, parse_expression},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, index lists, function argument
/// lists and parameter lists. It repeatedly calls `parse_item` to parse one
/// element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// This function does not check for reserved identifiers; callers must handle
/// that.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses an object literal of the form `{ key: expr, "other key": expr }`.
///
/// Keys are bare identifiers or double-quoted strings. An empty object `{}`
/// is accepted.
///
/// Grammar:
/// ```text
///     map   := "{" (entry ("," entry)*)? "}"
///     entry := (IDENTIFIER | STRING) ":" expression
/// ```
///
/// # Errors
/// `InvalidMapEntry` when a key or its `:` is missing, plus any error from
/// parsing the value expressions.
pub fn parse_map_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LBrace, line)) => *line,
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let parse_entry = |tokens: &mut Peekable<I>| -> ParseResult<(String, Expr)> {
        let key = match tokens.next() {
            Some((Token::Identifier(key) | Token::Str(key), _)) => key.clone(),
            _ => return Err(ParseError::InvalidMapEntry { line }),
        };
        expect_token(tokens, &Token::Colon, ParseError::InvalidMapEntry { line }, line)?;
        let value = parse_expression(tokens)?;
        Ok((key, value))
    };

    let entries = parse_comma_separated(tokens, parse_entry, &Token::RBrace)?;

    Ok(Expr::MapLiteral { entries, line })
}
