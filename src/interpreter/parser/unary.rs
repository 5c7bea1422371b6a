use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{NestingGuard, ParseResult, parse_expression, peek_line},
            utils::{parse_comma_separated, parse_map_literal},
        },
        value::complex::ComplexNumber,
    },
};

/// Parses a prefix unary expression.
///
/// Supports prefix operators:
/// - `-`   (numeric negation)
/// - `+`   (unary plus)
/// - `not` (logical not)
///
/// Unary operators are right-associative and bind looser than `^`, so `-2 ^ 2`
/// is `-(2 ^ 2)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+" | "not") unary
///            | power
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let _level = NestingGuard::enter(peek_line(tokens, 0))?;
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        Some((Token::Not, _)) => UnaryOperator::Not,
        _ => return parse_power(tokens),
    };
    let Some((_, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };

    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line: *line })
}

/// Parses exponentiation.
///
/// `^` is right-associative: the exponent is itself a unary expression, so
/// `2 ^ 3 ^ 2` is `2 ^ 9` and `2 ^ -1` needs no parentheses.
///
/// Grammar: `power := postfix ("^" unary)?`
fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens)?;
    let base = parse_postfix(tokens, base)?;

    if let Some((Token::Caret, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let exponent = parse_unary(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   line });
    }
    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_function
///              | "(" expression ")"
///              | "|" expression "|"
///              | "[" elements "]"
///              | "{" entries "}"
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };

    match token {
        Token::Number(_) | Token::Bool(_) => parse_literal(tokens),
        Token::Identifier(_) => parse_identifier_or_function(tokens),
        Token::LParen => parse_grouping(tokens),
        Token::Pipe => parse_abs(tokens),
        Token::LBracket => parse_array_literal(tokens),
        Token::LBrace => parse_map_literal(tokens),
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                 line:  *line, }),
    }
}

/// Parses postfix operators applied to an expression.
///
/// 1. **Factorial** `expr!`, which may repeat: `3!!` is `(3!)!`.
/// 2. **Indexing** `expr[i]` or `expr[i, j]`, one-based. Chained indices such
///    as `m[2][1]` are allowed.
///
/// Grammar:
/// ```text
///     postfix := primary
///              | postfix "!"
///              | postfix "[" expression ("," expression)* "]"
/// ```
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    #[allow(clippy::collection_is_never_read)]
    let mut levels = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::Bang, line)) => {
                let line = *line;
                levels.push(NestingGuard::enter(line)?);
                tokens.next();
                node = Expr::UnaryOp { op: UnaryOperator::Factorial,
                                       expr: Box::new(node),
                                       line };
            },
            Some((Token::LBracket, line)) => {
                let line = *line;
                levels.push(NestingGuard::enter(line)?);
                tokens.next();
                let indices = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
                if indices.is_empty() {
                    return Err(ParseError::UnexpectedToken { token: Token::RBracket.to_string(),
                                                             line });
                }
                node = Expr::Index { target: Box::new(node),
                                     indices,
                                     line };
            },
            _ => return Ok(node),
        }
    }
}

/// Parses a numeric or boolean literal.
///
/// A number directly followed by the identifier `i` is an imaginary literal:
/// `3i` becomes `0 + 3i`.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), line)) => {
            if let Some((Token::Identifier(id), _)) = tokens.peek()
               && id == "i"
            {
                tokens.next();
                return Ok(Expr::Literal { value: ComplexNumber::new(0.0, *n).into(),
                                          line:  *line, });
            }
            Ok(Expr::Literal { value: (*n).into(),
                               line:  *line, })
        },
        Some((Token::Bool(b), line)) => Ok(Expr::Literal { value: (*b).into(),
                                                           line:  *line, }),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes the opening delimiter and returns its line.
fn opening_line<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next()
          .map(|(_, line)| *line)
          .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })
}

/// Parses an absolute-value expression of the form `| expression |`.
///
/// Missing closing delimiters produce `ParseError::ExpectedPipe`.
fn parse_abs<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = opening_line(tokens)?;
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::Pipe, _)) => Ok(Expr::Abs { expr: Box::new(expr),
                                                 line }),
        _ => Err(ParseError::ExpectedPipe { line }),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar `grouping := "(" expression ")"`
///
/// The inner expression is returned as-is, without a wrapper node.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = opening_line(tokens)?;
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Parses an array literal of the form `[expr1, expr2, ..., exprN]`.
///
/// Nested literals such as `[[1, 2], [3, 4]]` form matrices.
fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = opening_line(tokens)?;
    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)
        .map_err(|err| match err {
            ParseError::UnexpectedEndOfInput { .. } => ParseError::ExpectedClosingBracket { line },
            other => other,
        })?;
    Ok(Expr::ArrayLiteral { elements, line })
}

/// Parses an identifier or function call.
///
/// Supported forms:
///
/// - identifier
/// - identifier(arg1, arg2, ...)
///
/// Constants such as `pi` and the imaginary unit `i` are plain identifiers
/// here and are resolved by the evaluator.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(n), line)) => (n.clone(), *line),
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                     line:  *line, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { line: 0 });
        },
    };

    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)
            .map_err(|err| match err {
                ParseError::UnexpectedEndOfInput { .. } => ParseError::ExpectedClosingParen { line },
                other => other,
            })?;
        return Ok(Expr::FunctionCall { name,
                                       arguments,
                                       line });
    }

    Ok(Expr::Variable { name, line })
}
