use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        evaluator::utils::is_reserved_identifier,
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression, peek_line},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a whole program: statements separated by `;` or line breaks.
///
/// Empty statements are skipped. Every statement must be followed by a
/// separator or the end of input.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the program contains no statement at all.
/// - `UnexpectedTrailingTokens` if a statement is followed by something other
///   than a separator.
/// - Any error from parsing an individual statement.
///
/// # Example
/// ```
/// use calcboard::{ast::Statement,
///                 interpreter::{lexer::tokenize, parser::statement::parse_program}};
///
/// let tokens = tokenize("f(x) = x ^ 2; a = 3\nf(a)").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 3);
/// assert!(matches!(program[0], Statement::Function(_)));
/// assert!(matches!(program[1], Statement::Assignment { .. }));
/// assert!(matches!(program[2], Statement::Expression { line: 2, .. }));
///
/// assert!(parse_program(&tokenize("1 2").unwrap()).is_err());
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let end_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut tokens = tokens.iter().peekable();
    let mut statements = Vec::new();
    let mut last_line = 1;

    loop {
        while let Some((Token::NewLine | Token::Semicolon, line)) = tokens.peek() {
            last_line = *line;
            tokens.next();
        }
        if tokens.peek().is_none() {
            break;
        }

        let statement = parse_statement(&mut tokens).map_err(|err| match err {
                            ParseError::UnexpectedEndOfInput { line: 0 } => {
                                ParseError::UnexpectedEndOfInput { line: end_line }
                            },
                            other => other,
                        })?;
        statements.push(statement);

        match tokens.peek() {
            None | Some((Token::NewLine | Token::Semicolon, _)) => {},
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedTrailingTokens { token: tok.to_string(),
                                                                  line:  *line, });
            },
        }
    }

    if statements.is_empty() {
        return Err(ParseError::UnexpectedEndOfInput { line: last_line });
    }
    Ok(statements)
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a function definition, `f(x, y) = expression`
/// - an assignment, `name = expression`
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_function_definition(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let line = peek_line(tokens, 1);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr, line })
}

/// Parses `<identifier> = <expression>`.
///
/// Uses a two-token lookahead on a cloned iterator, so nothing is consumed
/// when the input is not an assignment. `==` lexes as its own token and is
/// never mistaken for `=`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let Some((Token::Identifier(name), line)) = lookahead.next() else {
        return Ok(None);
    };
    if !matches!(lookahead.next(), Some((Token::Equals, _))) {
        return Ok(None);
    }

    tokens.next();
    tokens.next();

    let value = parse_expression(tokens)?;
    Ok(Some(Statement::Assignment { name: name.clone(),
                                    value,
                                    line: *line }))
}

/// Parses a function definition of the form
/// `<name>(param1, param2, ...) = <expression>`.
///
/// A definition is recognised by scanning ahead to the `)` matching the
/// opening parenthesis and checking that `=` follows it. Otherwise the
/// function returns `Ok(None)` without consuming tokens, and the input is
/// parsed as a call expression instead.
///
/// # Errors
/// - `InvalidFunctionDefinition` if a parameter is not a plain identifier.
/// - `IdentifierReserved` if a parameter shadows a built-in constant.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let Some((Token::Identifier(name), line)) = lookahead.next() else {
        return Ok(None);
    };
    if !matches!(lookahead.next(), Some((Token::LParen, _))) {
        return Ok(None);
    }

    let mut depth = 1;
    while depth > 0 {
        match lookahead.next() {
            Some((Token::LParen, _)) => depth += 1,
            Some((Token::RParen, _)) => depth -= 1,
            Some(_) => {},
            None => return Ok(None),
        }
    }
    if !matches!(lookahead.next(), Some((Token::Equals, _))) {
        return Ok(None);
    }

    let line = *line;
    tokens.next();
    tokens.next();

    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)
        .map_err(|_| ParseError::InvalidFunctionDefinition { line })?;
    if let Some(reserved) = params.iter().find(|p| is_reserved_identifier(p)) {
        return Err(ParseError::IdentifierReserved { name: reserved.clone(),
                                                    line });
    }

    // '='
    tokens.next();

    let body = parse_expression(tokens)?;
    Ok(Some(Statement::Function(FunctionDef { name: name.clone(),
                                              params,
                                              body,
                                              line })))
}
