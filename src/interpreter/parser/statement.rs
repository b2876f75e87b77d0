use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            boolean::parse_bexpr,
            core::ParseResult,
            integer::parse_iexpr,
            utils::{expect, next_token},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - `skip`
/// - an assignment `x := iexpr`
/// - `print iexpr`
/// - a loop `while bexpr do block od`
/// - a conditional `if bexpr then block else block fi`
///
/// The statement's line is the line of its first token.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns `UnexpectedToken` if the first token cannot start a statement, and
/// propagates errors from the statement's parts.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = next_token(tokens)?;
    let line = token.line;

    match token.kind {
        TokenKind::Skip => Ok(Statement::Skip { line }),
        TokenKind::Variable => parse_assignment(tokens, token),
        TokenKind::Print => Ok(Statement::Print { value: parse_iexpr(tokens)?,
                                                  line }),
        TokenKind::While => parse_while(tokens, line),
        TokenKind::If => parse_if(tokens, line),
        _ => Err(ParseError::UnexpectedToken { expected: "a statement".to_string(),
                                               found: token.to_string(),
                                               line }),
    }
}

/// Parses the rest of an assignment after its target variable.
///
/// Grammar: `assignment := Variable ":=" iexpr`
///
/// # Errors
/// Returns `UnexpectedToken` if the variable is not followed by `:=`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, target: &Token) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::Assign)?;
    let value = parse_iexpr(tokens)?;

    Ok(Statement::Assign { name: target.lexeme.clone(),
                           value,
                           line: target.line })
}

/// Parses the rest of a loop after `while`.
///
/// Grammar: `while := "while" bexpr "do" block "od"`
///
/// # Errors
/// Returns `UnexpectedToken` if `do` or `od` is missing.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_bexpr(tokens)?;
    expect(tokens, TokenKind::Do)?;
    let body = parse_block(tokens)?;
    expect(tokens, TokenKind::Od)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses the rest of a conditional after `if`.
///
/// Both branches are mandatory.
///
/// Grammar: `if := "if" bexpr "then" block "else" block "fi"`
///
/// # Errors
/// Returns `UnexpectedToken` if `then`, `else` or `fi` is missing.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_bexpr(tokens)?;
    expect(tokens, TokenKind::Then)?;
    let then_branch = parse_block(tokens)?;
    expect(tokens, TokenKind::Else)?;
    let else_branch = parse_block(tokens)?;
    expect(tokens, TokenKind::Fi)?;

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}
