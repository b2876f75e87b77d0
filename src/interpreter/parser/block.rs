use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, statement::parse_statement, utils::peek_kind},
    },
};

/// Parses a non-empty sequence of statements separated by `;`.
///
/// Parsing stops at the first statement not followed by `;`, leaving that
/// token (`od`, `else`, `fi` or `Eof`) for the enclosing construct to consume.
/// A `;` directly before `Eof` ends the sequence without requiring another
/// statement.
///
/// Grammar: `block := statement (";" statement)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first statement.
///
/// # Returns
/// The statements in source order.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = vec![parse_statement(tokens)?];

    while peek_kind(tokens) == Some(TokenKind::Semicolon) {
        tokens.next();

        if peek_kind(tokens) == Some(TokenKind::Eof) {
            break;
        }

        statements.push(parse_statement(tokens)?);
    }

    Ok(statements)
}
