use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING, ParseResult},
    },
};

/// Returns the kind of the next token without consuming it.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>)
                                                       -> Option<TokenKind>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map(|token| token.kind)
}

/// Consumes and returns the next token.
///
/// # Errors
/// Returns `UnexpectedEndOfInput` if the stream is exhausted, which only
/// happens when the caller's tokens lack the trailing `Eof`.
pub(in crate::interpreter::parser) fn next_token<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next()
          .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })
}

/// Consumes the next token and checks that it has the expected kind.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The kind the grammar requires here.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns `UnexpectedToken` carrying the actual lexeme and its line if the
/// kinds differ.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    let token = next_token(tokens)?;
    if token.kind == expected {
        Ok(token)
    } else {
        Err(ParseError::UnexpectedToken { expected: expected.describe(),
                                          found:    token.to_string(),
                                          line:     token.line, })
    }
}

/// Speculatively runs `parse` on a copy of the cursor.
///
/// On success the cursor advances past what was parsed. On failure it is left
/// untouched and the error comes back together with the number of tokens the
/// copy had not consumed, so callers trying several readings can tell which
/// one got furthest.
pub(in crate::interpreter::parser) fn attempt<'a, I, T>(tokens: &mut Peekable<I>,
                                                        parse: impl FnOnce(&mut Peekable<I>)
                                                                     -> ParseResult<T>)
                                                        -> Result<T, (ParseError, usize)>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    match parse(&mut lookahead) {
        Ok(result) => {
            *tokens = lookahead;
            Ok(result)
        },
        Err(error) => Err((error, lookahead.count())),
    }
}

/// Steps one parenthesis deeper, returning the new depth.
///
/// # Errors
/// Returns `NestingTooDeep` once `depth` reaches [`MAX_NESTING`].
pub(in crate::interpreter::parser) fn enter_group(depth: usize,
                                                  line: usize)
                                                  -> ParseResult<usize> {
    if depth >= MAX_NESTING {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                line });
    }
    Ok(depth + 1)
}
