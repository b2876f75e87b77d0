use tracing::debug;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{block::parse_block, utils::next_token},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many parentheses may be open at once inside one expression.
pub const MAX_NESTING: usize = 256;

/// Parses a complete program.
///
/// This is the entry point for parsing. The token stream must end with the
/// `Eof` token produced by the lexer, and the program must be followed by
/// nothing else: a stray `od` or `fi` at the top level is an error.
///
/// Grammar: `program := block Eof`
///
/// # Parameters
/// - `tokens`: The scanned tokens, ending in `Eof`.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Returns a [`ParseError`] on the first grammar violation.
///
/// # Example
/// ```
/// use imp::interpreter::{lexer::scan, parser::core::parse_program};
///
/// let tokens = scan("x := 1; print x").unwrap();
/// let program = parse_program(&tokens).unwrap();
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    let mut tokens = tokens.iter().peekable();

    let statements = parse_block(&mut tokens)?;

    let token = next_token(&mut tokens)?;
    if token.kind != TokenKind::Eof {
        return Err(ParseError::UnexpectedToken { expected: "';' or end of input".to_string(),
                                                 found:    token.to_string(),
                                                 line:     token.line, });
    }

    debug!(statements = statements.len(), "parsed program");

    Ok(Program { statements })
}
