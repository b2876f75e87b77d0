use std::iter::Peekable;

use crate::{
    ast::IExpr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            operator::{Operator, PendingOperator, finish, push_operator, reduce_integer},
            utils::{enter_group, next_token},
        },
    },
};

/// Parses an integer expression with the shunting-yard algorithm.
///
/// Operands (`Int` literals, variables and parenthesised sub-expressions) go
/// to the output stack, operators wait on the operator stack until an operator
/// of looser or equal precedence arrives. Operands and operators must
/// alternate. Parsing stops at the first token that cannot continue an integer
/// expression, including an operand right after another operand, which is
/// left for the caller.
///
/// Precedence: `*` binds tighter than `+` and `-`; all three are
/// left-associative.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
///
/// # Returns
/// The expression tree.
///
/// # Errors
/// - `LiteralTooLarge` for literals that do not fit in `i64`.
/// - `UnmatchedParenthesis` if a `(` is not closed.
/// - `NestingTooDeep` if parentheses nest deeper than
///   [`MAX_NESTING`](crate::interpreter::parser::core::MAX_NESTING).
/// - `MissingOperand` or `MalformedExpression` if operators and operands do
///   not pair up.
pub fn parse_iexpr<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<IExpr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_nested_iexpr(tokens, 0)
}

/// [`parse_iexpr`] inside `depth` open parentheses.
pub(in crate::interpreter::parser) fn parse_nested_iexpr<'a, I>(tokens: &mut Peekable<I>,
                                                                depth: usize)
                                                                -> ParseResult<IExpr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut output = Vec::new();
    let mut operators = Vec::new();
    let mut after_operand = false;

    while let Some(&token) = tokens.peek() {
        let starts_operand =
            matches!(token.kind, TokenKind::Int | TokenKind::Variable | TokenKind::LParen);
        if starts_operand && after_operand {
            break;
        }

        match token.kind {
            TokenKind::Int => {
                tokens.next();
                output.push(IExpr::Const(parse_literal(token)?));
            },
            TokenKind::Variable => {
                tokens.next();
                output.push(IExpr::Var(token.lexeme.clone()));
            },
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star => {
                tokens.next();
                if let Some(operator) = Operator::from_token(token.kind) {
                    let pending = PendingOperator { operator,
                                                    line: token.line };
                    push_operator(&mut output, &mut operators, pending, after_operand, reduce_integer)?;
                }
            },
            TokenKind::LParen => {
                tokens.next();
                output.push(parse_integer_group(tokens, token.line, depth)?);
            },
            _ => break,
        }

        after_operand = starts_operand;
    }

    let (found, line) = tokens.peek()
                              .map_or((String::new(), 0), |t| (t.to_string(), t.line));
    finish(output, operators, reduce_integer, &found, line)
}

/// Parses the rest of a parenthesised integer expression after its `(`.
///
/// # Errors
/// Returns `UnmatchedParenthesis` citing the opening line if the next token
/// after the inner expression is not `)`.
fn parse_integer_group<'a, I>(tokens: &mut Peekable<I>,
                              line: usize,
                              depth: usize)
                              -> ParseResult<IExpr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let inner = parse_nested_iexpr(tokens, enter_group(depth, line)?)?;

    match next_token(tokens)? {
        Token { kind: TokenKind::RParen,
                .. } => Ok(inner),
        _ => Err(ParseError::UnmatchedParenthesis { line }),
    }
}

/// Converts an `Int` token into its value.
///
/// # Errors
/// Returns `LiteralTooLarge` if the literal exceeds `i64::MAX`.
pub(in crate::interpreter::parser) fn parse_literal(token: &Token) -> ParseResult<i64> {
    token.lexeme
         .parse()
         .map_err(|_| ParseError::LiteralTooLarge { literal: token.lexeme.clone(),
                                                    line:    token.line, })
}
