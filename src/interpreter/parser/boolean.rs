use std::iter::Peekable;

use crate::{
    ast::BExpr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            integer::parse_nested_iexpr,
            operator::{Operator, PendingOperator, finish, push_operator, reduce_boolean},
            utils::{attempt, enter_group, next_token},
        },
    },
};

/// Parses a boolean expression with the shunting-yard algorithm.
///
/// Operands are `true`, `false`, integer comparisons (`a = b`, `a <= b`) and
/// parenthesised sub-expressions. `!` is a prefix operator binding tighter
/// than `&&` and `||`, which share one precedence level and associate to the
/// left. Operands and operators must alternate. Parsing stops at the first
/// token that cannot continue a boolean expression, which is left for the
/// caller.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
///
/// # Returns
/// The expression tree.
///
/// # Errors
/// - `UnexpectedToken` if a comparison lacks `=` or `<=`.
/// - `UnmatchedParenthesis` if a `(` is not closed.
/// - `NestingTooDeep` if parentheses nest deeper than
///   [`MAX_NESTING`](crate::interpreter::parser::core::MAX_NESTING).
/// - `MissingOperand` or `MalformedExpression` if operators and operands do
///   not pair up.
/// - Any error of the integer operands.
pub fn parse_bexpr<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<BExpr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_nested_bexpr(tokens, 0)
}

fn parse_nested_bexpr<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<BExpr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut output = Vec::new();
    let mut operators = Vec::new();
    let mut after_operand = false;

    while let Some(&token) = tokens.peek() {
        let starts_operand = matches!(token.kind,
                                      TokenKind::True
                                      | TokenKind::False
                                      | TokenKind::Variable
                                      | TokenKind::Int
                                      | TokenKind::LParen
                                      | TokenKind::Bang);
        if starts_operand && after_operand {
            break;
        }

        match token.kind {
            TokenKind::True => {
                tokens.next();
                output.push(BExpr::True);
            },
            TokenKind::False => {
                tokens.next();
                output.push(BExpr::False);
            },
            TokenKind::DoubleAmpersand | TokenKind::DoublePipe | TokenKind::Bang => {
                tokens.next();
                if let Some(operator) = Operator::from_token(token.kind) {
                    let pending = PendingOperator { operator,
                                                    line: token.line };
                    push_operator(&mut output, &mut operators, pending, after_operand, reduce_boolean)?;
                }
            },
            TokenKind::Variable | TokenKind::Int => output.push(parse_comparison(tokens, depth)?),
            TokenKind::LParen => output.push(parse_group_or_comparison(tokens, depth)?),
            _ => break,
        }

        // `!` still needs its operand.
        after_operand = starts_operand && token.kind != TokenKind::Bang;
    }

    let (found, line) = tokens.peek()
                              .map_or((String::new(), 0), |t| (t.to_string(), t.line));
    finish(output, operators, reduce_boolean, &found, line)
}

/// Parses `iexpr ("=" | "<=") iexpr`.
///
/// This is the only place where the integer and boolean grammars meet.
///
/// # Errors
/// Returns `UnexpectedToken` if the left operand is not followed by `=` or
/// `<=`, and propagates errors from either operand.
fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<BExpr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_nested_iexpr(tokens, depth)?;

    let operator = next_token(tokens)?;
    match operator.kind {
        TokenKind::Equals => Ok(BExpr::Equal(left, parse_nested_iexpr(tokens, depth)?)),
        TokenKind::LessEqual => Ok(BExpr::LessEqual(left, parse_nested_iexpr(tokens, depth)?)),
        _ => Err(ParseError::UnexpectedToken { expected: "'=' or '<='".to_string(),
                                               found:    operator.to_string(),
                                               line:     operator.line, }),
    }
}

/// Parses an operand that starts with `(`.
///
/// The parenthesis either groups a boolean expression, as in `(a = 1) && b`,
/// or opens the left side of a comparison, as in `(a + 1) = 2`. The boolean
/// reading is tried first; if it fails the comparison reading is tried from
/// the same position. When both fail, the error of the reading that got
/// further through the tokens is reported, the boolean one on a tie.
fn parse_group_or_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<BExpr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let (group_error, group_left) = match attempt(tokens, |t| parse_boolean_group(t, depth)) {
        Ok(expr) => return Ok(expr),
        Err(failure) => failure,
    };

    match attempt(tokens, |t| parse_comparison(t, depth)) {
        Ok(expr) => Ok(expr),
        Err((comparison_error, comparison_left)) if comparison_left < group_left => {
            Err(comparison_error)
        },
        Err(_) => Err(group_error),
    }
}

/// Parses `"(" bexpr ")"`.
///
/// # Errors
/// Returns `UnmatchedParenthesis` citing the opening line if the closing `)`
/// is missing.
fn parse_boolean_group<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<BExpr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let open = next_token(tokens)?;
    let inner = parse_nested_bexpr(tokens, enter_group(depth, open.line)?)?;

    match next_token(tokens)? {
        Token { kind: TokenKind::RParen,
                .. } => Ok(inner),
        _ => Err(ParseError::UnmatchedParenthesis { line: open.line }),
    }
}
