use crate::{
    ast::{BExpr, IExpr},
    error::ParseError,
    interpreter::{lexer::TokenKind, parser::core::ParseResult},
};

/// How tightly an operator binds. Variants are ordered loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `+`, `-`, `&&`, `||`
    Loose,
    /// `*`, `!`
    Tight,
}

/// An operator that can wait on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    And,
    Or,
    Not,
}

impl Operator {
    /// Maps a token kind to the operator it denotes, if any.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Plus),
            TokenKind::Minus => Some(Self::Minus),
            TokenKind::Star => Some(Self::Times),
            TokenKind::DoubleAmpersand => Some(Self::And),
            TokenKind::DoublePipe => Some(Self::Or),
            TokenKind::Bang => Some(Self::Not),
            _ => None,
        }
    }

    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Plus | Self::Minus | Self::And | Self::Or => Precedence::Loose,
            Self::Times | Self::Not => Precedence::Tight,
        }
    }

    /// Prefix operators have no left operand, so pushing one never reduces
    /// what is already on the stack.
    #[must_use]
    pub const fn is_prefix(self) -> bool {
        matches!(self, Self::Not)
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Times => "*",
            Self::And => "&&",
            Self::Or => "||",
            Self::Not => "!",
        }
    }
}

/// An operator on the stack together with the line it was read on.
#[derive(Debug, Clone, Copy)]
pub struct PendingOperator {
    pub operator: Operator,
    pub line:     usize,
}

/// Builds one tree node by applying an operator to the output stack.
pub type Reduce<T> = fn(&mut Vec<T>, PendingOperator) -> ParseResult<()>;

/// Pushes an incoming operator, first reducing every stacked operator that
/// binds at least as tightly.
///
/// Popping equal precedence before pushing makes same-level chains
/// left-associative: `a - b - c` is `(a - b) - c`.
///
/// # Parameters
/// - `after_operand`: Whether the previous item of the expression was an
///   operand. Binary operators must follow one.
///
/// # Errors
/// - `MissingOperand` if a binary operator has no left operand, as in
///   `+ 1 2` or `1 + * 2`.
/// - The arity error of any reduction performed.
pub fn push_operator<T>(output: &mut Vec<T>,
                        operators: &mut Vec<PendingOperator>,
                        incoming: PendingOperator,
                        after_operand: bool,
                        reduce: Reduce<T>)
                        -> ParseResult<()> {
    if !incoming.operator.is_prefix() {
        if !after_operand {
            return Err(ParseError::MissingOperand { operator: incoming.operator
                                                                      .symbol()
                                                                      .to_string(),
                                                    line:     incoming.line, });
        }

        let precedence = incoming.operator.precedence();
        while let Some(top) = operators.pop_if(|top| top.operator.precedence() >= precedence) {
            reduce(output, top)?;
        }
    }

    operators.push(incoming);
    Ok(())
}

/// Reduces every remaining operator, top of the stack first, and returns the
/// single tree left on the output stack.
///
/// # Parameters
/// - `found`: The lexeme that ended the expression, for diagnostics.
/// - `line`: The line of that lexeme.
///
/// # Errors
/// - `MissingOperand` if an operator lacks operands.
/// - `MalformedExpression` if the output stack does not hold exactly one tree.
pub fn finish<T>(mut output: Vec<T>,
                 mut operators: Vec<PendingOperator>,
                 reduce: Reduce<T>,
                 found: &str,
                 line: usize)
                 -> ParseResult<T> {
    while let Some(top) = operators.pop() {
        reduce(&mut output, top)?;
    }

    match (output.pop(), output.is_empty()) {
        (Some(tree), true) => Ok(tree),
        _ => Err(ParseError::MalformedExpression { found: found.to_string(),
                                                   line }),
    }
}

/// Pops the two most recent operands, returning them in source order.
fn pop_pair<T>(output: &mut Vec<T>, pending: PendingOperator) -> ParseResult<(T, T)> {
    let missing = || ParseError::MissingOperand { operator: pending.operator.symbol().to_string(),
                                                  line:     pending.line, };

    let right = output.pop().ok_or_else(missing)?;
    let left = output.pop().ok_or_else(missing)?;
    Ok((left, right))
}

/// Reduction for integer expressions.
///
/// # Errors
/// Returns `MissingOperand` if fewer than two operands are available.
pub fn reduce_integer(output: &mut Vec<IExpr>, pending: PendingOperator) -> ParseResult<()> {
    let (left, right) = pop_pair(output, pending)?;
    let (left, right) = (Box::new(left), Box::new(right));

    let node = match pending.operator {
        Operator::Plus => IExpr::Plus(left, right),
        Operator::Minus => IExpr::Minus(left, right),
        Operator::Times => IExpr::Times(left, right),
        Operator::And | Operator::Or | Operator::Not => {
            return Err(ParseError::UnexpectedToken { expected: "an integer operator".to_string(),
                                                     found:    pending.operator
                                                                      .symbol()
                                                                      .to_string(),
                                                     line:     pending.line, });
        },
    };

    output.push(node);
    Ok(())
}

/// Reduction for boolean expressions. `!` takes one operand, `&&` and `||`
/// take two.
///
/// # Errors
/// Returns `MissingOperand` if the operator lacks operands.
pub fn reduce_boolean(output: &mut Vec<BExpr>, pending: PendingOperator) -> ParseResult<()> {
    if pending.operator == Operator::Not {
        let operand = output.pop()
                            .ok_or_else(|| ParseError::MissingOperand { operator: "!".to_string(),
                                                                        line:     pending.line, })?;
        output.push(BExpr::Not(Box::new(operand)));
        return Ok(());
    }

    let (left, right) = pop_pair(output, pending)?;
    let (left, right) = (Box::new(left), Box::new(right));

    let node = match pending.operator {
        Operator::And => BExpr::And(left, right),
        Operator::Or => BExpr::Or(left, right),
        Operator::Plus | Operator::Minus | Operator::Times | Operator::Not => {
            return Err(ParseError::UnexpectedToken { expected: "a boolean operator".to_string(),
                                                     found:    pending.operator
                                                                      .symbol()
                                                                      .to_string(),
                                                     line:     pending.line, });
        },
    };

    output.push(node);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(operator: Operator) -> PendingOperator {
        PendingOperator { operator,
                          line: 1 }
    }

    #[test]
    fn equal_precedence_reduces_left_to_right() {
        let mut output = vec![IExpr::Const(8), IExpr::Const(3)];
        let mut operators = vec![pending(Operator::Minus)];

        push_operator(&mut output, &mut operators, pending(Operator::Minus), true, reduce_integer).unwrap();
        output.push(IExpr::Const(2));

        let tree = finish(output, operators, reduce_integer, "", 1).unwrap();
        assert_eq!(tree,
                   IExpr::Minus(Box::new(IExpr::Minus(Box::new(IExpr::Const(8)),
                                                      Box::new(IExpr::Const(3)))),
                                Box::new(IExpr::Const(2))));
    }

    #[test]
    fn looser_operator_waits_for_tighter_one() {
        let mut output = vec![IExpr::Const(1), IExpr::Const(2)];
        let mut operators = vec![pending(Operator::Plus)];

        push_operator(&mut output, &mut operators, pending(Operator::Times), true, reduce_integer).unwrap();
        assert_eq!(operators.len(), 2);
        assert_eq!(output.len(), 2);
    }

    #[test]
    fn binary_operator_needs_a_left_operand() {
        let mut output = Vec::<IExpr>::new();
        let mut operators = Vec::new();

        let error = push_operator(&mut output, &mut operators, pending(Operator::Plus), false, reduce_integer).unwrap_err();
        assert_eq!(error,
                   ParseError::MissingOperand { operator: "+".to_string(),
                                                line:     1, });
        assert!(operators.is_empty());
    }

    #[test]
    fn prefix_operator_needs_no_left_operand() {
        let mut output = Vec::<BExpr>::new();
        let mut operators = Vec::new();

        push_operator(&mut output, &mut operators, pending(Operator::Not), false, reduce_boolean).unwrap();
        assert_eq!(operators.len(), 1);
    }

    #[test]
    fn binary_reduction_without_operands_fails() {
        let mut output = vec![IExpr::Const(1)];

        let error = reduce_integer(&mut output, pending(Operator::Plus)).unwrap_err();
        assert_eq!(error,
                   ParseError::MissingOperand { operator: "+".to_string(),
                                                line:     1, });
    }

    #[test]
    fn not_consumes_a_single_operand() {
        let mut output = vec![BExpr::True, BExpr::False];

        reduce_boolean(&mut output, pending(Operator::Not)).unwrap();
        assert_eq!(output, [BExpr::True, BExpr::Not(Box::new(BExpr::False))]);
    }

    #[test]
    fn leftover_operands_are_malformed() {
        let output = vec![IExpr::Const(1), IExpr::Const(2)];

        let error = finish(output, Vec::new(), reduce_integer, ";", 4).unwrap_err();
        assert_eq!(error,
                   ParseError::MalformedExpression { found: ";".to_string(),
                                                     line:  4, });
    }
}
