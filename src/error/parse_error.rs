#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires here.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The lexeme actually found.
        found:    String,
        /// The source line of the offending token.
        line:     usize,
    },
    /// Ran out of tokens without seeing the end-of-input marker.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `(` was never closed by a matching `)`.
    UnmatchedParenthesis {
        /// The source line of the opening parenthesis.
        line: usize,
    },
    /// An operator had fewer operands than it needs.
    MissingOperand {
        /// The operator being reduced.
        operator: String,
        /// The source line of the operator.
        line:     usize,
    },
    /// An expression did not reduce to exactly one tree.
    MalformedExpression {
        /// The lexeme that ended the expression.
        found: String,
        /// The source line where the expression ended.
        line:  usize,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    LiteralTooLarge {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Parentheses are nested deeper than the parser allows.
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit: usize,
        /// The source line of the parenthesis that went too deep.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::UnmatchedParenthesis { line }
            | Self::MissingOperand { line, .. }
            | Self::MalformedExpression { line, .. }
            | Self::LiteralTooLarge { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => write!(f,
                                                      "Error on line {line}: Expected {expected} but found '{found}'."),

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::UnmatchedParenthesis { line } => write!(f,
                                                          "Error on line {line}: Unmatched parenthesis, expected closing ')' but none found."),

            Self::MissingOperand { operator, line } => {
                write!(f, "Error on line {line}: Operator '{operator}' is missing an operand.")
            },

            Self::MalformedExpression { found, line } => {
                write!(f, "Error on line {line}: Malformed expression before '{found}'.")
            },

            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },

            Self::NestingTooDeep { limit, line } => {
                write!(f, "Error on line {line}: Parentheses nested more than {limit} deep.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
