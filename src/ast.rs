use std::fmt;

/// An integer expression.
///
/// Every node owns its sub-expressions, so an expression is always a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IExpr {
    /// An integer literal.
    Const(i64),
    /// Reference to a variable by name.
    Var(String),
    /// `left + right`
    Plus(Box<Self>, Box<Self>),
    /// `left - right`
    Minus(Box<Self>, Box<Self>),
    /// `left * right`
    Times(Box<Self>, Box<Self>),
}

/// A boolean expression.
///
/// Integer expressions only appear inside the two comparison variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BExpr {
    /// `true`
    True,
    /// `false`
    False,
    /// `left = right`
    Equal(IExpr, IExpr),
    /// `left <= right`
    LessEqual(IExpr, IExpr),
    /// `!operand`
    Not(Box<Self>),
    /// `left || right`
    Or(Box<Self>, Box<Self>),
    /// `left && right`
    And(Box<Self>, Box<Self>),
}

/// A statement of an IMP program.
///
/// Each variant carries the line of its first token so that runtime faults
/// can point back at the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `skip`
    Skip {
        /// Line number in the source code.
        line: usize,
    },
    /// `name := value`
    Assign {
        /// The variable being assigned.
        name:  String,
        /// The value to store.
        value: IExpr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print value`
    Print {
        /// The value to print.
        value: IExpr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `while condition do body od`
    While {
        /// Checked before every iteration.
        condition: BExpr,
        /// Statements run while the condition holds.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `if condition then then_branch else else_branch fi`
    If {
        /// Evaluated exactly once.
        condition:   BExpr,
        /// Statements run when the condition is true.
        then_branch: Vec<Self>,
        /// Statements run when the condition is false.
        else_branch: Vec<Self>,
        /// Line number in the source code.
        line:        usize,
    },
}

impl Statement {
    /// Returns the line of the statement's first token.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Skip { line }
            | Self::Assign { line, .. }
            | Self::Print { line, .. }
            | Self::While { line, .. }
            | Self::If { line, .. } => *line,
        }
    }
}

/// A parsed program: a non-empty sequence of statements in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The top-level statements.
    pub statements: Vec<Statement>,
}

// Rendering back to source. Binary operations are fully parenthesised so the
// output re-parses to the same tree shape.

impl fmt::Display for IExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(value) => write!(f, "{value}"),
            Self::Var(name) => write!(f, "{name}"),
            Self::Plus(left, right) => write!(f, "({left} + {right})"),
            Self::Minus(left, right) => write!(f, "({left} - {right})"),
            Self::Times(left, right) => write!(f, "({left} * {right})"),
        }
    }
}

impl fmt::Display for BExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Equal(left, right) => write!(f, "({left} = {right})"),
            Self::LessEqual(left, right) => write!(f, "({left} <= {right})"),
            Self::Not(operand) => write!(f, "!{operand}"),
            Self::Or(left, right) => write!(f, "({left} || {right})"),
            Self::And(left, right) => write!(f, "({left} && {right})"),
        }
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, statements: &[Statement], depth: usize) -> fmt::Result {
    for (i, statement) in statements.iter().enumerate() {
        write_statement(f, statement, depth)?;
        if i + 1 < statements.len() {
            write!(f, ";")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

fn write_statement(f: &mut fmt::Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    let indent = "    ".repeat(depth);
    match statement {
        Statement::Skip { .. } => write!(f, "{indent}skip"),
        Statement::Assign { name, value, .. } => write!(f, "{indent}{name} := {value}"),
        Statement::Print { value, .. } => write!(f, "{indent}print {value}"),
        Statement::While { condition, body, .. } => {
            writeln!(f, "{indent}while {condition} do")?;
            write_block(f, body, depth + 1)?;
            write!(f, "{indent}od")
        },
        Statement::If { condition,
                        then_branch,
                        else_branch,
                        .. } => {
            writeln!(f, "{indent}if {condition} then")?;
            write_block(f, then_branch, depth + 1)?;
            writeln!(f, "{indent}else")?;
            write_block(f, else_branch, depth + 1)?;
            write!(f, "{indent}fi")
        },
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(f, &self.statements, 0)
    }
}
