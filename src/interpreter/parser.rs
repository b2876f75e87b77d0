/// Parser entry point.
///
/// Turns a whole token stream into a [`crate::ast::Program`] and checks that
/// nothing follows it.
pub mod core;

/// Statement sequences.
///
/// Parses `Stmt (';' Stmt)*`, the shape shared by the top-level program, loop
/// bodies and both branches of a conditional.
pub mod block;

/// Statement parsing.
///
/// Recursive descent over the five statement forms, descending into the
/// expression parsers for operands and into [`block`] for nested bodies.
pub mod statement;

/// Operator precedence and reduction.
///
/// The shunting-yard machinery shared by the integer and boolean expression
/// parsers: the precedence table, the pending-operator stack discipline and
/// the reductions that build tree nodes.
pub mod operator;

/// Integer expressions.
///
/// Shunting-yard parsing of `+`, `-`, `*`, literals, variables and
/// parenthesised sub-expressions.
pub mod integer;

/// Boolean expressions.
///
/// Shunting-yard parsing of `&&`, `||`, `!`, `true`, `false`, comparisons and
/// parenthesised sub-expressions.
pub mod boolean;

/// Token cursor helpers shared by the parsers.
pub mod utils;
