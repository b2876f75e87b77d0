/// Core evaluation state.
///
/// Contains the variable store, the evaluation context that owns it together
/// with the output writer, and the result type shared by the evaluator.
pub mod core;

/// Integer expression evaluation.
///
/// Checked 64-bit arithmetic; overflow stops the program.
pub mod integer;

/// Boolean expression evaluation.
///
/// Comparisons and the logical operators. `&&` and `||` always evaluate both
/// operands.
pub mod boolean;

/// Statement execution.
///
/// Runs statement sequences in order against the shared variable store,
/// including loop bodies and conditional branches.
pub mod statement;
