/// The evaluator module executes parsed programs.
///
/// The evaluator walks the statement tree, evaluates integer and boolean
/// expressions, keeps the variable store and writes `print` output. It is the
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Runs statements in program order against a single mutable store.
/// - Implements loop and branch semantics.
/// - Reports runtime faults such as integer overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens for
/// operators, keywords, variables and integer literals, each tagged with its
/// source line. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Recognizes keywords, identifiers and integer literals.
/// - Reports lexical errors for characters no rule accepts.
pub mod lexer;
/// The parser module builds the abstract syntax tree from tokens.
///
/// Statements are parsed by recursive descent; integer and boolean
/// expressions by the shunting-yard algorithm with an explicit operator
/// stack.
///
/// # Responsibilities
/// - Converts tokens into statement and expression nodes.
/// - Validates the grammar, reporting errors with the expected and actual
///   token and its line.
pub mod parser;
