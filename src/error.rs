/// Lexing errors.
///
/// Raised when the source text contains a character that no lexical rule
/// accepts.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning the token stream into
/// a program: unexpected tokens, missing terminator keywords, unmatched
/// parentheses, malformed expressions and unrepresentable literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the faults that can stop a running program: integer overflow and
/// failure to write output.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any error raised by the lexing, parsing and evaluation pipeline.
///
/// Each stage runs until its first error and stops; this type lets
/// [`crate::run`] propagate whichever stage failed with `?`.
pub enum Error {
    /// The lexer rejected a character.
    Lex(LexError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// The program faulted while running.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
