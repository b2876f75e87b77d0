#[derive(Debug)]
/// Represents all errors that can occur while a program runs.
///
/// Reading a variable that was never assigned is not an error; it yields zero.
pub enum RuntimeError {
    /// Arithmetic operation overflowed a 64-bit signed integer.
    Overflow {
        /// The line of the statement being executed.
        line: usize,
    },
    /// Writing `print` output failed.
    Output {
        /// The underlying I/O failure.
        source: std::io::Error,
        /// The line of the `print` statement.
        line:   usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Overflow { line } | Self::Output { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::Output { source, line } => {
                write!(f, "Error on line {line}: Failed to write output: {source}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Overflow { .. } => None,
            Self::Output { source, .. } => Some(source),
        }
    }
}
