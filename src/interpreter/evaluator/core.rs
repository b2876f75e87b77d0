use std::{collections::HashMap, io::Write};

use crate::error::RuntimeError;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The variable store of a running program.
///
/// Maps variable names to their current values. A variable that was never
/// assigned reads as zero.
///
/// # Example
/// ```
/// use imp::interpreter::evaluator::core::State;
///
/// let mut state = State::new();
/// assert_eq!(state.get("x"), 0);
///
/// state.set("x", 7);
/// assert_eq!(state.get("x"), 7);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct State {
    variables: HashMap<String, i64>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `name`, or zero if it was never assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> i64 {
        self.variables.get(name).copied().unwrap_or(0)
    }

    /// Stores `value` under `name`, replacing any previous value.
    pub fn set(&mut self, name: &str, value: i64) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Number of variables assigned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over assigned variables in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// Stores the runtime evaluation context.
///
/// `Context` is created once per program run. It owns the variable store,
/// which every statement, loop iteration and branch reads and mutates in
/// place, and the writer that receives `print` output.
pub struct Context<W> {
    /// The variable store.
    pub state: State,
    output:    W,
}

impl<W: Write> Context<W> {
    /// Creates a context with an empty store writing to `output`.
    #[must_use]
    pub fn new(output: W) -> Self {
        Self { state: State::new(),
               output }
    }

    /// Gives up the context, returning the final variable store.
    #[must_use]
    pub fn into_state(self) -> State {
        self.state
    }

    /// Writes one line of program output.
    pub(in crate::interpreter::evaluator) fn emit(&mut self,
                                                  value: i64,
                                                  line: usize)
                                                  -> EvalResult<()> {
        writeln!(self.output, "{value}").map_err(|source| RuntimeError::Output { source, line })
    }
}
