use std::io::Write;

use tracing::trace;

use crate::{
    ast::Statement,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<W: Write> Context<W> {
    /// Executes a sequence of statements in order.
    ///
    /// This is used for the whole program as well as for loop bodies and
    /// conditional branches; all of them share this context's store, so an
    /// assignment is visible to every statement after it.
    ///
    /// # Errors
    /// Stops at and returns the first `RuntimeError`.
    ///
    /// # Example
    /// ```
    /// use imp::{
    ///     ast::{IExpr, Statement},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut output = Vec::<u8>::new();
    /// let mut context = Context::new(&mut output);
    /// context.execute(&[Statement::Assign { name:  "x".to_string(),
    ///                                       value: IExpr::Const(5),
    ///                                       line:  1, },
    ///                   Statement::Print { value: IExpr::Var("x".to_string()),
    ///                                      line:  2, }])
    ///        .unwrap();
    ///
    /// assert_eq!(context.state.get("x"), 5);
    /// drop(context);
    /// assert_eq!(output, b"5\n");
    /// ```
    pub fn execute(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            self.execute_statement(statement)?;
        }
        Ok(())
    }

    /// Executes one statement.
    ///
    /// - `skip` does nothing.
    /// - An assignment evaluates its value and overwrites the variable.
    /// - `print` writes the value and a newline to the output.
    /// - `while` re-checks its condition before every iteration and runs the
    ///   body while it holds. There is no iteration limit.
    /// - `if` evaluates its condition once and runs exactly one branch.
    ///
    /// # Errors
    /// Returns `Overflow` from expression evaluation or `Output` if writing
    /// fails.
    pub fn execute_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        trace!(line = statement.line(), "executing statement");

        match statement {
            Statement::Skip { .. } => {},
            Statement::Assign { name, value, line } => {
                let value = self.eval_iexpr(value, *line)?;
                self.state.set(name, value);
            },
            Statement::Print { value, line } => {
                let value = self.eval_iexpr(value, *line)?;
                self.emit(value, *line)?;
            },
            Statement::While { condition,
                               body,
                               line, } => {
                while self.eval_bexpr(condition, *line)? {
                    self.execute(body)?;
                }
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            line, } => {
                if self.eval_bexpr(condition, *line)? {
                    self.execute(then_branch)?;
                } else {
                    self.execute(else_branch)?;
                }
            },
        }

        Ok(())
    }
}
