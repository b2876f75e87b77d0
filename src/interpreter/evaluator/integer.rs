use crate::{
    ast::IExpr,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<W> Context<W> {
    /// Evaluates an integer expression against the current store.
    ///
    /// Variables that were never assigned read as zero. Arithmetic is checked:
    /// a result outside the range of `i64` is an error rather than a
    /// wrapped value.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `line`: Line of the enclosing statement, for error reporting.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` if any operation overflows.
    ///
    /// # Example
    /// ```
    /// use imp::{ast::IExpr, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::new(std::io::sink());
    /// context.state.set("x", 4);
    ///
    /// let expr = IExpr::Times(Box::new(IExpr::Var("x".to_string())), Box::new(IExpr::Const(3)));
    /// assert_eq!(context.eval_iexpr(&expr, 1).unwrap(), 12);
    /// ```
    pub fn eval_iexpr(&self, expr: &IExpr, line: usize) -> EvalResult<i64> {
        let overflow = || RuntimeError::Overflow { line };

        match expr {
            IExpr::Const(value) => Ok(*value),
            IExpr::Var(name) => Ok(self.state.get(name)),
            IExpr::Plus(left, right) => {
                self.eval_iexpr(left, line)?
                    .checked_add(self.eval_iexpr(right, line)?)
                    .ok_or_else(overflow)
            },
            IExpr::Minus(left, right) => {
                self.eval_iexpr(left, line)?
                    .checked_sub(self.eval_iexpr(right, line)?)
                    .ok_or_else(overflow)
            },
            IExpr::Times(left, right) => {
                self.eval_iexpr(left, line)?
                    .checked_mul(self.eval_iexpr(right, line)?)
                    .ok_or_else(overflow)
            },
        }
    }
}
