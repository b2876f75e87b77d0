use crate::{
    ast::BExpr,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<W> Context<W> {
    /// Evaluates a boolean expression against the current store.
    ///
    /// Both operands of `&&` and `||` are always evaluated, so an overflow on
    /// the right-hand side is reported even when the left side decides the
    /// result.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `line`: Line of the enclosing statement, for error reporting.
    ///
    /// # Errors
    /// Propagates `RuntimeError::Overflow` from compared integer expressions.
    pub fn eval_bexpr(&self, expr: &BExpr, line: usize) -> EvalResult<bool> {
        match expr {
            BExpr::True => Ok(true),
            BExpr::False => Ok(false),
            BExpr::Equal(left, right) => {
                Ok(self.eval_iexpr(left, line)? == self.eval_iexpr(right, line)?)
            },
            BExpr::LessEqual(left, right) => {
                Ok(self.eval_iexpr(left, line)? <= self.eval_iexpr(right, line)?)
            },
            BExpr::Not(operand) => Ok(!self.eval_bexpr(operand, line)?),
            BExpr::Or(left, right) => {
                let left = self.eval_bexpr(left, line)?;
                let right = self.eval_bexpr(right, line)?;
                Ok(left || right)
            },
            BExpr::And(left, right) => {
                let left = self.eval_bexpr(left, line)?;
                let right = self.eval_bexpr(right, line)?;
                Ok(left && right)
            },
        }
    }
}
