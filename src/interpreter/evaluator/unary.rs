use crate::{
    ast::{Node, UnaryOperator},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{number::Number, numeric::Numeric},
    },
    util::position::Span,
};

impl Interpreter {
    /// Evaluates a prefix operator applied to `operand`.
    ///
    /// - `+` returns the operand unchanged.
    /// - `-` multiplies the operand by `-1`.
    /// - `ulta` yields `1` if the operand is zero and `0` otherwise.
    ///
    /// A failing operand propagates its error unchanged.
    pub(crate) fn visit_unary_op(&mut self,
                                 op: UnaryOperator,
                                 operand: &Node,
                                 span: Span)
                                 -> EvalResult<Number> {
        let operand = self.visit_value(operand)?;
        Ok(Number::new(Self::eval_unary(op, operand.value), span))
    }

    /// Applies a prefix operator to a number.
    ///
    /// # Example
    /// ```
    /// use soch::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::numeric::Numeric},
    /// };
    ///
    /// assert_eq!(Interpreter::eval_unary(UnaryOperator::Negate, Numeric::Int(5)),
    ///            Numeric::Int(-5));
    /// assert_eq!(Interpreter::eval_unary(UnaryOperator::Not, Numeric::Float(0.0)),
    ///            Numeric::Int(1));
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: Numeric) -> Numeric {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => value.multiply(Numeric::Int(-1)),
            UnaryOperator::Not => (!value.is_true()).into(),
        }
    }
}
