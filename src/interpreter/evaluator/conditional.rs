use crate::{
    ast::{ConditionalCase, Node},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::number::Number,
    },
};

impl Interpreter {
    /// Evaluates an `if` / `elif` / `else` chain.
    ///
    /// Conditions are tried in order. The result of the first arm whose
    /// condition is non-zero is returned and no later condition is
    /// evaluated. If every condition is zero the `else` arm is evaluated;
    /// without one the expression yields no value.
    pub(crate) fn visit_conditions(&mut self,
                                   cases: &[ConditionalCase],
                                   else_case: Option<&Node>)
                                   -> EvalResult<Option<Number>> {
        for case in cases {
            if self.visit_value(&case.condition)?.is_true() {
                return self.visit(&case.result);
            }
        }

        match else_case {
            Some(otherwise) => self.visit(otherwise),
            None => Ok(None),
        }
    }
}
