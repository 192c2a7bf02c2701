//! DynArgument - object-safe view of an [`Argument`]
//!
//! `Argument` has associated consts and returns `Self`-typed bound variables,
//! so it cannot be a trait object. `DynArgument` erases those types so an
//! evaluator can keep `Vec<Box<dyn DynArgument>>` of unrelated arguments.
//! Every `Argument + Send + Sync` gets it for free.

use super::Argument;
use crate::error::ArgumentError;
use crate::variables::VariableValue;

pub trait DynArgument: Send + Sync {
    fn argument_name(&self) -> &'static str;

    fn applies_dyn(&self) -> bool;

    fn variable_names(&self) -> Vec<&'static str>;

    fn evaluate_dyn(&self, variable: &str) -> Result<VariableValue, ArgumentError>;
}

impl<A: Argument + Send + Sync> DynArgument for A {
    fn argument_name(&self) -> &'static str {
        A::NAME
    }

    fn applies_dyn(&self) -> bool {
        self.applies()
    }

    fn variable_names(&self) -> Vec<&'static str> {
        A::VARIABLES.iter().map(|v| v.name()).collect()
    }

    fn evaluate_dyn(&self, variable: &str) -> Result<VariableValue, ArgumentError> {
        self.evaluate(variable)
    }
}

/// Boxes an argument behind [`DynArgument`].
pub fn erase<A: Argument + Send + Sync>(argument: A) -> Box<dyn DynArgument> {
    Box::new(argument)
}
