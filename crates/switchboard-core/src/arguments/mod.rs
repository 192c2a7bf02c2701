//! Arguments - typed views over a candidate input
//!
//! An argument answers two questions for the rule evaluator:
//! - does it apply to this input at all (`applies`)
//! - which predicates can be tested against a stored threshold (`variables`)
//!
//! # Building blocks
//! - **Argument**: the trait every argument type implements
//! - **Base**: concrete argument with no compatible type and no variables
//! - **Variable / BoundVariable**: registered predicates
//! - **DynArgument**: object-safe facade for heterogeneous collections
//! - **builtin**: ready-made arguments for integers, booleans and strings

pub mod builtin;
pub mod dynamic;
pub mod variable;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ArgumentError;
use crate::input::{Input, InputType};
use crate::variables::VariableValue;

pub use self::builtin::{BooleanArgument, IntegerArgument, StringArgument};
pub use self::dynamic::DynArgument;
pub use self::variable::{BoundVariable, Variable};

/// A typed view over a candidate input.
///
/// # Example
/// ```ignore
/// struct AgeArgument {
///     input: Input,
/// }
///
/// impl AgeArgument {
///     fn age(&self) -> VariableValue {
///         VariableValue::value(self.input.clone())
///     }
/// }
///
/// impl Argument for AgeArgument {
///     const NAME: &'static str = "age";
///     const COMPATIBLE_TYPE: Option<InputType> = Some(InputType::Int);
///     const VARIABLES: &'static [Variable<Self>] = &[Variable::new("age", Self::age)];
///
///     fn input(&self) -> &Input {
///         &self.input
///     }
/// }
/// ```
///
/// # Compatibility
/// `applies` compares the input's runtime type tag with the declared one by
/// identity. There is no widening: an `Int` argument does not apply to a
/// `Bool` or a `Float` input.
pub trait Argument: Sized + 'static {
    /// Name used in logs and errors.
    const NAME: &'static str;

    /// The input type this argument accepts. `None` never applies.
    const COMPATIBLE_TYPE: Option<InputType> = None;

    /// Predicates exposed to the rule evaluator, in order.
    const VARIABLES: &'static [Variable<Self>] = &[];

    fn input(&self) -> &Input;

    /// Compatible type of this instance. Defaults to [`Self::COMPATIBLE_TYPE`].
    fn compatible_type(&self) -> Option<InputType> {
        Self::COMPATIBLE_TYPE
    }

    /// Whether the input's runtime type is exactly the compatible type.
    ///
    /// Evaluated on every call, never cached.
    fn applies(&self) -> bool {
        let actual = self.input().kind();
        let expected = self.compatible_type();
        let applies = expected == Some(actual);
        if !applies {
            tracing::trace!(
                argument = Self::NAME,
                expected = ?expected,
                actual = %actual,
                "argument does not apply"
            );
        }
        applies
    }

    /// The registered predicates, bound to `self`.
    fn variables(&self) -> Vec<BoundVariable<'_, Self>> {
        Self::VARIABLES.iter().map(|v| v.bind(self)).collect()
    }

    /// Looks up a registered predicate by name.
    fn variable(&self, name: &str) -> Result<BoundVariable<'_, Self>, ArgumentError> {
        Self::VARIABLES
            .iter()
            .find(|v| v.name() == name)
            .map(|v| v.bind(self))
            .ok_or_else(|| {
                tracing::debug!(argument = Self::NAME, variable = name, "unknown variable");
                ArgumentError::UnknownVariable {
                    argument: Self::NAME,
                    name: name.to_string(),
                }
            })
    }

    /// Looks up and calls a registered predicate.
    fn evaluate(&self, name: &str) -> Result<VariableValue, ArgumentError> {
        self.variable(name).map(|v| v.call())
    }
}

/// Extra construction settings forwarded to an argument.
///
/// Arguments read what they understand and ignore the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(BTreeMap<String, Input>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Input>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Input> {
        self.0.get(key)
    }

    /// `true` only when `key` is set to a truthy value.
    pub fn flag(&self, key: &str) -> bool {
        use crate::variables::Truthy;

        self.get(key).is_some_and(Truthy::is_truthy)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The base argument: no compatible type, no variables.
///
/// Unlike the built-in arguments, its compatible type and input can be
/// swapped after construction, which is handy when testing evaluators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Base {
    input: Input,
    compatible_type: Option<InputType>,
    options: Options,
}

impl Base {
    pub fn new(input: impl Into<Input>) -> Self {
        Self::with_options(input, Options::new())
    }

    pub fn with_options(input: impl Into<Input>, options: Options) -> Self {
        Self {
            input: input.into(),
            compatible_type: None,
            options,
        }
    }

    pub fn with_compatible_type(mut self, compatible_type: InputType) -> Self {
        self.compatible_type = Some(compatible_type);
        self
    }

    pub fn set_input(&mut self, input: impl Into<Input>) {
        self.input = input.into();
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl Argument for Base {
    const NAME: &'static str = "base";

    fn input(&self) -> &Input {
        &self.input
    }

    fn compatible_type(&self) -> Option<InputType> {
        self.compatible_type
    }
}
