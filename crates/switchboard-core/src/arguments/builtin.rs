//! Built-in arguments for the common scalar inputs.
//!
//! Predicates never panic on an input of the wrong kind; they produce a
//! null value or `false`. Callers are expected to check `applies` first.

use super::{Argument, Options, Variable};
use crate::input::{Input, InputType};
use crate::variables::VariableValue;

/// An integer input, e.g. a user id.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerArgument {
    input: Input,
}

impl IntegerArgument {
    pub fn new(input: impl Into<Input>) -> Self {
        Self {
            input: input.into(),
        }
    }

    fn value(&self) -> VariableValue {
        VariableValue::value(self.input.clone())
    }

    fn is_positive(&self) -> VariableValue {
        VariableValue::boolean(self.input.as_int().is_some_and(|i| i > 0))
    }
}

impl Argument for IntegerArgument {
    const NAME: &'static str = "integer";
    const COMPATIBLE_TYPE: Option<InputType> = Some(InputType::Int);
    const VARIABLES: &'static [Variable<Self>] = &[
        Variable::new("value", Self::value),
        Variable::new("is_positive", Self::is_positive),
    ];

    fn input(&self) -> &Input {
        &self.input
    }
}

/// A boolean input, e.g. a user's opt-in flag.
///
/// Its variable is a salted [`crate::variables::Boolean`].
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanArgument {
    input: Input,
}

impl BooleanArgument {
    pub fn new(input: impl Into<Input>) -> Self {
        Self {
            input: input.into(),
        }
    }

    fn value(&self) -> VariableValue {
        VariableValue::boolean(self.input.as_bool().unwrap_or(false))
    }
}

impl Argument for BooleanArgument {
    const NAME: &'static str = "boolean";
    const COMPATIBLE_TYPE: Option<InputType> = Some(InputType::Bool);
    const VARIABLES: &'static [Variable<Self>] = &[Variable::new("value", Self::value)];

    fn input(&self) -> &Input {
        &self.input
    }
}

/// A string input, e.g. a label or a locale.
///
/// # Options
/// - `case_insensitive`: compare the lowercased string
#[derive(Debug, Clone, PartialEq)]
pub struct StringArgument {
    input: Input,
    case_insensitive: bool,
}

impl StringArgument {
    pub fn new(input: impl Into<Input>) -> Self {
        Self::with_options(input, &Options::new())
    }

    pub fn with_options(input: impl Into<Input>, options: &Options) -> Self {
        Self {
            input: input.into(),
            case_insensitive: options.flag("case_insensitive"),
        }
    }

    fn text(&self) -> &str {
        self.input.as_str().unwrap_or_default()
    }

    fn value(&self) -> VariableValue {
        if self.case_insensitive {
            VariableValue::string(self.text().to_lowercase())
        } else {
            VariableValue::string(self.text())
        }
    }

    fn length(&self) -> VariableValue {
        VariableValue::value(self.text().chars().count() as i64)
    }
}

impl Argument for StringArgument {
    const NAME: &'static str = "string";
    const COMPATIBLE_TYPE: Option<InputType> = Some(InputType::Str);
    const VARIABLES: &'static [Variable<Self>] = &[
        Variable::new("value", Self::value),
        Variable::new("length", Self::length),
    ];

    fn input(&self) -> &Input {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::BoundVariable;
    use crate::variables::{Comparable, Truthy};
    use rstest::rstest;
    use serde_json::json;
    use std::cmp::Ordering;

    fn names<A: Argument>(argument: &A) -> Vec<&'static str> {
        argument.variables().iter().map(BoundVariable::name).collect()
    }

    #[rstest]
    #[case(Input::from(9), true)]
    #[case(Input::from(-3), true)]
    #[case(Input::from(9.0), false)]
    #[case(Input::from(true), false)]
    #[case(Input::from("9"), false)]
    #[case(Input::Null, false)]
    fn integer_applies_only_to_ints(#[case] input: Input, #[case] expected: bool) {
        assert_eq!(IntegerArgument::new(input).applies(), expected);
    }

    #[rstest]
    #[case(Input::from(false), true)]
    #[case(Input::from(0), false)]
    #[case(Input::from("true"), false)]
    fn boolean_applies_only_to_bools(#[case] input: Input, #[case] expected: bool) {
        assert_eq!(BooleanArgument::new(input).applies(), expected);
    }

    #[rstest]
    #[case(Input::from(""), true)]
    #[case(Input::from("marv"), true)]
    #[case(Input::from(1), false)]
    #[case(Input::from(json!(["marv"])), false)]
    fn string_applies_only_to_strs(#[case] input: Input, #[case] expected: bool) {
        assert_eq!(StringArgument::new(input).applies(), expected);
    }

    #[test]
    fn variables_are_listed_in_declaration_order() {
        assert_eq!(names(&IntegerArgument::new(1)), vec!["value", "is_positive"]);
        assert_eq!(names(&BooleanArgument::new(true)), vec!["value"]);
        assert_eq!(names(&StringArgument::new("x")), vec!["value", "length"]);
    }

    #[test]
    fn integer_variables_compare_against_thresholds() {
        let argument = IntegerArgument::new(42);

        let value = argument.evaluate("value").unwrap();
        assert_eq!(value.compare(&Input::from(10)).unwrap(), Ordering::Greater);
        assert_eq!(value.compare(&Input::from(42.0)).unwrap(), Ordering::Equal);

        assert!(argument.evaluate("is_positive").unwrap().is_truthy());
        assert!(!IntegerArgument::new(0).evaluate("is_positive").unwrap().is_truthy());
    }

    #[test]
    fn boolean_variable_is_salted() {
        let argument = BooleanArgument::new(true);
        match argument.evaluate("value").unwrap() {
            VariableValue::Boolean(b) => {
                assert!(b.value);
                assert_eq!(b.compare(&true).unwrap(), Ordering::Equal);
            }
            other => panic!("unexpected variable value: {other:?}"),
        }
    }

    #[test]
    fn string_variables() {
        let argument = StringArgument::new("Zebra");
        let value = argument.evaluate("value").unwrap();
        assert_eq!(value.compare(&Input::from("marv")).unwrap(), Ordering::Less);

        let length = argument.evaluate("length").unwrap();
        assert_eq!(length.compare(&Input::from(5)).unwrap(), Ordering::Equal);

        assert!(!StringArgument::new("").evaluate("value").unwrap().is_truthy());
    }

    #[test]
    fn case_insensitive_option_lowercases_the_value() {
        let options = Options::new().with("case_insensitive", true);
        let argument = StringArgument::with_options("Zebra", &options);
        let value = argument.evaluate("value").unwrap();
        assert_eq!(value.compare(&Input::from("marv")).unwrap(), Ordering::Greater);
        assert_eq!(value.compare(&Input::from("zebra")).unwrap(), Ordering::Equal);
    }

    #[test]
    fn predicates_tolerate_inputs_that_do_not_apply() {
        let argument = StringArgument::new(7);
        assert!(!argument.applies());
        assert!(!argument.evaluate("value").unwrap().is_truthy());

        let argument = BooleanArgument::new("yes");
        assert!(!argument.evaluate("value").unwrap().is_truthy());
    }
}
