//! switchboard-core
//!
//! Argument compatibility and value comparison for feature-switch conditions.
//!
//! # Modules
//! - **input**: the raw candidate value (`Input`) and its runtime type tag
//! - **arguments**: `Argument` trait, `Base`, registered variables, built-ins
//! - **variables**: comparable wrappers (`Value`, `Boolean`, `Text`)
//! - **error**: `ArgumentError`
//!
//! # Flow
//! The rule evaluator wraps an input in an argument, checks `applies()`,
//! then evaluates the argument's variables and compares the results with
//! stored thresholds:
//!
//! ```
//! use std::cmp::Ordering;
//! use switchboard_core::arguments::{Argument, IntegerArgument};
//! use switchboard_core::input::Input;
//! use switchboard_core::variables::Comparable;
//!
//! let argument = IntegerArgument::new(42);
//! assert!(argument.applies());
//!
//! let value = argument.evaluate("value").unwrap();
//! assert_eq!(value.compare(&Input::from(10)).unwrap(), Ordering::Greater);
//! ```

pub mod arguments;
pub mod error;
pub mod input;
pub mod variables;

pub use self::arguments::{Argument, Base, DynArgument, Options, Variable};
pub use self::error::ArgumentError;
pub use self::input::{Input, InputType};
pub use self::variables::{Boolean, Comparable, Text, Truthy, Value, VariableValue};
