//! Variables - comparable wrappers handed to the rule evaluator
//!
//! Every wrapper implements the same three capabilities:
//! - [`Comparable`]: three-way ordered comparison that fails loudly when the
//!   operands have no ordering relationship
//! - [`std::hash::Hash`]
//! - [`Truthy`]: boolean conversion
//!
//! [`Value`] passes all three through to the wrapped payload. [`Boolean`]
//! replaces the hash with a salt, and [`Text`] orders lexicographically and
//! is truthy when non-empty.

pub mod boolean;
pub mod string;
pub mod value;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::error::ArgumentError;
use crate::input::Input;

pub use self::boolean::{Boolean, HashSalt};
pub use self::string::Text;
pub use self::value::Value;

/// Three-way ordered comparison against `Rhs`.
///
/// Unlike `PartialOrd`, a missing ordering is an error rather than `None`,
/// so a condition cannot silently treat "uncomparable" as "not greater".
pub trait Comparable<Rhs: ?Sized = Self> {
    fn compare(&self, other: &Rhs) -> Result<Ordering, ArgumentError>;
}

/// Boolean conversion of a value.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

/// The classic `-1 / 0 / 1` form of an [`Ordering`].
pub fn cmp_sign(ordering: Ordering) -> i8 {
    ordering as i8
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_numbers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

truthy_numbers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// The result of evaluating an argument variable.
///
/// Type-erased over the three wrapper kinds so that arguments with different
/// payloads can sit behind the same evaluator interface.
#[derive(Debug, Clone)]
pub enum VariableValue {
    Value(Value<Input>),
    Boolean(Boolean),
    String(Text),
}

impl VariableValue {
    pub fn value(value: impl Into<Input>) -> Self {
        Self::Value(Value::new(value.into()))
    }

    /// A salted boolean; see [`Boolean::new`].
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(Boolean::new(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(Text::new(value))
    }
}

impl Comparable<Input> for VariableValue {
    /// Compares against a stored condition threshold.
    fn compare(&self, threshold: &Input) -> Result<Ordering, ArgumentError> {
        match (self, threshold) {
            (VariableValue::Value(v), _) => v.compare(threshold),
            (VariableValue::Boolean(b), Input::Bool(t)) => b.compare(t),
            (VariableValue::String(s), Input::Str(t)) => s.compare(t.as_str()),
            (VariableValue::Boolean(b), _) => Err(ArgumentError::uncomparable(b.value, threshold)),
            (VariableValue::String(s), _) => Err(ArgumentError::uncomparable(&s.value, threshold)),
        }
    }
}

impl Truthy for VariableValue {
    fn is_truthy(&self) -> bool {
        match self {
            VariableValue::Value(v) => v.is_truthy(),
            VariableValue::Boolean(b) => b.is_truthy(),
            VariableValue::String(s) => s.is_truthy(),
        }
    }
}

impl Hash for VariableValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            VariableValue::Value(v) => v.hash(state),
            VariableValue::Boolean(b) => b.hash(state),
            VariableValue::String(s) => s.hash(state),
        }
    }
}

impl From<Value<Input>> for VariableValue {
    fn from(value: Value<Input>) -> Self {
        Self::Value(value)
    }
}

impl From<Boolean> for VariableValue {
    fn from(value: Boolean) -> Self {
        Self::Boolean(value)
    }
}

impl From<Text> for VariableValue {
    fn from(value: Text) -> Self {
        Self::String(value)
    }
}
