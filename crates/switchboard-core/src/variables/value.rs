//! Value - pass-through wrapper
//!
//! `Value<T>` adds no semantics of its own. It exists so that arguments can
//! hand the evaluator a uniform comparable type whatever they wrap.

use std::cmp::Ordering;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use super::{Comparable, Truthy};
use crate::error::ArgumentError;

/// Generic wrapper delegating comparison, hash and truthiness to `T`.
///
/// For any `v` and `w`:
/// - `Value::new(v).compare(&w)` is `v.partial_cmp(&w)` (`None` becomes
///   [`ArgumentError::Uncomparable`])
/// - `hash(Value::new(v)) == hash(v)`
/// - `Value::new(v).is_truthy() == v.is_truthy()`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value<T> {
    pub value: T,
}

impl<T> Value<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: PartialOrd + Debug> Comparable<T> for Value<T> {
    fn compare(&self, other: &T) -> Result<Ordering, ArgumentError> {
        self.value
            .partial_cmp(other)
            .ok_or_else(|| ArgumentError::uncomparable(&self.value, other))
    }
}

impl<T: PartialOrd + Debug> Comparable<Value<T>> for Value<T> {
    fn compare(&self, other: &Value<T>) -> Result<Ordering, ArgumentError> {
        self.compare(&other.value)
    }
}

impl<T: Truthy> Truthy for Value<T> {
    fn is_truthy(&self) -> bool {
        self.value.is_truthy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Input;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    /// Records every call the wrapper makes into it.
    #[derive(Debug, Default)]
    struct Probe {
        id: u32,
        compared_with: RefCell<Vec<u32>>,
        hashes: Cell<usize>,
        truthy_calls: Cell<usize>,
    }

    impl Probe {
        fn new(id: u32) -> Self {
            Self {
                id,
                ..Default::default()
            }
        }
    }

    impl PartialEq for Probe {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl PartialOrd for Probe {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.compared_with.borrow_mut().push(other.id);
            self.id.partial_cmp(&other.id)
        }
    }

    impl Hash for Probe {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.hashes.set(self.hashes.get() + 1);
            self.id.hash(state);
        }
    }

    impl Truthy for Probe {
        fn is_truthy(&self) -> bool {
            self.truthy_calls.set(self.truthy_calls.get() + 1);
            self.id != 0
        }
    }

    #[test]
    fn delegates_every_operation_to_the_wrapped_value_once() {
        let value = Value::new(Probe::new(7));
        let operand = Probe::new(3);

        assert_eq!(value.compare(&operand).unwrap(), Ordering::Greater);
        assert_eq!(*value.value.compared_with.borrow(), vec![3]);

        let _ = hash_of(&value);
        assert_eq!(value.value.hashes.get(), 1);

        assert!(value.is_truthy());
        assert_eq!(value.value.truthy_calls.get(), 1);
    }

    #[test]
    fn compares_against_another_wrapper() {
        let left = Value::new(Probe::new(1));
        let right = Value::new(Probe::new(2));

        assert_eq!(left.compare(&right).unwrap(), Ordering::Less);
        assert_eq!(*left.value.compared_with.borrow(), vec![2]);
    }

    #[rstest]
    #[case(Input::from("marv"))]
    #[case(Input::from(42))]
    #[case(Input::from(true))]
    #[case(Input::from(vec![Input::from(1), Input::from("a")]))]
    fn matches_the_wrapped_value(#[case] input: Input) {
        let value = Value::new(input.clone());

        assert_eq!(value.compare(&input).unwrap(), Ordering::Equal);
        assert_eq!(hash_of(&value), hash_of(&input));
        assert_eq!(value.is_truthy(), input.is_truthy());
    }

    #[test]
    fn native_payloads_hash_like_themselves() {
        assert_eq!(hash_of(&Value::new("marv")), hash_of("marv"));
        assert_eq!(hash_of(&Value::new(9_u64)), hash_of(&9_u64));
    }

    #[test]
    fn missing_ordering_is_an_error() {
        let err = Value::new(f64::NAN).compare(&1.0).unwrap_err();
        assert!(matches!(err, ArgumentError::Uncomparable { .. }));

        let err = Value::new(Input::from(1)).compare(&Input::from("1")).unwrap_err();
        assert_eq!(err.to_string(), r#"cannot compare Int(1) with Str("1")"#);
    }
}
