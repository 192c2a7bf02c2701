//! Text - string wrapper with lexicographic ordering
//!
//! Ordering is by code point, truthiness is "non-empty", hash is the wrapped
//! string's.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Comparable, Truthy};
use crate::error::ArgumentError;

/// String wrapper.
///
/// Orders lexicographically by code point (the same order as `str::cmp`),
/// is truthy when non-empty (`"0"` included) and hashes like the wrapped
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Comparable<str> for Text {
    fn compare(&self, other: &str) -> Result<Ordering, ArgumentError> {
        Ok(self.value.as_str().cmp(other))
    }
}

impl Comparable<String> for Text {
    fn compare(&self, other: &String) -> Result<Ordering, ArgumentError> {
        self.compare(other.as_str())
    }
}

impl Comparable<Text> for Text {
    fn compare(&self, other: &Text) -> Result<Ordering, ArgumentError> {
        self.compare(other.as_str())
    }
}

impl Truthy for Text {
    fn is_truthy(&self) -> bool {
        !self.value.is_empty()
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::cmp_sign;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    #[case("zebra", -1)]
    #[case("aardvark", 1)]
    #[case("foobazzle", 0)]
    fn compares_with_other_value(#[case] other: &str, #[case] expected: i8) {
        let text = Text::new("foobazzle");
        assert_eq!(cmp_sign(text.compare(other).unwrap()), expected);
    }

    #[rstest]
    #[case("zebra", "marv", Ordering::Greater)]
    #[case("aardvark", "marv", Ordering::Less)]
    #[case("Zebra", "apple", Ordering::Less)]
    #[case("marv", "marvin", Ordering::Less)]
    #[case("é", "z", Ordering::Greater)]
    fn ordering_is_by_code_point(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
        let text = Text::new(left);
        assert_eq!(text.compare(right).unwrap(), expected);
        assert_eq!(text.compare(&right.to_string()).unwrap(), expected);
        assert_eq!(text.compare(&Text::new(right)).unwrap(), expected);
        assert_eq!(left.cmp(right), expected);
    }

    #[rstest]
    #[case("hello", true)]
    #[case("", false)]
    #[case("0", true)]
    #[case(" ", true)]
    fn truthy_when_non_empty(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(Text::new(value).is_truthy(), expected);
    }

    #[test]
    fn hashes_like_the_wrapped_string() {
        let value = "foobazzle".to_string();
        assert_eq!(hash_of(&Text::new(value.clone())), hash_of(&value));
    }
}
