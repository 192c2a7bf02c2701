//! Input model: the raw candidate value an argument wraps.
//!
//! The rule evaluator hands arguments whatever it has at hand (a user id, a
//! flag, a label, a decoded JSON document). `Input` carries that value
//! together with a runtime type tag (`InputType`) so that arguments can gate
//! on it without knowing the concrete Rust type at compile time.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::variables::Truthy;

/// Runtime type tag of an [`Input`].
///
/// Compatibility checks compare tags by identity: `Bool` is not `Int` and
/// `Int` is not `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Null,
    Bool,
    Int,
    Float,
    Str,
    List,
    Map,
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputType::Null => "null",
            InputType::Bool => "bool",
            InputType::Int => "int",
            InputType::Float => "float",
            InputType::Str => "str",
            InputType::List => "list",
            InputType::Map => "map",
        };
        f.write_str(name)
    }
}

/// A dynamically typed candidate value.
///
/// Serialized untagged, so any JSON document maps onto it directly.
///
/// Equality and ordering follow the numeric tower of the values being
/// wrapped: `Int(1) == Float(1.0)`. Values of other differing kinds are
/// unequal and unordered (`partial_cmp` returns `None`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Input {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Input>),
    Map(BTreeMap<String, Input>),
}

impl Input {
    /// Runtime type tag of this value.
    pub fn kind(&self) -> InputType {
        match self {
            Input::Null => InputType::Null,
            Input::Bool(_) => InputType::Bool,
            Input::Int(_) => InputType::Int,
            Input::Float(_) => InputType::Float,
            Input::Str(_) => InputType::Str,
            Input::List(_) => InputType::List,
            Input::Map(_) => InputType::Map,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Input::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Input::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Input::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Input::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up `key` when this is a map.
    pub fn get(&self, key: &str) -> Option<&Input> {
        match self {
            Input::Map(map) => map.get(key),
            _ => None,
        }
    }
}

/// 2^63, the first float above the `i64` range. `-2^63` is `i64::MIN` exactly.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Integral floats hash like the matching `Int` so that `Int(1) == Float(1.0)`
/// keeps the `Hash`/`PartialEq` contract. Same range as [`cmp_int_float`].
fn integral(f: f64) -> Option<i64> {
    if f.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

/// Exact comparison of an integer with a float, without rounding the integer.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if f < -I64_BOUND {
        return Some(Ordering::Greater);
    }
    // in range, so the floor converts to i64 exactly
    let floor = f.floor();
    match i.cmp(&(floor as i64)) {
        Ordering::Equal if f > floor => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

impl PartialEq for Input {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Input {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Input::Null, Input::Null) => Some(Ordering::Equal),
            (Input::Bool(a), Input::Bool(b)) => a.partial_cmp(b),
            (Input::Int(a), Input::Int(b)) => a.partial_cmp(b),
            (Input::Float(a), Input::Float(b)) => a.partial_cmp(b),
            (Input::Int(a), Input::Float(b)) => cmp_int_float(*a, *b),
            (Input::Float(a), Input::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            (Input::Str(a), Input::Str(b)) => a.partial_cmp(b),
            (Input::List(a), Input::List(b)) => a.partial_cmp(b),
            (Input::Map(a), Input::Map(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl Hash for Input {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Input::Null => state.write_u8(0),
            Input::Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            }
            Input::Int(i) => {
                state.write_u8(2);
                i.hash(state);
            }
            Input::Float(f) => match integral(*f) {
                Some(i) => {
                    state.write_u8(2);
                    i.hash(state);
                }
                None => {
                    state.write_u8(3);
                    f.to_bits().hash(state);
                }
            },
            Input::Str(s) => {
                state.write_u8(4);
                s.hash(state);
            }
            Input::List(items) => {
                state.write_u8(5);
                items.hash(state);
            }
            Input::Map(map) => {
                state.write_u8(6);
                map.hash(state);
            }
        }
    }
}

impl Truthy for Input {
    fn is_truthy(&self) -> bool {
        match self {
            Input::Null => false,
            Input::Bool(b) => *b,
            Input::Int(i) => *i != 0,
            Input::Float(f) => *f != 0.0,
            Input::Str(s) => !s.is_empty(),
            Input::List(items) => !items.is_empty(),
            Input::Map(map) => !map.is_empty(),
        }
    }
}

impl From<bool> for Input {
    fn from(value: bool) -> Self {
        Input::Bool(value)
    }
}

impl From<i64> for Input {
    fn from(value: i64) -> Self {
        Input::Int(value)
    }
}

impl From<i32> for Input {
    fn from(value: i32) -> Self {
        Input::Int(value.into())
    }
}

impl From<u32> for Input {
    fn from(value: u32) -> Self {
        Input::Int(value.into())
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input::Float(value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Str(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Str(value)
    }
}

impl From<Vec<Input>> for Input {
    fn from(value: Vec<Input>) -> Self {
        Input::List(value)
    }
}

impl From<BTreeMap<String, Input>> for Input {
    fn from(value: BTreeMap<String, Input>) -> Self {
        Input::Map(value)
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Null, Into::into)
    }
}

impl From<serde_json::Value> for Input {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Input::Null,
            Json::Bool(b) => Input::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Input::Int(i),
                // u64 above i64::MAX and real numbers
                None => Input::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Input::Str(s),
            Json::Array(items) => Input::List(items.into_iter().map(Input::from).collect()),
            Json::Object(map) => {
                Input::Map(map.into_iter().map(|(k, v)| (k, Input::from(v))).collect())
            }
        }
    }
}
