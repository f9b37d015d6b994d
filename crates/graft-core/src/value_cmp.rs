//! Comparisons between [`Value`]s and Rust primitives, and the ordering used
//! by range predicates.

use crate::Value;

use std::cmp::Ordering;

impl Value {
    /// Orders two values of the same kind.
    ///
    /// Numbers compare numerically (integers exactly, otherwise as `f64`),
    /// strings lexicographically and booleans `false < true`. Values of
    /// different kinds, lists and records are unordered.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Number(lhs), Value::Number(rhs)) => {
                if let (Some(lhs), Some(rhs)) = (lhs.as_i64(), rhs.as_i64()) {
                    return Some(lhs.cmp(&rhs));
                }
                if let (Some(lhs), Some(rhs)) = (lhs.as_u64(), rhs.as_u64()) {
                    return Some(lhs.cmp(&rhs));
                }
                lhs.as_f64()?.partial_cmp(&rhs.as_f64()?)
            }
            (Value::String(lhs), Value::String(rhs)) => Some(lhs.cmp(rhs)),
            (Value::Bool(lhs), Value::Bool(rhs)) => Some(lhs.cmp(rhs)),
            _ => None,
        }
    }

    /// Equality as used by query matching: numbers are equal when they
    /// compare equal, regardless of integer/float representation.
    pub fn loosely_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(_), Value::Number(_)) => {
                self.compare(other) == Some(Ordering::Equal)
            }
            _ => self == other,
        }
    }
}

/// Macro to implement PartialEq for numeric types
macro_rules! impl_value_eq_num {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    self.loosely_eq(&Value::from(*other))
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    other.eq(self)
                }
            }
        )*
    };
}

impl_value_eq_num!(i32, i64, u32, u64, usize);

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(val) if val == other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        matches!(self, Value::String(val) if val == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Value::String(val) if val == other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::String(val) if val == other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other.eq(self)
    }
}
