use crate::Record;

/// A dynamically typed value carried by records, queries and service
/// results.
///
/// Mirrors the JSON data model, except that objects are [`Record`]s so that
/// they can carry population annotations.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Integer or floating point number
    Number(serde_json::Number),

    /// String value
    String(String),

    /// An ordered list of values
    List(Vec<Value>),

    /// A keyed record
    Record(Record),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(v) => v.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => v.as_f64(),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(&items[..]),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_record(&self) -> &Record {
        match self {
            Self::Record(record) => record,
            _ => panic!("expected record; actual={self:#?}"),
        }
    }

    #[track_caller]
    pub fn expect_record_mut(&mut self) -> &mut Record {
        match self {
            Self::Record(record) => record,
            _ => panic!("expected record"),
        }
    }

    #[track_caller]
    pub fn expect_list(&self) -> &[Value] {
        match self {
            Self::List(items) => items,
            _ => panic!("expected list; actual={self:#?}"),
        }
    }

    /// Takes the value out, leaving `Null` in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

macro_rules! impl_from_int {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for Value {
                fn from(src: $t) -> Self {
                    Self::Number(src.into())
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl From<f64> for Value {
    /// Non-finite floats have no JSON representation and become `Null`.
    fn from(src: f64) -> Self {
        serde_json::Number::from_f64(src)
            .map(Self::Number)
            .unwrap_or(Self::Null)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Record> for Value {
    fn from(src: Record) -> Self {
        Self::Record(src)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(src: Vec<T>) -> Self {
        Self::List(src.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
