//! Typed values carried by keys and query parameters.

use std::collections::BTreeMap;
use std::fmt;

/// A single scalar value.
///
/// # Examples
///
/// ```
/// use restli_uri::Scalar;
///
/// assert_eq!(Scalar::from(42).to_string(), "42");
/// assert_eq!(Scalar::from(true).to_string(), "true");
/// assert_eq!(Scalar::from("red").to_string(), "red");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Boolean, rendered `true`/`false`
    Bool(bool),
    /// Signed integer, rendered in decimal
    Int(i64),
    /// Floating point, rendered in shortest round-trip decimal form
    Float(f64),
    /// Text
    String(String),
}

impl Scalar {
    /// Returns the string if this is a `String` scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true unless this is a NaN or infinite float.
    #[must_use]
    pub fn is_representable(&self) -> bool {
        match self {
            Self::Float(x) => x.is_finite(),
            _ => true,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

scalar_from! {
    bool => Bool,
    i32 => Int,
    i64 => Int,
    u32 => Int,
    f64 => Float,
    String => String,
    &str => String,
}

impl From<f32> for Scalar {
    /// Widens through the shortest decimal form, so `0.1f32` stays `0.1`.
    fn from(v: f32) -> Self {
        Self::Float(v.to_string().parse().unwrap_or_else(|_| f64::from(v)))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Scalar(Scalar::from(v))
    }
}

/// A value: a scalar, a list, or a record of named values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single scalar
    Scalar(Scalar),
    /// An ordered list
    List(Vec<Value>),
    /// A record of named values
    Record(Record),
}

impl Value {
    /// Builds a list value from anything convertible to values.
    #[must_use]
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns the scalar if this value is one.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns how many levels of list or record wrap the deepest scalar.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Scalar(_) => 0,
            Self::List(items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
            Self::Record(record) => 1 + record.values().map(Value::depth).max().unwrap_or(0),
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Self::Record(r)
    }
}

/// A record of named values, kept sorted by field name.
///
/// # Examples
///
/// ```
/// use restli_uri::Record;
///
/// let record = Record::new().with("size", 10).with("color", "red");
/// let names: Vec<_> = record.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, vec!["color", "size"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns true if the field is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over field values in name order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
