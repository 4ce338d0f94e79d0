//! Query parameters attached to a request.

use crate::key::ResourceKey;
use crate::value::{Record, Scalar, Value};

/// The value of one query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A scalar, list, or record value
    Value(Value),
    /// A batch key set, kept in caller order
    Keys(Vec<ResourceKey>),
}

impl ParamValue {
    /// Builds a list parameter value.
    #[must_use]
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Value(Value::list(items))
    }

    /// Builds a batch key set parameter value.
    #[must_use]
    pub fn keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ResourceKey>,
    {
        Self::Keys(keys.into_iter().map(Into::into).collect())
    }
}

macro_rules! param_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(v: $ty) -> Self {
                    Self::Value(Value::from(v))
                }
            }
        )*
    };
}

param_value_from!(Value, Scalar, Record, bool, i32, i64, u32, f64, String, &str);

/// Query parameters of a request, in insertion order.
///
/// Order is significant: entries are emitted exactly as inserted, so two
/// builds of the same request produce byte-identical query strings.
/// Re-inserting a name replaces its value in place.
///
/// # Examples
///
/// ```
/// use restli_uri::QueryParams;
///
/// let params = QueryParams::new().with("z", 1).with("a", 2);
/// let names: Vec<_> = params.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, vec!["z", "a"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParams {
    params: Vec<(String, ParamValue)>,
}

impl QueryParams {
    /// Creates an empty query params instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the params with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a parameter, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.params.push((name, value));
                None
            }
        }
    }

    /// Removes a parameter, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        let idx = self.params.iter().position(|(n, _)| n == name)?;
        Some(self.params.remove(idx).1)
    }

    /// Returns the value for a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns the scalar value for a parameter, if it holds one.
    #[must_use]
    pub fn get_scalar(&self, name: &str) -> Option<&Scalar> {
        match self.get(name)? {
            ParamValue::Value(Value::Scalar(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns true if the parameter is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns true if the query is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Appends every parameter of `other`, replacing values of names already present.
    pub fn extend(&mut self, other: &QueryParams) {
        for (name, value) in other.iter() {
            self.insert(name, value.clone());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl From<Record> for QueryParams {
    fn from(record: Record) -> Self {
        record
            .iter()
            .map(|(name, value)| (name, value.clone()))
            .collect()
    }
}
