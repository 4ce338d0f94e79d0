//! Association keys with a declared field order.

use std::collections::BTreeMap;

use crate::value::Scalar;

/// A possibly partial set of association key values.
///
/// The field order is fixed by the resource declaration, so the encoded form
/// does not depend on the order in which values were supplied. Fields left
/// unset are skipped, which lets collection requests address a prefix range.
///
/// # Examples
///
/// ```
/// use restli_uri::AssocKey;
///
/// let key = AssocKey::new(["color", "size"]).with("size", 10).with("color", "red");
/// let names: Vec<_> = key.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, vec!["color", "size"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssocKey {
    declared: Vec<String>,
    values: BTreeMap<String, Scalar>,
}

impl AssocKey {
    /// Creates an empty association key with the declared field order.
    pub fn new<I, S>(declared: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            declared: declared.into_iter().map(Into::into).collect(),
            values: BTreeMap::new(),
        }
    }

    /// Returns the key with its values kept and the field order replaced.
    #[must_use]
    pub fn with_declared<I, S>(mut self, declared: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared = declared.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the key with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a value, returning the previous one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        self.values.insert(name.into(), value.into())
    }

    /// Removes a value, returning it if it was set.
    pub fn remove(&mut self, name: &str) -> Option<Scalar> {
        self.values.remove(name)
    }

    /// Returns the value of a field, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.values.get(name)
    }

    /// Returns the declared field names in order.
    #[must_use]
    pub fn declared(&self) -> &[String] {
        &self.declared
    }

    /// Returns true if no value is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if every declared field has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.declared.iter().all(|name| self.values.contains_key(name))
    }

    /// Iterates over set values in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.declared
            .iter()
            .filter_map(|name| self.values.get(name).map(|v| (name.as_str(), v)))
    }

    /// Returns the first set field the declaration does not name.
    #[must_use]
    pub fn undeclared(&self) -> Option<&str> {
        self.values
            .keys()
            .find(|name| !self.declared.iter().any(|d| d == *name))
            .map(String::as_str)
    }
}
