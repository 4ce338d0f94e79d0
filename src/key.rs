//! Resource keys: simple, compound, and complex.

use crate::value::{Record, Scalar, Value};

/// The key addressing one entity of a resource.
///
/// # Examples
///
/// ```
/// use restli_uri::{CompoundKey, ResourceKey};
///
/// let simple = ResourceKey::from(42);
/// assert!(simple.is_simple());
///
/// let compound = ResourceKey::from(CompoundKey::new().with("memberId", 1).with("groupId", 7));
/// assert!(!compound.is_simple());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceKey {
    /// A single scalar
    Simple(Scalar),
    /// Named fields, as used by association resources
    Compound(CompoundKey),
    /// A structured key with an optional params part
    Complex(ComplexResourceKey),
}

impl ResourceKey {
    /// Returns true for a simple scalar key.
    #[must_use]
    pub const fn is_simple(&self) -> bool {
        matches!(self, Self::Simple(_))
    }

    /// Returns the scalar of a simple key.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Simple(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Scalar> for ResourceKey {
    fn from(s: Scalar) -> Self {
        Self::Simple(s)
    }
}

impl From<CompoundKey> for ResourceKey {
    fn from(k: CompoundKey) -> Self {
        Self::Compound(k)
    }
}

impl From<ComplexResourceKey> for ResourceKey {
    fn from(k: ComplexResourceKey) -> Self {
        Self::Complex(k)
    }
}

macro_rules! simple_key_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ResourceKey {
                fn from(v: $ty) -> Self {
                    Self::Simple(Scalar::from(v))
                }
            }
        )*
    };
}

simple_key_from!(bool, i32, i64, u32, f64, String, &str);

/// A key made of named fields.
///
/// Field order is irrelevant: fields are always emitted sorted by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundKey {
    fields: Record,
}

impl CompoundKey {
    /// Creates a compound key with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the key with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name, value);
        self
    }

    /// Sets a field, returning the previous value.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name, value)
    }

    /// Returns a field value, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the fields as a record.
    #[must_use]
    pub const fn fields(&self) -> &Record {
        &self.fields
    }
}

impl From<Record> for CompoundKey {
    fn from(fields: Record) -> Self {
        Self { fields }
    }
}

/// A structured key with a key part and an optional params part.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexResourceKey {
    key: Record,
    params: Option<Record>,
}

impl ComplexResourceKey {
    /// Creates a complex key without params.
    #[must_use]
    pub const fn new(key: Record) -> Self {
        Self { key, params: None }
    }

    /// Returns the key with the given params part.
    #[must_use]
    pub fn with_params(mut self, params: Record) -> Self {
        self.params = Some(params);
        self
    }

    /// Returns the key part.
    #[must_use]
    pub const fn key(&self) -> &Record {
        &self.key
    }

    /// Returns the params part, if one was supplied.
    #[must_use]
    pub const fn params(&self) -> Option<&Record> {
        self.params.as_ref()
    }
}
