//! Encoding of scalars, resource keys, and association keys.

use crate::assoc_key::AssocKey;
use crate::constants::COMPLEX_KEY_PARAMS;
use crate::error::EncodingError;
use crate::escape::escape;
use crate::key::{ComplexResourceKey, ResourceKey};
use crate::ruleset::{NestingStyle, Ruleset};
use crate::value::{Record, Scalar, Value};

/// Encodes keys into their URI form under one ruleset.
///
/// # Examples
///
/// ```
/// use restli_uri::{CompoundKey, KeyCodec, ProtocolVersion, ResourceKey};
///
/// let key = ResourceKey::from(CompoundKey::new().with("groupId", 7).with("memberId", 1));
///
/// let current = KeyCodec::new(ProtocolVersion::CURRENT.ruleset());
/// assert_eq!(current.encode(&key).unwrap(), "(groupId:7,memberId:1)");
///
/// let legacy = KeyCodec::new(ProtocolVersion::LEGACY.ruleset());
/// assert_eq!(legacy.encode(&key).unwrap(), "groupId=7&memberId=1");
/// ```
#[derive(Debug, Clone)]
pub struct KeyCodec {
    rules: &'static Ruleset,
}

impl KeyCodec {
    /// Creates a codec bound to a ruleset.
    #[must_use]
    pub const fn new(rules: &'static Ruleset) -> Self {
        Self { rules }
    }

    /// Returns the ruleset in use.
    #[must_use]
    pub const fn rules(&self) -> &'static Ruleset {
        self.rules
    }

    /// Encodes a scalar into its escaped canonical string.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::NonFiniteFloat` for NaN and infinities.
    pub fn encode_scalar(&self, scalar: &Scalar) -> Result<String, EncodingError> {
        if !scalar.is_representable() {
            return Err(EncodingError::NonFiniteFloat {
                value: scalar.to_string(),
            });
        }
        match scalar {
            Scalar::String(s) if s.is_empty() => Ok(self.rules.empty_string.to_string()),
            Scalar::String(s) => Ok(escape(s, self.rules.value_set)),
            other => Ok(other.to_string()),
        }
    }

    /// Encodes a resource key.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError` if a field holds a list, a compound key is
    /// empty, a complex key uses the reserved params name, or a scalar cannot
    /// be represented.
    pub fn encode(&self, key: &ResourceKey) -> Result<String, EncodingError> {
        match key {
            ResourceKey::Simple(s) => self.encode_scalar(s),
            ResourceKey::Compound(k) => {
                if k.is_empty() {
                    return Err(EncodingError::EmptyKey);
                }
                self.encode_record(k.fields())
            }
            ResourceKey::Complex(k) => self.encode_complex(k),
        }
    }

    /// Encodes an association key in declared field order.
    ///
    /// An empty key encodes to the empty string; callers omit the surrounding
    /// syntax in that case.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::UndeclaredAssocField` if a value is set for a
    /// field the resource does not declare.
    pub fn encode_assoc_key(&self, key: &AssocKey) -> Result<String, EncodingError> {
        if let Some(field) = key.undeclared() {
            return Err(EncodingError::UndeclaredAssocField {
                field: field.to_string(),
            });
        }
        if key.is_empty() {
            return Ok(String::new());
        }

        let mut pairs = Vec::new();
        for (name, value) in key.iter() {
            pairs.push((self.encode_name(name), self.encode_scalar(value)?));
        }
        Ok(self.rules.join_pairs(pairs))
    }

    fn encode_complex(&self, key: &ComplexResourceKey) -> Result<String, EncodingError> {
        if key.key().contains(COMPLEX_KEY_PARAMS) {
            return Err(EncodingError::ReservedName {
                name: COMPLEX_KEY_PARAMS.to_string(),
            });
        }
        if key.key().is_empty() {
            return Err(EncodingError::EmptyKey);
        }

        match key.params().filter(|p| !p.is_empty()) {
            Some(params) => {
                let merged = key
                    .key()
                    .clone()
                    .with(COMPLEX_KEY_PARAMS, Value::Record(params.clone()));
                self.encode_record(&merged)
            }
            None => self.encode_record(key.key()),
        }
    }

    /// Encodes a record as a compound value; fields come out sorted by name.
    pub(crate) fn encode_record(&self, record: &Record) -> Result<String, EncodingError> {
        let mut pairs = Vec::with_capacity(record.len());
        match self.rules.nesting {
            NestingStyle::Wrapped => {
                for (name, value) in record.iter() {
                    let encoded = match value {
                        Value::Scalar(s) => self.encode_scalar(s)?,
                        Value::Record(nested) if nested.is_empty() => {
                            return Err(EncodingError::EmptyRecord {
                                field: name.to_string(),
                            });
                        }
                        Value::Record(nested) => {
                            escape(&self.encode_record(nested)?, self.rules.value_set)
                        }
                        Value::List(_) => {
                            return Err(EncodingError::ListInKey {
                                field: name.to_string(),
                            });
                        }
                    };
                    pairs.push((self.encode_name(name), encoded));
                }
            }
            NestingStyle::Dotted => self.flatten("", record, &mut pairs)?,
        }
        Ok(self.rules.join_pairs(pairs))
    }

    fn flatten(
        &self,
        prefix: &str,
        record: &Record,
        pairs: &mut Vec<(String, String)>,
    ) -> Result<(), EncodingError> {
        for (name, value) in record.iter() {
            let escaped = self.encode_name(name);
            let path = if prefix.is_empty() {
                escaped
            } else {
                format!("{prefix}.{escaped}")
            };
            match value {
                Value::Scalar(s) => pairs.push((path, self.encode_scalar(s)?)),
                Value::Record(nested) if nested.is_empty() => {
                    return Err(EncodingError::EmptyRecord {
                        field: name.to_string(),
                    });
                }
                Value::Record(nested) => self.flatten(&path, nested, pairs)?,
                Value::List(_) => {
                    return Err(EncodingError::ListInKey {
                        field: name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Escapes one field name; under dotted nesting `.` is escaped too.
    fn encode_name(&self, name: &str) -> String {
        escape(name, self.rules.name_set)
    }
}
