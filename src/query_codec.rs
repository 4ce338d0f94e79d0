//! Version-aware encoding of query parameters.

use crate::constants::MAX_QUERY_PARAM_DEPTH;
use crate::error::EncodingError;
use crate::escape::escape;
use crate::key::ResourceKey;
use crate::key_codec::KeyCodec;
use crate::query::{ParamValue, QueryParams};
use crate::ruleset::{KeyEmbedding, ListStyle, NestingStyle, Ruleset};
use crate::value::{Record, Value};

/// Encodes query parameters into ordered `(name, value)` entries.
///
/// # Examples
///
/// ```
/// use restli_uri::{ParamValue, ProtocolVersion, QueryParamCodec, QueryParams};
///
/// let params = QueryParams::new().with("fields", ParamValue::list(["a", "b"]));
///
/// let current = QueryParamCodec::new(ProtocolVersion::CURRENT.ruleset());
/// let entries = current.encode_params(&params).unwrap();
/// assert_eq!(QueryParamCodec::to_query_string(&entries), "fields=a,b");
///
/// let legacy = QueryParamCodec::new(ProtocolVersion::LEGACY.ruleset());
/// let entries = legacy.encode_params(&params).unwrap();
/// assert_eq!(QueryParamCodec::to_query_string(&entries), "fields[]=a&fields[]=b");
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamCodec {
    keys: KeyCodec,
}

impl QueryParamCodec {
    /// Creates a codec bound to a ruleset.
    #[must_use]
    pub const fn new(rules: &'static Ruleset) -> Self {
        Self {
            keys: KeyCodec::new(rules),
        }
    }

    /// Returns the ruleset in use.
    #[must_use]
    pub const fn rules(&self) -> &'static Ruleset {
        self.keys.rules()
    }

    /// Encodes every parameter, preserving insertion order.
    ///
    /// Empty lists, empty records, and empty key sets produce no entry.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError` if a value nests deeper than one level or a
    /// scalar or key cannot be encoded.
    pub fn encode_params(&self, params: &QueryParams) -> Result<Vec<(String, String)>, EncodingError> {
        let mut entries = Vec::with_capacity(params.len());
        for (name, value) in params.iter() {
            self.encode_param(name, value, &mut entries)?;
        }
        Ok(entries)
    }

    /// Encodes a single parameter, appending its entries.
    ///
    /// # Errors
    ///
    /// See [`QueryParamCodec::encode_params`].
    pub fn encode_param(
        &self,
        name: &str,
        value: &ParamValue,
        entries: &mut Vec<(String, String)>,
    ) -> Result<(), EncodingError> {
        match value {
            ParamValue::Value(v) => self.encode_value(name, v, entries),
            ParamValue::Keys(keys) => self.encode_keys(name, keys, entries),
        }
    }

    /// Joins encoded entries into a query string without the leading `?`.
    #[must_use]
    pub fn to_query_string(entries: &[(String, String)]) -> String {
        entries
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn encode_value(
        &self,
        name: &str,
        value: &Value,
        entries: &mut Vec<(String, String)>,
    ) -> Result<(), EncodingError> {
        if value.depth() > MAX_QUERY_PARAM_DEPTH {
            return Err(EncodingError::NestingTooDeep {
                param: name.to_string(),
                max: MAX_QUERY_PARAM_DEPTH,
            });
        }

        let escaped_name = escape(name, self.rules().param_name_set);
        match value {
            Value::Scalar(s) => entries.push((escaped_name, self.keys.encode_scalar(s)?)),
            Value::List(items) => {
                let mut encoded = Vec::with_capacity(items.len());
                for item in items {
                    if let Value::Scalar(s) = item {
                        encoded.push(self.keys.encode_scalar(s)?);
                    }
                }
                self.push_list(&escaped_name, encoded, entries);
            }
            Value::Record(record) => self.encode_record(&escaped_name, record, entries)?,
        }
        Ok(())
    }

    fn encode_record(
        &self,
        escaped_name: &str,
        record: &Record,
        entries: &mut Vec<(String, String)>,
    ) -> Result<(), EncodingError> {
        if record.is_empty() {
            return Ok(());
        }
        match self.rules().nesting() {
            NestingStyle::Dotted => {
                for (field, value) in record.iter() {
                    if let Value::Scalar(s) = value {
                        let field = escape(field, self.rules().param_name_set);
                        entries.push((format!("{escaped_name}.{field}"), self.keys.encode_scalar(s)?));
                    }
                }
            }
            NestingStyle::Wrapped => {
                entries.push((escaped_name.to_string(), self.keys.encode_record(record)?));
            }
        }
        Ok(())
    }

    fn encode_keys(
        &self,
        name: &str,
        keys: &[ResourceKey],
        entries: &mut Vec<(String, String)>,
    ) -> Result<(), EncodingError> {
        let mut encoded = Vec::with_capacity(keys.len());
        for key in keys {
            let key = self.keys.encode(key)?;
            encoded.push(match self.rules().key_embedding() {
                KeyEmbedding::Escaped => escape(&key, self.rules().value_set),
                KeyEmbedding::Verbatim => key,
            });
        }
        self.push_list(&escape(name, self.rules().param_name_set), encoded, entries);
        Ok(())
    }

    /// Appends already-encoded items under one name in the ruleset's list style.
    pub(crate) fn push_list(&self, escaped_name: &str, items: Vec<String>, entries: &mut Vec<(String, String)>) {
        if items.is_empty() {
            return;
        }
        match self.rules().list_style() {
            ListStyle::Repeated { suffix } => {
                let name = format!("{escaped_name}{suffix}");
                entries.extend(items.into_iter().map(|item| (name.clone(), item)));
            }
            ListStyle::Joined { delimiter } => {
                let mut buf = [0u8; 4];
                let delimiter: &str = delimiter.encode_utf8(&mut buf);
                entries.push((escaped_name.to_string(), items.join(delimiter)));
            }
        }
    }
}
