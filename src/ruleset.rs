//! Encoding rulesets, one per protocol generation.
//!
//! Every version-dependent token lives in one of the two tables below. The
//! codecs read the table they are handed and never test the version
//! themselves, so a single build can never mix the two rule generations.

use std::fmt;

use percent_encoding::AsciiSet;

use crate::escape::{CURRENT_VALUE, DOTTED_PARAM_NAME, LEGACY_NAME, LEGACY_VALUE, PARAM_NAME};
use crate::version::ProtocolVersion;

/// How a multi-valued query parameter is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// One `name<suffix>=value` entry per item
    Repeated {
        /// Appended to the parameter name, e.g. `[]`
        suffix: &'static str,
    },
    /// A single `name=v1<delimiter>v2` entry
    Joined {
        /// Item delimiter
        delimiter: char,
    },
}

/// How a record nested inside a key or query parameter is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestingStyle {
    /// Flattened into dotted names: `outer.inner=value`
    Dotted,
    /// Encoded in place as a wrapped compound value
    Wrapped,
}

/// How an encoded key is placed inside a query parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEmbedding {
    /// Escaped once more so its delimiters cannot split the query
    Escaped,
    /// Copied as encoded
    Verbatim,
}

/// A table of the tokens and layouts one protocol generation uses.
pub struct Ruleset {
    pub(crate) version: ProtocolVersion,
    pub(crate) key_value_delimiter: char,
    pub(crate) pair_delimiter: char,
    pub(crate) wrap: Option<(char, char)>,
    pub(crate) empty_string: &'static str,
    pub(crate) nesting: NestingStyle,
    pub(crate) list_style: ListStyle,
    pub(crate) key_embedding: KeyEmbedding,
    pub(crate) value_set: &'static AsciiSet,
    pub(crate) name_set: &'static AsciiSet,
    pub(crate) param_name_set: &'static AsciiSet,
}

/// Rules for protocol `1.x`.
static LEGACY: Ruleset = Ruleset {
    version: ProtocolVersion::LEGACY,
    key_value_delimiter: '=',
    pair_delimiter: '&',
    wrap: None,
    empty_string: "",
    nesting: NestingStyle::Dotted,
    list_style: ListStyle::Repeated { suffix: "[]" },
    key_embedding: KeyEmbedding::Escaped,
    value_set: LEGACY_VALUE,
    name_set: LEGACY_NAME,
    param_name_set: DOTTED_PARAM_NAME,
};

/// Rules for protocol `2.x` and later.
static CURRENT: Ruleset = Ruleset {
    version: ProtocolVersion::CURRENT,
    key_value_delimiter: ':',
    pair_delimiter: ',',
    wrap: Some(('(', ')')),
    empty_string: "''",
    nesting: NestingStyle::Wrapped,
    list_style: ListStyle::Joined { delimiter: ',' },
    key_embedding: KeyEmbedding::Verbatim,
    value_set: CURRENT_VALUE,
    name_set: CURRENT_VALUE,
    param_name_set: PARAM_NAME,
};

impl Ruleset {
    /// Returns the legacy ruleset.
    #[must_use]
    pub fn legacy() -> &'static Self {
        &LEGACY
    }

    /// Returns the current ruleset.
    #[must_use]
    pub fn current() -> &'static Self {
        &CURRENT
    }

    /// Selects the ruleset for a protocol version.
    #[must_use]
    pub fn for_version(version: ProtocolVersion) -> &'static Self {
        if version >= ProtocolVersion::CURRENT {
            &CURRENT
        } else {
            &LEGACY
        }
    }

    /// Returns the version that introduced this ruleset.
    #[must_use]
    pub const fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Returns true for the current ruleset.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.version >= ProtocolVersion::CURRENT
    }

    /// Returns the delimiter between a field name and its value.
    #[must_use]
    pub const fn key_value_delimiter(&self) -> char {
        self.key_value_delimiter
    }

    /// Returns the delimiter between name/value pairs.
    #[must_use]
    pub const fn pair_delimiter(&self) -> char {
        self.pair_delimiter
    }

    /// Returns the layout of multi-valued query parameters.
    #[must_use]
    pub const fn list_style(&self) -> ListStyle {
        self.list_style
    }

    /// Returns the layout of nested records.
    #[must_use]
    pub const fn nesting(&self) -> NestingStyle {
        self.nesting
    }

    /// Returns how keys are placed inside query values.
    #[must_use]
    pub const fn key_embedding(&self) -> KeyEmbedding {
        self.key_embedding
    }

    /// Joins pre-encoded `name`/`value` pairs and wraps them per the ruleset.
    pub(crate) fn join_pairs<I>(&self, pairs: I) -> String
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut out = String::new();
        if let Some((open, _)) = self.wrap {
            out.push(open);
        }
        for (i, (name, value)) in pairs.into_iter().enumerate() {
            if i > 0 {
                out.push(self.pair_delimiter);
            }
            out.push_str(&name);
            out.push(self.key_value_delimiter);
            out.push_str(&value);
        }
        if let Some((_, close)) = self.wrap {
            out.push(close);
        }
        out
    }
}

impl fmt::Debug for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ruleset")
            .field("version", &self.version)
            .field("key_value_delimiter", &self.key_value_delimiter)
            .field("pair_delimiter", &self.pair_delimiter)
            .field("wrap", &self.wrap)
            .field("empty_string", &self.empty_string)
            .field("nesting", &self.nesting)
            .field("list_style", &self.list_style)
            .field("key_embedding", &self.key_embedding)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Ruleset {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
    }
}

impl Eq for Ruleset {}
