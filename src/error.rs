//! Error types for request URI building.

use std::fmt;

use crate::request::ResourceMethod;

/// Errors raised when a value cannot be represented under a ruleset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// A list appeared where a key only admits scalars or records
    ListInKey {
        /// Name of the offending field
        field: String,
    },
    /// A compound or complex key has no fields
    EmptyKey,
    /// A float is NaN or infinite
    NonFiniteFloat {
        /// The textual form of the value
        value: String,
    },
    /// An association key value was supplied for a field the resource does not declare
    UndeclaredAssocField {
        /// The undeclared field name
        field: String,
    },
    /// A name collides with one the protocol reserves
    ReservedName {
        /// The reserved name
        name: String,
    },
    /// A record nested inside a key has no fields
    EmptyRecord {
        /// Name of the offending field
        field: String,
    },
    /// A structured query parameter nests deeper than allowed
    NestingTooDeep {
        /// Name of the query parameter
        param: String,
        /// Maximum allowed depth
        max: usize,
    },
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListInKey { field } => {
                write!(
                    f,
                    "field '{field}' holds a list; keys admit only scalars and records"
                )
            }
            Self::EmptyKey => write!(f, "compound key must have at least one field"),
            Self::NonFiniteFloat { value } => {
                write!(f, "float value {value} has no canonical string form")
            }
            Self::UndeclaredAssocField { field } => {
                write!(
                    f,
                    "association key field '{field}' is not declared by the resource"
                )
            }
            Self::ReservedName { name } => {
                write!(f, "name '{name}' is reserved by the protocol")
            }
            Self::EmptyRecord { field } => {
                write!(f, "field '{field}' holds an empty record, which has no key form")
            }
            Self::NestingTooDeep { param, max } => {
                write!(
                    f,
                    "query parameter '{param}' nests deeper than {max} level; flatten the value"
                )
            }
        }
    }
}

impl std::error::Error for EncodingError {}

/// Errors raised while assembling a resource path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The template could not be parsed
    InvalidTemplate {
        /// The template text
        template: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// The number of supplied path keys differs from the parameterized segments
    ArityMismatch {
        /// Number of parameterized segments in the template
        expected: usize,
        /// Number of keys supplied
        actual: usize,
    },
    /// A compound or complex key was supplied for a simple path position
    IncompatibleKey {
        /// Name of the path key
        name: String,
        /// Index of the path key among the parameterized segments
        index: usize,
    },
    /// A scalar path key could not be encoded
    InvalidKey {
        /// Name of the path key
        name: String,
        /// Underlying encoding failure
        reason: EncodingError,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTemplate { template, reason } => {
                write!(f, "invalid path template '{template}': {reason}")
            }
            Self::ArityMismatch { expected, actual } => {
                write!(
                    f,
                    "path template has {expected} key segments but {actual} keys were supplied"
                )
            }
            Self::IncompatibleKey { name, index } => {
                write!(
                    f,
                    "path key '{name}' at index {index} must be a simple key"
                )
            }
            Self::InvalidKey { name, reason } => {
                write!(f, "path key '{name}' cannot be encoded: {reason}")
            }
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidKey { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// No builder is registered for a request kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedKindError {
    /// The request kind without a builder
    pub method: ResourceMethod,
}

impl fmt::Display for UnsupportedKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no URI builder registered for request kind '{}'", self.method)
    }
}

impl std::error::Error for UnsupportedKindError {}

/// Errors for protocol version parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionError {
    /// The input that failed to parse
    pub input: String,
    /// Reason for invalidity
    pub reason: &'static str,
}

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid protocol version '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for VersionError {}

/// Errors that can occur when building a request URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    /// The kind of request being built
    pub method: ResourceMethod,
    /// The specific error that occurred
    pub kind: BuildErrorKind,
}

/// Specific build error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildErrorKind {
    /// A key or parameter could not be encoded
    Encoding(EncodingError),
    /// The resource path could not be assembled
    Path(PathError),
    /// No builder exists for the request kind
    UnsupportedKind(UnsupportedKindError),
    /// The request lacks a component its kind requires
    MissingComponent {
        /// Name of the missing component
        component: &'static str,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to build {} request URI: ", self.method)?;
        match &self.kind {
            BuildErrorKind::Encoding(e) => write!(f, "{e}"),
            BuildErrorKind::Path(e) => write!(f, "{e}"),
            BuildErrorKind::UnsupportedKind(e) => write!(f, "{e}"),
            BuildErrorKind::MissingComponent { component } => {
                write!(f, "missing required component: {component}")
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BuildErrorKind::Encoding(e) => Some(e),
            BuildErrorKind::Path(e) => Some(e),
            BuildErrorKind::UnsupportedKind(e) => Some(e),
            BuildErrorKind::MissingComponent { .. } => None,
        }
    }
}

impl BuildError {
    /// Returns true if the failure came from key or parameter encoding.
    #[must_use]
    pub const fn is_encoding(&self) -> bool {
        matches!(self.kind, BuildErrorKind::Encoding(_))
    }

    /// Returns true if the failure came from path assembly.
    #[must_use]
    pub const fn is_path(&self) -> bool {
        matches!(self.kind, BuildErrorKind::Path(_))
    }
}

impl From<EncodingError> for BuildErrorKind {
    fn from(e: EncodingError) -> Self {
        Self::Encoding(e)
    }
}

impl From<PathError> for BuildErrorKind {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

impl From<UnsupportedKindError> for BuildErrorKind {
    fn from(e: UnsupportedKindError) -> Self {
        Self::UnsupportedKind(e)
    }
}
