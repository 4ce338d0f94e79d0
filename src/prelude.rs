//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use restli_uri::prelude::*;
//!
//! let widgets = ResourceSpec::parse("/widgets").unwrap();
//! let uri = BuildOptions::default().build(&Request::get(widgets, 1)).unwrap();
//! assert_eq!(uri.as_str(), "widgets/1");
//! ```
//!
//! Codecs, rulesets, and the per-kind table are left out; import them from the
//! crate root when composing custom builders.

pub use crate::{
    // Core types
    AssocKey, ComplexResourceKey, CompoundKey, ParamValue, ProtocolVersion, QueryParams, Record,
    RequestUri, ResourceKey, ResourcePath, Scalar, Value,
    // Requests and building
    BuildOptions, Paging, Request, RequestUriBuilder, ResourceMethod, ResourceSpec, build_uri,
    // Errors
    BuildError, BuildErrorKind, EncodingError, PathError, UnsupportedKindError, VersionError,
};
