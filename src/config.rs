//! Build configuration shared across requests.

use crate::error::BuildError;
use crate::request::Request;
use crate::uri::RequestUri;
use crate::uri_builder::RequestUriBuilder;
use crate::version::ProtocolVersion;

/// Options applied to every URI built through them.
///
/// With the `serde` feature the options can be loaded from application
/// configuration; missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use restli_uri::{BuildOptions, ProtocolVersion, Request, ResourceSpec};
///
/// let options = BuildOptions::new()
///     .with_uri_prefix("http://localhost:1338")
///     .with_version(ProtocolVersion::LEGACY);
///
/// let widgets = ResourceSpec::parse("/widgets").unwrap();
/// let uri = options.build(&Request::get(widgets, 1)).unwrap();
/// assert_eq!(uri.as_str(), "http://localhost:1338/widgets/1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildOptions {
    /// Prefix placed before every resource path, unescaped.
    ///
    /// Default: empty
    pub uri_prefix: String,

    /// Protocol version the URIs are encoded under.
    ///
    /// Default: 2.0.0
    pub version: ProtocolVersion,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            uri_prefix: String::new(),
            version: ProtocolVersion::CURRENT,
        }
    }
}

impl BuildOptions {
    /// Creates options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URI prefix.
    #[must_use]
    pub fn with_uri_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.uri_prefix = prefix.into();
        self
    }

    /// Sets the protocol version.
    #[must_use]
    pub const fn with_version(mut self, version: ProtocolVersion) -> Self {
        self.version = version;
        self
    }

    /// Returns a builder for `request` configured with these options.
    #[must_use]
    pub fn builder<'a>(&'a self, request: &'a Request) -> RequestUriBuilder<'a> {
        RequestUriBuilder::new(request, &self.uri_prefix, self.version)
    }

    /// Builds the URI of a request.
    ///
    /// # Errors
    ///
    /// Returns `BuildError` if the request cannot be encoded; see
    /// [`RequestUriBuilder::build`].
    pub fn build(&self, request: &Request) -> Result<RequestUri, BuildError> {
        self.builder(request).build()
    }
}
