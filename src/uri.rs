//! The finished request URI.

use std::cmp::Ordering;
use std::fmt;

use crate::version::ProtocolVersion;

/// A built request URI.
///
/// Carries the protocol version it was encoded under so the transport can
/// announce it in the protocol version header.
///
/// # Examples
///
/// ```
/// use restli_uri::{BuildOptions, Paging, Request, ResourceSpec};
///
/// let widgets = ResourceSpec::parse("/widgets").unwrap();
/// let uri = BuildOptions::default()
///     .build(&Request::get_all(widgets).with_paging(Paging::new(0, 10)))
///     .unwrap();
/// assert_eq!(uri.as_str(), "widgets?start=0&count=10");
/// assert_eq!(uri.path(), "widgets");
/// assert_eq!(uri.query(), Some("start=0&count=10"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestUri {
    /// Full URI text
    normalized: String,
    /// Byte offset of the `?`, if there is a query
    query_start: Option<usize>,
    version: ProtocolVersion,
}

impl RequestUri {
    /// Assembles a URI from an encoded path and encoded query entries.
    pub(crate) fn new(path: String, query: &str, version: ProtocolVersion) -> Self {
        if query.is_empty() {
            return Self {
                normalized: path,
                query_start: None,
                version,
            };
        }
        let query_start = path.len();
        let mut normalized = path;
        normalized.push('?');
        normalized.push_str(query);
        Self {
            normalized,
            query_start: Some(query_start),
            version,
        }
    }

    /// Returns the full URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns the part before the `?`.
    #[must_use]
    pub fn path(&self) -> &str {
        match self.query_start {
            Some(idx) => &self.normalized[..idx],
            None => &self.normalized,
        }
    }

    /// Returns the part after the `?`, if there is a query.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query_start.map(|idx| &self.normalized[idx + 1..])
    }

    /// Returns the protocol version the URI was encoded under.
    #[must_use]
    pub const fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Consumes the URI, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.normalized
    }
}

impl fmt::Display for RequestUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl AsRef<str> for RequestUri {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl From<RequestUri> for String {
    fn from(uri: RequestUri) -> Self {
        uri.normalized
    }
}

impl PartialOrd for RequestUri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RequestUri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized
            .cmp(&other.normalized)
            .then(self.version.cmp(&other.version))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RequestUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_query() {
        let uri = RequestUri::new("widgets/1".to_string(), "", ProtocolVersion::CURRENT);
        assert_eq!(uri.as_str(), "widgets/1");
        assert_eq!(uri.path(), "widgets/1");
        assert!(uri.query().is_none());
    }

    #[test]
    fn with_query() {
        let uri = RequestUri::new("widgets".to_string(), "ids=1,2", ProtocolVersion::CURRENT);
        assert_eq!(uri.as_str(), "widgets?ids=1,2");
        assert_eq!(uri.path(), "widgets");
        assert_eq!(uri.query(), Some("ids=1,2"));
        assert_eq!(uri.to_string(), "widgets?ids=1,2");
        assert_eq!(String::from(uri), "widgets?ids=1,2");
    }

    #[test]
    fn ordering_by_text() {
        let a = RequestUri::new("a".to_string(), "", ProtocolVersion::CURRENT);
        let b = RequestUri::new("b".to_string(), "", ProtocolVersion::LEGACY);
        assert!(a < b);
        let mut uris = vec![b.clone(), a.clone()];
        uris.sort();
        assert_eq!(uris, vec![a, b]);
    }

    #[test]
    fn carries_version() {
        let uri = RequestUri::new("a".to_string(), "", ProtocolVersion::LEGACY);
        assert_eq!(uri.version(), ProtocolVersion::LEGACY);
        assert_eq!(uri.into_string(), "a");
    }
}
