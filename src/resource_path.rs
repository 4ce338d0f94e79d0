//! Resource path templates.

use std::fmt;
use std::str::FromStr;

use crate::error::PathError;
use crate::path_segment::PathSegment;

/// A parsed resource path template such as `/widgets/{widgetId}/parts`.
///
/// Leading and trailing slashes are ignored; the normalized form has neither.
///
/// # Examples
///
/// ```
/// use restli_uri::ResourcePath;
///
/// let path = ResourcePath::parse("/widgets/{widgetId}/parts").unwrap();
/// assert_eq!(path.segments().len(), 3);
/// assert_eq!(path.key_count(), 1);
/// assert_eq!(path.key_names().collect::<Vec<_>>(), vec!["widgetId"]);
/// assert_eq!(path.as_str(), "widgets/{widgetId}/parts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    segments: Vec<PathSegment>,
    /// Normalized template text
    normalized: String,
}

impl ResourcePath {
    /// Parses a path template.
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidTemplate` if:
    /// - The template has no segments
    /// - Any segment is empty, has unbalanced braces, or names an empty key
    /// - A literal segment contains a character outside the path grammar
    pub fn parse(template: &str) -> Result<Self, PathError> {
        let invalid = |reason| PathError::InvalidTemplate {
            template: template.to_string(),
            reason,
        };

        let trimmed = template.trim_matches('/');
        if trimmed.is_empty() {
            return Err(invalid("template has no segments"));
        }

        let segments = trimmed
            .split('/')
            .map(PathSegment::parse)
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;

        Ok(Self {
            segments,
            normalized: trimmed.to_string(),
        })
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the key names in template order.
    pub fn key_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(PathSegment::key_name)
    }

    /// Returns the number of key segments.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.key_names().count()
    }

    /// Returns the normalized template.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl FromStr for ResourcePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ResourcePath {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}
