//! Segments of a resource path template.

use std::fmt;

/// One segment of a resource path template.
///
/// # Examples
///
/// ```
/// use restli_uri::PathSegment;
///
/// let seg = PathSegment::parse("{widgetId}").unwrap();
/// assert_eq!(seg.key_name(), Some("widgetId"));
///
/// let seg = PathSegment::parse("widgets").unwrap();
/// assert!(seg.is_literal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Copied verbatim into the path
    Literal(String),
    /// Replaced by the next path key; holds the key name
    Key(String),
}

impl PathSegment {
    /// Parses one template segment.
    ///
    /// # Errors
    ///
    /// Returns the reason the segment is invalid:
    /// - The segment is empty
    /// - Braces are unbalanced or nested
    /// - A key segment has an empty name
    /// - A literal contains a character outside the path grammar
    pub fn parse(input: &str) -> Result<Self, &'static str> {
        if input.is_empty() {
            return Err("empty segment");
        }

        if let Some(inner) = input.strip_prefix('{') {
            let name = inner.strip_suffix('}').ok_or("unbalanced braces")?;
            if name.contains(['{', '}']) {
                return Err("unbalanced braces");
            }
            if name.is_empty() {
                return Err("empty key name");
            }
            return Ok(Self::Key(name.to_string()));
        }

        if input.contains(['{', '}']) {
            return Err("unbalanced braces");
        }
        if !input.chars().all(Self::is_valid_char) {
            return Err("literal segment contains a character outside the path grammar");
        }
        Ok(Self::Literal(input.to_string()))
    }

    /// Returns true for a literal segment.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns the key name of a key segment.
    #[must_use]
    pub fn key_name(&self) -> Option<&str> {
        match self {
            Self::Key(name) => Some(name),
            Self::Literal(_) => None,
        }
    }

    /// Returns true if the character may appear unescaped in a literal segment.
    #[must_use]
    pub const fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric()
            || matches!(
                c,
                '-' | '.' | '_' | '~' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ','
                    | ';' | '=' | ':' | '@' | '%'
            )
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => write!(f, "{s}"),
            Self::Key(name) => write!(f, "{{{name}}}"),
        }
    }
}
