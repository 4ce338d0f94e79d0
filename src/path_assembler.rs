//! Base path assembly from a template and path keys.

use tracing::trace;

use crate::error::PathError;
use crate::key::ResourceKey;
use crate::key_codec::KeyCodec;
use crate::path_segment::PathSegment;
use crate::resource_path::ResourcePath;
use crate::ruleset::Ruleset;

/// Substitutes path keys into a template and prepends the URI prefix.
///
/// # Examples
///
/// ```
/// use restli_uri::{PathAssembler, ProtocolVersion, ResourceKey, ResourcePath};
///
/// let path = ResourcePath::parse("/widgets/{widgetId}/parts").unwrap();
/// let assembler = PathAssembler::new(ProtocolVersion::CURRENT.ruleset());
/// let base = assembler
///     .build_base_path(&path, &[ResourceKey::from("a b")], "http://host/api")
///     .unwrap();
/// assert_eq!(base, "http://host/api/widgets/a%20b/parts");
/// ```
#[derive(Debug, Clone)]
pub struct PathAssembler {
    keys: KeyCodec,
}

impl PathAssembler {
    /// Creates an assembler bound to a ruleset.
    #[must_use]
    pub const fn new(rules: &'static Ruleset) -> Self {
        Self {
            keys: KeyCodec::new(rules),
        }
    }

    /// Builds the base path.
    ///
    /// Literal segments are copied verbatim and each key segment consumes the
    /// next path key in order. A non-empty prefix is copied unescaped and
    /// joined to the path with a single `/`.
    ///
    /// # Errors
    ///
    /// Returns `PathError` if:
    /// - The key count differs from the template's key segments
    /// - A path key is not a simple key
    /// - A scalar path key cannot be encoded
    pub fn build_base_path(
        &self,
        path: &ResourcePath,
        path_keys: &[ResourceKey],
        prefix: &str,
    ) -> Result<String, PathError> {
        let expected = path.key_count();
        if expected != path_keys.len() {
            return Err(PathError::ArityMismatch {
                expected,
                actual: path_keys.len(),
            });
        }

        let mut encoded = Vec::with_capacity(path.segments().len());
        let mut keys = path_keys.iter().enumerate();
        for segment in path.segments() {
            match segment {
                PathSegment::Literal(text) => encoded.push(text.clone()),
                PathSegment::Key(name) => {
                    let Some((index, key)) = keys.next() else {
                        return Err(PathError::ArityMismatch {
                            expected,
                            actual: path_keys.len(),
                        });
                    };
                    let scalar = key.as_scalar().ok_or_else(|| PathError::IncompatibleKey {
                        name: name.clone(),
                        index,
                    })?;
                    let value =
                        self.keys
                            .encode_scalar(scalar)
                            .map_err(|reason| PathError::InvalidKey {
                                name: name.clone(),
                                reason,
                            })?;
                    encoded.push(value);
                }
            }
        }

        let path_str = encoded.join("/");
        trace!(template = %path, path = %path_str, "assembled resource path");
        Ok(join_prefix(prefix, &path_str))
    }
}

/// Joins a prefix and a relative path with exactly one `/` between them.
pub(crate) fn join_prefix(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        path.to_string()
    } else if prefix.ends_with('/') {
        format!("{prefix}{path}")
    } else {
        format!("{prefix}/{path}")
    }
}
