//! Protocol version selecting the encoding ruleset.

use std::fmt;
use std::str::FromStr;

use crate::constants::PROTOCOL_VERSION_HEADER;
use crate::error::VersionError;
use crate::ruleset::Ruleset;

/// An ordered `major.minor.patch` protocol version.
///
/// Versions from [`ProtocolVersion::CURRENT`] upward are encoded with the
/// current ruleset; anything older uses the legacy ruleset.
///
/// # Examples
///
/// ```
/// use restli_uri::ProtocolVersion;
///
/// let v: ProtocolVersion = "2.0.0".parse().unwrap();
/// assert_eq!(v, ProtocolVersion::CURRENT);
/// assert!(ProtocolVersion::LEGACY < v);
/// assert!(v.ruleset().is_current());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProtocolVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

impl ProtocolVersion {
    /// The legacy protocol, `1.0.0`.
    pub const LEGACY: Self = Self::new(1, 0, 0);

    /// The current protocol, `2.0.0`.
    pub const CURRENT: Self = Self::new(2, 0, 0);

    /// Name of the header announcing the protocol version.
    pub const HEADER: &'static str = PROTOCOL_VERSION_HEADER;

    /// Creates a version from its components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses a version such as `2.0.0` or `1.0`.
    ///
    /// # Errors
    ///
    /// Returns `VersionError` if the input is not two or three dot-separated
    /// decimal components.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let err = |reason| VersionError {
            input: input.to_string(),
            reason,
        };

        let parts: Vec<&str> = input.trim().split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(err("expected major.minor or major.minor.patch"));
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(err("components must be decimal numbers"));
            }
            *slot = part.parse().map_err(|_| err("component out of range"))?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }

    /// Returns the major component.
    #[must_use]
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// Returns the minor component.
    #[must_use]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    /// Returns the patch component.
    #[must_use]
    pub const fn patch(&self) -> u32 {
        self.patch
    }

    /// Returns the ruleset governing URIs built for this version.
    #[must_use]
    pub fn ruleset(&self) -> &'static Ruleset {
        Ruleset::for_version(*self)
    }
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for ProtocolVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ProtocolVersion {
    type Error = VersionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ProtocolVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ProtocolVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_three_components() {
        let v = ProtocolVersion::parse("2.1.3").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (2, 1, 3));
    }

    #[test]
    fn parse_two_components_defaults_patch() {
        assert_eq!(ProtocolVersion::parse("1.0").unwrap(), ProtocolVersion::LEGACY);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(ProtocolVersion::parse("").is_err());
        assert!(ProtocolVersion::parse("2").is_err());
        assert!(ProtocolVersion::parse("2.0.0.0").is_err());
        assert!(ProtocolVersion::parse("2.x.0").is_err());
        assert!(ProtocolVersion::parse("2..0").is_err());
        assert!(ProtocolVersion::parse("-1.0.0").is_err());
    }

    #[test]
    fn ordering_is_numeric() {
        let a = ProtocolVersion::new(1, 10, 0);
        let b = ProtocolVersion::new(2, 0, 0);
        let c = ProtocolVersion::new(1, 9, 99);
        assert!(c < a);
        assert!(a < b);
    }

    #[test]
    fn ruleset_selection_by_threshold() {
        assert!(!ProtocolVersion::LEGACY.ruleset().is_current());
        assert!(!ProtocolVersion::new(1, 9, 9).ruleset().is_current());
        assert!(ProtocolVersion::CURRENT.ruleset().is_current());
        assert!(ProtocolVersion::new(2, 1, 0).ruleset().is_current());
        assert!(ProtocolVersion::new(3, 0, 0).ruleset().is_current());
    }

    #[test]
    fn display_roundtrip() {
        let v = ProtocolVersion::new(2, 0, 0);
        assert_eq!(v.to_string(), "2.0.0");
        assert_eq!(v.to_string().parse::<ProtocolVersion>().unwrap(), v);
    }

    #[test]
    fn default_is_current() {
        assert_eq!(ProtocolVersion::default(), ProtocolVersion::CURRENT);
    }
}
