//! Percent-encoding sets used by the rulesets.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that may never appear raw inside a path segment or query component.
pub(crate) const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Query parameter names. `&` and `=` would split the entry.
pub(crate) const PARAM_NAME: &AsciiSet = &COMPONENT.add(b'&').add(b'=');

/// Query parameter names where `.` separates a record field.
pub(crate) const DOTTED_PARAM_NAME: &AsciiSet = &PARAM_NAME.add(b'.');

/// Scalar values under the legacy ruleset.
pub(crate) const LEGACY_VALUE: &AsciiSet = &COMPONENT
    .add(b':')
    .add(b',')
    .add(b'(')
    .add(b')')
    .add(b';')
    .add(b'&')
    .add(b'=');

/// Scalar values under the current ruleset. `'` quotes the empty string.
pub(crate) const CURRENT_VALUE: &AsciiSet = &LEGACY_VALUE.add(b'\'');

/// Key field names under the legacy ruleset. `.` joins flattened names.
pub(crate) const LEGACY_NAME: &AsciiSet = &LEGACY_VALUE.add(b'.');

/// Percent-encodes `input` with `set`; non-ASCII is always encoded as UTF-8 bytes.
pub(crate) fn escape(input: &str, set: &'static AsciiSet) -> String {
    utf8_percent_encode(input, set).to_string()
}
