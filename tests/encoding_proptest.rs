//! Property-based tests for key and request encoding.
//!
//! A small decoder in this file plays the server's role: whatever the codecs
//! emit must decode back to the value that went in.

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;
use proptest::prelude::*;

use restli_uri::{
    AssocKey, CompoundKey, KeyCodec, PathAssembler, PathError, ProtocolVersion, Record, Request,
    ResourceKey, ResourcePath, ResourceSpec, Ruleset, Scalar, build_uri,
};

/// Strategies for generating keys and templates.
mod strategies {
    use super::*;

    /// Field names: short identifiers, some with dots
    pub fn field_name() -> impl Strategy<Value = String> {
        "[a-z][a-zA-Z0-9.]{0,7}"
    }

    /// Arbitrary strings, weighted toward the characters the rulesets treat as structure
    pub fn string_value() -> impl Strategy<Value = String> {
        prop_oneof![
            "[ -~]{0,12}",
            "[:,()&=;'%/? ]{0,6}",
            ".{0,6}",
            Just(String::new()),
            Just("''".to_string()),
        ]
    }

    pub fn scalar() -> impl Strategy<Value = Scalar> {
        prop_oneof![
            any::<bool>().prop_map(Scalar::Bool),
            any::<i64>().prop_map(Scalar::Int),
            string_value().prop_map(Scalar::String),
        ]
    }

    /// Compound key fields with string values
    pub fn compound_fields() -> impl Strategy<Value = BTreeMap<String, String>> {
        prop::collection::btree_map(field_name(), string_value(), 1..=5)
    }

    pub fn version() -> impl Strategy<Value = ProtocolVersion> {
        prop_oneof![
            Just(ProtocolVersion::LEGACY),
            Just(ProtocolVersion::CURRENT),
            (0u32..4, 0u32..10, 0u32..10).prop_map(|(a, b, c)| ProtocolVersion::new(a, b, c)),
        ]
    }
}

/// Test-side decoder mirroring what a server does with an encoded key.
mod decoder {
    use super::*;

    fn unescape(s: &str) -> String {
        percent_decode_str(s).decode_utf8_lossy().into_owned()
    }

    pub fn string(encoded: &str, rules: &Ruleset) -> String {
        if rules.is_current() && encoded == "''" {
            String::new()
        } else {
            unescape(encoded)
        }
    }

    pub fn scalar(encoded: &str, like: &Scalar, rules: &Ruleset) -> Scalar {
        match like {
            Scalar::Bool(_) => Scalar::Bool(encoded.parse().unwrap()),
            Scalar::Int(_) => Scalar::Int(encoded.parse().unwrap()),
            Scalar::Float(_) => Scalar::Float(encoded.parse().unwrap()),
            Scalar::String(_) => Scalar::String(string(encoded, rules)),
        }
    }

    pub fn compound(encoded: &str, rules: &Ruleset) -> BTreeMap<String, String> {
        let body = if rules.is_current() {
            encoded
                .strip_prefix('(')
                .and_then(|s| s.strip_suffix(')'))
                .unwrap()
        } else {
            encoded
        };
        body.split(rules.pair_delimiter())
            .map(|pair| {
                let (name, value) = pair.split_once(rules.key_value_delimiter()).unwrap();
                (unescape(name), string(value, rules))
            })
            .collect()
    }

    /// Splits a batch query into one encoded key per id, undoing the extra
    /// escaping legacy applies to embedded keys.
    pub fn batch_ids(query: &str, rules: &Ruleset) -> Vec<String> {
        if rules.is_current() {
            let joined = query.strip_prefix("ids=").unwrap();
            let mut ids = Vec::new();
            let mut depth = 0usize;
            let mut start = 0;
            for (i, c) in joined.char_indices() {
                match c {
                    '(' => depth += 1,
                    ')' => depth -= 1,
                    ',' if depth == 0 => {
                        ids.push(joined[start..i].to_string());
                        start = i + 1;
                    }
                    _ => {}
                }
            }
            ids.push(joined[start..].to_string());
            ids
        } else {
            query
                .split('&')
                .map(|entry| unescape(entry.strip_prefix("ids[]=").unwrap()))
                .collect()
        }
    }
}

fn compound_key(fields: &BTreeMap<String, String>) -> CompoundKey {
    fields
        .iter()
        .fold(CompoundKey::new(), |key, (name, value)| key.with(name.as_str(), value.as_str()))
}

mod keys {
    use super::*;
    use super::strategies::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn simple_keys_roundtrip(value in scalar(), version in version()) {
            let rules = version.ruleset();
            let encoded = KeyCodec::new(rules).encode(&ResourceKey::from(value.clone())).unwrap();
            prop_assert_eq!(decoder::scalar(&encoded, &value, rules), value);
        }

        #[test]
        fn compound_keys_roundtrip(fields in compound_fields(), version in version()) {
            let rules = version.ruleset();
            let key = ResourceKey::from(compound_key(&fields));
            let encoded = KeyCodec::new(rules).encode(&key).unwrap();
            prop_assert_eq!(decoder::compound(&encoded, rules), fields);
        }

        #[test]
        fn rulesets_never_mix(fields in compound_fields()) {
            let key = ResourceKey::from(compound_key(&fields));

            let legacy = KeyCodec::new(ProtocolVersion::LEGACY.ruleset()).encode(&key).unwrap();
            prop_assert!(!legacy.contains([':', ',', '(', ')']));

            let current = KeyCodec::new(ProtocolVersion::CURRENT.ruleset()).encode(&key).unwrap();
            prop_assert!(!current.contains(['&', '=']));
        }

        #[test]
        fn dotted_names_never_collide_with_nesting(
            outer in "[a-z]{1,4}",
            inner in "[a-z]{1,4}",
            value in any::<i64>(),
            version in version(),
        ) {
            let codec = KeyCodec::new(version.ruleset());
            let dotted = CompoundKey::new().with(format!("{outer}.{inner}"), value);
            let nested = CompoundKey::new().with(outer.as_str(), Record::new().with(inner.as_str(), value));
            prop_assert_ne!(
                codec.encode(&ResourceKey::from(dotted)).unwrap(),
                codec.encode(&ResourceKey::from(nested)).unwrap()
            );
        }

        #[test]
        fn encoding_is_deterministic(fields in compound_fields(), version in version()) {
            let codec = KeyCodec::new(version.ruleset());
            let a = codec.encode(&ResourceKey::from(compound_key(&fields))).unwrap();
            let b = codec.encode(&ResourceKey::from(compound_key(&fields))).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}

mod assoc_keys {
    use super::*;
    use super::strategies::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn insertion_order_does_not_matter(
            (fields, shuffled) in compound_fields().prop_flat_map(|fields| {
                let entries: Vec<_> = fields.clone().into_iter().collect();
                (Just(fields), Just(entries).prop_shuffle())
            }),
            version in version(),
        ) {
            let declared: Vec<_> = fields.keys().cloned().collect();
            let in_order = fields
                .iter()
                .fold(AssocKey::new(declared.clone()), |k, (n, v)| k.with(n.as_str(), v.as_str()));
            let reordered = shuffled
                .iter()
                .fold(AssocKey::new(declared), |k, (n, v)| k.with(n.as_str(), v.as_str()));

            let codec = KeyCodec::new(version.ruleset());
            prop_assert_eq!(
                codec.encode_assoc_key(&in_order).unwrap(),
                codec.encode_assoc_key(&reordered).unwrap()
            );
        }

        #[test]
        fn empty_assoc_key_is_empty_string(
            declared in prop::collection::vec(field_name(), 0..5),
            version in version(),
        ) {
            let codec = KeyCodec::new(version.ruleset());
            prop_assert_eq!(codec.encode_assoc_key(&AssocKey::new(declared)).unwrap(), "");
        }
    }
}

mod batch_ids {
    use super::*;
    use super::strategies::*;

    fn batch_query(ids: Vec<ResourceKey>, version: ProtocolVersion) -> String {
        let request = Request::batch_get(ResourceSpec::parse("widgets").unwrap(), ids);
        let uri = build_uri(&request, "", version).unwrap();
        uri.query().unwrap().to_string()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn string_ids_roundtrip_in_caller_order(
            ids in prop::collection::vec(string_value(), 1..6),
            version in version(),
        ) {
            let rules = version.ruleset();
            let query = batch_query(ids.iter().cloned().map(ResourceKey::from).collect(), version);
            let decoded: Vec<String> = decoder::batch_ids(&query, rules)
                .iter()
                .map(|encoded| decoder::string(encoded, rules))
                .collect();
            prop_assert_eq!(decoded, ids);
        }

        #[test]
        fn compound_ids_roundtrip_in_caller_order(
            keys in prop::collection::vec(compound_fields(), 1..4),
            version in version(),
        ) {
            let rules = version.ruleset();
            let ids = keys.iter().map(|fields| ResourceKey::from(compound_key(fields))).collect();
            let query = batch_query(ids, version);
            let decoded: Vec<_> = decoder::batch_ids(&query, rules)
                .iter()
                .map(|encoded| decoder::compound(encoded, rules))
                .collect();
            prop_assert_eq!(decoded, keys);
        }
    }
}

mod paths {
    use super::*;

    fn template(key_segments: usize) -> ResourcePath {
        let mut segments = vec!["root".to_string()];
        for i in 0..key_segments {
            segments.push(format!("{{k{i}}}"));
            segments.push(format!("sub{i}"));
        }
        ResourcePath::parse(&segments.join("/")).unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn arity_must_match(expected in 0usize..=3, supplied in 0usize..=3) {
            let path = template(expected);
            let keys: Vec<_> = (0..supplied).map(|i| ResourceKey::from(i as i64)).collect();
            let result = PathAssembler::new(ProtocolVersion::CURRENT.ruleset())
                .build_base_path(&path, &keys, "");
            if expected == supplied {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(
                    result,
                    Err(PathError::ArityMismatch { expected, actual: supplied })
                );
            }
        }

        #[test]
        fn path_key_values_cannot_add_segments(value in strategies::string_value()) {
            let path = template(1);
            let base = PathAssembler::new(ProtocolVersion::CURRENT.ruleset())
                .build_base_path(&path, &[ResourceKey::from(value)], "")
                .unwrap();
            prop_assert_eq!(base.split('/').count(), 3);
        }
    }
}
