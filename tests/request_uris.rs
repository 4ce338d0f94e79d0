//! End-to-end URI building for every request kind under both protocol versions.

use restli_uri::{
    AssocKey, BuildErrorKind, BuildOptions, ComplexResourceKey, CompoundKey, EncodingError,
    Paging, ParamValue, PathError, ProtocolVersion, Record, Request, ResourceKey, ResourceMethod,
    ResourceSpec, build_uri,
};
use tracing_test::traced_test;

fn widgets() -> ResourceSpec {
    ResourceSpec::parse("/widgets").unwrap()
}

fn current(request: &Request) -> String {
    build_uri(request, "", ProtocolVersion::CURRENT)
        .unwrap()
        .into_string()
}

fn legacy(request: &Request) -> String {
    build_uri(request, "", ProtocolVersion::LEGACY)
        .unwrap()
        .into_string()
}

mod get {
    use super::*;

    #[test]
    fn simple_id() {
        let request = Request::get(widgets(), 42);
        assert_eq!(current(&request), "widgets/42");
        assert_eq!(legacy(&request), "widgets/42");
    }

    #[test]
    fn projection_then_custom_params() {
        let request = Request::get(widgets(), "w 1")
            .with_param("locale", "en_US")
            .with_fields(["name", "price"]);
        assert_eq!(current(&request), "widgets/w%201?fields=name,price&locale=en_US");
        assert_eq!(
            legacy(&request),
            "widgets/w%201?fields[]=name&fields[]=price&locale=en_US"
        );
    }

    #[test]
    fn compound_id_per_version() {
        let id = CompoundKey::new().with("b", "x").with("a", 1);
        let request = Request::get(widgets(), id);
        assert_eq!(current(&request), "widgets/(a:1,b:x)");
        assert_eq!(legacy(&request), "widgets/a=1&b=x");
    }

    #[test]
    fn complex_id_with_params() {
        let id = ComplexResourceKey::new(Record::new().with("major", 1).with("minor", 2))
            .with_params(Record::new().with("rev", 7));
        let request = Request::get(widgets(), id);
        assert_eq!(
            current(&request),
            "widgets/($params:%28rev%3A7%29,major:1,minor:2)"
        );
        assert_eq!(legacy(&request), "widgets/$params.rev=7&major=1&minor=2");
    }

    #[test]
    fn missing_id_fails() {
        let request = Request::new(ResourceMethod::Get, widgets());
        let err = build_uri(&request, "", ProtocolVersion::CURRENT).unwrap_err();
        assert_eq!(err.kind, BuildErrorKind::MissingComponent { component: "id" });
        assert_eq!(
            err.to_string(),
            "failed to build get request URI: missing required component: id"
        );
    }

    #[test]
    fn empty_string_id() {
        let request = Request::get(widgets(), "");
        assert_eq!(current(&request), "widgets/''");
        assert_eq!(legacy(&request), "widgets/");
    }
}

mod get_all {
    use super::*;

    fn colored() -> ResourceSpec {
        widgets().with_assoc_key_fields(["color", "size"])
    }

    #[test]
    fn partial_assoc_key() {
        let request = Request::get_all(colored()).with_assoc_key_value("color", "red");
        assert_eq!(current(&request), "widgets/(color:red)");
        assert_eq!(legacy(&request), "widgets/color=red");
    }

    #[test]
    fn full_assoc_key_uses_declared_order() {
        let request = Request::get_all(colored())
            .with_assoc_key_value("size", 10)
            .with_assoc_key_value("color", "red");
        assert_eq!(current(&request), "widgets/(color:red,size:10)");
        assert_eq!(legacy(&request), "widgets/color=red&size=10");
    }

    #[test]
    fn replaced_assoc_key_uses_resource_order() {
        let key = AssocKey::new(["size", "color"])
            .with("color", "red")
            .with("size", 10);
        let request = Request::get_all(colored()).with_assoc_key(key);
        assert_eq!(current(&request), "widgets/(color:red,size:10)");
        assert_eq!(legacy(&request), "widgets/color=red&size=10");
    }

    #[test]
    fn empty_assoc_key_leaves_path_unchanged() {
        let request = Request::get_all(colored());
        assert_eq!(current(&request), "widgets");
        assert_eq!(legacy(&request), "widgets");
    }

    #[test]
    fn undeclared_assoc_field_fails() {
        let key = AssocKey::new(["color", "size"]).with("shape", "round");
        let request = Request::get_all(colored()).with_assoc_key(key);
        let err = build_uri(&request, "", ProtocolVersion::CURRENT).unwrap_err();
        assert!(err.is_encoding());
        assert_eq!(
            err.kind,
            BuildErrorKind::Encoding(EncodingError::UndeclaredAssocField {
                field: "shape".to_string()
            })
        );
    }

    #[test]
    fn paging_projection_and_params_in_order() {
        let request = Request::get_all(widgets())
            .with_paging(Paging::new(10, 5))
            .with_fields(["id"])
            .with_param("sort", "asc");
        assert_eq!(
            current(&request),
            "widgets?start=10&count=5&fields=id&sort=asc"
        );
    }
}

mod batch {
    use super::*;

    #[test]
    fn batch_get_keeps_caller_order() {
        let request = Request::batch_get(widgets(), [1, 2, 3]);
        assert_eq!(current(&request), "widgets?ids=1,2,3");
        let request = Request::batch_get(widgets(), [3, 1, 2]);
        assert_eq!(current(&request), "widgets?ids=3,1,2");
        assert_eq!(legacy(&request), "widgets?ids[]=3&ids[]=1&ids[]=2");
    }

    #[test]
    fn batch_get_projection_after_ids() {
        let request = Request::batch_get(widgets(), ["a", "b"]).with_fields(["name"]);
        assert_eq!(current(&request), "widgets?ids=a,b&fields=name");
    }

    #[test]
    fn batch_get_compound_ids() {
        let request = Request::batch_get(
            widgets(),
            [
                CompoundKey::new().with("a", 1).with("b", 2),
                CompoundKey::new().with("a", 3).with("b", 4),
            ],
        );
        assert_eq!(current(&request), "widgets?ids=(a:1,b:2),(a:3,b:4)");
        assert_eq!(
            legacy(&request),
            "widgets?ids[]=a%3D1%26b%3D2&ids[]=a%3D3%26b%3D4"
        );
    }

    #[test]
    fn batch_writes() {
        for method in [
            ResourceMethod::BatchUpdate,
            ResourceMethod::BatchPartialUpdate,
            ResourceMethod::BatchDelete,
        ] {
            let request = Request::new(method, widgets()).with_ids([5, 6]);
            assert_eq!(current(&request), "widgets?ids=5,6");
        }
    }

    #[test]
    fn batch_without_ids_fails() {
        let request = Request::new(ResourceMethod::BatchDelete, widgets());
        let err = build_uri(&request, "", ProtocolVersion::CURRENT).unwrap_err();
        assert_eq!(err.method, ResourceMethod::BatchDelete);
        assert_eq!(err.kind, BuildErrorKind::MissingComponent { component: "ids" });
    }

    #[test]
    fn batch_create_has_no_ids() {
        let request = Request::new(ResourceMethod::BatchCreate, widgets());
        assert_eq!(current(&request), "widgets");
    }
}

mod finder {
    use super::*;

    #[test]
    fn finder_sequence() {
        let spec = widgets().with_assoc_key_fields(["color", "size"]);
        let request = Request::finder(spec, "search")
            .with_assoc_key_value("color", "blue")
            .with_param("keywords", ParamValue::list(["big", "red"]))
            .with_paging(Paging::new(0, 20))
            .with_fields(["id"]);
        assert_eq!(
            current(&request),
            "widgets/(color:blue)?q=search&keywords=big,red&start=0&count=20&fields=id"
        );
        assert_eq!(
            legacy(&request),
            "widgets/color=blue?q=search&keywords[]=big&keywords[]=red&start=0&count=20&fields[]=id"
        );
    }

    #[test]
    fn structured_finder_param() {
        let range = Record::new().with("min", 1).with("max", 5);
        let request = Request::finder(widgets(), "inRange").with_param("range", range);
        assert_eq!(current(&request), "widgets?q=inRange&range=(max:5,min:1)");
        assert_eq!(legacy(&request), "widgets?q=inRange&range.max=5&range.min=1");
    }

    #[test]
    fn reserved_param_name_fails() {
        let request = Request::finder(widgets(), "search").with_param("q", "other");
        let err = build_uri(&request, "", ProtocolVersion::CURRENT).unwrap_err();
        assert_eq!(
            err.kind,
            BuildErrorKind::Encoding(EncodingError::ReservedName {
                name: "q".to_string()
            })
        );
    }

    #[test]
    fn too_deep_param_fails() {
        let nested = Record::new().with("outer", Record::new().with("inner", 1));
        let request = Request::finder(widgets(), "search").with_param("deep", nested);
        let err = build_uri(&request, "", ProtocolVersion::LEGACY).unwrap_err();
        assert!(matches!(
            err.kind,
            BuildErrorKind::Encoding(EncodingError::NestingTooDeep { max: 1, .. })
        ));
    }
}

mod writes {
    use super::*;

    #[test]
    fn action_path_segment() {
        let request = Request::action(widgets(), "recalculate");
        assert_eq!(current(&request), "widgets/recalculate");
        let request = Request::action(widgets(), "recalculate")
            .with_id(9)
            .with_param("dryRun", true);
        assert_eq!(current(&request), "widgets/9/recalculate");
    }

    #[test]
    fn action_without_name_fails() {
        let request = Request::new(ResourceMethod::Action, widgets());
        let err = build_uri(&request, "", ProtocolVersion::CURRENT).unwrap_err();
        assert_eq!(
            err.kind,
            BuildErrorKind::MissingComponent {
                component: "action name"
            }
        );
    }

    #[test]
    fn create_update_delete() {
        assert_eq!(current(&Request::create(widgets()).with_fields(["id"])), "widgets?fields=id");
        assert_eq!(current(&Request::update(widgets(), 1)), "widgets/1");
        assert_eq!(current(&Request::delete(widgets(), 1)), "widgets/1");
        let patch = Request::new(ResourceMethod::PartialUpdate, widgets()).with_id(1);
        assert_eq!(current(&patch), "widgets/1");
    }
}

mod paths {
    use super::*;

    #[test]
    fn nested_resource_with_prefix() {
        let spec = ResourceSpec::parse("/groups/{groupId}/members/{memberId}/badges").unwrap();
        let request = Request::get_all(spec).with_path_keys([ResourceKey::from(7), "m:1".into()]);
        let uri = BuildOptions::new()
            .with_uri_prefix("https://api.example.com/v1")
            .build(&request)
            .unwrap();
        assert_eq!(
            uri.as_str(),
            "https://api.example.com/v1/groups/7/members/m%3A1/badges"
        );
    }

    #[test]
    fn arity_mismatch_fails() {
        let spec = ResourceSpec::parse("/groups/{groupId}/members").unwrap();
        let request = Request::get(spec, 1);
        let err = build_uri(&request, "", ProtocolVersion::CURRENT).unwrap_err();
        assert!(err.is_path());
        assert_eq!(
            err.kind,
            BuildErrorKind::Path(PathError::ArityMismatch {
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn compound_path_key_fails() {
        let spec = ResourceSpec::parse("/groups/{groupId}/members").unwrap();
        let request =
            Request::get_all(spec).with_path_keys([CompoundKey::new().with("a", 1)]);
        let err = build_uri(&request, "", ProtocolVersion::CURRENT).unwrap_err();
        assert!(matches!(
            err.kind,
            BuildErrorKind::Path(PathError::IncompatibleKey { index: 0, .. })
        ));
    }
}

mod versions {
    use super::*;

    #[test]
    fn intermediate_versions_pick_a_ruleset() {
        let request = Request::get(widgets(), CompoundKey::new().with("a", 1).with("b", 2));
        let v1_5 = build_uri(&request, "", ProtocolVersion::new(1, 5, 0)).unwrap();
        let v2_1 = build_uri(&request, "", ProtocolVersion::new(2, 1, 0)).unwrap();
        assert_eq!(v1_5.as_str(), "widgets/a=1&b=2");
        assert_eq!(v2_1.as_str(), "widgets/(a:1,b:2)");
        assert_eq!(v2_1.version(), ProtocolVersion::new(2, 1, 0));
    }

    #[test]
    fn uri_parts() {
        let request = Request::batch_get(widgets(), [1]).with_fields(["a"]);
        let uri = build_uri(&request, "http://h", ProtocolVersion::CURRENT).unwrap();
        assert_eq!(uri.path(), "http://h/widgets");
        assert_eq!(uri.query(), Some("ids=1&fields=a"));
    }
}

mod logging {
    use super::*;

    #[traced_test]
    #[test]
    fn build_logs_start_and_finish() {
        let request = Request::get(widgets(), 1);
        build_uri(&request, "", ProtocolVersion::CURRENT).unwrap();
        assert!(logs_contain("building request URI"));
        assert!(logs_contain("built request URI"));
        assert!(logs_contain("method=get"));
    }

    #[traced_test]
    #[test]
    fn failed_build_does_not_log_completion() {
        let request = Request::new(ResourceMethod::Finder, widgets());
        assert!(build_uri(&request, "", ProtocolVersion::CURRENT).is_err());
        assert!(logs_contain("building request URI"));
        assert!(!logs_contain("built request URI"));
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn uri_serializes_as_string() {
        let uri = build_uri(&Request::get(widgets(), 1), "", ProtocolVersion::CURRENT).unwrap();
        assert_eq!(serde_json::to_string(&uri).unwrap(), r#""widgets/1""#);
    }

    #[test]
    fn options_roundtrip() {
        let options = BuildOptions::new()
            .with_uri_prefix("http://h")
            .with_version(ProtocolVersion::LEGACY);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"uri_prefix":"http://h","version":"1.0.0"}"#);
        let back: BuildOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn version_rejects_garbage() {
        assert!(serde_json::from_str::<ProtocolVersion>(r#""two""#).is_err());
    }
}
