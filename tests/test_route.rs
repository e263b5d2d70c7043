use dynamic_url::{RouteParams, Value};
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::json;

#[test]
fn named_preserves_unmatched_placeholders() {
    let params = json!({ "a": "x" });
    assert_eq!(dynamic_url::substitute("/{a}/{b}", &params).unwrap(), "/x/{b}");
}

#[test]
fn named_ignores_extra_keys() {
    let params = json!({ "citizen": "robespierre", "hero": "ironman", "extra": "korg" });
    assert_eq!(
        dynamic_url::substitute("https://example.com/{citizen}/{hero}", &params).unwrap(),
        "https://example.com/robespierre/ironman"
    );
}

#[test]
fn named_replaces_repeated_placeholders() {
    let params = json!({ "id": 7 });
    assert_eq!(
        dynamic_url::substitute("/{id}/children/{id}", &params).unwrap(),
        "/7/children/7"
    );
}

#[test]
fn named_stringifies_primitives() {
    #[derive(Serialize)]
    struct Params {
        #[serde(rename = "heroesCount")]
        heroes_count: u32,
        #[serde(rename = "wasThanosRight")]
        was_thanos_right: bool,
        ratio: f32,
    }

    let params = Params {
        heroes_count: 12,
        was_thanos_right: true,
        ratio: 0.25,
    };
    assert_eq!(
        dynamic_url::substitute("/{heroesCount}/{wasThanosRight}/{ratio}", &params).unwrap(),
        "/12/true/0.25"
    );
}

#[test]
fn named_treats_none_as_absent() {
    #[derive(Serialize)]
    struct Params {
        a: Option<&'static str>,
        b: Option<&'static str>,
    }

    let params = Params {
        a: Some("x"),
        b: None,
    };
    assert_eq!(dynamic_url::substitute("/{a}/{b}", &params).unwrap(), "/x/{b}");

    let params = json!({ "a": "x", "b": null });
    assert_eq!(dynamic_url::substitute("/{a}/{b}", &params).unwrap(), "/x/{b}");
}

#[test]
fn named_values_are_not_encoded() {
    let params = json!({ "path": "a b/c" });
    assert_eq!(dynamic_url::substitute("/{path}", &params).unwrap(), "/a b/c");
}

#[test]
fn named_staged_substitution() {
    let template = "/{org}/{repo}/issues/{number}";
    let staged = dynamic_url::substitute(template, &json!({ "org": "rust-lang" })).unwrap();
    assert_eq!(staged, "/rust-lang/{repo}/issues/{number}");

    let done = dynamic_url::substitute(&staged, &json!({ "repo": "rust", "number": 1 })).unwrap();
    assert_eq!(done, "/rust-lang/rust/issues/1");
}

#[test]
fn whole_replaces_full_span() {
    assert_eq!(dynamic_url::substitute("/{a}/{b}", "x/y").unwrap(), "/x/y");
    assert_eq!(
        dynamic_url::substitute("https://example.com/{citizen}/{hero}", "robespierre/ironman")
            .unwrap(),
        "https://example.com/robespierre/ironman"
    );
}

#[test]
fn whole_with_separate_spans() {
    // a `)` splits otherwise-greedy spans
    assert_eq!(
        dynamic_url::substitute("/{a}/(){b}", "x").unwrap(),
        "/x/()x"
    );
}

#[test]
fn whole_on_template_without_placeholders() {
    assert_eq!(
        dynamic_url::substitute("https://example.com/", "x").unwrap(),
        "https://example.com/"
    );
}

#[test]
fn unit_params_leave_template_unchanged() {
    assert_eq!(dynamic_url::substitute("/{a}", &()).unwrap(), "/{a}");
}

#[test]
fn sequence_params_are_keyed_by_index() {
    assert_eq!(
        dynamic_url::substitute("/{0}/{1}/{2}", &["a", "b"]).unwrap(),
        "/a/b/{2}"
    );
}

#[test]
fn nested_named_values_are_rejected() {
    let params = json!({ "a": { "b": 1 } });
    let err = dynamic_url::substitute("/{a}", &params).unwrap_err();
    assert!(matches!(err, dynamic_url::Error::Unsupported(_)));
}

#[test]
fn route_params_built_directly() {
    let params: RouteParams = [("a", "x"), ("b", "y")].into_iter().collect();
    assert_eq!(params.apply("/{a}/{b}/{c}"), "/x/y/{c}");

    let params = RouteParams::from("x/y");
    assert_eq!(params.apply("/{a}/{b}"), "/x/y");
}

#[test]
fn route_params_from_value() {
    let params = Value::map().insert("id", 3).insert("slug", "intro");
    insta::assert_snapshot!(
        dynamic_url::substitute("/posts/{id}-{slug}", &params).unwrap(),
        @"/posts/3-intro"
    );
}

#[test]
fn large_float_route_values_are_positional() {
    let params = json!({ "n": 1e16 });
    assert_eq!(
        dynamic_url::substitute("/{n}", &params).unwrap(),
        "/10000000000000000"
    );
}
