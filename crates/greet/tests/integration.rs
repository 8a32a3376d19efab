use capability_common::serde_json::{self, json, Value};
use greet::{greet, handle};

fn run(input: &str) -> Value {
    let mut out = Vec::new();
    capability_common::run_with(input.as_bytes(), &mut out, handle).unwrap();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn integration_greet_world() {
    assert_eq!(greet("World"), "Hello, World from Zeina Bekdache!");
}

#[test]
fn integration_capability_greets() {
    let out = run(r#"{"name": "World"}"#);
    assert_eq!(out, json!({"greeting": "Hello, World from Zeina Bekdache!"}));
}

#[test]
fn integration_capability_ignores_extra_fields() {
    let out = run(r#"{"name": "", "lang": "fr"}"#);
    assert_eq!(out, json!({"greeting": "Hello,  from Zeina Bekdache!"}));
}

#[test]
fn integration_capability_missing_name() {
    let out = run("{}");
    let msg = out["error"].as_str().unwrap();
    assert!(msg.contains("missing field `name`"), "got: {}", msg);
}

#[test]
fn integration_capability_invalid_json() {
    let out = run("World");
    assert!(out["error"].as_str().unwrap().starts_with("Invalid JSON input"));
}
