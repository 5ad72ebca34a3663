// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::{Value, json};
// self
use github_request_defaults::{
	config::Config,
	options::{RequestDefaults, RequestOptions, defaults},
};

fn assert_cache_busted(path: &str, prefix: &str) {
	let rest = path
		.strip_prefix(prefix)
		.unwrap_or_else(|| panic!("Path `{path}` should start with `{prefix}`."));

	assert!(!rest.is_empty(), "Cache-busting timestamp should follow `{prefix}`.");
	assert!(rest.bytes().all(|b| b.is_ascii_digit()), "Timestamp `{rest}` should be numeric.");
}

fn build_from_json(config: Value, method: Option<&str>, path: &str) -> RequestOptions {
	let config = Config::from_json_value(config).expect("Config fixture should parse.");

	RequestDefaults::new(config).build(method, path, None)
}

#[test]
fn token_key_is_case_insensitive() {
	for key in ["token", "TOKEN", "Token"] {
		let mut config = serde_json::Map::new();

		config.insert(key.to_owned(), json!("abc"));

		let opts = build_from_json(Value::Object(config), None, "/user");

		assert_eq!(opts.headers.get("authorization"), Some("token abc"), "key {key}");
	}
}

#[test]
fn username_and_password_yield_basic_auth() {
	let opts = build_from_json(json!({ "username": "u", "password": "p" }), None, "/user");
	let expected = format!("Basic {}", STANDARD.encode("u:p"));

	assert_eq!(opts.headers.get("authorization"), Some(expected.as_str()));
}

#[test]
fn falsy_token_falls_back_to_basic_auth() {
	let opts = build_from_json(
		json!({ "token": false, "username": "u", "password": "p" }),
		None,
		"/user",
	);
	let expected = format!("Basic {}", STANDARD.encode("u:p"));

	assert_eq!(opts.headers.get("authorization"), Some(expected.as_str()));
}

#[test]
fn relative_path_is_resolved_against_apiurl() {
	let opts = build_from_json(
		json!({ "token": "XYZ", "apiurl": "https://api.github.com" }),
		Some("GET"),
		"/user",
	);

	assert_cache_busted(&opts.path, "https://api.github.com/user?");
}

#[test]
fn absolute_path_keeps_its_host() {
	let build = defaults(Config::builder().token("XYZ").apiurl("https://api.github.com").build());
	let opts = build(None, "https://example.com/x", None);

	assert_cache_busted(&opts.path, "https://example.com/x?");

	let opts = build(None, "https://example.com/x?page=2", None);

	assert_cache_busted(&opts.path, "https://example.com/x?page=2&");
}

#[test]
fn put_without_body_gets_zero_content_length() {
	let build = defaults(Config::builder().token("XYZ").build());
	let opts = build(Some("put"), "/user/following/octocat", None);

	assert_eq!(opts.headers.get("content-length"), Some("0"));

	let data = json!({ "permission": "push" });
	let opts = build(Some("PUT"), "/repos/a/b/collaborators/c", Some(&data));

	assert_eq!(opts.headers.get("content-type"), Some("application/json"));
	assert_eq!(opts.headers.get("content-length"), None);
	assert_eq!(opts.method, "PUT");
}

#[test]
fn raw_credential_fields_never_leak() {
	let opts = build_from_json(
		json!({
			"TOKEN": "t",
			"USERNAME": "u",
			"PASSWORD": "p",
			"apiurl": "https://api.github.com",
			"owner": "foo",
		}),
		Some("GET"),
		"/user",
	);
	let serialized = serde_json::to_value(&opts).expect("Options should serialize.");
	let object = serialized.as_object().expect("Options should serialize to an object.");

	for key in ["TOKEN", "USERNAME", "PASSWORD", "token", "username", "password"] {
		assert!(!object.contains_key(key), "Serialized options must not contain `{key}`.");
	}

	assert_eq!(object["owner"], "foo");
	assert_eq!(object["user-agent"], "github-base-nodejs");
	assert_eq!(object["apiurl"], "https://api.github.com");
	assert_eq!(object["method"], "GET");
	assert_eq!(object["headers"]["authorization"], "token t");
	assert_eq!(object["headers"]["accept"], "application/json");
}

#[test]
fn documented_example() {
	let opts = build_from_json(
		json!({ "token": "XYZ", "apiurl": "https://api.github.com" }),
		Some("GET"),
		"/repos/foo/bar",
	);

	assert_eq!(opts.headers.get("authorization"), Some("token XYZ"));
	assert_eq!(opts.headers.get("accept"), Some("application/json"));
	assert_cache_busted(&opts.path, "https://api.github.com/repos/foo/bar?");
}

#[test]
fn strict_mode_rejects_empty_config() {
	let defaults = RequestDefaults::new(Config::default());

	assert!(defaults.try_build(None, "/user", None).is_err());
	assert!(defaults.build(None, "/user", None).headers.get("authorization").is_some());
}
