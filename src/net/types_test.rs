use super::*;

#[test]
fn credentials_serialize_as_login_body() {
    let creds = Credentials { username: "alice".to_owned(), password: "hunter2".to_owned() };
    let value = serde_json::to_value(&creds).unwrap();
    assert_eq!(value, serde_json::json!({ "username": "alice", "password": "hunter2" }));
}

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials { username: "alice".to_owned(), password: "hunter2".to_owned() };
    let debug = format!("{creds:?}");
    assert!(debug.contains("alice"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn login_response_parses_token_and_user() {
    let raw = r#"{"token":"abc.def","user":{"id":"u1","username":"alice"}}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "abc.def");
    assert_eq!(resp.user, User { id: "u1".to_owned(), username: "alice".to_owned() });
}

#[test]
fn login_response_without_token_is_rejected() {
    let raw = r#"{"user":{"id":"u1","username":"alice"}}"#;
    assert!(serde_json::from_str::<LoginResponse>(raw).is_err());
}

#[test]
fn token_validation_reads_camel_case_flag() {
    let raw = r#"{"isValid":true,"user":{"id":"u1","username":"alice"}}"#;
    let v: TokenValidation = serde_json::from_str(raw).unwrap();
    assert!(v.is_valid);
    assert_eq!(v.user.map(|u| u.username), Some("alice".to_owned()));
}

#[test]
fn token_validation_user_is_optional() {
    let v: TokenValidation = serde_json::from_str(r#"{"isValid":false}"#).unwrap();
    assert!(!v.is_valid);
    assert!(v.user.is_none());
}

#[test]
fn token_validation_ignores_unknown_fields() {
    let v: TokenValidation = serde_json::from_str(r#"{"isValid":false,"reason":"expired"}"#).unwrap();
    assert!(!v.is_valid);
}
