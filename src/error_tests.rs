//! Tests for GhSuggestError type

use super::*;

#[test]
fn test_missing_credential_names_variable() {
    let error = GhSuggestError::MissingCredential {
        var: "GITHUB_CLIENT_ID",
        env: BuildEnv::Production,
    };
    let msg = error.to_string();
    assert!(msg.contains("GITHUB_CLIENT_ID"));
    assert!(msg.contains("production"));
    assert!(msg.contains(".env"));
}

#[test]
fn test_invalid_config_display() {
    let error = GhSuggestError::InvalidConfig {
        path: PathBuf::from("/tmp/config.toml"),
        message: "expected `=`".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("Invalid config file /tmp/config.toml"));
    assert!(msg.contains("expected `=`"));
}

#[test]
fn test_http_client_error_display() {
    let error = GhSuggestError::HttpClient("no TLS backend".to_string());
    assert_eq!(
        error.to_string(),
        "Failed to build HTTP client: no TLS backend"
    );
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = GhSuggestError::from(io_err);
    assert!(matches!(err, GhSuggestError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let error = GhSuggestError::HttpClient("x".to_string());
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("HttpClient"));
}
