//! Tests for the error system.

use sitechat::error::*;

#[test]
fn error_api_creation() {
    let err = SiteChatError::api(404, "Not found");
    assert!(matches!(&err, SiteChatError::Api { status: 404, .. }));
    assert_eq!(err.to_string(), "API error (status 404): Not found");
}

#[test]
fn categories_are_stable_for_major_variants() {
    let network_error = reqwest::Client::new()
        .get("http://[::1")
        .build()
        .unwrap_err();
    let serde_error = serde_json::from_str::<serde_json::Value>("{not-json}").unwrap_err();

    let cases = vec![
        (SiteChatError::MissingApiKey, ErrorCategory::Initialization),
        (SiteChatError::ClientInit("tls".into()), ErrorCategory::Initialization),
        (SiteChatError::Authentication("bad".into()), ErrorCategory::Authentication),
        (SiteChatError::QuotaExceeded("out".into()), ErrorCategory::Quota),
        (SiteChatError::Network(network_error), ErrorCategory::Network),
        (SiteChatError::Timeout(5000), ErrorCategory::Timeout),
        (SiteChatError::Serialization(serde_error), ErrorCategory::Serialization),
        (SiteChatError::Configuration("x".into()), ErrorCategory::Configuration),
        (SiteChatError::api(401, "no"), ErrorCategory::Authentication),
        (SiteChatError::api(429, "slow down"), ErrorCategory::Quota),
        (SiteChatError::api(503, "down"), ErrorCategory::Server),
        (SiteChatError::api(400, "bad"), ErrorCategory::Api),
    ];

    for (error, expected) in cases {
        assert_eq!(error.category(), expected, "{error}");
    }
}

#[test]
fn only_construction_failures_are_initialization() {
    assert!(SiteChatError::MissingApiKey.is_initialization());
    assert!(SiteChatError::ClientInit("x".into()).is_initialization());
    assert!(!SiteChatError::Timeout(1).is_initialization());
}

#[test]
fn fallback_replies_follow_keyword_order() {
    assert_eq!(
        fallback_reply(&SiteChatError::Authentication("denied".into())),
        "There seems to be an issue with the API key. Please check if it's valid."
    );
    assert_eq!(
        fallback_for_message("daily quota reached"),
        "The API quota has been exceeded. Please try again later."
    );
    assert_eq!(
        fallback_for_message("network down"),
        "There seems to be a network issue. Please check your internet connection."
    );
    assert_eq!(
        fallback_for_message("something else"),
        "I apologize, but I'm having trouble processing your request right now. Please try again later."
    );
}
