use pretty_assertions::assert_eq;
use roombook_client::{Session, session::DEFAULT_LANGUAGE};

#[test]
fn test_anonymous_session() {
    let session = Session::anonymous();

    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.language(), DEFAULT_LANGUAGE);
    assert_eq!(session, Session::default());
}

#[test]
fn test_login_starts_authenticated_session() {
    let session = Session::login("abc123", "fr");

    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("abc123"));
    assert_eq!(session.language(), "fr");
}

#[test]
fn test_blank_language_falls_back_to_default() {
    let session = Session::login("abc123", "  ");
    assert_eq!(session.language(), DEFAULT_LANGUAGE);
}

#[test]
fn test_logout_tears_down_session() {
    let mut session = Session::login("abc123", "fr");

    session.logout();

    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.language(), DEFAULT_LANGUAGE);
}

#[test]
fn test_apply_sets_headers() {
    let http = reqwest::Client::new();
    let session = Session::login("abc123", "fr");

    let request = session
        .apply(http.get("http://backend.local/bookings"))
        .build()
        .expect("Failed to build request");

    assert_eq!(
        request.headers().get("authorization").and_then(|v| v.to_str().ok()),
        Some("Bearer abc123")
    );
    assert_eq!(
        request.headers().get("accept-language").and_then(|v| v.to_str().ok()),
        Some("fr")
    );

    let request = Session::anonymous()
        .apply(http.get("http://backend.local/bookings"))
        .build()
        .expect("Failed to build request");
    assert!(request.headers().get("authorization").is_none());
}
