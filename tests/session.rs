// tests/session.rs
//
// Session lifecycle and input validation, no UI involved.

use chainscrape::engine::types::{ScrapeRequest, ValidationError};
use chainscrape::session::{Session, SessionPhase};

#[test]
fn begin_only_from_idle() {
    let mut session = Session::new();
    assert_eq!(session.phase(), SessionPhase::Idle);

    assert!(session.begin());
    assert_eq!(session.phase(), SessionPhase::Running);

    // second start while running changes nothing
    assert!(!session.begin());
    assert_eq!(session.phase(), SessionPhase::Running);
}

#[test]
fn stop_only_from_running() {
    let mut session = Session::new();

    // stop in Idle is a no-op, raises nothing
    assert!(!session.request_stop());
    assert_eq!(session.phase(), SessionPhase::Idle);

    session.begin();
    assert!(session.request_stop());
    assert_eq!(session.phase(), SessionPhase::Stopping);

    // a second stop request changes nothing
    assert!(!session.request_stop());
    assert_eq!(session.phase(), SessionPhase::Stopping);
}

#[test]
fn finish_returns_to_idle_from_running_and_stopping() {
    let mut session = Session::new();
    session.begin();
    session.finish();
    assert_eq!(session.phase(), SessionPhase::Idle);

    session.begin();
    session.request_stop();
    session.finish();
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[test]
fn request_rejects_empty_url() {
    assert_eq!(
        ScrapeRequest::new("", 10).unwrap_err(),
        ValidationError::EmptyUrl
    );
    assert_eq!(
        ScrapeRequest::new("   ", 10).unwrap_err(),
        ValidationError::EmptyUrl
    );
}

#[test]
fn request_rejects_zero_pages() {
    assert_eq!(
        ScrapeRequest::new("https://example.com", 0).unwrap_err(),
        ValidationError::ZeroPages
    );
}

#[test]
fn request_rejects_unparseable_and_odd_schemes() {
    assert!(matches!(
        ScrapeRequest::new("not a url", 10),
        Err(ValidationError::BadUrl(_))
    ));
    assert!(matches!(
        ScrapeRequest::new("ftp://example.com", 10),
        Err(ValidationError::BadUrl(_))
    ));
}

#[test]
fn valid_request_keeps_its_inputs() {
    let req = ScrapeRequest::new(" https://example.com/start ", 25).unwrap();
    assert_eq!(req.url().as_str(), "https://example.com/start");
    assert_eq!(req.max_pages(), 25);
}
