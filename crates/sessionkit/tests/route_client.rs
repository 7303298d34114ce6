use std::sync::{Arc, RwLock};

use http::{header, HeaderMap, HeaderValue};
use sessionkit::{create_route_client, ClientConfig, Session};

fn config() -> ClientConfig {
    ClientConfig {
        url: Some("https://sessions.example.com".to_string()),
        key: Some("publishable-key".to_string()),
        ..ClientConfig::default()
    }
}

fn shared_response() -> Arc<RwLock<HeaderMap>> {
    Arc::new(RwLock::new(HeaderMap::new()))
}

#[test]
fn test_saved_session_is_staged_and_readable_within_the_request() {
    let request = HeaderMap::new();
    let response = shared_response();
    let client =
        create_route_client(&request, response.clone(), config()).expect("client builds");

    assert_eq!(client.auth().current_session(), None);

    let session = Session::new("access", "refresh");
    client.auth().save_session(&session).expect("session saves");

    // The handler observes its own write before the response is sent.
    assert_eq!(client.auth().current_session(), Some(session));

    let response = response.read().expect("RwLock should not be poisoned");
    let staged: Vec<_> = response.get_all(header::SET_COOKIE).iter().collect();
    assert_eq!(staged.len(), 1);
    let staged = staged[0].to_str().expect("header is valid UTF-8");
    assert!(staged.starts_with("sessionkit-auth-token="));
    assert!(staged.contains("Path=/"));
}

#[test]
fn test_session_from_the_request_cookie() {
    let session = Session::new("access", "refresh");
    let serialized = serde_json::to_string(&session).expect("session serializes");
    let pair = cookie::Cookie::new("sessionkit-auth-token", serialized)
        .encoded()
        .to_string();

    let mut request = HeaderMap::new();
    request.insert(
        header::COOKIE,
        HeaderValue::from_str(&pair).expect("cookie pair is a valid header value"),
    );

    let client =
        create_route_client(&request, shared_response(), config()).expect("client builds");

    assert_eq!(client.auth().current_session(), Some(session));
}

#[test]
fn test_sign_out_shadows_the_request_cookie() {
    let session = Session::new("access", "refresh");
    let serialized = serde_json::to_string(&session).expect("session serializes");
    let pair = cookie::Cookie::new("sessionkit-auth-token", serialized)
        .encoded()
        .to_string();

    let mut request = HeaderMap::new();
    request.insert(
        header::COOKIE,
        HeaderValue::from_str(&pair).expect("cookie pair is a valid header value"),
    );

    let response = shared_response();
    let client =
        create_route_client(&request, response.clone(), config()).expect("client builds");

    client.auth().sign_out();

    // The staged expiry wins over the original request cookie.
    assert_eq!(client.auth().current_session(), None);

    let response = response.read().expect("RwLock should not be poisoned");
    let last = response
        .get_all(header::SET_COOKIE)
        .iter()
        .last()
        .and_then(|value| value.to_str().ok())
        .expect("expiry entry staged");
    assert!(last.starts_with("sessionkit-auth-token="));
    assert!(last.contains("Max-Age=0"));
}

#[test]
fn test_two_clients_share_one_response() {
    // Two handlers in one request/response cycle observe each other's
    // writes through the shared response headers.
    let request = HeaderMap::new();
    let response = shared_response();

    let writer =
        create_route_client(&request, response.clone(), config()).expect("client builds");
    let reader =
        create_route_client(&request, response.clone(), config()).expect("client builds");

    let session = Session::new("access", "refresh");
    writer.auth().save_session(&session).expect("session saves");

    assert_eq!(reader.auth().current_session(), Some(session));
}
