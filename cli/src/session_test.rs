use reqwest::header::HeaderValue;

use super::*;

#[test]
fn cookie_header_strips_attributes() {
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, HeaderValue::from_static("session=abc123; HttpOnly; Path=/"));
    assert_eq!(cookie_header(&headers).as_deref(), Some("session=abc123"));
}

#[test]
fn cookie_header_joins_multiple_cookies() {
    let mut headers = HeaderMap::new();
    headers.append(SET_COOKIE, HeaderValue::from_static("session=abc; Path=/"));
    headers.append(SET_COOKIE, HeaderValue::from_static("lang=fr"));
    assert_eq!(cookie_header(&headers).as_deref(), Some("session=abc; lang=fr"));
}

#[test]
fn cookie_header_none_without_set_cookie() {
    assert_eq!(cookie_header(&HeaderMap::new()), None);
}

#[test]
fn cookie_header_ignores_values_without_pair() {
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, HeaderValue::from_static("garbage"));
    assert_eq!(cookie_header(&headers), None);
}
