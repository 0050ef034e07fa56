use super::*;

#[test]
fn random_words_query_omits_color_for_all() {
    assert!(random_words_query(ColorFilter::All).is_empty());
}

#[test]
fn random_words_query_carries_selected_color() {
    assert_eq!(random_words_query(ColorFilter::Only(WordColor::Green)), vec![("color", "green")]);
    assert_eq!(random_words_query(ColorFilter::Only(WordColor::Gray)), vec![("color", "gray")]);
}

#[test]
fn status_result_accepts_2xx_only() {
    assert_eq!(status_result(200), Ok(()));
    assert_eq!(status_result(204), Ok(()));
    assert_eq!(status_result(400), Err(ApiError::Status { status: 400 }));
    assert_eq!(status_result(404), Err(ApiError::Status { status: 404 }));
    assert_eq!(status_result(302), Err(ApiError::Status { status: 302 }));
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status { status: 502 }.to_string(), "server responded with status 502");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpApi;
    let result = futures::executor::block_on(api.color_counts());
    assert_eq!(result, Err(ApiError::Unavailable));
}
