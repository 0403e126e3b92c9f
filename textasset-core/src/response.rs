// Copyright 2026 The Textasset Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use axum::http::{header, StatusCode};

use crate::error::AssetError;

/// json_error returns a `Response` with a JSON body describing the error and the Content-Type header set.
pub fn json_error(status: StatusCode, msg: &str) -> crate::Response {
    let json_body = serde_json::json!({ "error": msg }).to_string();
    let mut response = crate::Response::new(axum::body::Body::from(json_body));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    response
}

/// status_for maps a reader failure onto the HTTP status reported to clients.
pub fn status_for(err: &AssetError) -> StatusCode {
    match err {
        AssetError::NotFound(_) => StatusCode::NOT_FOUND,
        AssetError::InvalidPath(_) => StatusCode::BAD_REQUEST,
        AssetError::MissingStore | AssetError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// asset_error renders `err` as a JSON error response.
pub fn asset_error(err: &AssetError) -> crate::Response {
    json_error(status_for(err), &err.to_string())
}

#[test]
fn json_error_sets_status_and_content_type() {
    let response = json_error(StatusCode::NOT_FOUND, r#"no "quoted" asset"#);
    assert_eq!(StatusCode::NOT_FOUND, response.status());
    assert_eq!(
        "application/json",
        response.headers()[header::CONTENT_TYPE].to_str().unwrap()
    );
}

#[test]
fn statuses_follow_error_kind() {
    assert_eq!(
        StatusCode::NOT_FOUND,
        status_for(&AssetError::NotFound("a".into()))
    );
    assert_eq!(
        StatusCode::BAD_REQUEST,
        status_for(&AssetError::InvalidPath("../a".into()))
    );
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
    assert_eq!(
        StatusCode::INTERNAL_SERVER_ERROR,
        status_for(&AssetError::Io(io_err))
    );
    assert_eq!(
        StatusCode::INTERNAL_SERVER_ERROR,
        status_for(&AssetError::MissingStore)
    );
}
