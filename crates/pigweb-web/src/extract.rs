//! Request extractors.

use axum::extract::FromRequest;

use pigweb_common::ApiError;

/// `Json` body whose rejections render as `ApiError` (`{ "error": ... }`).
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
