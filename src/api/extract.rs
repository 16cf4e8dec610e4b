//! Extractors whose rejections become [`AppError`] responses.
//!
//! axum's own rejections are plain responses, which the cache layer would
//! store like any other. Going through `AppError` tags them with
//! [`DownstreamFailure`](crate::error::DownstreamFailure).

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::extract::Path` with an [`AppError`] rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `axum::Json` with an [`AppError`] rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
