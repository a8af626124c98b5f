//! Extractors whose rejections render as [`AppError::BadRequest`].
//!
//! axum's own `Json` rejects type mismatches with 422 and a missing content type
//! with 415; every decode failure here is a client error and answers 400.

use axum::extract::{FromRequest, FromRequestParts};

use crate::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
