use axum::extract::FromRequestParts;
use crate::error::AppError;

/// `axum::extract::Path` that rejects with the API's JSON error body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);
