//! Read-only retrieval API
//!
//! The two catalog reads exposed over HTTP, independent of any web
//! framework. Handlers return either the records to serialize or an
//! [`ApiError`] that carries the fixed status and message for the client.
//! Storage failures are logged here and never reach the response body.

use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;

use crate::catalog::{AsphaltMethod, MethodId, Storage};

/// Client-facing failures with their fixed messages
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid method ID")]
    InvalidId,

    #[error("Method not found")]
    MethodNotFound,

    #[error("Failed to fetch asphalt methods")]
    ListFailed,

    #[error("Failed to fetch asphalt method")]
    FetchFailed,

    #[error("Not found")]
    RouteNotFound,

    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidId => 400,
            ApiError::MethodNotFound | ApiError::RouteNotFound => 404,
            ApiError::ListFailed | ApiError::FetchFailed | ApiError::Internal => 500,
        }
    }

    /// `{"message": ...}` body sent to the client
    pub fn body(&self) -> Value {
        json!({ "message": self.to_string() })
    }
}

/// `GET /api/asphalt-methods`
pub fn list_methods<S: Storage + ?Sized>(storage: &S) -> Result<Vec<AsphaltMethod>, ApiError> {
    storage.get_all_methods().map_err(|e| {
        error!(error = %e, "Listing asphalt methods failed");
        ApiError::ListFailed
    })
}

/// `GET /api/asphalt-methods/:id`
pub fn get_method<S: Storage + ?Sized>(
    storage: &S,
    raw_id: &str,
) -> Result<AsphaltMethod, ApiError> {
    let Some(id) = parse_method_id(raw_id)? else {
        return Err(ApiError::MethodNotFound);
    };

    match storage.get_method_by_id(id) {
        Ok(Some(method)) => Ok(method),
        Ok(None) => Err(ApiError::MethodNotFound),
        Err(e) => {
            error!(error = %e, id, "Fetching asphalt method failed");
            Err(ApiError::FetchFailed)
        }
    }
}

/// Read a method id from a path segment
///
/// Takes the leading integer of the segment: surrounding whitespace and a
/// sign are allowed and anything after the digits is ignored, so `"12abc"`
/// reads as 12. A `0x`/`0X` prefix switches to hexadecimal, so `"0x10"` reads
/// as 16. No leading digits (including a bare `"0x"`) is an
/// [`ApiError::InvalidId`]. Integers that no stored id can equal (negative or
/// too large) yield `Ok(None)`.
pub fn parse_method_id(raw: &str) -> Result<Option<MethodId>, ApiError> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, body) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let digit_count = body
        .chars()
        .take_while(|c| c.is_digit(radix))
        .count();
    if digit_count == 0 {
        return Err(ApiError::InvalidId);
    }

    let digits = &body[..digit_count];
    if negative && digits.bytes().any(|b| b != b'0') {
        return Ok(None);
    }
    Ok(MethodId::from_str_radix(digits, radix).ok())
}
