#![warn(missing_docs)]
//! # cacheability-http
//!
//! Thin adapters running the [`cacheability`] engines over `http`
//! crate types. Given request [`Parts`](http::request::Parts) and a
//! response (or a response-in-progress as status plus headers), the
//! adapters extract the relevant headers, parse the date headers, and
//! return the reasons the response should not be cached together with
//! its expiration instant.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use http::Response;
//!
//! let response = Response::builder()
//!     .status(200)
//!     .header("Cache-Control", "public, max-age=3600")
//!     .body(())
//!     .unwrap();
//!
//! let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
//! let evaluation =
//!     cacheability_http::cacheable(None, &response, cacheability_http::Options::default(), now)
//!         .unwrap();
//! assert!(evaluation.is_cacheable());
//! assert_eq!(evaluation.expires, Some(now + chrono::Duration::hours(1)));
//! ```

mod error;
mod extract;

pub use error::EvaluationError;
pub use extract::cache_object;

use cacheability::{Reason, expiration, reasons};
use chrono::{DateTime, Utc};
use http::header::HeaderMap;
use http::request::Parts;
use http::{Response, StatusCode};

/// Cache-type context for an evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// `true` for a private cache, not shared among users (e.g. in a
    /// browser); `false` for a shared cache, which is the common
    /// server-side context.
    pub cache_is_private: bool,
}

/// The outcome of evaluating one request/response pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Every reason the response should not be cached, in evaluation
    /// order. Empty means cacheable.
    pub reasons: Vec<Reason>,
    /// The explicit or heuristic expiration instant, if any. `None`
    /// means the lifetime is unknown, not that the response is already
    /// expired.
    pub expires: Option<DateTime<Utc>>,
}

impl Evaluation {
    /// Whether no disqualifying reason applied.
    pub fn is_cacheable(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Evaluates a request/response pair.
///
/// Pass `None` for `request` to evaluate the response on its own; the
/// request-bound checks (method, request `no-store`, `Authorization`)
/// are then skipped.
pub fn cacheable<B>(
    request: Option<&Parts>,
    response: &Response<B>,
    options: Options,
    now: DateTime<Utc>,
) -> Result<Evaluation, EvaluationError> {
    cacheable_response(request, response.status(), response.headers(), options, now)
}

/// Evaluates a response-in-progress, before a body or a full
/// [`Response`] exists.
pub fn cacheable_response(
    request: Option<&Parts>,
    status: StatusCode,
    response_headers: &HeaderMap,
    options: Options,
    now: DateTime<Utc>,
) -> Result<Evaluation, EvaluationError> {
    let object = cache_object(request, status, response_headers, options, now)?;
    Ok(Evaluation {
        reasons: reasons(&object),
        expires: expiration(&object),
    })
}
