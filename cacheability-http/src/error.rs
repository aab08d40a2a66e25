//! Error types for header extraction and evaluation.

use cacheability::DirectiveError;
use http::header::HeaderName;
use thiserror::Error;

/// Error type for evaluating an `http` request/response pair.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// A `Cache-Control` header violated the directive grammar.
    #[error(transparent)]
    Directive(#[from] DirectiveError),

    /// The `Expires` header was present but not a valid HTTP date.
    ///
    /// Unlike `Date` and `Last-Modified`, which degrade to absent, a
    /// malformed `Expires` is fatal to the freshness computation.
    #[error("Expires header is not a valid HTTP date")]
    MalformedExpires,

    /// A header value contained bytes outside visible ASCII.
    #[error("{0} header value is not visible ASCII")]
    OpaqueHeaderValue(HeaderName),
}
