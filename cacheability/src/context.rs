//! The evaluation context both engines consume.
//!
//! A [`CacheObject`] is a plain aggregate assembled by the caller (or
//! by the `cacheability-http` adapters): parsed directives, the few
//! header-derived values the decision rules need, the cache type, and
//! an injected evaluation instant. No component here reads the system
//! clock; `now` always comes from the caller, which keeps every
//! evaluation deterministic and testable.

use chrono::{DateTime, Utc};
use smol_str::SmolStr;

use crate::directive::{RequestDirectives, ResponseDirectives};

/// Request-side evaluation inputs.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// The request method, verbatim. Methods are case-sensitive.
    pub method: SmolStr,
    /// Whether the request carried an `Authorization` header.
    pub has_authorization: bool,
    /// Parsed request `Cache-Control` directives.
    pub directives: RequestDirectives,
}

impl RequestContext {
    /// A request context for the given method with no directives and
    /// no `Authorization` header.
    pub fn new(method: impl Into<SmolStr>) -> Self {
        RequestContext {
            method: method.into(),
            ..RequestContext::default()
        }
    }
}

/// Response-side evaluation inputs.
///
/// The date fields hold already-parsed header values; `None` means the
/// header was absent (or, for `Date` and `Last-Modified`, not a valid
/// HTTP date, which the adapters treat as absent).
#[derive(Debug, Clone)]
pub struct ResponseContext {
    /// The response status code.
    pub status: u16,
    /// Parsed response `Cache-Control` directives.
    pub directives: ResponseDirectives,
    /// The `Date` header.
    pub date: Option<DateTime<Utc>>,
    /// The `Expires` header.
    pub expires: Option<DateTime<Utc>>,
    /// The `Last-Modified` header.
    pub last_modified: Option<DateTime<Utc>>,
}

impl ResponseContext {
    /// A response context with the given status and directives and no
    /// date headers.
    pub fn new(status: u16, directives: ResponseDirectives) -> Self {
        ResponseContext {
            status,
            directives,
            date: None,
            expires: None,
            last_modified: None,
        }
    }
}

impl Default for ResponseContext {
    fn default() -> Self {
        ResponseContext::new(200, ResponseDirectives::default())
    }
}

/// Everything the decision and freshness engines evaluate.
///
/// `request` is optional: a hypothetical or absent request skips the
/// request-bound checks while the response-side checks still apply.
#[derive(Debug, Clone)]
pub struct CacheObject {
    /// The request part, if a request is being evaluated.
    pub request: Option<RequestContext>,
    /// The response part.
    pub response: ResponseContext,
    /// `true` for a single-user cache (e.g. a browser), `false` for a
    /// shared cache (e.g. a proxy).
    pub cache_is_private: bool,
    /// The evaluation instant, injected by the caller.
    pub now: DateTime<Utc>,
}

impl CacheObject {
    /// A shared-cache evaluation of `response` at `now`, with no
    /// request part.
    pub fn new(response: ResponseContext, now: DateTime<Utc>) -> Self {
        CacheObject {
            request: None,
            response,
            cache_is_private: false,
            now,
        }
    }

    /// Attaches a request part.
    pub fn with_request(mut self, request: RequestContext) -> Self {
        self.request = Some(request);
        self
    }

    /// Marks the evaluating cache as private (single-user).
    pub fn private_cache(mut self) -> Self {
        self.cache_is_private = true;
        self
    }
}
