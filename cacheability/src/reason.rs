//! The closed taxonomy of reasons a response is not cacheable.

use serde::{Deserialize, Serialize};

/// One reason a response should not be stored or reused by a cache.
///
/// Reasons are output data, never errors: a single evaluation can
/// produce zero, one, or several of them, each from an independent
/// check. An empty reason list means the response is cacheable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    /// A `POST` response without explicit freshness information.
    RequestMethodPost,
    /// `PUT` responses are never cacheable.
    RequestMethodPut,
    /// `DELETE` responses are never cacheable.
    RequestMethodDelete,
    /// `CONNECT` responses are never cacheable.
    RequestMethodConnect,
    /// `OPTIONS` responses are never cacheable.
    RequestMethodOptions,
    /// `TRACE` responses are never cacheable.
    RequestMethodTrace,
    /// A request method outside the set this evaluator knows.
    RequestMethodUnknown,
    /// The request carried a `no-store` directive.
    RequestNoStore,
    /// The request carried an `Authorization` header and the response
    /// did not opt back in with `must-revalidate`, `public`, or
    /// `s-maxage`.
    RequestAuthorizationHeader,
    /// The response carried a `no-store` directive.
    ResponseNoStore,
    /// The response carried a `private` directive and the evaluating
    /// cache is shared.
    ResponsePrivate,
    /// Nothing made the response cacheable: no `Expires`, no
    /// `max-age`/`s-maxage`, no `public`, and a status code outside
    /// the default-cacheable set.
    ResponseUncacheableByDefault,
}

impl Reason {
    /// Returns the reason as a string slice.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Reason::RequestMethodPost => "request-method-post",
            Reason::RequestMethodPut => "request-method-put",
            Reason::RequestMethodDelete => "request-method-delete",
            Reason::RequestMethodConnect => "request-method-connect",
            Reason::RequestMethodOptions => "request-method-options",
            Reason::RequestMethodTrace => "request-method-trace",
            Reason::RequestMethodUnknown => "request-method-unknown",
            Reason::RequestNoStore => "request-no-store",
            Reason::RequestAuthorizationHeader => "request-authorization-header",
            Reason::ResponseNoStore => "response-no-store",
            Reason::ResponsePrivate => "response-private",
            Reason::ResponseUncacheableByDefault => "response-uncacheable-by-default",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
