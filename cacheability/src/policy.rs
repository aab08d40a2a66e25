//! The cacheability decision engine.
//!
//! [`reasons`] runs the RFC 7234 storage rules over a [`CacheObject`]
//! and returns every disqualifying reason that applies, in evaluation
//! order. An empty list means the response may be stored. The checks
//! are independent: a `PUT` with `no-store` collects both reasons.

use crate::context::CacheObject;
use crate::reason::Reason;

/// Status codes cacheable by default (RFC 7231 section 6.1).
pub const DEFAULT_CACHEABLE_STATUS_CODES: [u16; 11] =
    [200, 203, 204, 206, 300, 301, 404, 405, 410, 414, 501];

/// Whether a status code is cacheable by default, absent explicit
/// cache controls.
pub fn cacheable_by_default(status: u16) -> bool {
    DEFAULT_CACHEABLE_STATUS_CODES.contains(&status)
}

/// Collects the reasons this response should not be cached.
///
/// Request-bound checks (method, request `no-store`, `Authorization`)
/// run only when a request part is present; the response-side checks
/// always run.
pub fn reasons(object: &CacheObject) -> Vec<Reason> {
    let mut reasons = Vec::new();
    let response = &object.response;

    if let Some(request) = &object.request {
        // Responses to POST are cacheable only with explicit freshness
        // information (RFC 7231 section 4.3.3). The other unsafe
        // methods are not cacheable at all.
        match request.method.as_str() {
            "GET" | "HEAD" => {}
            "POST" => {
                if !has_explicit_freshness(object) {
                    reasons.push(Reason::RequestMethodPost);
                }
            }
            "PUT" => reasons.push(Reason::RequestMethodPut),
            "DELETE" => reasons.push(Reason::RequestMethodDelete),
            "CONNECT" => reasons.push(Reason::RequestMethodConnect),
            "OPTIONS" => reasons.push(Reason::RequestMethodOptions),
            "TRACE" => reasons.push(Reason::RequestMethodTrace),
            // Registered extension methods (IANA http-methods) are not
            // cacheable either.
            _ => reasons.push(Reason::RequestMethodUnknown),
        }

        if request.directives.no_store {
            reasons.push(Reason::RequestNoStore);
        }

        // Storing responses to authenticated requests, RFC 7234
        // section 3.2: must-revalidate, public, or s-maxage on the
        // response re-permits storage.
        if request.has_authorization
            && !(response.directives.must_revalidate
                || response.directives.public
                || response.directives.s_maxage.is_some())
        {
            reasons.push(Reason::RequestAuthorizationHeader);
        }
    }

    if response.directives.private_present() && !object.cache_is_private {
        reasons.push(Reason::ResponsePrivate);
    }

    if response.directives.no_store {
        reasons.push(Reason::ResponseNoStore);
    }

    // RFC 7234 section 3: at least one of these must hold for the
    // response to be stored at all.
    let storable = response.expires.is_some()
        || response.directives.max_age.is_some()
        || (response.directives.s_maxage.is_some() && !object.cache_is_private)
        || cacheable_by_default(response.status)
        || response.directives.public;
    if !storable {
        reasons.push(Reason::ResponseUncacheableByDefault);
    }

    reasons
}

/// Whether the response carries explicit freshness information
/// (RFC 7234 section 4.2.1). `s-maxage` counts only for shared caches.
fn has_explicit_freshness(object: &CacheObject) -> bool {
    let directives = &object.response.directives;
    (!object.cache_is_private && directives.s_maxage.is_some())
        || directives.max_age.is_some()
        || object.response.expires.is_some()
}
