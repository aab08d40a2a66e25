//! Assembling a [`CacheObject`] from `http` types.

use cacheability::{CacheObject, RequestContext, RequestDirectives, ResponseContext, ResponseDirectives};
use chrono::{DateTime, Utc};
use http::header::{AUTHORIZATION, CACHE_CONTROL, DATE, EXPIRES, HeaderMap, HeaderName, LAST_MODIFIED};
use http::{StatusCode, request::Parts};
use smol_str::SmolStr;
use tracing::debug;

use crate::{EvaluationError, Options};

/// Builds the evaluation context for a request/response pair.
///
/// `request` may be `None` to evaluate the response alone; the
/// request-bound checks are then skipped. `now` is the evaluation
/// instant, injected by the caller.
///
/// Both `Cache-Control` headers are parsed here, so a grammar error in
/// either surfaces before any engine runs. A malformed `Expires` is
/// fatal; malformed `Date` or `Last-Modified` values degrade to
/// absent.
pub fn cache_object(
    request: Option<&Parts>,
    status: StatusCode,
    response_headers: &HeaderMap,
    options: Options,
    now: DateTime<Utc>,
) -> Result<CacheObject, EvaluationError> {
    let directives = match joined_header(response_headers, &CACHE_CONTROL)? {
        Some(raw) => ResponseDirectives::parse(&raw)?,
        None => ResponseDirectives::default(),
    };

    let mut response = ResponseContext::new(status.as_u16(), directives);
    response.expires = expires_header(response_headers)?;
    response.date = lenient_http_date(response_headers, &DATE);
    response.last_modified = lenient_http_date(response_headers, &LAST_MODIFIED);

    let mut object = CacheObject::new(response, now);
    object.cache_is_private = options.cache_is_private;

    if let Some(parts) = request {
        let directives = match joined_header(&parts.headers, &CACHE_CONTROL)? {
            Some(raw) => RequestDirectives::parse(&raw)?,
            None => RequestDirectives::default(),
        };
        object.request = Some(RequestContext {
            method: SmolStr::new(parts.method.as_str()),
            has_authorization: parts.headers.contains_key(AUTHORIZATION),
            directives,
        });
    }

    Ok(object)
}

/// Joins every occurrence of a header into one comma-separated value,
/// the way repeated list-typed fields combine on the wire.
fn joined_header(
    headers: &HeaderMap,
    name: &HeaderName,
) -> Result<Option<String>, EvaluationError> {
    let mut joined: Option<String> = None;
    for value in headers.get_all(name) {
        let value = value
            .to_str()
            .map_err(|_| EvaluationError::OpaqueHeaderValue(name.clone()))?;
        match &mut joined {
            Some(acc) => {
                acc.push_str(", ");
                acc.push_str(value);
            }
            None => joined = Some(value.to_owned()),
        }
    }
    Ok(joined)
}

/// Strict `Expires` parse: a present but malformed value is an error.
fn expires_header(headers: &HeaderMap) -> Result<Option<DateTime<Utc>>, EvaluationError> {
    let Some(value) = headers.get(EXPIRES) else {
        return Ok(None);
    };
    let value = value
        .to_str()
        .map_err(|_| EvaluationError::MalformedExpires)?;
    let parsed = httpdate::parse_http_date(value).map_err(|_| EvaluationError::MalformedExpires)?;
    Ok(Some(DateTime::<Utc>::from(parsed)))
}

/// Lenient HTTP-date parse for `Date` and `Last-Modified`: a malformed
/// value is treated as absent. The freshness engine then falls back to
/// `now` where the rules call for it.
fn lenient_http_date(headers: &HeaderMap, name: &HeaderName) -> Option<DateTime<Utc>> {
    let value = headers.get(name)?;
    let value = value.to_str().ok()?;
    match httpdate::parse_http_date(value) {
        Ok(parsed) => Some(DateTime::<Utc>::from(parsed)),
        Err(_) => {
            debug!(header = %name, value, "ignoring malformed HTTP date");
            None
        }
    }
}
