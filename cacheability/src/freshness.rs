//! The freshness / explicit-expiration engine.
//!
//! [`expiration`] computes the instant at which a response stops being
//! fresh (RFC 7234 section 4.2), first match wins:
//!
//! 1. shared cache and `s-maxage` present: `now + s-maxage`
//! 2. `max-age` present: `now + max-age`
//! 3. `Expires` present: `now + (Expires - Date)`, falling back to
//!    `now` for a missing `Date`
//! 4. heuristic from `Last-Modified` (RFC 7234 section 4.2.2)
//!
//! `None` means no explicit or heuristic expiration is available; the
//! caller must treat that as an unknown lifetime, not as already
//! expired.

use chrono::{DateTime, Duration, Utc};

use crate::context::CacheObject;

/// The non-normative RFC 7234 section 4.2.2 guidance: a heuristic
/// lifetime of 10% of the time since `Last-Modified`.
pub const HEURISTIC_FRACTION: f64 = 0.10;

/// Cap on the heuristic lifetime, 24 hours in seconds.
pub const HEURISTIC_CAP_SECONDS: i64 = 24 * 60 * 60;

/// Policy knobs for heuristic freshness.
///
/// The defaults are the RFC's non-normative guidance, not a hard
/// requirement; callers with different policies pass their own values
/// to [`expiration_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicPolicy {
    /// Fraction of the `Date - Last-Modified` interval to treat as
    /// fresh.
    pub fraction: f64,
    /// Upper bound on the heuristic lifetime.
    pub cap: Duration,
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        HeuristicPolicy {
            fraction: HEURISTIC_FRACTION,
            cap: Duration::seconds(HEURISTIC_CAP_SECONDS),
        }
    }
}

/// Computes the expiration instant using the default
/// [`HeuristicPolicy`].
pub fn expiration(object: &CacheObject) -> Option<DateTime<Utc>> {
    expiration_with(object, &HeuristicPolicy::default())
}

/// Computes the expiration instant with an explicit heuristic policy.
///
/// Pure: evaluating the same object twice yields the same instant.
/// Callers may invoke this regardless of what [`reasons`] returned.
///
/// [`reasons`]: crate::policy::reasons
pub fn expiration_with(object: &CacheObject, policy: &HeuristicPolicy) -> Option<DateTime<Utc>> {
    let response = &object.response;
    let now = object.now;

    if !object.cache_is_private {
        if let Some(s_maxage) = response.directives.s_maxage {
            return Some(now + Duration::seconds(i64::from(s_maxage.as_secs())));
        }
    }

    if let Some(max_age) = response.directives.max_age {
        return Some(now + Duration::seconds(i64::from(max_age.as_secs())));
    }

    if let Some(expires) = response.expires {
        // The server-declared freshness window is Expires - Date;
        // applying it relative to now preserves its length even when
        // the response has been in flight for a while.
        let date = response.date.unwrap_or(now);
        return Some(now + (expires - date));
    }

    let last_modified = response.last_modified?;
    let date = response.date.unwrap_or(now);
    let age = (date - last_modified).max(Duration::zero());
    let lifetime_seconds = (age.num_seconds() as f64 * policy.fraction) as i64;
    let lifetime = Duration::seconds(lifetime_seconds).min(policy.cap);
    Some(now + lifetime)
}
