//! Decision and freshness engine tests over assembled contexts.

use cacheability::{
    CacheObject, HeuristicPolicy, Reason, RequestContext, RequestDirectives, ResponseContext,
    ResponseDirectives, cacheable_by_default, expiration, expiration_with, reasons,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap()
}

fn get_object(at: DateTime<Utc>) -> CacheObject {
    let mut response = ResponseContext::new(200, ResponseDirectives::default());
    response.date = Some(at);
    CacheObject::new(response, at).with_request(RequestContext::new("GET"))
}

#[test]
fn default_cacheable_status_codes() {
    for status in [200, 203, 204, 206, 300, 301, 404, 405, 410, 414, 501] {
        assert!(cacheable_by_default(status), "status {status}");
    }
    for status in [201, 429, 500, 504] {
        assert!(!cacheable_by_default(status), "status {status}");
    }
}

#[test]
fn get_private_response_on_shared_cache() {
    let mut object = get_object(now());
    object.response.directives = ResponseDirectives::parse("private").unwrap();

    assert_eq!(reasons(&object), vec![Reason::ResponsePrivate]);
}

#[test]
fn get_private_response_on_private_cache() {
    let mut object = get_object(now()).private_cache();
    object.response.directives = ResponseDirectives::parse("private").unwrap();

    assert!(reasons(&object).is_empty());
}

#[test]
fn head_with_last_modified() {
    let at = now();
    let mut object = get_object(at);
    object.request = Some(RequestContext::new("HEAD"));
    object.response.last_modified = Some(at - Duration::hours(1));

    assert!(reasons(&object).is_empty());
    assert!(expiration(&object).is_some());
}

#[test]
fn heuristic_lifetime_is_capped_at_twenty_four_hours() {
    let at = now();
    let mut object = get_object(at);
    object.request = Some(RequestContext::new("HEAD"));
    object.response.last_modified = Some(at - Duration::hours(70000));

    assert!(reasons(&object).is_empty());
    let expires = expiration(&object).expect("heuristic expiration");
    let delta = (expires - (at + Duration::hours(24))).abs();
    assert!(delta < Duration::seconds(60), "off by {delta}");
}

#[test]
fn heuristic_is_ten_percent_of_last_modified_age() {
    let at = now();
    let mut object = get_object(at);
    object.response.last_modified = Some(at - Duration::seconds(1000));

    assert_eq!(expiration(&object), Some(at + Duration::seconds(100)));
}

#[test]
fn heuristic_clamps_future_last_modified_to_zero() {
    let at = now();
    let mut object = get_object(at);
    object.response.last_modified = Some(at + Duration::hours(1));

    assert_eq!(expiration(&object), Some(at));
}

#[test]
fn heuristic_policy_is_overridable() {
    let at = now();
    let mut object = get_object(at);
    object.response.last_modified = Some(at - Duration::seconds(1000));

    let policy = HeuristicPolicy {
        fraction: 0.5,
        cap: Duration::seconds(200),
    };
    // 50% of 1000s would be 500s, capped at 200s.
    assert_eq!(expiration_with(&object, &policy), Some(at + Duration::seconds(200)));
}

#[test]
fn no_freshness_information_at_all() {
    let object = get_object(now());
    assert_eq!(expiration(&object), None);
}

#[test]
fn post_without_freshness_information() {
    let mut object = get_object(now());
    object.request = Some(RequestContext::new("POST"));

    assert_eq!(reasons(&object), vec![Reason::RequestMethodPost]);
}

#[test]
fn post_with_expires_is_cacheable() {
    let at = now();
    let mut object = get_object(at);
    object.request = Some(RequestContext::new("POST"));
    object.response.expires = Some(at + Duration::hours(1));

    assert!(reasons(&object).is_empty());
}

#[test]
fn post_with_s_maxage_depends_on_cache_type() {
    let mut object = get_object(now());
    object.request = Some(RequestContext::new("POST"));
    object.response.directives = ResponseDirectives::parse("s-maxage=900").unwrap();

    assert!(reasons(&object).is_empty());

    // s-maxage is not a freshness source for a private cache.
    let object = object.private_cache();
    assert_eq!(reasons(&object), vec![Reason::RequestMethodPost]);
}

#[test]
fn put_is_never_cacheable() {
    let mut object = get_object(now());
    object.request = Some(RequestContext::new("PUT"));

    assert_eq!(reasons(&object), vec![Reason::RequestMethodPut]);
}

#[test]
fn put_with_expires_is_still_not_cacheable() {
    let at = now();
    let mut object = get_object(at);
    object.request = Some(RequestContext::new("PUT"));
    object.response.expires = Some(at + Duration::hours(1));

    assert_eq!(reasons(&object), vec![Reason::RequestMethodPut]);
}

#[test]
fn other_unsafe_methods() {
    for (method, reason) in [
        ("DELETE", Reason::RequestMethodDelete),
        ("CONNECT", Reason::RequestMethodConnect),
        ("OPTIONS", Reason::RequestMethodOptions),
        ("TRACE", Reason::RequestMethodTrace),
        ("PATCH", Reason::RequestMethodUnknown),
        ("PROPFIND", Reason::RequestMethodUnknown),
    ] {
        let mut object = get_object(now());
        object.request = Some(RequestContext::new(method));
        assert_eq!(reasons(&object), vec![reason], "method {method}");
    }
}

#[test]
fn request_no_store() {
    let mut object = get_object(now());
    let mut request = RequestContext::new("GET");
    request.directives = RequestDirectives::parse("no-store").unwrap();
    object.request = Some(request);

    assert_eq!(reasons(&object), vec![Reason::RequestNoStore]);
}

#[test]
fn authorization_header_blocks_storage() {
    let mut object = get_object(now());
    let mut request = RequestContext::new("GET");
    request.has_authorization = true;
    object.request = Some(request);

    assert_eq!(reasons(&object), vec![Reason::RequestAuthorizationHeader]);
}

#[test]
fn authorization_with_public_max_age_is_cacheable() {
    let mut object = get_object(now());
    let mut request = RequestContext::new("GET");
    request.has_authorization = true;
    object.request = Some(request);
    object.response.directives = ResponseDirectives::parse("public, max-age=300").unwrap();

    assert!(reasons(&object).is_empty());
}

#[test]
fn authorization_with_must_revalidate_is_cacheable() {
    let mut object = get_object(now());
    let mut request = RequestContext::new("GET");
    request.has_authorization = true;
    object.request = Some(request);
    object.response.directives = ResponseDirectives::parse("must-revalidate").unwrap();

    assert!(reasons(&object).is_empty());
}

#[test]
fn response_no_store() {
    let mut object = get_object(now());
    object.response.directives = ResponseDirectives::parse("no-store").unwrap();

    assert_eq!(reasons(&object), vec![Reason::ResponseNoStore]);
}

#[test]
fn independent_checks_accumulate() {
    let mut object = get_object(now());
    object.request = Some(RequestContext::new("PUT"));
    object.response.directives = ResponseDirectives::parse("no-store").unwrap();
    object.response.status = 500;

    assert_eq!(
        reasons(&object),
        vec![
            Reason::RequestMethodPut,
            Reason::ResponseNoStore,
            Reason::ResponseUncacheableByDefault,
        ]
    );
}

#[test]
fn uncacheable_status_without_explicit_freshness() {
    let mut object = get_object(now());
    object.response.status = 500;

    assert_eq!(reasons(&object), vec![Reason::ResponseUncacheableByDefault]);

    // public overrides the default-uncacheable status.
    object.response.directives = ResponseDirectives::parse("public").unwrap();
    assert!(reasons(&object).is_empty());
}

#[test]
fn response_only_evaluation_skips_request_checks() {
    let at = now();
    let mut response = ResponseContext::new(200, ResponseDirectives::parse("no-store").unwrap());
    response.date = Some(at);
    let object = CacheObject::new(response, at);

    assert_eq!(reasons(&object), vec![Reason::ResponseNoStore]);
}

#[test]
fn shared_cache_prefers_s_maxage() {
    let at = now();
    let mut object = get_object(at);
    object.response.directives =
        ResponseDirectives::parse("s-maxage=900, max-age=300").unwrap();
    object.response.expires = Some(at + Duration::hours(3));

    assert_eq!(expiration(&object), Some(at + Duration::seconds(900)));

    let object = object.private_cache();
    assert_eq!(expiration(&object), Some(at + Duration::seconds(300)));
}

#[test]
fn max_age_beats_expires() {
    let at = now();
    let mut object = get_object(at);
    object.response.directives = ResponseDirectives::parse("max-age=300").unwrap();
    object.response.expires = Some(at + Duration::hours(3));

    assert_eq!(expiration(&object), Some(at + Duration::seconds(300)));
}

#[test]
fn expires_window_is_applied_relative_to_now() {
    let at = now();
    let mut object = get_object(at);
    // The response was generated 10 minutes ago with a 1 hour window.
    object.response.date = Some(at - Duration::minutes(10));
    object.response.expires = Some(at - Duration::minutes(10) + Duration::hours(1));

    // The window length (1 hour) is preserved relative to now; the
    // expiration lies in the future, pinning the sign of the
    // Expires - Date subtraction.
    assert_eq!(expiration(&object), Some(at + Duration::hours(1)));
}

#[test]
fn expires_with_missing_date_falls_back_to_now() {
    let at = now();
    let mut object = get_object(at);
    object.response.date = None;
    object.response.expires = Some(at + Duration::minutes(30));

    assert_eq!(expiration(&object), Some(at + Duration::minutes(30)));
}

#[test]
fn expires_in_the_past_yields_a_past_instant() {
    let at = now();
    let mut object = get_object(at);
    object.response.expires = Some(at - Duration::hours(1));

    assert_eq!(expiration(&object), Some(at - Duration::hours(1)));
}

#[test]
fn reasons_serialize_as_data() {
    let mut object = get_object(now());
    object.request = Some(RequestContext::new("PUT"));

    // Reasons are output data, suitable for structured logs.
    let serialized = serde_json::to_value(reasons(&object)).unwrap();
    assert_eq!(serialized, serde_json::json!(["RequestMethodPut"]));
}

#[test]
fn evaluation_is_idempotent() {
    let at = now();
    let mut object = get_object(at);
    object.response.directives =
        ResponseDirectives::parse("public, max-age=600").unwrap();
    object.response.last_modified = Some(at - Duration::hours(2));

    assert_eq!(reasons(&object), reasons(&object));
    assert_eq!(expiration(&object), expiration(&object));
}
