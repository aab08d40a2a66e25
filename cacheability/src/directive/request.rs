//! Request-side `Cache-Control` grammar.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::{DeltaSeconds, forbid_argument, parse_directives, require_delta_seconds};
use crate::error::DirectiveError;

/// The `max-stale` request directive.
///
/// Bare `max-stale` means the client accepts a stale response of any
/// age; `max-stale=N` bounds the acceptable staleness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaxStale {
    /// `max-stale` with no argument: any staleness is acceptable.
    Unbounded,
    /// `max-stale=N`: stale by at most this many seconds.
    Limit(DeltaSeconds),
}

/// Parsed request-side `Cache-Control` directives.
///
/// An empty or whitespace-only header value parses to the default:
/// every flag `false`, every optional directive absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDirectives {
    /// `no-store`: the client asks that nothing store this exchange.
    pub no_store: bool,
    /// `no-cache`: a stored response must not be used without
    /// revalidation.
    pub no_cache: bool,
    /// `max-age=N`: accept responses no older than `N` seconds.
    pub max_age: Option<DeltaSeconds>,
    /// `max-stale` / `max-stale=N`: acceptable staleness.
    pub max_stale: Option<MaxStale>,
    /// `min-fresh=N`: require at least `N` seconds of remaining
    /// freshness.
    pub min_fresh: Option<DeltaSeconds>,
    /// `no-transform`: intermediaries must not transform the payload.
    pub no_transform: bool,
    /// `only-if-cached`: only a stored response is acceptable.
    pub only_if_cached: bool,
    /// Unrecognized directives, verbatim `name` or `name=value`, in
    /// the order they appeared.
    pub extensions: Vec<SmolStr>,
}

impl RequestDirectives {
    /// Parses one raw `Cache-Control` request header value.
    ///
    /// Fails atomically on any grammar violation; no partial directive
    /// set is ever returned.
    pub fn parse(raw: &str) -> Result<Self, DirectiveError> {
        parse_directives(raw, |directives: &mut Self, directive| {
            match directive.name.to_ascii_lowercase().as_str() {
                "no-store" => {
                    forbid_argument(&directive, DirectiveError::NoStoreNoArgs)?;
                    directives.no_store = true;
                }
                "no-cache" => {
                    forbid_argument(&directive, DirectiveError::NoCacheNoArgs)?;
                    directives.no_cache = true;
                }
                "max-age" => {
                    directives.max_age = Some(require_delta_seconds(
                        &directive,
                        DirectiveError::MaxAgeDeltaSeconds,
                    )?);
                }
                "max-stale" => {
                    directives.max_stale = Some(match directive.value.as_deref() {
                        None => MaxStale::Unbounded,
                        Some(value) => MaxStale::Limit(
                            DeltaSeconds::parse(value)
                                .ok_or(DirectiveError::MaxStaleDeltaSeconds)?,
                        ),
                    });
                }
                "min-fresh" => {
                    directives.min_fresh = Some(require_delta_seconds(
                        &directive,
                        DirectiveError::MinFreshDeltaSeconds,
                    )?);
                }
                "no-transform" => {
                    forbid_argument(&directive, DirectiveError::NoTransformNoArgs)?;
                    directives.no_transform = true;
                }
                "only-if-cached" => {
                    forbid_argument(&directive, DirectiveError::OnlyIfCachedNoArgs)?;
                    directives.only_if_cached = true;
                }
                _ => directives.extensions.push(directive.to_extension()),
            }
            Ok(())
        })
    }
}

impl FromStr for RequestDirectives {
    type Err = DirectiveError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        RequestDirectives::parse(raw)
    }
}
