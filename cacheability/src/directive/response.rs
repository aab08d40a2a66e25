//! Response-side `Cache-Control` grammar.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::{DeltaSeconds, FieldNames, forbid_argument, parse_directives, require_delta_seconds};
use crate::error::DirectiveError;

/// Parsed response-side `Cache-Control` directives.
///
/// `no-cache` and `private` distinguish "absent" from "present with an
/// empty field-name list": `Some(FieldNames)` with an empty list is a
/// bare directive applying to the whole response.
///
/// An empty or whitespace-only header value parses to the default:
/// every flag `false`, every optional directive absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDirectives {
    /// `no-store`: the response must not be stored by any cache.
    pub no_store: bool,
    /// `no-cache` / `no-cache="field, ..."`: revalidate before use,
    /// or strip the named fields when serving from cache.
    pub no_cache: Option<FieldNames>,
    /// `no-transform`: intermediaries must not transform the payload.
    pub no_transform: bool,
    /// `must-revalidate`: once stale, revalidate before reuse.
    pub must_revalidate: bool,
    /// `proxy-revalidate`: like `must-revalidate`, shared caches only.
    pub proxy_revalidate: bool,
    /// `public`: explicitly cacheable even where it otherwise would
    /// not be.
    pub public: bool,
    /// `private` / `private="field, ..."`: for a single user only,
    /// or only the named fields are.
    pub private: Option<FieldNames>,
    /// `max-age=N`: fresh for `N` seconds from generation.
    pub max_age: Option<DeltaSeconds>,
    /// `s-maxage=N`: overrides `max-age` for shared caches.
    pub s_maxage: Option<DeltaSeconds>,
    /// Unrecognized directives, verbatim `name` or `name=value`, in
    /// the order they appeared.
    pub extensions: Vec<SmolStr>,
}

impl ResponseDirectives {
    /// Parses one raw `Cache-Control` response header value.
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
                    let names = directive
                        .value
                        .as_deref()
                        .map(FieldNames::from_argument)
                        .unwrap_or_default();
                    merge_field_names(&mut directives.no_cache, names);
                }
                "no-transform" => {
                    forbid_argument(&directive, DirectiveError::NoTransformNoArgs)?;
                    directives.no_transform = true;
                }
                "must-revalidate" => {
                    forbid_argument(&directive, DirectiveError::MustRevalidateNoArgs)?;
                    directives.must_revalidate = true;
                }
                "proxy-revalidate" => {
                    forbid_argument(&directive, DirectiveError::ProxyRevalidateNoArgs)?;
                    directives.proxy_revalidate = true;
                }
                "public" => {
                    forbid_argument(&directive, DirectiveError::PublicNoArgs)?;
                    directives.public = true;
                }
                "private" => {
                    let names = directive
                        .value
                        .as_deref()
                        .map(FieldNames::from_argument)
                        .unwrap_or_default();
                    merge_field_names(&mut directives.private, names);
                }
                "max-age" => {
                    directives.max_age = Some(require_delta_seconds(
                        &directive,
                        DirectiveError::MaxAgeDeltaSeconds,
                    )?);
                }
                "s-maxage" => {
                    directives.s_maxage = Some(require_delta_seconds(
                        &directive,
                        DirectiveError::SMaxAgeDeltaSeconds,
                    )?);
                }
                _ => directives.extensions.push(directive.to_extension()),
            }
            Ok(())
        })
    }

    /// Whether a `no-cache` directive appeared, bare or with fields.
    pub fn no_cache_present(&self) -> bool {
        self.no_cache.is_some()
    }

    /// Whether a `private` directive appeared, bare or with fields.
    pub fn private_present(&self) -> bool {
        self.private.is_some()
    }
}

/// Repeated `no-cache` / `private` directives accumulate their
/// field-name lists rather than replacing one another.
fn merge_field_names(slot: &mut Option<FieldNames>, names: FieldNames) {
    match slot {
        Some(existing) => existing.extend_from(names),
        None => *slot = Some(names),
    }
}

impl FromStr for ResponseDirectives {
    type Err = DirectiveError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        ResponseDirectives::parse(raw)
    }
}
