//! Error types for directive grammar violations.

use thiserror::Error;

/// Error type for `Cache-Control` grammar violations.
///
/// Parsing is atomic: any of these errors means the whole header value
/// was rejected and no directive set was produced.
///
/// Only directives the grammar recognizes by name enforce an argument
/// shape. Unrecognized directives are captured verbatim as extensions
/// and can never fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveError {
    /// A quoted-string argument was opened but never closed.
    ///
    /// This aborts the whole parse, discarding directives already seen.
    #[error("missing closing quote in quoted-string argument")]
    QuoteMismatch,

    /// `max-age` requires a non-negative delta-seconds argument.
    #[error("max-age directive requires a delta-seconds argument")]
    MaxAgeDeltaSeconds,

    /// `s-maxage` requires a non-negative delta-seconds argument.
    #[error("s-maxage directive requires a delta-seconds argument")]
    SMaxAgeDeltaSeconds,

    /// `min-fresh` requires a non-negative delta-seconds argument.
    #[error("min-fresh directive requires a delta-seconds argument")]
    MinFreshDeltaSeconds,

    /// `max-stale` may be bare, but any argument present must be a
    /// non-negative delta-seconds value.
    #[error("max-stale directive requires an empty or delta-seconds argument")]
    MaxStaleDeltaSeconds,

    /// `no-cache` takes no argument on the request side.
    #[error("no-cache request directive does not take an argument")]
    NoCacheNoArgs,

    /// `no-store` takes no argument.
    #[error("no-store directive does not take an argument")]
    NoStoreNoArgs,

    /// `no-transform` takes no argument.
    #[error("no-transform directive does not take an argument")]
    NoTransformNoArgs,

    /// `only-if-cached` takes no argument.
    #[error("only-if-cached directive does not take an argument")]
    OnlyIfCachedNoArgs,

    /// `must-revalidate` takes no argument.
    #[error("must-revalidate directive does not take an argument")]
    MustRevalidateNoArgs,

    /// `public` takes no argument.
    #[error("public directive does not take an argument")]
    PublicNoArgs,

    /// `proxy-revalidate` takes no argument.
    #[error("proxy-revalidate directive does not take an argument")]
    ProxyRevalidateNoArgs,
}
