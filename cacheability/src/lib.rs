#![warn(missing_docs)]
//! # cacheability
//!
//! Control-plane evaluation of HTTP response cacheability, after
//! RFC 7234. This crate answers two questions about a request/response
//! pair without storing or serving any bytes:
//!
//! - May this response be stored and reused at all? ([`policy::reasons`]
//!   returns the disqualifying [`Reason`]s; an empty list means yes.)
//! - If so, when does it expire? ([`freshness::expiration`] returns the
//!   explicit or heuristic expiration instant, if one exists.)
//!
//! The crate is protocol-type-free: directives are parsed from raw
//! header strings ([`RequestDirectives::parse`],
//! [`ResponseDirectives::parse`]) and the evaluation context
//! ([`CacheObject`]) is a plain aggregate the caller assembles. The
//! `cacheability-http` crate provides adapters over `http` types.
//!
//! Every operation is a pure function of its inputs plus a
//! caller-supplied "now"; nothing here reads the system clock, performs
//! I/O, or shares mutable state.
//!
//! ```
//! use cacheability::{
//!     CacheObject, Reason, ResponseContext, ResponseDirectives, policy, freshness,
//! };
//! use chrono::{TimeZone, Utc};
//!
//! let directives = ResponseDirectives::parse("private, max-age=300").unwrap();
//! let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
//! let object = CacheObject::new(ResponseContext::new(200, directives), now);
//!
//! // A shared cache may not store a private response.
//! assert_eq!(policy::reasons(&object), vec![Reason::ResponsePrivate]);
//!
//! // A private cache may, for the declared 300 seconds.
//! let object = object.private_cache();
//! assert!(policy::reasons(&object).is_empty());
//! assert_eq!(
//!     freshness::expiration(&object),
//!     Some(now + chrono::Duration::seconds(300)),
//! );
//! ```

pub mod context;
pub mod directive;
pub mod error;
pub mod freshness;
pub mod policy;
pub mod reason;

pub use context::{CacheObject, RequestContext, ResponseContext};
pub use directive::{DeltaSeconds, FieldNames, MaxStale, RequestDirectives, ResponseDirectives};
pub use error::DirectiveError;
pub use freshness::{HeuristicPolicy, expiration, expiration_with};
pub use policy::{cacheable_by_default, reasons};
pub use reason::Reason;
