//! `Cache-Control` directive grammar.
//!
//! Two grammar instantiations share one scanner: request directives
//! ([`RequestDirectives`]) and response directives
//! ([`ResponseDirectives`]). Recognized directive names enforce an
//! argument shape; everything else is captured verbatim as an
//! extension directive, so unknown directives never fail the parse.
//!
//! The scanner accepts directives separated by commas and/or
//! whitespace. Arguments are either tokens or quoted-strings with
//! backslash escaping; an unterminated quoted-string aborts the whole
//! parse and no directive set is produced.

mod request;
mod response;

pub use request::{MaxStale, RequestDirectives};
pub use response::ResponseDirectives;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::DirectiveError;

/// A non-negative count of seconds used as a directive argument.
///
/// Absence of a delta-seconds directive is always modeled as
/// `Option<DeltaSeconds>`; there is no in-band sentinel. Values beyond
/// `u32::MAX` seconds (about 136 years) are clamped, not rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct DeltaSeconds(u32);

impl DeltaSeconds {
    /// Returns the number of seconds.
    #[inline]
    pub const fn as_secs(self) -> u32 {
        self.0
    }

    /// Parses a directive argument as delta-seconds.
    ///
    /// Digits only: an empty value, a sign (so `-1` in particular), or
    /// any non-digit byte yields `None`. Overflow clamps to `u32::MAX`.
    pub(crate) fn parse(value: &str) -> Option<Self> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let secs = value
            .parse::<u64>()
            .map_or(u32::MAX, |v| v.min(u32::MAX as u64) as u32);
        Some(DeltaSeconds(secs))
    }
}

impl From<u32> for DeltaSeconds {
    fn from(secs: u32) -> Self {
        DeltaSeconds(secs)
    }
}

/// Field-name list carried by `private` and `no-cache` response
/// directives.
///
/// Preserves the order and spelling of the names as sent; membership
/// tests are ASCII-case-insensitive, since HTTP field names are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldNames(Vec<SmolStr>);

impl FieldNames {
    /// Splits a directive argument on commas into trimmed field names.
    ///
    /// A bare directive (no argument) produces an empty list; the
    /// directive itself is still considered present.
    pub(crate) fn from_argument(argument: &str) -> Self {
        let names = argument
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(SmolStr::new)
            .collect();
        FieldNames(names)
    }

    pub(crate) fn extend_from(&mut self, other: FieldNames) {
        for name in other.0 {
            if !self.contains(&name) {
                self.0.push(name);
            }
        }
    }

    /// ASCII-case-insensitive membership test.
    pub fn contains(&self, field_name: &str) -> bool {
        self.0
            .iter()
            .any(|name| name.eq_ignore_ascii_case(field_name))
    }

    /// Number of field names in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the directive appeared bare, with no field names.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the field names in the order they appeared.
    pub fn iter(&self) -> impl Iterator<Item = &SmolStr> {
        self.0.iter()
    }
}

/// One raw directive as produced by the scanner, before the grammar
/// assigns it a meaning.
#[derive(Debug)]
struct RawDirective<'a> {
    name: &'a str,
    value: Option<Cow<'a, str>>,
}

impl RawDirective<'_> {
    /// Renders the directive back to `name` or `name=value` form for
    /// extension capture. Quoted-string values are already unescaped.
    fn to_extension(&self) -> SmolStr {
        match &self.value {
            Some(value) => SmolStr::new(format!("{}={}", self.name, value)),
            None => SmolStr::new(self.name),
        }
    }
}

const fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b',')
}

/// Cursor over one raw header value.
///
/// Yields directives until exhausted. Failure is atomic at the caller:
/// the first `Err` discards everything scanned so far.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    fn next_directive(&mut self) -> Result<Option<RawDirective<'a>>, DirectiveError> {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && is_delimiter(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos == bytes.len() {
            return Ok(None);
        }

        let start = self.pos;
        while self.pos < bytes.len() && !is_delimiter(bytes[self.pos]) && bytes[self.pos] != b'=' {
            self.pos += 1;
        }
        let name = &self.input[start..self.pos];

        if self.pos < bytes.len() && bytes[self.pos] == b'=' {
            self.pos += 1;
            let value = if self.pos < bytes.len() && bytes[self.pos] == b'"' {
                self.quoted_string()?
            } else {
                self.token()
            };
            Ok(Some(RawDirective {
                name,
                value: Some(value),
            }))
        } else {
            Ok(Some(RawDirective { name, value: None }))
        }
    }

    /// Consumes a quoted-string argument, unescaping backslashes.
    ///
    /// The backslash escapes whichever character follows it. Reaching
    /// the end of input before the closing quote is a fatal
    /// [`DirectiveError::QuoteMismatch`].
    fn quoted_string(&mut self) -> Result<Cow<'a, str>, DirectiveError> {
        self.pos += 1;
        let mut unescaped = String::new();
        let mut escaped = false;
        for (offset, ch) in self.input[self.pos..].char_indices() {
            if escaped {
                unescaped.push(ch);
                escaped = false;
                continue;
            }
            match ch {
                '\\' => escaped = true,
                '"' => {
                    self.pos += offset + 1;
                    return Ok(Cow::Owned(unescaped));
                }
                _ => unescaped.push(ch),
            }
        }
        Err(DirectiveError::QuoteMismatch)
    }

    /// Consumes an unquoted argument value.
    ///
    /// Unlike directive names, values run to the next whitespace:
    /// commas inside a value are data (`private=Set-Cookie,Request-Id`
    /// is one directive carrying two field names). A trailing comma is
    /// the list separator (`max-age=20, public`), not part of the
    /// value, and is stripped.
    fn token(&mut self) -> Cow<'a, str> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos] != b' ' && bytes[self.pos] != b'\t' {
            self.pos += 1;
        }
        Cow::Borrowed(self.input[start..self.pos].trim_end_matches(','))
    }
}

/// Runs `apply` over every directive in `raw`, accumulating into a
/// default-initialized structure. Shared by both grammar variants.
fn parse_directives<T, F>(raw: &str, mut apply: F) -> Result<T, DirectiveError>
where
    T: Default,
    F: FnMut(&mut T, RawDirective<'_>) -> Result<(), DirectiveError>,
{
    let mut scanner = Scanner::new(raw);
    let mut directives = T::default();
    while let Some(directive) = scanner.next_directive()? {
        apply(&mut directives, directive)?;
    }
    Ok(directives)
}

/// Enforces that a boolean directive carries no argument.
fn forbid_argument(
    directive: &RawDirective<'_>,
    error: DirectiveError,
) -> Result<(), DirectiveError> {
    if directive.value.is_some() {
        Err(error)
    } else {
        Ok(())
    }
}

/// Enforces a mandatory delta-seconds argument.
fn require_delta_seconds(
    directive: &RawDirective<'_>,
    error: DirectiveError,
) -> Result<DeltaSeconds, DirectiveError> {
    directive
        .value
        .as_deref()
        .and_then(DeltaSeconds::parse)
        .ok_or(error)
}
