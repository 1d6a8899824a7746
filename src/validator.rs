//! Pure predicates over raw form input.
//!
//! Nothing here touches the network or any state. The destination check
//! deliberately mirrors the loose pattern the web form has always used,
//! including bare `www.` hosts without a scheme and unanchored matching, so
//! inputs accepted or rejected today stay that way.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::FieldError;

/// Host label(s) up to the final dot. Both cases are spelled out instead of
/// `(?i)`, which would fold non-ASCII letters such as U+212A into `k`.
const HOST: &str = r"(?:[a-zA-Z0-9][a-zA-Z0-9-]+[a-zA-Z0-9]|[a-zA-Z0-9]+)\.";

/// At least two UTF-16 code units of non-whitespace, using the browser's
/// whitespace set: `U+FEFF` counts as space, `U+0085` does not, and a single
/// astral character is already two code units.
const TLD: &str = concat!(
    r"(?:[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]{2}",
    r"|[\x{10000}-\x{10FFFF}])",
);

const WWW: &str = r"[wW][wW][wW]\.";

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[hH][tT][tT][pP][sS]?://").unwrap());

static WWW_HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&[WWW, HOST, TLD].concat()).unwrap());

static HOST_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&["^", HOST, TLD].concat()).unwrap());

/// True iff the input contains a URL of the shape `http(s)://[www.]host.tld`
/// or `www.host.tld`.
///
/// Whitespace can never be part of a match, so surrounding whitespace is
/// irrelevant and the input is searched as given.
pub fn is_valid_destination(input: &str) -> bool {
    // `www.` hosts, with or without a scheme in front.
    if WWW_HOST_RE.is_match(input) {
        return true;
    }

    // Scheme followed by a host that does not itself start with `www`.
    SCHEME_RE.find_iter(input).any(|scheme| {
        let rest = &input[scheme.end()..];
        let starts_with_www = rest.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("www"));
        !starts_with_www && HOST_PREFIX_RE.is_match(rest)
    })
}

/// True iff the input is non-empty, only `a-z` and `-`, and has no hyphen at
/// either end.
pub fn is_valid_short_code(input: &str) -> bool {
    check_short_code(input).is_ok()
}

pub fn check_destination(input: &str) -> Result<(), FieldError> {
    if is_valid_destination(input) {
        Ok(())
    } else {
        Err(FieldError::DestinationFormat)
    }
}

/// Returns the first short-code rule the input breaks, in the order the
/// form reports them: empty, charset, hyphen boundary.
pub fn check_short_code(input: &str) -> Result<(), FieldError> {
    if input.is_empty() {
        return Err(FieldError::ShortCodeEmpty);
    }
    if !input.chars().all(|c| c.is_ascii_lowercase() || c == '-') {
        return Err(FieldError::ShortCodeCharset);
    }
    let trimmed = input.trim();
    if trimmed.starts_with('-') || trimmed.ends_with('-') {
        return Err(FieldError::ShortCodeHyphenBoundary);
    }
    Ok(())
}
