//! PII masking for log fields.
//!
//! Emails keep their first character and domain; long opaque runs
//! (JWTs, password hashes, hex ids) are replaced wholesale.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]+").unwrap()
});

// base64url, base64 and PHC characters; 16+ chars is never a word a human typed
static OPAQUE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"[A-Za-z0-9+/_$=.-]{16,}").unwrap()
});

pub const REDACTED_TOKEN: &str = "[REDACTED_TOKEN]";

/// Masks emails first, then opaque tokens.
pub fn redact(input: &str) -> String {
    let masked = EMAIL.replace_all(input, |caps: &Captures| {
        let full = &caps[0];
        match full.split_once('@') {
            Some((local, domain)) => {
                let first = local.chars().next().map(String::from).unwrap_or_default();
                format!("{first}***@{domain}")
            }
            None => full.to_string(),
        }
    });

    OPAQUE
        .replace_all(&masked, |caps: &Captures| {
            let run = &caps[0];
            // long dotted domain names survive; tokens always carry digits
            if run.contains('.') && !run.chars().any(|c| c.is_ascii_digit()) {
                run.to_string()
            } else {
                REDACTED_TOKEN.to_string()
            }
        })
        .into_owned()
}

/// Display wrapper that redacts on format.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
