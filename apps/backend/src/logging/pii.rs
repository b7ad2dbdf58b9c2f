//! Redaction of emails and opaque tokens before they reach the logs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

fn email_regex() -> &'static Regex {
    static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
    });
    &EMAIL
}

/// Base64/base64url runs of 16+ chars, which covers JWT segments.
fn token_regex() -> &'static Regex {
    static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9+/_\-]{16,}={0,2}").unwrap()
    });
    &TOKEN
}

/// Masks email local parts to their first character and replaces long
/// opaque tokens with `[REDACTED_TOKEN]`. Emails are handled first.
pub fn redact(input: &str) -> String {
    let emails_masked = email_regex().replace_all(input, |caps: &regex::Captures| {
        let m = &caps[0];
        match m.split_once('@') {
            Some((local, domain)) if !local.is_empty() => {
                let first: String = local.chars().take(1).collect();
                format!("{first}***@{domain}")
            }
            _ => m.to_string(),
        }
    });

    token_regex()
        .replace_all(&emails_masked, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Redacts on Display and Debug, for use in `tracing` fields.
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
