use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Placeholder written instead of a sensitive value.
pub const REDACTED: &str = "[REDACTED]";

static SENSITIVE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(secret|token|passw(or)?d|api_?key|credential|private_?key)")
        .expect("sensitive key pattern is valid")
});

static SHARED: LazyLock<SecretScrubber> = LazyLock::new(SecretScrubber::new);

/// Scrubs sensitive data before it reaches a log line
#[derive(Clone)]
pub struct SecretScrubber {
    token_pattern: Regex,
    bearer_pattern: Regex,
    password_pattern: Regex,
}

impl SecretScrubber {
    pub fn new() -> Self {
        Self {
            // Match generic tokens
            token_pattern: Regex::new(r#"["']?(?:api_key|apikey|token|secret)["']?\s*[:=]\s*["']?([a-zA-Z0-9-_\.]{8,})["']?"#)
                .expect("token pattern is valid"),
            // Match Bearer tokens in Authorization headers
            bearer_pattern: Regex::new(r"Bearer\s+[a-zA-Z0-9-_\.]+")
                .expect("bearer pattern is valid"),
            // Match password fields
            password_pattern: Regex::new(r#"["']?password["']?\s*[:=]\s*["']?([^"'\s,}]+)["']?"#)
                .expect("password pattern is valid"),
        }
    }

    /// Process-wide instance, compiled once
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Whether values stored under `key` should never be logged
    pub fn is_sensitive_key(key: &str) -> bool {
        SENSITIVE_KEY.is_match(key)
    }

    /// Value of `key` as it may appear in a log line
    pub fn redact_value<'a>(&self, key: &str, value: &'a str) -> Cow<'a, str> {
        if Self::is_sensitive_key(key) {
            Cow::Borrowed(REDACTED)
        } else {
            self.scrub_message(value)
        }
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message<'a>(&self, message: &'a str) -> Cow<'a, str> {
        let scrubbed = replace(
            Cow::Borrowed(message),
            &self.bearer_pattern,
            "Bearer [TOKEN_REDACTED]",
        );
        let scrubbed = replace(scrubbed, &self.token_pattern, |caps: &regex::Captures| {
            let full_match = &caps[0];
            full_match.find([':', '=']).map_or_else(
                || REDACTED.to_string(),
                |pos| format!("{}{REDACTED}", &full_match[..=pos]),
            )
        });
        replace(scrubbed, &self.password_pattern, "password=[REDACTED]")
    }
}

fn replace<'a>(text: Cow<'a, str>, pattern: &Regex, replacement: impl regex::Replacer) -> Cow<'a, str> {
    if pattern.is_match(&text) {
        Cow::Owned(pattern.replace_all(&text, replacement).into_owned())
    } else {
        text
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
