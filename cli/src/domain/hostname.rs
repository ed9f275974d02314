//! Hostname and tunnel identifier value types, extraction and validation.
//!
//! Pure functions only: no I/O, no async.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::ValidationError;

/// Quick-tunnel hostname embedded anywhere in a text blob.
pub static QUICK_TUNNEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"[a-z0-9-]+\.trycloudflare\.com").expect("valid regex")
});

/// Quick-tunnel hostnames that belong to the service itself, never to a
/// tunnel. A failed quick-tunnel request logs the API endpoint.
pub const RESERVED_HOSTNAMES: &[&str] = &["api.trycloudflare.com"];

/// Any domain-shaped token whose last label starts with a letter, so
/// timestamps and version numbers are skipped.
pub static DOMAIN_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"[a-z0-9-]+(?:\.[a-z0-9-]+)*\.[a-z][a-z0-9-]*").expect("valid regex")
});

/// Accepted hostname shape: a lowercase label, a dot, then any
/// multi-label domain. Deliberately permissive so custom domains pass.
pub static HOSTNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9-]+\.[a-z0-9.-]+$").expect("valid regex")
});

// ── Hostname ─────────────────────────────────────────────────────────────────

/// A public hostname that passed format validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(String);

impl Hostname {
    /// Validates `raw` against the accepted hostname pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidHostname`] if `raw` does not match.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if HOSTNAME_RE.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValidationError::InvalidHostname(raw.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── TunnelId ─────────────────────────────────────────────────────────────────

/// Opaque tunnel identifier (UUID or tunnel name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TunnelId(String);

impl TunnelId {
    /// Returns `None` for empty or whitespace-only input.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TunnelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Extraction ───────────────────────────────────────────────────────────────

/// Which of several matches in a text blob to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPick {
    First,
    Last,
}

/// Finds hostnames in free-form tool output.
///
/// Always recognises quick-tunnel hostnames; a configured custom domain adds
/// `<label>.<custom-domain>`. Text the tunnel client prints about its own
/// tunnel is searched with [`HostnameMatcher::first_reported`], which without
/// a custom domain accepts any domain-shaped token.
#[derive(Debug, Clone)]
pub struct HostnameMatcher {
    custom: Option<Regex>,
}

impl HostnameMatcher {
    /// Matcher for quick-tunnel hostnames only.
    #[must_use]
    pub fn quick_tunnel() -> Self {
        Self { custom: None }
    }

    /// Matcher that also accepts hostnames under `domain`.
    ///
    /// An empty or invalid domain falls back to quick-tunnel matching.
    #[must_use]
    pub fn with_custom_domain(domain: Option<&str>) -> Self {
        let custom = domain
            .map(|d| d.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .and_then(|d| Regex::new(&format!(r"[a-z0-9-]+\.{}", regex::escape(&d))).ok());
        Self { custom }
    }

    /// Extracts one hostname from `text`, or `None` when nothing matches.
    #[must_use]
    pub fn extract(&self, text: &str, pick: MatchPick) -> Option<Hostname> {
        let mut spans = spans_of(&QUICK_TUNNEL_RE, text);
        if let Some(re) = &self.custom {
            spans.extend(spans_of(re, text));
        }
        pick_span(spans, pick)
    }

    #[must_use]
    pub fn first(&self, text: &str) -> Option<Hostname> {
        self.extract(text, MatchPick::First)
    }

    #[must_use]
    pub fn last(&self, text: &str) -> Option<Hostname> {
        self.extract(text, MatchPick::Last)
    }

    /// First hostname in output the tunnel client printed about its own
    /// tunnel (`tunnel info`, `tunnel list`, `route dns`).
    ///
    /// With a custom domain configured this is [`HostnameMatcher::first`].
    /// Without one, any domain-shaped token counts: named tunnels are routed
    /// through custom hostnames the matcher cannot know in advance.
    #[must_use]
    pub fn first_reported(&self, text: &str) -> Option<Hostname> {
        if self.custom.is_some() {
            return self.first(text);
        }
        pick_span(spans_of(&DOMAIN_TOKEN_RE, text), MatchPick::First)
    }
}

fn spans_of<'t>(re: &Regex, text: &'t str) -> Vec<(usize, &'t str)> {
    re.find_iter(text)
        .map(|m| (m.start(), m.as_str()))
        .filter(|(_, s)| !RESERVED_HOSTNAMES.contains(s))
        .collect()
}

fn pick_span(mut spans: Vec<(usize, &str)>, pick: MatchPick) -> Option<Hostname> {
    spans.sort_by_key(|(start, _)| *start);
    let picked = match pick {
        MatchPick::First => spans.first(),
        MatchPick::Last => spans.last(),
    };
    picked.and_then(|(_, s)| Hostname::parse(s).ok())
}

impl Default for HostnameMatcher {
    fn default() -> Self {
        Self::quick_tunnel()
    }
}

// ── Validation ───────────────────────────────────────────────────────────────

/// Validates a resolved hostname and the target username.
///
/// Only format problems fail here; whether the user exists or the service
/// runs is checked separately as advisory warnings.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidHostname`] or
/// [`ValidationError::EmptyUsername`].
pub fn validate(hostname: &str, username: &str) -> Result<(), ValidationError> {
    Hostname::parse(hostname)?;
    if username.trim().is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    Ok(())
}
