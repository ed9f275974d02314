//! Property-based tests for hostname validation, extraction and config
//! validation.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use reach_cli::domain::config::{VALID_CONFIG_KEYS, validate_config_key, validate_config_value};
use reach_cli::domain::error::ValidationError;
use reach_cli::domain::hostname::{Hostname, HostnameMatcher, validate};

// ============================================================================
// validate() property tests
// ============================================================================

proptest! {
    /// `<label>.<domain>` with allowed characters always validates.
    #[test]
    fn prop_well_formed_hostnames_accepted(
        label in "[a-z0-9-]{1,20}",
        domain in "[a-z0-9.-]{1,30}",
    ) {
        let hostname = format!("{label}.{domain}");
        prop_assert!(validate(&hostname, "jules").is_ok(), "rejected {}", hostname);
    }

    /// Hostnames without a dot are rejected.
    #[test]
    fn prop_dotless_hostnames_rejected(label in "[a-z0-9-]{1,30}") {
        prop_assert_eq!(
            validate(&label, "jules"),
            Err(ValidationError::InvalidHostname(label.clone()))
        );
    }

    /// Any uppercase letter makes a hostname invalid.
    #[test]
    fn prop_uppercase_rejected(
        head in "[a-z0-9-]{0,10}",
        upper in "[A-Z]",
        tail in "[a-z0-9-]{0,10}",
    ) {
        let hostname = format!("{head}{upper}{tail}.trycloudflare.com");
        prop_assert!(validate(&hostname, "jules").is_err());
    }

    /// Blank usernames fail even with a valid hostname.
    #[test]
    fn prop_blank_username_rejected(user in "[ \t]{0,5}") {
        prop_assert_eq!(
            validate("abc.trycloudflare.com", &user),
            Err(ValidationError::EmptyUsername)
        );
    }
}

// ============================================================================
// HostnameMatcher property tests
// ============================================================================

proptest! {
    /// Whatever the matcher extracts passes validation.
    #[test]
    fn prop_extracted_hostnames_always_validate(text in "[ -~\n]{0,200}") {
        let matcher = HostnameMatcher::with_custom_domain(Some("example.org"));
        if let Some(hostname) = matcher.first(&text) {
            prop_assert!(validate(hostname.as_str(), "jules").is_ok());
        }
        if let Some(hostname) = matcher.last(&text) {
            prop_assert!(validate(hostname.as_str(), "jules").is_ok());
        }
        if let Some(hostname) = HostnameMatcher::quick_tunnel().first_reported(&text) {
            prop_assert!(validate(hostname.as_str(), "jules").is_ok());
        }
    }

    /// A quick-tunnel hostname embedded in log noise is found intact.
    #[test]
    fn prop_embedded_quick_tunnel_found(
        prefix in "[A-Z :/|]{0,20}",
        label in "[a-z0-9-]{1,20}",
        suffix in "[ |\n]{0,10}",
    ) {
        prop_assume!(label != "api");
        let expected = format!("{label}.trycloudflare.com");
        let text = format!("{prefix}https://{expected}{suffix}");
        let found = HostnameMatcher::quick_tunnel().first(&text);
        prop_assert_eq!(found, Some(Hostname::parse(&expected).expect("valid")));
    }

    /// First and last picks return the first and last occurrence.
    #[test]
    fn prop_first_and_last_pick_order(
        a in "[a-z0-9-]{1,12}",
        b in "[a-z0-9-]{1,12}",
    ) {
        prop_assume!(a != "api" && b != "api");
        let text = format!("INF https://{a}.trycloudflare.com\nINF https://{b}.trycloudflare.com\n");
        let matcher = HostnameMatcher::quick_tunnel();
        let first = matcher.first(&text).expect("first");
        let last = matcher.last(&text).expect("last");
        prop_assert_eq!(first.as_str(), format!("{a}.trycloudflare.com"));
        prop_assert_eq!(last.as_str(), format!("{b}.trycloudflare.com"));
    }
}

// ============================================================================
// validate_config_key() and validate_config_value() property tests
// ============================================================================

proptest! {
    /// Arbitrary keys outside the whitelist are rejected.
    #[test]
    fn prop_arbitrary_keys_rejected(key in "[a-z]{1,20}\\.[a-z]{1,20}") {
        if !VALID_CONFIG_KEYS.contains(&key.as_str()) {
            prop_assert!(validate_config_key(&key).is_err(), "accepted invalid key: {key}");
        }
    }

    /// `resolve.attempts` accepts exactly 1..=20.
    #[test]
    fn prop_attempts_range(n in 0u32..100) {
        let result = validate_config_value("resolve.attempts", &n.to_string());
        prop_assert_eq!(result.is_ok(), (1..=20).contains(&n));
    }

    /// `resolve.delay_secs` accepts exactly 0..=60.
    #[test]
    fn prop_delay_range(n in 0u64..200) {
        let result = validate_config_value("resolve.delay_secs", &n.to_string());
        prop_assert_eq!(result.is_ok(), n <= 60);
    }
}

#[test]
fn test_every_whitelisted_key_is_accepted() {
    for key in VALID_CONFIG_KEYS {
        assert!(validate_config_key(key).is_ok(), "rejected {key}");
    }
}
