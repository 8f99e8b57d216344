//! RFC-leaning address syntax check.

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part of printable atext characters; domain of dot-separated labels,
/// each 1-63 alphanumerics/hyphens not starting or ending with a hyphen.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EMAIL_PATTERN).expect("Built-in email syntax pattern failed to compile. This is a bug.")
});

/// Returns whether `email` is syntactically acceptable. Never fails.
pub fn is_valid_format(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Splits a syntactically valid address into its lower-cased domain.
///
/// Returns `None` when there is no `@` or nothing follows it.
pub fn domain_of(email: &str) -> Option<String> {
    let (_, domain) = email.rsplit_once('@')?;
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for ok in [
            "user@example.com",
            "first.last@sub.example.co.uk",
            "o'brien+tag@label.io",
            "x@localhost",
            "UPPER@Example.COM",
        ] {
            assert!(is_valid_format(ok), "{ok} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "not-an-email",
            "",
            "@example.com",
            "user@",
            "user@-example.com",
            "user@example-.com",
            "user@exa mple.com",
            "user@@example.com",
            "user@example..com",
            "us er@example.com",
        ] {
            assert!(!is_valid_format(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn label_length_is_bounded() {
        let ok = format!("a@{}.com", "b".repeat(63));
        let too_long = format!("a@{}.com", "b".repeat(64));
        assert!(is_valid_format(&ok));
        assert!(!is_valid_format(&too_long));
    }

    #[test]
    fn domain_is_lowercased() {
        assert_eq!(domain_of("Me@MailInator.COM").as_deref(), Some("mailinator.com"));
        assert_eq!(domain_of("nodomain@"), None);
        assert_eq!(domain_of("plain"), None);
    }
}
