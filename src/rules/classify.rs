//! Table-driven classification of an address: disposable, free provider,
//! role-based, spam trap. Pure and deterministic.

use super::tables::{
    DISPOSABLE_DOMAINS, FREE_EMAIL_DOMAINS, ROLE_BASED_LOCAL_PARTS, SPAM_TRAP_LOCAL_PARTS,
};
use crate::core::config::Config;
use once_cell::sync::Lazy;
use regex::RegexSet;
use std::collections::HashSet;

fn local_part_set(local_parts: &[&str]) -> RegexSet {
    let patterns = local_parts
        .iter()
        .map(|p| format!("(?i)^{}@", regex::escape(p)));
    RegexSet::new(patterns).expect("Built-in local-part patterns failed to compile. This is a bug.")
}

static ROLE_BASED_PATTERNS: Lazy<RegexSet> = Lazy::new(|| local_part_set(ROLE_BASED_LOCAL_PARTS));
static SPAM_TRAP_PATTERNS: Lazy<RegexSet> = Lazy::new(|| local_part_set(SPAM_TRAP_LOCAL_PARTS));

/// Flags produced by [`DomainClassifier::classify`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub is_disposable: bool,
    pub is_free_provider: bool,
    pub is_role_based: bool,
    pub is_spam_trap: bool,
}

/// Static tables plus any domains added through configuration.
#[derive(Debug, Clone, Default)]
pub struct DomainClassifier {
    extra_disposable: HashSet<String>,
    extra_free: HashSet<String>,
}

impl DomainClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            extra_disposable: config.extra_disposable_domains.clone(),
            extra_free: config.extra_free_domains.clone(),
        }
    }

    /// `domain` must already be lower-cased.
    pub fn is_disposable(&self, domain: &str) -> bool {
        DISPOSABLE_DOMAINS.contains(domain) || self.extra_disposable.contains(domain)
    }

    /// `domain` must already be lower-cased.
    pub fn is_free_provider(&self, domain: &str) -> bool {
        FREE_EMAIL_DOMAINS.contains(domain) || self.extra_free.contains(domain)
    }

    /// Role patterns are matched against the full address, case-insensitively.
    pub fn is_role_based(&self, email: &str) -> bool {
        ROLE_BASED_PATTERNS.is_match(email)
    }

    /// Spam-trap patterns are matched against the full address, case-insensitively.
    pub fn is_spam_trap(&self, email: &str) -> bool {
        SPAM_TRAP_PATTERNS.is_match(email)
    }

    pub fn classify(&self, email: &str, domain: &str) -> Classification {
        Classification {
            is_disposable: self.is_disposable(domain),
            is_free_provider: self.is_free_provider(domain),
            is_role_based: self.is_role_based(email),
            is_spam_trap: self.is_spam_trap(email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposable_and_free_lookups() {
        let c = DomainClassifier::new();
        assert!(c.is_disposable("mailinator.com"));
        assert!(c.is_disposable("mailinator42.com"));
        assert!(!c.is_disposable("gmail.com"));
        assert!(c.is_free_provider("gmail.com"));
        assert!(c.is_free_provider("hotmail.co.uk"));
        assert!(!c.is_free_provider("label-records.com"));
    }

    #[test]
    fn role_patterns_anchor_on_whole_local_part() {
        let c = DomainClassifier::new();
        assert!(c.is_role_based("info@example.com"));
        assert!(c.is_role_based("INFO@Example.com"));
        assert!(c.is_role_based("pr@label.io"));
        assert!(!c.is_role_based("information@example.com"));
        assert!(!c.is_role_based("jane.info@example.com"));
        assert!(!c.is_role_based("press.office@example.com"));
    }

    #[test]
    fn spam_trap_patterns() {
        let c = DomainClassifier::new();
        assert!(c.is_spam_trap("test@example.com"));
        assert!(c.is_spam_trap("noreply@anything.org"));
        assert!(c.is_spam_trap("No-Reply@shop.io"));
        assert!(c.is_spam_trap("mailer-daemon@mx.example.net"));
        assert!(!c.is_spam_trap("tester@example.com"));
        assert!(c.is_spam_trap("info@example.com"));
        assert!(c.is_spam_trap("Support@corp.io"));
        assert!(!c.is_spam_trap("press@example.com"));
    }

    #[test]
    fn pattern_metacharacters_are_literal() {
        let c = DomainClassifier::new();
        // '-' and '.' in table entries must not act as regex syntax.
        assert!(!c.is_spam_trap("noXreply@example.com"));
        assert!(c.is_spam_trap("do-not-reply@example.com"));
    }

    #[test]
    fn config_extends_tables() {
        let config = Config {
            extra_disposable_domains: ["burner.example".to_string()].into_iter().collect(),
            extra_free_domains: ["fanmail.example".to_string()].into_iter().collect(),
            ..Config::default()
        };
        let c = DomainClassifier::from_config(&config);
        let flags = c.classify("jo@burner.example", "burner.example");
        assert!(flags.is_disposable);
        assert!(!flags.is_free_provider);
        assert!(c.is_free_provider("fanmail.example"));
        assert!(c.is_disposable("yopmail.com"));
    }
}
