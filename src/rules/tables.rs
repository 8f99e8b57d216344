//! Static classification tables: disposable and free-mail domains, and the
//! local-parts that mark role-based or spam-trap addresses.

use once_cell::sync::Lazy;
use std::collections::HashSet;

const DISPOSABLE_BASE: &[&str] = &[
    "10minutemail.com",
    "guerrillamail.com",
    "mailinator.com",
    "tempmail.com",
    "throwaway.com",
    "yopmail.com",
    "mailnesia.com",
    "sharklasers.com",
    "getairmail.com",
    "maildrop.cc",
    "mailinator.net",
    "spam4.me",
    "bccto.me",
    "chacuo.net",
    "dispostable.com",
    "fakeinbox.com",
    "tempr.email",
    "tmpeml.com",
    "tmpmail.org",
    "temp-mail.org",
    "mailmetrash.com",
    "trashmail.com",
    "spamgourmet.com",
    "mailnull.com",
    "mailcatch.com",
];

/// Numbered mailinator mirrors: mailinator2.com ..= mailinator100.com.
const MAILINATOR_MIRRORS: std::ops::RangeInclusive<u32> = 2..=100;

/// Known disposable / throwaway mail domains.
pub static DISPOSABLE_DOMAINS: Lazy<HashSet<String>> = Lazy::new(|| {
    DISPOSABLE_BASE
        .iter()
        .map(|d| d.to_string())
        .chain(MAILINATOR_MIRRORS.map(|n| format!("mailinator{}.com", n)))
        .collect()
});

/// Consumer mail providers; addresses here are not business addresses.
pub static FREE_EMAIL_DOMAINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "gmail.com",
        "yahoo.com",
        "hotmail.com",
        "outlook.com",
        "aol.com",
        "icloud.com",
        "protonmail.com",
        "mail.com",
        "live.com",
        "me.com",
        "mac.com",
        "msn.com",
        "ymail.com",
        "rocketmail.com",
        "fastmail.com",
        "gmx.com",
        "web.de",
        "t-online.de",
        "freenet.de",
        "arcor.de",
        "hotmail.co.uk",
        "hotmail.fr",
        "hotmail.it",
        "hotmail.es",
        "hotmail.de",
        "outlook.co.uk",
        "outlook.fr",
        "outlook.it",
        "outlook.es",
        "outlook.de",
        "yahoo.co.uk",
        "yahoo.fr",
        "yahoo.it",
        "yahoo.es",
        "yahoo.de",
        "gmail.co.uk",
        "gmail.fr",
        "gmail.it",
        "gmail.es",
        "gmail.de",
    ]
    .into_iter()
    .collect()
});

/// Local-parts naming a function rather than a person.
pub const ROLE_BASED_LOCAL_PARTS: &[&str] = &[
    "admin",
    "info",
    "contact",
    "hello",
    "hi",
    "sales",
    "marketing",
    "support",
    "help",
    "service",
    "team",
    "staff",
    "office",
    "reception",
    "frontdesk",
    "general",
    "enquiries",
    "inquiries",
    "questions",
    "feedback",
    "suggestions",
    "complaints",
    "billing",
    "accounts",
    "finance",
    "hr",
    "recruitment",
    "jobs",
    "careers",
    "press",
    "media",
    "pr",
    "publicity",
    "editorial",
    "editor",
    "news",
    "blog",
    "webmaster",
    "postmaster",
    "abuse",
    "spam",
    "security",
    "legal",
];

/// Local-parts that suggest a placeholder, system, or unattended mailbox.
/// Generic business roles appear here as well as in the role-based list.
pub const SPAM_TRAP_LOCAL_PARTS: &[&str] = &[
    "test",
    "demo",
    "example",
    "sample",
    "fake",
    "invalid",
    "noreply",
    "no-reply",
    "donotreply",
    "do-not-reply",
    "nobody",
    "null",
    "void",
    "empty",
    "spam",
    "junk",
    "trash",
    "garbage",
    "bounce",
    "bounces",
    "feedback",
    "complaints",
    "abuse",
    "postmaster",
    "mailer-daemon",
    "daemon",
    "root",
    "webmaster",
    "hostmaster",
    "administrator",
    "admin",
    "info",
    "contact",
    "sales",
    "marketing",
    "support",
    "help",
    "service",
    "team",
    "staff",
    "office",
];
