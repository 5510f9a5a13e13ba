//! Email shape check.
//!
//! This is a syntax approximation, not full RFC 5322:
//! - Local part: letters, digits and `. _ % + -`
//! - Exactly one `@`
//! - Dot-separated domain labels of up to 63 characters, hyphens only inside
//! - A top-level domain of at least two letters

use std::sync::LazyLock;

use regex::Regex;

pub static EMAIL_RX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9._%+-]+@(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$",
    )
    .expect("EMAIL_RX is a valid regex pattern")
});

pub fn is_email(value: &str) -> bool {
    crate::rules::matches(value, &EMAIL_RX)
}
