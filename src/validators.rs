use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_STRONG_PASSWORD_LEN: usize = 12;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// True when `data` is a well-formed JSON document.
pub fn json_validator(data: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(data).is_ok()
}

/// Structural email check. No DNS or mailbox lookup happens.
pub fn is_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// At least 12 characters with an uppercase letter, a lowercase letter, a
/// digit and a character that is neither letter nor digit.
pub fn is_strong_pass(password: &str) -> bool {
    if password.chars().count() < MIN_STRONG_PASSWORD_LEN {
        return false;
    }

    let has_upper = password.chars().any(char::is_uppercase);
    let has_lower = password.chars().any(char::is_lowercase);
    let has_digit = password.chars().any(char::is_numeric);
    let has_special = password.chars().any(|c| !c.is_alphanumeric());

    has_upper && has_lower && has_digit && has_special
}
