//! Form validation helpers shared by login and CRUD dialogs.
//!
//! Each helper returns `Some(message)` on failure so call sites can collect
//! the first error per field and render it inline.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// A non-empty value after trimming.
pub fn required(label: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{label} is required"))
    } else {
        None
    }
}

/// A plausible email: one `@` with a dot somewhere after it.
pub fn email(value: &str) -> Option<String> {
    let value = value.trim();
    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'));
    if valid { None } else { Some("enter a valid email address".to_owned()) }
}

/// A minimum length after trimming.
pub fn min_len(label: &str, value: &str, min: usize) -> Option<String> {
    if value.trim().chars().count() < min {
        Some(format!("{label} must be at least {min} characters"))
    } else {
        None
    }
}

/// A parseable, strictly positive amount (used for service rates).
pub fn positive_amount(label: &str, value: &str) -> Option<String> {
    match value.trim().parse::<f64>() {
        Ok(amount) if amount > 0.0 && amount.is_finite() => None,
        _ => Some(format!("{label} must be a positive number")),
    }
}

/// First failure among a field's checks, if any.
pub fn first_error(checks: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    checks.into_iter().flatten().next()
}
