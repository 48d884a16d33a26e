//! App identifier helpers.
//!
//! An app identifier is the normalized, lower-cased command name (or window
//! class prefix) used to match, exclude, and terminate an application.

/// Normalize a raw name into an app identifier.
///
/// Trims surrounding whitespace and lower-cases the name.
/// Returns `None` for names that are empty after trimming.
pub fn normalize(name: &str) -> Option<String> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Extract the app identifier from a `WM_CLASS` field.
///
/// Window managers report the class as `instance.class`
/// (e.g. `navigator.Firefox`); the instance prefix is the
/// stable per-app name.
pub fn class_prefix(class: &str) -> Option<String> {
    normalize(class.split('.').next().unwrap_or(""))
}

/// Capitalize the first character of an identifier.
///
/// Some apps register their process under the marketing name
/// (`Slack` rather than `slack`), so name-based kills retry with this form.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
