//! File-name sanitizing

/// Reduces arbitrary text to a single safe path segment
pub trait Sanitize {
    /// Sanitize `input`; must be deterministic and idempotent
    fn sanitize(&self, input: &str) -> String;
}

/// Lowercase ASCII base-name sanitizer
///
/// Joining characters (`space & _ = + :`) become `-`, anything that is not an
/// ASCII letter, digit, `-` or `.` is removed, dash runs collapse to one and
/// dashes at either end are trimmed. The result may be empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseNameSanitizer;

impl Sanitize for BaseNameSanitizer {
    fn sanitize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            match c {
                ' ' | '&' | '_' | '=' | '+' | ':' | '-' => {
                    if !out.is_empty() && !out.ends_with('-') {
                        out.push('-');
                    }
                }
                c if c.is_ascii_alphanumeric() || c == '.' => out.push(c.to_ascii_lowercase()),
                _ => {}
            }
        }
        while out.ends_with('-') {
            out.pop();
        }
        out
    }
}
