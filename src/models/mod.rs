pub mod comments;
pub mod members;
pub mod portfolio;

/// Trim a required text field, returning `None` when nothing is left.
pub fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
