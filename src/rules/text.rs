/// `true` when `text` is absent or the empty string.
///
/// Whitespace counts as content.
#[must_use]
pub fn is_null_or_empty(text: Option<&str>) -> bool {
    text.is_none_or(str::is_empty)
}
