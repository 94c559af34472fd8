use crate::modules::job_normalization::domain::services::pattern_registry::PatternRegistry;

/// Markup tags such as `<p>` or `<a href="...">`
pub const MARKUP_PATTERN: &str = r"<[^>]+>";

/// Anything that is not a word character, whitespace or basic punctuation
pub const DISALLOWED_CHARS_PATTERN: &str = r"[^\w\s\-.,;:()!?]";

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Strip markup and unusual characters, then collapse whitespace.
///
/// Idempotent: the output contains no `<`/`>`, no disallowed characters and
/// no whitespace runs, so a second pass changes nothing.
pub fn clean_text(registry: &PatternRegistry, text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let without_markup = registry.markup().replace_all(text, " ");
    let sanitized = registry.disallowed_chars().replace_all(&without_markup, "");
    collapse_whitespace(&sanitized)
}
