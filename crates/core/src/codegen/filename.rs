use chrono::NaiveDateTime;

use super::types::Language;

/// Base used when no prompt word survives filtering.
pub const FALLBACK_BASE: &str = "untitled";

/// Second-precision timestamp layout appended to every filename.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

const MAX_WORDS: usize = 4;

/// Derive the base of a filename from a prompt.
///
/// Takes the first four words of the lower-cased prompt and keeps only those
/// made entirely of alphanumeric characters.
pub fn filename_base(prompt: &str) -> String {
    prompt
        .to_lowercase()
        .split_whitespace()
        .take(MAX_WORDS)
        .filter(|word| word.chars().all(char::is_alphanumeric))
        .collect::<Vec<_>>()
        .join("_")
}

/// Build a vault filename: `<base>_<YYYYMMDD_HHMMSS><ext>`.
pub fn generate_filename(prompt: &str, language: Language, now: NaiveDateTime) -> String {
    let base = filename_base(prompt);
    let base = if base.is_empty() {
        FALLBACK_BASE
    } else {
        base.as_str()
    };

    format!(
        "{}_{}{}",
        base,
        now.format(TIMESTAMP_FORMAT),
        language.extension()
    )
}
