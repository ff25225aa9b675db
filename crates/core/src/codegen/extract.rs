use regex::Regex;
use std::sync::LazyLock;

// Opening fence with an optional language hint, then the block body up to the
// first closing fence.
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[^\n`]*\n([\s\S]*?)```").expect("valid fence pattern"));

static UNTERMINATED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[^\n`]*\n([\s\S]*)$").expect("valid fence pattern"));

/// Extract clean source code from a model response.
///
/// Returns the trimmed body of the first fenced block when one is present,
/// otherwise the trimmed response. Later blocks are discarded.
pub fn extract_code(response: &str) -> String {
    if !response.contains("```") {
        return response.trim().to_string();
    }

    if let Some(body) = FENCED_BLOCK
        .captures(response)
        .or_else(|| UNTERMINATED_BLOCK.captures(response))
        .and_then(|captures| captures.get(1))
    {
        return body.as_str().trim().to_string();
    }

    response.trim().to_string()
}
