/// Instructions prepended to every model call.
pub const SYSTEM_PREAMBLE: &str = "\
You are SPIO OS AI - an expert code generator.
Generate clean, production-ready React/TypeScript code.
Always include proper imports, types, and exports.
Use Tailwind CSS for styling.
Use Framer Motion for animations.
Follow the existing code patterns in SPIO OS.

Output ONLY the code, no explanations or markdown fences.";

/// Words that mark a chat message as a request to generate code.
pub const GENERATION_KEYWORDS: [&str; 10] = [
    "create",
    "generate",
    "make",
    "build",
    "write",
    "component",
    "form",
    "button",
    "card",
    "modal",
];

/// Build the full prompt sent to the model for a user request.
pub fn build_prompt(request: &str) -> String {
    format!("{SYSTEM_PREAMBLE}\n\nUser request: {request}")
}

/// Wrap a conversational chat message so the model keeps its answer short.
pub fn build_chat_prompt(message: &str) -> String {
    format!("Answer concisely: {message}")
}

/// Whether a chat message asks for code rather than an answer.
///
/// Matches on substrings, so "remake" and "buttons" count too.
pub fn is_generation_request(message: &str) -> bool {
    let lowered = message.to_lowercase();
    GENERATION_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
