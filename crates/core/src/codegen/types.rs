use serde::{Deserialize, Deserializer, Serialize};

/// Target language for a generated artifact.
///
/// Unknown tags and `null` deserialize to [`Language::Tsx`] instead of
/// failing, so a client sending `"python"` still gets a `.tsx` file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Language {
    #[default]
    Tsx,
    Ts,
    Js,
    Jsx,
    Md,
}

impl Language {
    /// Map a tag to a language, falling back to `tsx`. Tags are
    /// case-sensitive: `"JSX"` is unknown.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ts" => Language::Ts,
            "js" => Language::Js,
            "jsx" => Language::Jsx,
            "md" => Language::Md,
            _ => Language::Tsx,
        }
    }

    /// File extension including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Tsx => ".tsx",
            Language::Ts => ".ts",
            Language::Js => ".js",
            Language::Jsx => ".jsx",
            Language::Md => ".md",
        }
    }
}

impl From<Option<String>> for Language {
    fn from(tag: Option<String>) -> Self {
        tag.as_deref().map(Language::from_tag).unwrap_or_default()
    }
}

fn default_category() -> String {
    "Frontend".to_string()
}

fn category_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_category))
}

/// Body of `POST /v1/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The user's code generation prompt.
    pub prompt: String,
    /// Target language (tsx, ts, js, jsx, md).
    #[serde(default)]
    pub language: Language,
    /// Component category. Informational only.
    #[serde(default = "default_category", deserialize_with = "category_or_default")]
    pub category: String,
}

/// Envelope returned by `POST /v1/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    pub code: Option<String>,
    pub filename: Option<String>,
    pub filepath: Option<String>,
    pub message: String,
    pub error: Option<String>,
}

impl GenerationResult {
    pub fn generated(code: String, filename: String, filepath: String) -> Self {
        Self {
            success: true,
            message: format!("Successfully generated {filename}"),
            code: Some(code),
            filename: Some(filename),
            filepath: Some(filepath),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            code: None,
            filename: None,
            filepath: None,
            message: "Failed to generate code".to_string(),
            error: Some(error.into()),
        }
    }
}

/// Body of `POST /v1/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(rename = "conversationId", alias = "conversation_id", default)]
    pub conversation_id: Option<String>,
}

/// Envelope returned by `POST /v1/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResult {
    pub success: bool,
    pub response: String,
    pub code_generated: bool,
    pub filepath: Option<String>,
}

impl ChatResult {
    pub fn generated(filename: &str, filepath: String) -> Self {
        Self {
            success: true,
            response: format!("Generated {filename} and saved to vault!"),
            code_generated: true,
            filepath: Some(filepath),
        }
    }

    pub fn reply(response: String) -> Self {
        Self {
            success: true,
            response,
            code_generated: false,
            filepath: None,
        }
    }

    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            response: format!("System Error: {error}"),
            code_generated: false,
            filepath: None,
        }
    }
}
