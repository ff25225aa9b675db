//! The generation loop: model → cleanup → filename → vault → sync.
//!
//! Each stage returns `Result<_, Error>`; callers decide how a failure is
//! reported (a `success: false` envelope for HTTP, an error for the CLI).

use crate::prelude::*;
use crate::state::AppState;
use crate::sync::SyncJob;
use crate::vault::write_to_vault;
use chrono::Local;
use spio_core::codegen::{
    build_chat_prompt, extract_code, generate_filename, is_generation_request, ChatResult,
    GenerationResult, Language,
};
use std::path::PathBuf;

/// A generated file that has been written to the vault.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub code: String,
    pub filename: String,
    pub filepath: PathBuf,
}

impl Artifact {
    pub fn into_result(self) -> GenerationResult {
        GenerationResult::generated(
            self.code,
            self.filename,
            self.filepath.display().to_string(),
        )
    }
}

/// Turn a pipeline outcome into the `/v1/generate` envelope.
pub fn generation_result(outcome: Result<Artifact, Error>) -> GenerationResult {
    match outcome {
        Ok(artifact) => artifact.into_result(),
        Err(e) => GenerationResult::failed(e.to_string()),
    }
}

/// Generate code for `prompt`, save it and schedule a vault sync.
pub async fn generate(
    state: &AppState,
    prompt: &str,
    language: Language,
) -> Result<Artifact, Error> {
    let reply = state.model.complete(prompt).await?;

    let code = extract_code(&reply);
    if code.is_empty() {
        return Err(Error::EmptyOutput);
    }

    let filename = generate_filename(prompt, language, Local::now().naive_local());
    let filepath = write_to_vault(&state.config.vault_dir, &code, &filename).await?;
    log::info!("Saved to: {}", filepath.display());

    log::info!("Triggering sync-vault...");
    state.sync.enqueue(SyncJob::new(&filename));

    Ok(Artifact {
        code,
        filename,
        filepath,
    })
}

/// Answer a chat message, generating a file when the message asks for one.
///
/// A generation request whose reply contains no code falls back to a
/// conversational answer.
pub async fn chat(state: &AppState, message: &str) -> Result<ChatResult, Error> {
    if is_generation_request(message) {
        match generate(state, message, Language::Tsx).await {
            Ok(artifact) => {
                return Ok(ChatResult::generated(
                    &artifact.filename,
                    artifact.filepath.display().to_string(),
                ))
            }
            Err(Error::EmptyOutput) => {
                log::info!("No code in model reply, answering conversationally")
            }
            Err(e) => return Err(e),
        }
    }

    let reply = state.model.complete(&build_chat_prompt(message)).await?;
    Ok(ChatResult::reply(reply))
}
