//! Pure pieces of the generation pipeline: prompts, response cleanup and
//! vault filenames.

pub mod extract;
pub mod filename;
pub mod prompt;
pub mod types;

pub use extract::extract_code;
pub use filename::generate_filename;
pub use prompt::{build_chat_prompt, build_prompt, is_generation_request};
pub use types::{ChatRequest, ChatResult, GenerationRequest, GenerationResult, Language};
