//! Core library for the SPIO vault backend
//!
//! This crate implements the **Functional Core** of the backend, following the
//! Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`spio_core`** (this crate): Pure transformation functions with zero I/O
//! - **`spio`**: Model calls, vault writes, the sync process and the HTTP server
//!   (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: The clock is an argument, never read here
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`codegen`]: Prompts, model response cleanup, vault filenames and the
//!   request/response envelopes of the generation pipeline
//! - [`auth`]: Bearer credential checks
//! - [`sync`]: Parsing of the `sync-vault` command and its report
//! - [`paths`]: Lexical path resolution for configured directories
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use chrono::Local;
//! use spio_core::codegen::{extract_code, generate_filename, Language};
//!
//! let code = extract_code("```tsx\nexport const A = () => null;\n```");
//! let filename = generate_filename("a tiny component", Language::Tsx, Local::now().naive_local());
//!
//! assert_eq!(code, "export const A = () => null;");
//! assert!(filename.starts_with("a_tiny_component_"));
//! ```

pub mod auth;
pub mod codegen;
pub mod paths;
pub mod sync;
