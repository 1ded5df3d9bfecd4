//! Shared types, error model, and configuration for llmsgen.
//!
//! This crate is the foundation depended on by all other llmsgen crates.
//! It provides:
//! - [`LlmsGenError`]: the unified error type
//! - Domain types ([`Page`], [`SkippedFile`], [`Metadata`])
//! - Configuration ([`GeneratorConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    DEFAULT_FULL_FILE, DEFAULT_INDEX_FILE, DEFAULT_LINK_PREFIX, GeneratorConfig, OutputConfig,
    load_config, load_config_from,
};
pub use error::{LlmsGenError, Result};
pub use types::{DEFAULT_PAGE_TYPE, Metadata, OVERVIEW_PAGE_TYPE, Page, SkippedFile};
