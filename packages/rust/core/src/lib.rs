//! Core pipeline and rendering for llmsgen.
//!
//! This crate ties together page collection, repository name resolution,
//! index and full-dump rendering, and artifact writing into the single
//! `generate` workflow.

pub mod assembler;
pub mod collector;
pub mod full;
pub mod index;
pub mod pipeline;
pub mod repo_name;
