//! Forge 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `forge_2048::{core,input,term,types}`
//! and hosts the application-level pieces used by the binary: environment
//! configuration, the best-score file and log setup.

pub use forge_2048_core as core;
pub use forge_2048_input as input;
pub use forge_2048_term as term;
pub use forge_2048_types as types;

pub mod config;
pub mod logging;
pub mod store;

pub use config::AppConfig;
pub use store::JsonScoreStore;
