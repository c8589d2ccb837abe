//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Analyze one month of income and expenses
//! - `core` - Shared utilities (load_settings, load_models)
//! - `models` - Show and validate the configured models
//! - `serve` - Web server command

pub mod analyze;
pub mod core;
pub mod models;
pub mod serve;

// Re-export command functions for main.rs
pub use analyze::*;
pub use self::core::*;
pub use models::*;
pub use serve::*;
