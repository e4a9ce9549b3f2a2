// Shared utilities
pub mod config;
pub mod error;
pub mod fs_utils;
pub mod logging;
pub mod output;
pub mod validation;
