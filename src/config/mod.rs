//! Configuration module for Ticcle
//!
//! This module provides configuration management including:
//! - data directory resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::TicclePaths;
pub use settings::Settings;
