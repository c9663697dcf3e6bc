//! Configuration module for Basket
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BasketPaths;
pub use settings::Settings;
