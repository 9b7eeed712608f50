//! Configuration and path management for cascade-cli

pub mod paths;
pub mod settings;

pub use paths::CascadePaths;
pub use settings::Settings;
