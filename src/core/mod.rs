// Public modules
pub mod config;
pub mod error;
pub mod executor;
pub mod generator;

// Re-export common types for convenience
pub use config::{BuildConfig, BuildEntry, BuildTypeBlock, ProjectFileType, DEFAULT_TARGET};
pub use error::{Error, Result};
pub use generator::{generate_commands, PathResolution};
