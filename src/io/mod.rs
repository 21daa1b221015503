//! Input/output operations, batch orchestration, and error handling

/// Command-line interface and batch processing
pub mod cli;
/// Pipeline constants and configuration defaults
pub mod configuration;
/// Error types for generation operations
pub mod error;
/// Texture loading and variation export
pub mod image;
/// Progress display for batch generation
pub mod progress;
