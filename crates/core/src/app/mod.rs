pub mod commands;
pub mod queries;

// Re-exports
pub use commands::*;
pub use queries::*;
