pub mod notify;

// Re-exports
pub use notify::*;
