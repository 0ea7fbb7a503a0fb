pub mod participant;
pub mod registry;
pub mod pairing;
pub mod events;

// Re-exports for convenience
pub use participant::*;
pub use registry::*;
pub use pairing::*;
pub use events::*;
