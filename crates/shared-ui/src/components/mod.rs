pub mod link;

// Re-exports for convenience
pub use link::*;
