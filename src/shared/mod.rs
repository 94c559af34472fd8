// Shared kernel: cross-cutting error types and utilities

pub mod errors; // Shared error types
pub mod utils; // Logging

pub use errors::{AppError, AppResult};
