/// Core Module
///
/// Fundamental components of the access layer: the database handle with its
/// driver seam and query sugar, and the crate-wide error type.
pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{DaliteError, Result};
