// ============================================================================
// spark-collection - Core Module
// Constants, errors, index conversion and growth configuration
// ============================================================================

pub mod constants;
pub mod error;
pub mod policy;
pub mod position;

// Re-export commonly used items
pub use constants::*;
pub use error::{CollectionError, Operation, Result};
pub use policy::GrowthPolicy;
pub use position::Position;
