//! izgood built-in checks
//!
//! Ready-made check functions for izgood rules. Every check treats an absent
//! value as invalid.

pub mod email;
pub mod numeric;
pub mod presence;
pub mod string;

// Re-export all checks
pub use email::*;
pub use numeric::*;
pub use presence::*;
pub use string::*;
