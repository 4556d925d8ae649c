pub mod error;
pub mod feature_flags;

// WellNest domain modules (canonical locations for all counselling domain types)
pub mod case;
pub mod common;
pub mod goal;
pub mod resource;
pub mod session_note;

pub use error::*;
pub use feature_flags::*;

// Re-export all domain types
pub use case::*;
pub use common::*;
pub use goal::*;
pub use resource::*;
pub use session_note::*;
