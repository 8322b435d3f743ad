pub mod expiry;
pub mod format;
pub mod health_checks;
pub mod restriction;

pub use health_checks::*;
