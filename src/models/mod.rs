mod expiry;
mod plan;

pub use expiry::*;
pub use plan::*;
