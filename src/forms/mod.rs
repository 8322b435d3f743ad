mod expiry;
mod restriction;

pub use expiry::*;
pub use restriction::*;
