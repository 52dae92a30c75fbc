pub mod section;
pub mod slot;

pub use section::*;
pub use slot::*;
