mod hash;
pub use hash::*;
mod json;
pub use json::*;
mod timer;
pub use timer::*;
