mod builder;
pub use builder::*;
mod error;
pub use error::*;
mod instance;
pub use instance::*;
mod reconstruct;
pub use reconstruct::*;
mod solution;
pub use solution::*;
mod table;
pub use table::*;
pub mod wavefront;
pub use wavefront::{Phase, Wavefront};
