pub mod descriptors;
pub mod error;
pub mod filesystem;

pub use descriptors::*;
pub use error::*;
pub use filesystem::*;
