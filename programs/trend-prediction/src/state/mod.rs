pub mod proposal;
pub mod registry;

pub use proposal::*;
pub use registry::*;
