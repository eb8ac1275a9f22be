pub mod class;
pub mod macros;
pub mod params;
pub mod plan;

pub use class::*;
pub use params::*;
pub use plan::*;
