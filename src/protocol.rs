mod precision;
pub mod reader;
pub mod temporal;
pub mod wire;

pub use precision::*;
