pub mod core;
pub mod math;
pub mod shape;

pub use math::*;
