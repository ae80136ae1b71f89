//! Command implementations

mod describe;

pub use describe::describe;
