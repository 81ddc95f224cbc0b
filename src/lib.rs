pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod output;

pub use error::{PyramidError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
