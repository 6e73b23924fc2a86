//! Shared test utilities for pipeline integration tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::*;
