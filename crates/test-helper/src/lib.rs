//! # Test Helper
//! In-memory display providers and logging setup shared by the tests and demos.
//!

#![allow(missing_docs)]

extern crate alloc;

pub mod fake;
pub mod logger;

pub use fake::{FakeDirectory, FakeDisplay, FakeHost, FakeModule, Mode};
