//! Common types used across the SpiritEx client library.

pub mod common;

pub use common::*;
