//! HTTP request handlers

pub mod analyze;
pub mod catalog;

pub use analyze::*;
pub use catalog::*;
