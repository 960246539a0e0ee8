//! Client for the JET OPS ground-operations assistant
//!
//! Turns flight records and apron images into prompts for Gemini and returns
//! shift briefings, safety inspections, chat answers and edited images.

pub mod ai;
pub mod error;
pub mod models;
pub mod ops;
pub mod prompts;

pub use error::{Error, Result};
