//! Core domain logic for the kriya session planner.
//!
//! This crate contains the fundamental types and logic for:
//! - Practices: the catalogue, learned marks, and ordering
//! - Combinations: suggesting sessions that fit a time budget

mod combination;
pub mod practice;
pub mod types;

pub use combination::{Combination, generate_combinations};
pub use practice::{Direction, Practice, default_practices, learned_practices};
pub use types::{PracticeId, PracticeOrigin, ValidationError};
