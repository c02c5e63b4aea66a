//! # foodie-core
//!
//! Core types shared across all FoodieFinds crates.
//!
//! - Entity structs for the two catalog tables (restaurants, dishes)
//! - The tri-state [`Flag`](flag::Flag) used to validate boolean-like query parameters
//! - Response envelopes serialised by the HTTP layer
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod flag;
pub mod responses;
