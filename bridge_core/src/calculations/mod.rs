//! # Deck Calculations
//!
//! Calculation modules follow one pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> *Result` - Pure calculation function
//!
//! Validation lives on the input struct (`validate()`) and is the caller's
//! responsibility; the calculation functions assume valid input.
//!
//! ## Available Calculations
//!
//! - [`deck`] - Simplified beam-bridge deck (simply-supported, uniform load)

pub mod deck;

// Re-export commonly used types
pub use deck::{calculate, DeckInput, DeckResult};
