//! # bridge_core - Bridge Deck Calculation Engine
//!
//! `bridge_core` holds everything in the Bridge Deck Designer that is pure
//! logic: the closed-form deck calculation, the schematic renderer, and the
//! JSON save path. All inputs and outputs are serde-serializable, and no
//! module here depends on a UI framework, so the whole crate is testable
//! headless.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: Input/output types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use bridge_core::calculations::deck::{calculate, DeckInput};
//!
//! let input = DeckInput::default();
//! input.validate().unwrap();
//! let result = calculate(&input);
//! assert_eq!(result.uniform_load_kn_per_m, 55.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The deck calculation (input, result, pure function)
//! - [`schematic`] - Pure renderer producing drawing primitives
//! - [`file_io`] - Write-only JSON save with atomic replace
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod schematic;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, DeckInput, DeckResult};
pub use errors::{BridgeError, BridgeResult};
pub use file_io::{save_record, SavedRecord};
