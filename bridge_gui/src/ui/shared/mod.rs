//! Shared UI components
//!
//! Contains:
//! - `schematic` - Canvas drawing for the bridge schematic

pub mod schematic;
