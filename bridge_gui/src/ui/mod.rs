//! UI module for the Bridge Deck Designer
//!
//! # Panel Structure
//! - `header` - Application title bar
//! - `input_panel` - Left card: four numeric fields + Calculate / Clear / Save JSON
//! - `results_panel` - Right card: five result rows + schematic canvas
//! - `modal` - Blocking alert overlay (validation errors, save feedback)
//!
//! # Shared Components
//! - `shared/schematic` - Canvas drawing for the bridge schematic

pub mod header;
pub mod input_panel;
pub mod modal;
pub mod results_panel;

pub mod shared;
