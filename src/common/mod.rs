//! Common infrastructure modules shared across the chart analyses
//!
//! This module provides reusable infrastructure for:
//! - Delivery and cleaned-table data structures
//! - Count tables and ASCII table formatting
//! - Color palettes
//! - Chart primitives (bar, line, pie, heatmap)

pub mod buckets;
pub mod data_structures;
pub mod palette;
pub mod plots;

// Re-export commonly used items
pub use data_structures::{BallProgress, CleanDelivery, Delivery, InningsTable};
pub use plots::PlotError;
