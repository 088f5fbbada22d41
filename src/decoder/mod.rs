//! GS1-128 payload decoding modules
//!
//! This module contains all the logic for turning a scanned payload into
//! typed AI values:
//! - Segmentation (prefix matching, fixed/variable slicing)
//! - Per-data-type value formatting
//! - The built-in GS1 definition table

/// Runtime knobs read once from the environment
pub mod config;
/// Per-data-type value conversion
pub mod format;
/// The segmentation loop and its owning type
pub mod segmenter;
/// Built-in GS1 Application Identifier table
pub mod tables;
