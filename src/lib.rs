//! ean128 - GS1-128 (EAN-128) barcode payload segmenter
//!
//! A pure Rust library that splits a scanned GS1-128 payload into a
//! mapping of Application Identifier -> typed value, driven by a
//! configurable table of AI definitions. Built for barcode-scan UI flows:
//! decoding is synchronous, allocation-light, and all-or-nothing.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Payload decoding modules (segmentation, value formatting, AI tables)
pub mod decoder;
/// Core data structures (AiDefinition, DecodedValue, Ean128)
pub mod models;

pub use decoder::config::MAX_PARSE_LOOPS;
pub use decoder::format::{DATE_FORMAT, format_value};
pub use decoder::segmenter::{GS_SEPARATOR, Segmenter};
pub use decoder::tables::default_definitions;
pub use models::{AiDefinition, DataType, DecodedValue, Ean128, definitions_from_json};

use thiserror::Error;

/// Errors reported by the segmenter
///
/// Both variants are ordinary values, never panics: the scan callback
/// feeding this library branches on them to re-prompt the operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No AI definition table has been supplied
    #[error("No configuration was supplied")]
    ConfigurationMissing,
    /// Some suffix of the payload matched no configured AI, or the
    /// matching bound ran out before the end of input
    #[error("{barcode} was scanned without any result")]
    UnrecognizedSegment {
        /// The full scanned payload, for diagnostics and re-scan prompts
        barcode: String,
    },
}

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, ParseError>;

/// Decode a payload against a definition table in one call
///
/// Convenience wrapper for hosts that do not keep a [`Segmenter`] around.
pub fn parse(code: &str, definitions: &[AiDefinition]) -> Result<Ean128> {
    Segmenter::new(definitions.to_vec()).parse(code)
}
