//! GS1-128 payload segmentation
//!
//! Walks the scanned payload left to right, matching configured AI codes
//! as literal prefixes and slicing fixed- or variable-length values. A
//! scan either decodes completely or is rejected whole; identification
//! data is never surfaced partially.

use std::collections::HashMap;

use crate::decoder::config::max_parse_loops;
use crate::decoder::format::format_value;
use crate::decoder::tables::default_definitions;
use crate::models::{AiDefinition, Ean128};
use crate::{ParseError, Result};

/// Field separator between variable-length values (ASCII 29, `GS`)
pub const GS_SEPARATOR: char = '\u{1d}';

/// Segments scanned payloads against an owned table of AI definitions
///
/// Definitions are tried in table order at every cursor position; the
/// first literal-prefix match wins, so overlapping codes resolve by how
/// the configuration orders them.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    definitions: Vec<AiDefinition>,
}

impl Segmenter {
    /// Create a segmenter owning the given definition table
    ///
    /// An empty table is accepted; parsing with one reports
    /// [`ParseError::ConfigurationMissing`].
    pub fn new(definitions: Vec<AiDefinition>) -> Self {
        Self { definitions }
    }

    /// Create a segmenter from the built-in GS1 table
    pub fn with_default_table() -> Self {
        Self::new(default_definitions())
    }

    /// Replace the active definition table wholesale
    ///
    /// `&mut self` makes the swap single-writer; parses observe either the
    /// old table or the new one, never a mix.
    pub fn set_config(&mut self, definitions: Vec<AiDefinition>) {
        self.definitions = definitions;
    }

    /// The active definition table
    pub fn config(&self) -> &[AiDefinition] {
        &self.definitions
    }

    /// Decode a scanned payload into a mapping of AI code to typed value
    ///
    /// Matching is bounded by `MAX_PARSE_LOOPS` attempts; an unrecognized
    /// segment anywhere rejects the entire scan so a truncated AI cannot
    /// silently misattribute a quantity or lot number.
    pub fn parse(&self, code: &str) -> Result<Ean128> {
        if self.definitions.is_empty() {
            return Err(ParseError::ConfigurationMissing);
        }

        let mut ais = HashMap::new();
        let mut rest = code;
        let mut attempts = 0;

        while !rest.is_empty() {
            if attempts >= max_parse_loops() {
                return Err(ParseError::UnrecognizedSegment {
                    barcode: code.to_string(),
                });
            }
            attempts += 1;

            let Some(definition) = self
                .definitions
                .iter()
                .find(|d| rest.starts_with(d.ai_code.as_str()))
            else {
                #[cfg(debug_assertions)]
                eprintln!(
                    "SEGMENT: no AI matches with {} chars remaining",
                    rest.chars().count()
                );
                return Err(ParseError::UnrecognizedSegment {
                    barcode: code.to_string(),
                });
            };

            rest = &rest[definition.ai_code.len()..];
            let (raw, next) = if definition.is_fixed_length {
                split_fixed(rest, definition.content_length)
            } else {
                split_variable(rest)
            };
            rest = next;

            #[cfg(debug_assertions)]
            eprintln!("SEGMENT: AI {} -> {:?}", definition.ai_code, raw);

            let value = format_value(
                raw,
                definition.decimal_position.as_deref(),
                definition.data_type,
            );
            ais.insert(definition.ai_code.clone(), value);
        }

        Ok(Ean128 {
            ais,
            original_barcode: code.to_string(),
        })
    }
}

/// Take exactly `length` characters, or whatever remains of a truncated tail
fn split_fixed(rest: &str, length: usize) -> (&str, &str) {
    let end = rest
        .char_indices()
        .nth(length)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    rest.split_at(end)
}

/// Take up to the next GS separator, consuming the separator itself
fn split_variable(rest: &str) -> (&str, &str) {
    match rest.find(GS_SEPARATOR) {
        Some(i) => (&rest[..i], &rest[i + GS_SEPARATOR.len_utf8()..]),
        None => (rest, ""),
    }
}
