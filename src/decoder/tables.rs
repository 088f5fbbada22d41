//! Built-in GS1 Application Identifier table
//!
//! The hosting application normally supplies its table from server
//! metadata; this compiled-in subset of the GS1 General Specification
//! identifiers makes the crate usable standalone.

use crate::models::{AiDefinition, DataType};

/// Default definitions covering the common GS1 identifiers
///
/// Matching takes the first literal-prefix hit in table order, so the
/// net-weight family 310n is listed before the count AIs 30 and 37.
pub fn default_definitions() -> Vec<AiDefinition> {
    let mut definitions = vec![
        // SSCC
        AiDefinition::fixed("00", 18, DataType::String),
        // GTIN of the trade item
        AiDefinition::fixed("01", 14, DataType::String).mark_default(),
        // GTIN of contained trade items
        AiDefinition::fixed("02", 14, DataType::String),
        // Batch or lot number
        AiDefinition::variable("10", DataType::String),
        // Production date
        AiDefinition::fixed("11", 6, DataType::Date),
        // Packaging date
        AiDefinition::fixed("13", 6, DataType::Date),
        // Best-before date
        AiDefinition::fixed("15", 6, DataType::Date),
        // Expiration date
        AiDefinition::fixed("17", 6, DataType::Date),
        // Serial number
        AiDefinition::variable("21", DataType::String),
    ];

    // Net weight in kg, 310n: the fourth digit is the implied decimal count
    for digits in 0..=5 {
        let mut definition = AiDefinition::fixed(&format!("310{digits}"), 6, DataType::Decimal)
            .decimal_position(digits);
        if digits == 3 {
            definition = definition.mark_default();
        }
        definitions.push(definition);
    }

    // Variable count of items
    definitions.push(AiDefinition::variable("30", DataType::Integer));
    // Count of trade items in a logistic unit
    definitions.push(AiDefinition::variable("37", DataType::Integer));

    definitions
}
