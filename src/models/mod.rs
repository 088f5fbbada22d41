pub mod barcode;
pub mod definition;

pub use barcode::{DecodedValue, Ean128};
pub use definition::{AiDefinition, DataType, definitions_from_json};
