use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

/// Value decoded from one AI segment
///
/// Decimal stays a string: the conversion is a digit transformation, never
/// a float, so exact digits and trailing zeros survive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedValue {
    /// Integer AI content
    Integer(i64),
    /// Digit string with the implied decimal point inserted
    Decimal(String),
    /// Raw characters
    Text(String),
    /// Calendar date decoded from a six-digit slice
    Date(NaiveDate),
}

/// Decoded GS1-128 barcode
///
/// A pure value created fresh per parse call; serializes with the field
/// names the hosting application's scan flow expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ean128 {
    /// Decoded values keyed by AI code (last match wins per position)
    #[serde(rename = "AIs")]
    pub ais: HashMap<String, DecodedValue>,
    /// The scanned payload, verbatim
    #[serde(rename = "originalBarcode")]
    pub original_barcode: String,
}

impl Ean128 {
    /// Look up the decoded value for an AI code
    pub fn get(&self, ai_code: &str) -> Option<&DecodedValue> {
        self.ais.get(ai_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get() {
        let mut ais = HashMap::new();
        ais.insert("01".to_string(), DecodedValue::Text("12345678901234".to_string()));
        let barcode = Ean128 {
            ais,
            original_barcode: "0112345678901234".to_string(),
        };
        assert_eq!(
            barcode.get("01"),
            Some(&DecodedValue::Text("12345678901234".to_string()))
        );
        assert_eq!(barcode.get("17"), None);
    }

    #[test]
    fn test_serialized_shape() {
        let mut ais = HashMap::new();
        ais.insert("37".to_string(), DecodedValue::Integer(24));
        let barcode = Ean128 {
            ais,
            original_barcode: "3724".to_string(),
        };
        let json = serde_json::to_value(&barcode).unwrap();
        assert_eq!(json["AIs"]["37"], 24);
        assert_eq!(json["originalBarcode"], "3724");
    }
}
