use serde::{Deserialize, Serialize};

/// Post-extraction conversion applied to a sliced AI value
///
/// Serialized with the PascalCase names the server metadata uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    /// Base-10 integer
    Integer,
    /// Digit string with an implied decimal point
    Decimal,
    /// Raw characters, unchanged
    String,
    /// Six digits, two-digit year then month then day
    Date,
}

/// One recognized Application Identifier
///
/// Field names on the wire follow the server metadata the hosting
/// application feeds in (`ai`, `contentLength`, `isFixedLength`, ...).
/// Extra metadata keys such as `id` or `eanTypeName` are ignored on
/// deserialization; the struct itself is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiDefinition {
    /// Literal prefix matched against the remaining input (e.g. "01", "3100")
    #[serde(rename = "ai")]
    pub ai_code: String,
    /// Characters occupied by the value when `is_fixed_length` is true
    #[serde(default)]
    pub content_length: usize,
    /// When false, the value runs to the next GS separator or end of input
    pub is_fixed_length: bool,
    /// Conversion applied to the sliced value
    pub data_type: DataType,
    /// Digits right of the implied decimal point (Decimal only), kept as
    /// the string the metadata transports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_position: Option<String>,
    /// At most one definition per logical AI family carries this flag
    #[serde(rename = "isdefault", default)]
    pub is_default: bool,
}

impl AiDefinition {
    /// Fixed-length definition: the value occupies exactly `content_length` characters
    pub fn fixed(ai_code: &str, content_length: usize, data_type: DataType) -> Self {
        Self {
            ai_code: ai_code.to_string(),
            content_length,
            is_fixed_length: true,
            data_type,
            decimal_position: None,
            is_default: false,
        }
    }

    /// Variable-length definition terminated by the GS separator
    pub fn variable(ai_code: &str, data_type: DataType) -> Self {
        Self {
            ai_code: ai_code.to_string(),
            content_length: 0,
            is_fixed_length: false,
            data_type,
            decimal_position: None,
            is_default: false,
        }
    }

    /// Set the implied decimal digit count
    pub fn decimal_position(mut self, digits: u32) -> Self {
        self.decimal_position = Some(digits.to_string());
        self
    }

    /// Mark this definition as the default of its AI family
    pub fn mark_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// Deserialize a JSON array of definitions in the server metadata shape
pub fn definitions_from_json(json: &str) -> serde_json::Result<Vec<AiDefinition>> {
    serde_json::from_str(json)
}
