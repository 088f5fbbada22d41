//! Per-data-type value conversion
//!
//! Each AI definition names a data type; the raw slice the segmenter
//! extracts is converted here. A conversion that cannot apply falls back
//! to the raw characters instead of failing the whole scan.

use chrono::NaiveDate;

use crate::models::{DataType, DecodedValue};

/// Date format carried by GS1 date AIs: two-digit year, month, day
pub const DATE_FORMAT: &str = "yyMMdd";

/// Convert a raw value slice according to the definition's data type
///
/// `decimal_position` is the digit count right of the implied decimal
/// point, transported as a string by the definition metadata. A missing or
/// unparsable position leaves the value unchanged; so do non-numeric
/// Integer slices and malformed Date slices.
pub fn format_value(
    raw: &str,
    decimal_position: Option<&str>,
    data_type: DataType,
) -> DecodedValue {
    match data_type {
        DataType::Integer => match raw.parse::<i64>() {
            Ok(n) => DecodedValue::Integer(n),
            Err(_) => DecodedValue::Text(raw.to_string()),
        },
        DataType::Decimal => DecodedValue::Decimal(format_decimal(raw, decimal_position)),
        DataType::String => DecodedValue::Text(raw.to_string()),
        DataType::Date => match format_date(raw) {
            Some(date) => DecodedValue::Date(date),
            None => DecodedValue::Text(raw.to_string()),
        },
    }
}

/// Insert the implied decimal point `position` characters from the right
///
/// Positions that are absent, unparsable, zero, or larger than the value
/// leave it unchanged.
fn format_decimal(raw: &str, position: Option<&str>) -> String {
    let Some(position) = position else {
        return raw.to_string();
    };
    let Ok(digits) = position.trim().parse::<usize>() else {
        return raw.to_string();
    };
    let chars = raw.chars().count();
    if digits == 0 || digits > chars {
        return raw.to_string();
    }
    let split = raw
        .char_indices()
        .nth(chars - digits)
        .map(|(i, _)| i)
        .unwrap_or(raw.len());
    format!("{}.{}", &raw[..split], &raw[split..])
}

/// Decode a six-digit [`DATE_FORMAT`] slice; two-digit years land in 20xx
fn format_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = 2000 + raw[..2].parse::<i32>().ok()?;
    let month = raw[2..4].parse::<u32>().ok()?;
    let day = raw[4..6].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
