use chrono::{Duration, NaiveDate, NaiveDateTime};
use fake::Fake;
use fake::faker::lorem::en::Word;
use rand::{Rng, RngCore};
use rand_chacha::ChaCha8Rng;

use auditseed_core::{FieldType, ValidationRules};

const DEFAULT_INT_MIN: i64 = 0;
const DEFAULT_INT_MAX: i64 = 99_999;
const DEFAULT_FLOAT_MIN: f64 = 0.0;
const DEFAULT_FLOAT_MAX: f64 = 99_999.0;
/// Window behind the reference instant from which "recent" dates are drawn.
const RECENT_WINDOW_SECS: i64 = 86_400;

/// Raw value produced for one cell before constraint enforcement.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Uuid(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl GeneratedValue {
    pub fn render(&self) -> String {
        match self {
            GeneratedValue::None => String::new(),
            GeneratedValue::Bool(value) => value.to_string(),
            GeneratedValue::Int(value) => value.to_string(),
            GeneratedValue::Float(value) => format!("{value:.2}"),
            GeneratedValue::Text(value) | GeneratedValue::Uuid(value) => value.clone(),
            GeneratedValue::Date(value) => value.format("%Y-%m-%d").to_string(),
            GeneratedValue::Timestamp(value) => value.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

/// Produce a raw typed value for one column in one row.
///
/// Numeric bounds come from the validation rules when present; the "recent"
/// date/datetime window is anchored to `reference` rather than the wall
/// clock so identically-seeded runs stay byte-identical across days.
pub fn generate_value(
    field_type: &FieldType,
    rules: &ValidationRules,
    reference: NaiveDateTime,
    rng: &mut ChaCha8Rng,
) -> GeneratedValue {
    match field_type {
        FieldType::Integer | FieldType::Bigint | FieldType::Double | FieldType::Decimal => {
            let min = rules
                .min_value
                .map(|value| value.ceil() as i64)
                .unwrap_or(DEFAULT_INT_MIN);
            let max = rules
                .max_value
                .map(|value| value.floor() as i64)
                .unwrap_or(DEFAULT_INT_MAX);
            // fractional bounds can invert after rounding to integers
            let max = max.max(min);
            GeneratedValue::Int(rng.random_range(min..=max))
        }
        FieldType::Float => {
            let min = rules.min_value.unwrap_or(DEFAULT_FLOAT_MIN);
            let max = rules.max_value.unwrap_or(DEFAULT_FLOAT_MAX);
            let value = rng.random_range(min..=max);
            GeneratedValue::Float((value * 100.0).round() / 100.0)
        }
        FieldType::Uuid => {
            let mut bytes = [0_u8; 16];
            rng.fill_bytes(&mut bytes);
            bytes[6] = (bytes[6] & 0x0f) | 0x40;
            bytes[8] = (bytes[8] & 0x3f) | 0x80;
            GeneratedValue::Uuid(uuid::Uuid::from_bytes(bytes).to_string())
        }
        FieldType::Boolean => GeneratedValue::Bool(rng.random_bool(0.5)),
        FieldType::Date => GeneratedValue::Date(recent_instant(reference, rng).date()),
        FieldType::DateTime => GeneratedValue::Timestamp(recent_instant(reference, rng)),
        FieldType::Varchar => {
            let word: String = Word().fake_with_rng(rng);
            GeneratedValue::Text(word)
        }
        FieldType::Unknown => GeneratedValue::None,
    }
}

fn recent_instant(reference: NaiveDateTime, rng: &mut ChaCha8Rng) -> NaiveDateTime {
    let offset = rng.random_range(0..RECENT_WINDOW_SECS);
    reference - Duration::seconds(offset)
}
