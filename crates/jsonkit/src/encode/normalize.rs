//! Pre-encode normalization: rewrites opaque objects into plain JSON
//! structures so the codec only ever sees null, booleans, numbers,
//! strings, arrays, and ordered objects.

use chrono::{DateTime, FixedOffset};

use crate::value::{Number, Value};

/// Rewrites `value` into a tree of plain JSON variants. Total; never fails.
///
/// Opaque objects resolve first, in priority order: a self-describing
/// value's replacement wins and is itself re-normalized from the top;
/// date-times and records become ordered mappings. Container entries are
/// then rewritten depth-first, children before the parent, while scalar
/// entries pass through untouched. On an already-plain tree the whole
/// pass is a structural no-op.
///
/// A date-time or record that yields no entries stays an empty `Object`,
/// so it encodes as `{}` where an empty `Array` encodes as `[]`.
pub fn process(value: &Value) -> Value {
    let mut value = match value {
        Value::Serializable(obj) => return process(&obj.json_serialize()),
        Value::DateTime(dt) => Value::Object(datetime_fields(dt)),
        Value::Record(obj) => Value::Object(obj.fields()),
        other => other.clone(),
    };

    match &mut value {
        Value::Array(items) => {
            for item in items {
                if !item.is_primitive() {
                    *item = process(item);
                }
            }
        }
        Value::Object(entries) => {
            for (_, entry) in entries {
                if !entry.is_primitive() {
                    *entry = process(entry);
                }
            }
        }
        _ => {}
    }

    value
}

/// Exports a date-time as its public field mapping. The layout matches
/// PHP's `DateTime` array export (`date`, `timezone_type`, `timezone`),
/// so output is interchangeable with PHP producers: a zero offset reports
/// the named `UTC` zone (type 3), anything else the `±HH:MM` offset
/// rendering (type 1).
fn datetime_fields(dt: &DateTime<FixedOffset>) -> Vec<(String, Value)> {
    let (timezone_type, timezone) = if dt.offset().local_minus_utc() == 0 {
        (3, "UTC".to_string())
    } else {
        (1, dt.offset().to_string())
    };
    vec![
        (
            "date".to_string(),
            Value::String(dt.format("%Y-%m-%d %H:%M:%S%.6f").to_string()),
        ),
        ("timezone_type".to_string(), Value::Number(Number::I64(timezone_type))),
        ("timezone".to_string(), Value::String(timezone)),
    ]
}
