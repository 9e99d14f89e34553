//! Encoding pipeline: normalization, then serde_json emission through the
//! configured escape formatter.

pub mod escape;
pub mod normalize;

use serde::Serialize;

use crate::Result;
use crate::error::Error;
use crate::options::EncodeOptions;
use crate::value::Value;

pub fn encode_value_to_string(value: &Value, options: &EncodeOptions) -> Result<String> {
    let normalized = normalize::process(value);
    let json = to_json_value(&normalized)?;
    let mut buf = Vec::with_capacity(128);
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, escape::EscapeFormatter::new(options));
    json.serialize(&mut ser).map_err(Error::encode)?;
    String::from_utf8(buf).map_err(|err| Error::Encode {
        message: err.to_string(),
        source: None,
    })
}

/// Converts a normalized value into the codec's own tree. Fails on numbers
/// JSON cannot represent.
fn to_json_value(value: &Value) -> Result<serde_json::Value> {
    Ok(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => {
            let n = n.to_json_number().ok_or_else(|| Error::Encode {
                message: "NaN and Infinity are not valid JSON numbers".to_string(),
                source: None,
            })?;
            serde_json::Value::Number(n)
        }
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(to_json_value).collect::<Result<_>>()?)
        }
        Value::Object(entries) => {
            let mut map = serde_json::Map::with_capacity(entries.len());
            for (key, entry) in entries {
                map.insert(key.clone(), to_json_value(entry)?);
            }
            serde_json::Value::Object(map)
        }
        // Normalization precedes conversion, so opaque values only show up
        // here when a caller hands in an unprocessed subtree directly.
        Value::DateTime(_) | Value::Serializable(_) | Value::Record(_) => {
            return to_json_value(&normalize::process(value));
        }
    })
}
