//! Decoding pipeline: strict serde_json parse plus depth-checked
//! conversion into [`Value`].

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::Result;
use crate::error::Error;
use crate::options::DecodeOptions;
use crate::value::{Number, Value};

pub fn decode_str(text: &str, options: &DecodeOptions) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_str(text).map_err(Error::decode)?;
    from_json_value(&json, options.max_depth)
}

pub fn decode_str_to<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(Error::decode)
}

pub fn decode_from_reader<R: Read>(mut reader: R, options: &DecodeOptions) -> Result<Value> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    decode_str(&text, options)
}

/// Converts the codec's tree into [`Value`], keeping document key order.
/// `depth` is the number of container levels still allowed below this
/// point; descending past it is a decode failure.
fn from_json_value(json: &serde_json::Value, depth: usize) -> Result<Value> {
    Ok(match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(Number::from(n)),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => {
            let below = descend(depth)?;
            Value::Array(
                items
                    .iter()
                    .map(|item| from_json_value(item, below))
                    .collect::<Result<_>>()?,
            )
        }
        serde_json::Value::Object(map) => {
            let below = descend(depth)?;
            let mut entries = Vec::with_capacity(map.len());
            for (key, entry) in map {
                entries.push((key.clone(), from_json_value(entry, below)?));
            }
            Value::Object(entries)
        }
    })
}

fn descend(depth: usize) -> Result<usize> {
    depth.checked_sub(1).ok_or_else(|| Error::Decode {
        message: "maximum nesting depth exceeded".to_string(),
        source: None,
    })
}
