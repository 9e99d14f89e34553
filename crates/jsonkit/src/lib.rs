#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod value;

pub use crate::error::{Error, Result};
pub use crate::options::{DecodeOptions, EncodeOptions};
pub use crate::value::{Fields, JsonSerializable, Jsonable, Number, Value};

use std::io::{Read, Write};

use serde::de::DeserializeOwned;

/// Encodes a value with the default options: slashes and non-ASCII
/// characters are emitted unescaped.
pub fn encode(value: &Value) -> Result<String> {
    encode_with(value, &EncodeOptions::default())
}

pub fn encode_with(value: &Value, options: &EncodeOptions) -> Result<String> {
    crate::encode::encode_value_to_string(value, options)
}

/// Encodes a value so the result is safe to embed in an HTML document,
/// e.g. inside a `<script>` block. Uses a fixed option set in place of
/// the defaults; see [`EncodeOptions::html`].
pub fn html_encode(value: &Value) -> Result<String> {
    encode_with(value, &EncodeOptions::html())
}

pub fn encode_to_writer<W: Write>(
    mut writer: W,
    value: &Value,
    options: &EncodeOptions,
) -> Result<()> {
    let s = encode_with(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

/// Decodes JSON text into a [`Value`] with the default options (mapping
/// form, maximum nesting depth 512). Malformed or empty input is an
/// error, never a sentinel value.
pub fn decode(text: &str) -> Result<Value> {
    decode_with(text, &DecodeOptions::default())
}

pub fn decode_with(text: &str, options: &DecodeOptions) -> Result<Value> {
    crate::decode::decode_str(text, options)
}

/// Decodes JSON text straight into a caller-defined type.
pub fn decode_to<T: DeserializeOwned>(text: &str) -> Result<T> {
    crate::decode::decode_str_to(text)
}

pub fn decode_from_reader<R: Read>(reader: R, options: &DecodeOptions) -> Result<Value> {
    crate::decode::decode_from_reader(reader, options)
}
