use jsonkit::{DecodeOptions, Error, Value, decode, decode_to, decode_with};
use serde_json::error::Category;

#[test]
fn decode_object_into_ordered_mapping() -> Result<(), Box<dyn std::error::Error>> {
    let value = decode("{\"a\":1,\"b\":2}")?;
    assert_eq!(
        value,
        Value::Object(vec![("a".into(), 1.into()), ("b".into(), 2.into())])
    );
    Ok(())
}

#[test]
fn decode_preserves_document_key_order() -> Result<(), Box<dyn std::error::Error>> {
    let value = decode("{\"z\":1,\"a\":2,\"m\":3}")?;
    let Value::Object(entries) = value else {
        panic!("expected an object");
    };
    let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["z", "a", "m"]);
    Ok(())
}

#[test]
fn decode_scalars_and_arrays() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(decode("3")?, Value::from(3i64));
    assert_eq!(decode("\"x\"")?, Value::from("x"));
    assert_eq!(decode("null")?, Value::Null);
    assert_eq!(
        decode("[1,2.5,true]")?,
        Value::Array(vec![1.into(), 2.5.into(), true.into()])
    );
    Ok(())
}

#[test]
fn empty_input_is_an_error() {
    let err = decode("").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert_eq!(err.classify(), Some(Category::Eof));
}

#[test]
fn truncated_input_is_an_error() {
    let err = decode("{\"a\":1,\"b\":2").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn malformed_input_keeps_the_codec_message() {
    let err = decode("{'a': '1'}").unwrap_err();
    let Error::Decode { message, source } = &err else {
        panic!("expected a decode error");
    };
    assert!(!message.is_empty());
    assert!(source.is_some());
    assert_eq!(err.classify(), Some(Category::Syntax));
}

#[test]
fn nesting_beyond_max_depth_is_an_error() {
    let options = DecodeOptions { max_depth: 2 };
    assert!(decode_with("[[1]]", &options).is_ok());

    let err = decode_with("[[[1]]]", &options).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    // Depth overflow is detected by this crate, not the codec.
    assert_eq!(err.classify(), None);
}

#[test]
fn default_depth_accepts_realistic_nesting() -> Result<(), Box<dyn std::error::Error>> {
    let text = format!("{}1{}", "[".repeat(64), "]".repeat(64));
    assert!(decode(&text).is_ok());
    Ok(())
}

#[derive(Debug, PartialEq, serde::Deserialize)]
struct Point {
    x: i64,
    y: i64,
}

#[test]
fn decode_to_caller_defined_type() -> Result<(), Box<dyn std::error::Error>> {
    let point: Point = decode_to("{\"x\":1,\"y\":2}")?;
    assert_eq!(point, Point { x: 1, y: 2 });
    Ok(())
}

#[test]
fn decode_to_reports_type_mismatches() {
    let err = decode_to::<Point>("{\"x\":1}").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert_eq!(err.classify(), Some(Category::Data));
}

#[test]
fn decode_from_reader_matches_decode() -> Result<(), Box<dyn std::error::Error>> {
    let text = "{\"a\":[1,2],\"b\":null}";
    let from_reader = jsonkit::decode_from_reader(text.as_bytes(), &DecodeOptions::default())?;
    assert_eq!(from_reader, decode(text)?);
    Ok(())
}
