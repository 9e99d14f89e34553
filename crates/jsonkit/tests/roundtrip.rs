use jsonkit::{EncodeOptions, Value, decode, encode, encode_with, html_encode};

fn compound() -> Value {
    Value::Object(vec![
        ("id".into(), 42.into()),
        ("name".into(), "ada".into()),
        ("score".into(), 2.5.into()),
        ("active".into(), true.into()),
        ("tags".into(), Value::Array(vec!["a".into(), "b".into()])),
        ("meta".into(), Value::Object(Vec::new())),
        ("none".into(), Value::Null),
    ])
}

#[test]
fn roundtrip_compound_value() -> Result<(), Box<dyn std::error::Error>> {
    let original = compound();
    assert_eq!(decode(&encode(&original)?)?, original);
    Ok(())
}

#[test]
fn roundtrip_preserves_key_order() -> Result<(), Box<dyn std::error::Error>> {
    let original = Value::Object(vec![
        ("z".into(), 1.into()),
        ("a".into(), 2.into()),
        ("m".into(), 3.into()),
    ]);
    let Value::Object(entries) = decode(&encode(&original)?)? else {
        panic!("expected an object");
    };
    let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["z", "a", "m"]);
    Ok(())
}

#[test]
fn escaped_output_is_still_valid_json() -> Result<(), Box<dyn std::error::Error>> {
    let original = Value::from("/🎁 & <more>");

    let escaped = encode_with(&original, &EncodeOptions::escape_all())?;
    assert_eq!(decode(&escaped)?, original);

    let html = html_encode(&original)?;
    assert_eq!(decode(&html)?, original);
    Ok(())
}

#[test]
fn roundtrip_empty_containers() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(decode(&encode(&Value::Array(Vec::new()))?)?, Value::Array(Vec::new()));
    assert_eq!(
        decode(&encode(&Value::Object(Vec::new()))?)?,
        Value::Object(Vec::new())
    );
    Ok(())
}
