#![no_main]
use libfuzzer_sys::fuzz_target;

// Input is `<data json>\0<schema json>`; either half may be garbage.
fuzz_target!(|data: &[u8]| {
    let mut parts = data.splitn(2, |b| *b == 0);
    let data = parts.next().and_then(|d| std::str::from_utf8(d).ok());
    let schema = parts.next().and_then(|s| std::str::from_utf8(s).ok());

    let Some(Ok(value)) = data.map(serde_json::from_str::<a2x::Value>) else {
        return;
    };
    let schema = schema.and_then(|s| serde_json::from_str::<a2x::Schema>(s).ok());

    let first = a2x::to_xml(&value, schema.as_ref());
    let second = a2x::to_xml(&value, schema.as_ref());
    assert_eq!(first, second);
});
