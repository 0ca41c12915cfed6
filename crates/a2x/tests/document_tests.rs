use a2x::{to_xml, to_xml_with_config, Config, ErrorKind, Schema, Value, XmlDocument};

const PERSON: &str = r#"{
    "person": {
        "attributeName": "attribute value",
        "name": {"given": "first", "surname": "last"},
        "address": {
            "street1": "123 Somewhere",
            "street2": "",
            "city": "Anytown",
            "state": "AA",
            "country": "USA"
        },
        "age": 40,
        "contacts": [
            {"type": "email", "value": "user@domain.com"},
            {"type": "mobile", "value": "11235551234"}
        ]
    }
}"#;

const PERSON_SCHEMA: &str = r#"{
    "/person": {"attributes": ["attributeName"]},
    "/person/contacts": {"sendItemsAs": "contact"},
    "/person/contacts/contact": {"attributes": ["type"]}
}"#;

#[test]
fn test_person_with_schema() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(PERSON)?;
    let schema: Schema = serde_json::from_str(PERSON_SCHEMA)?;

    let doc = XmlDocument::new(&value, Some(&schema))?;
    let expected = concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        r#"<person attributeName="attribute value">"#,
        "<name><given>first</given><surname>last</surname></name>",
        "<address><street1>123 Somewhere</street1><street2></street2><city>Anytown</city><state>AA</state><country>USA</country></address>",
        "<age>40</age>",
        "<contacts>",
        r#"<contact type="email"><value>user@domain.com</value></contact>"#,
        r#"<contact type="mobile"><value>11235551234</value></contact>"#,
        "</contacts></person>",
    );
    assert_eq!(doc.as_xml(), expected);
    Ok(())
}

#[test]
fn test_person_without_schema() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(PERSON)?;

    let xml = to_xml(&value, None)?;
    let expected = concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        "<person><attributeName>attribute value</attributeName>",
        "<name><given>first</given><surname>last</surname></name>",
        "<address><street1>123 Somewhere</street1><street2></street2><city>Anytown</city><state>AA</state><country>USA</country></address>",
        "<age>40</age>",
        "<contacts>",
        "<contact><type>email</type><value>user@domain.com</value></contact>",
        "<contact><type>mobile</type><value>11235551234</value></contact>",
        "</contacts></person>",
    );
    assert_eq!(xml, expected);
    Ok(())
}

#[test]
fn test_minimal_person() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(
        r#"{"person": {"name": {"given": "first", "surname": "last"}, "age": 40}}"#,
    )?;
    let xml = to_xml(&value, None)?;
    assert_eq!(
        xml,
        r#"<?xml version="1.0" encoding="UTF-8"?><person><name><given>first</given><surname>last</surname></name><age>40</age></person>"#
    );
    Ok(())
}

#[test]
fn test_all_facets_combined() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(
        r#"{
        "person": {
            "attributeName": "attribute value",
            "name": {"given": "first", "surname": "last"},
            "age": 40,
            "contacts": [
                {"type": "email", "value": "user@domain.com"},
                {"type": "mobile", "value": "11235551234"}
            ],
            "children": [
                {"name": "kid one"},
                {"name": "kid two"}
            ]
        }
    }"#,
    )?;
    let schema: Schema = serde_json::from_str(
        r#"{
        "@namespaces": {"ns1": "urn:example:ns1", "ns2": "urn:example:ns2"},
        "/person": {"attributes": ["attributeName"]},
        "/person/contacts": {
            "sendItemsAs": "contact",
            "namespace": "ns1",
            "childNamespace": "ns2"
        },
        "/person/contacts/contact": {"attributes": ["type"]},
        "/person/children": {"sendItemsAs": "child", "includeWrappingTag": false}
    }"#,
    )?;

    let xml = to_xml(&value, Some(&schema))?;
    let expected = concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        r#"<person xmlns:ns1="urn:example:ns1" xmlns:ns2="urn:example:ns2" attributeName="attribute value">"#,
        "<name><given>first</given><surname>last</surname></name>",
        "<age>40</age>",
        "<ns1:contacts>",
        r#"<ns2:contact type="email"><ns2:value>user@domain.com</ns2:value></ns2:contact>"#,
        r#"<ns2:contact type="mobile"><ns2:value>11235551234</ns2:value></ns2:contact>"#,
        "</ns1:contacts>",
        "<child><name>kid one</name></child>",
        "<child><name>kid two</name></child>",
        "</person>",
    );
    assert_eq!(xml, expected);
    Ok(())
}

#[test]
fn test_explicit_namespace_beats_inherited() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value =
        serde_json::from_str(r#"{"root": {"contacts": [{"id": 1, "note": "x"}]}}"#)?;
    let schema: Schema = serde_json::from_str(
        r#"{
        "/root/contacts": {"childNamespace": "c"},
        "/root/contacts/contact/note": {"namespace": "n"}
    }"#,
    )?;
    let xml = to_xml(&value, Some(&schema))?;
    assert!(xml.ends_with(
        "<root><contacts><c:contact><c:id>1</c:id><n:note>x</n:note></c:contact></contacts></root>"
    ));
    Ok(())
}

#[test]
fn test_namespace_declarations_only_on_root() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(r#"{"a": {"b": {"c": 1}}}"#)?;
    let schema: Schema = serde_json::from_str(r#"{"@namespaces": {"x": "urn:x"}}"#)?;
    let xml = to_xml(&value, Some(&schema))?;
    assert_eq!(xml.matches("xmlns:x=\"urn:x\"").count(), 1);
    assert!(xml.contains(r#"<a xmlns:x="urn:x"><b><c>1</c></b></a>"#));
    Ok(())
}

#[test]
fn test_namespace_declarations_on_each_sequential_root_item() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(r#"[{"a": 1}, {"b": {"c": 2}}]"#)?;
    let schema: Schema = serde_json::from_str(r#"{"@namespaces": {"p": "urn:p"}}"#)?;
    let xml = to_xml(&value, Some(&schema))?;
    assert_eq!(
        xml,
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<item xmlns:p="urn:p"><a>1</a></item>"#,
            r#"<item xmlns:p="urn:p"><b><c>2</c></b></item>"#
        )
    );
    assert_eq!(xml.matches("xmlns:").count(), 2);
    Ok(())
}

#[test]
fn test_namespace_declarations_on_each_keyed_root_entry() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(r#"{"x": {"inner": {"leaf": 1}}, "y": {}}"#)?;
    let schema: Schema =
        serde_json::from_str(r#"{"@namespaces": {"p": "urn:p", "q": "urn:q"}}"#)?;
    let xml = to_xml(&value, Some(&schema))?;
    assert_eq!(
        xml,
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<x xmlns:p="urn:p" xmlns:q="urn:q"><inner><leaf>1</leaf></inner></x>"#,
            r#"<y xmlns:p="urn:p" xmlns:q="urn:q"></y>"#
        )
    );
    assert!(!xml.contains("<inner xmlns"));
    assert!(!xml.contains("<leaf xmlns"));
    Ok(())
}

#[test]
fn test_unwrapped_root_drops_declarations() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(r#"{"wrapper": {"a": 1, "b": 2}}"#)?;
    let schema: Schema = serde_json::from_str(
        r#"{"@namespaces": {"x": "urn:x"}, "/wrapper": {"includeWrappingTag": false}}"#,
    )?;
    let xml = to_xml(&value, Some(&schema))?;
    assert_eq!(xml, r#"<?xml version="1.0" encoding="UTF-8"?><a>1</a><b>2</b>"#);
    Ok(())
}

#[test]
fn test_malformed_schema_degrades_to_plain_nesting() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(r#"{"list": {"items": ["a", "b"]}}"#)?;
    let schema: Schema = serde_json::from_str(
        r#"{
        "@namespaces": ["not", "a", "map"],
        "/list": "not a record",
        "/list/items": {"attributes": "id", "sendItemsAs": 3, "namespace": {}}
    }"#,
    )?;
    assert_eq!(to_xml(&value, Some(&schema))?, to_xml(&value, None)?);
    Ok(())
}

#[test]
fn test_large_integers_render_exactly() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(
        r#"{"order": {"id": 9007199254740993, "big": 12345678901234567890, "min": -9223372036854775808}}"#,
    )?;
    let xml = to_xml(&value, None)?;
    assert!(xml.ends_with(concat!(
        "<order><id>9007199254740993</id><big>12345678901234567890</big>",
        "<min>-9223372036854775808</min></order>"
    )));
    Ok(())
}

#[test]
fn test_large_integer_attribute() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(r#"{"order": {"id": 9007199254740993, "qty": 2}}"#)?;
    let schema: Schema = serde_json::from_str(r#"{"/order": {"attributes": ["id"]}}"#)?;
    let xml = to_xml(&value, Some(&schema))?;
    assert!(xml.ends_with(r#"<order id="9007199254740993"><qty>2</qty></order>"#));
    Ok(())
}

#[test]
fn test_scalar_root_is_error() {
    for value in [
        Value::from("not a collection"),
        Value::from(1),
        Value::Bool(true),
        Value::Null,
    ] {
        let err = XmlDocument::new(&value, None);
        assert!(matches!(
            err.map_err(|e| e.kind().clone()),
            Err(ErrorKind::NotCollection { .. })
        ));
    }
}

#[test]
fn test_empty_keyed_node_renders_empty() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(r#"{"root": {"empty": {}, "none": []}}"#)?;
    let xml = to_xml(&value, None)?;
    assert!(xml.ends_with("<root><empty></empty><none></none></root>"));
    Ok(())
}

#[test]
fn test_custom_config() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(r#"{"a": {"b": {"c": {"d": 1}}}}"#)?;
    let config = Config::new("1.1", "UTF-16");
    let xml = to_xml_with_config(&value, None, &config)?;
    assert!(xml.starts_with(r#"<?xml version="1.1" encoding="UTF-16"?><a>"#));

    let limited = to_xml_with_config(&value, None, &config.with_max_depth(2));
    assert!(matches!(
        limited.map_err(|e| e.kind().clone()),
        Err(ErrorKind::MaxDepthExceeded { max: 2 })
    ));
    Ok(())
}

#[test]
fn test_input_is_not_modified() -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(PERSON)?;
    let schema: Schema = serde_json::from_str(PERSON_SCHEMA)?;
    let before = value.clone();

    let first = to_xml(&value, Some(&schema))?;
    let second = to_xml(&value, Some(&schema))?;
    assert_eq!(first, second);
    assert_eq!(value, before);
    Ok(())
}
