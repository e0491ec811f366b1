use pandoc_filter::{pandoc, Node, Number, Tag, Value, ValueMap};

#[test]
fn test_pandoc_macro_null() {
    assert_eq!(pandoc!(null), Value::Null);
}

#[test]
fn test_pandoc_macro_booleans() {
    assert_eq!(pandoc!(true), Value::Bool(true));
    assert_eq!(pandoc!(false), Value::Bool(false));
}

#[test]
fn test_pandoc_macro_numbers() {
    assert_eq!(pandoc!(2), Value::Number(Number::Integer(2)));
    assert_eq!(pandoc!(1.5), Value::Number(Number::Float(1.5)));
    assert_eq!(pandoc!(-3), Value::Number(Number::Integer(-3)));
}

#[test]
fn test_pandoc_macro_strings() {
    assert_eq!(pandoc!("Hello"), Value::String("Hello".to_string()));
    let owned = String::from("owned");
    assert_eq!(pandoc!(owned), Value::String("owned".to_string()));
}

#[test]
fn test_pandoc_macro_attr_triple() {
    let attr = pandoc!(["sec", ["unnumbered"], [["lang", "en"]]]);
    let items = attr.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Value::from("sec"));
    assert_eq!(items[1], Value::Array(vec![Value::from("unnumbered")]));
    assert_eq!(
        items[2],
        Value::Array(vec![Value::Array(vec![Value::from("lang"), Value::from("en")])])
    );
}

#[test]
fn test_pandoc_macro_builds_nodes() {
    let para = pandoc!({"t": "Para", "c": [{"t": "Str", "c": "Hi"}, {"t": "Space"}]});
    let expected = Node::new(
        Tag::Para,
        vec![
            Value::from(Node::new(Tag::Str, "Hi")),
            Value::from(Node::bare(Tag::Space)),
        ],
    );
    assert_eq!(para, Value::from(expected));
}

#[test]
fn test_pandoc_macro_unknown_tag() {
    let value = pandoc!({"t": "Figure", "c": []});
    assert_eq!(value.tag(), Some(&Tag::Other("Figure".to_string())));
}

#[test]
fn test_pandoc_macro_plain_objects() {
    let value = pandoc!({"unMeta": {}});
    let mut expected = ValueMap::new();
    expected.insert("unMeta".to_string(), Value::Object(ValueMap::new()));
    assert_eq!(value, Value::Object(expected));

    // A "t" that is not a string is not an element.
    let value = pandoc!({"t": 1, "c": 2});
    assert!(value.is_object());
}

#[test]
fn test_pandoc_macro_document() {
    let json = r#"[{"unMeta":{}},[{"t":"Para","c":[{"t":"Str","c":"x"}]}]]"#;
    let built = pandoc!([{"unMeta": {}}, [{"t": "Para", "c": [{"t": "Str", "c": "x"}]}]]);
    let parsed: Value = serde_json::from_str(json).unwrap();
    assert_eq!(built, parsed);
}
