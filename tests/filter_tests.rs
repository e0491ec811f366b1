use pandoc_filter::{
    from_str, run_filter, to_string, Error, FilterOptions, Rewrite, Tag, Value, ValueMap,
};
use std::io::Cursor;

const DOC: &str = r#"[{"unMeta":{}},[{"t":"Para","c":[{"t":"Str","c":"a"},{"t":"Space","c":[]},{"t":"Str","c":"b"}]}]]"#;

fn run<F>(input: &str, options: &FilterOptions, action: F) -> Result<String, Error>
where
    F: FnMut(&Tag, &Value, &str, &ValueMap) -> Result<Rewrite, Error>,
{
    let mut action = action;
    let mut out = Vec::new();
    run_filter(Cursor::new(input), &mut out, &mut action, options)?;
    Ok(String::from_utf8(out).unwrap())
}

fn keep(_: &Tag, _: &Value, _: &str, _: &ValueMap) -> Result<Rewrite, Error> {
    Ok(Rewrite::Keep)
}

#[test]
fn test_identity_filter_reproduces_input() {
    let out = run(DOC, &FilterOptions::default(), keep).unwrap();
    assert_eq!(out, format!("{DOC}\n"));
}

#[test]
fn test_format_reaches_action() {
    let options = FilterOptions::new().with_format("latex");
    let mut seen = Vec::new();
    run(DOC, &options, |_, _, format, _| {
        seen.push(format.to_string());
        Ok(Rewrite::Keep)
    })
    .unwrap();
    assert_eq!(seen.len(), 4);
    assert!(seen.iter().all(|format| format == "latex"));
}

#[test]
fn test_missing_format_is_empty() {
    let mut formats = Vec::new();
    run(DOC, &FilterOptions::default(), |_, _, format, _| {
        formats.push(format.to_string());
        Ok(Rewrite::Keep)
    })
    .unwrap();
    assert!(formats.iter().all(String::is_empty));
}

#[test]
fn test_meta_reaches_action() {
    let input = r#"[{"unMeta":{"lang":{"t":"MetaString","c":"fr"}}},[{"t":"Str","c":"x"}]]"#;
    let mut langs = Vec::new();
    run(input, &FilterOptions::default(), |tag, _, _, meta| {
        if *tag == Tag::Str {
            langs.push(meta.get("lang").and_then(Value::as_node).map(|node| node.content().clone()));
        }
        Ok(Rewrite::Keep)
    })
    .unwrap();
    assert_eq!(langs, vec![Some(Value::from("fr"))]);
}

#[test]
fn test_action_error_writes_nothing() {
    let mut out = Vec::new();
    let mut fail = |_: &Tag, _: &Value, _: &str, _: &ValueMap| -> Result<Rewrite, Error> {
        Err(Error::action("refused"))
    };
    let err = run_filter(Cursor::new(DOC), &mut out, &mut fail, &FilterOptions::default())
        .unwrap_err();
    assert_eq!(err, Error::Action("refused".to_string()));
    assert!(out.is_empty());
}

#[test]
fn test_missing_meta_is_rejected() {
    let err = run(r#"{"blocks":[]}"#, &FilterOptions::default(), keep).unwrap_err();
    assert!(matches!(err, Error::MissingMeta(_)));
}

#[test]
fn test_invalid_json_is_rejected() {
    let err = run("not json", &FilterOptions::default(), keep).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_html_characters_are_hex_escaped() {
    let input = r#"[{"unMeta":{}},[{"t":"RawBlock","c":["html","<b>&</b>"]}]]"#;
    let out = run(input, &FilterOptions::default(), keep).unwrap();
    assert!(out.contains(r#""\u003Cb\u003E\u0026\u003C/b\u003E""#));
    assert!(!out.contains('<'));

    let plain = FilterOptions::new().with_hex_escapes(false);
    let out = run(input, &plain, keep).unwrap();
    assert!(out.contains(r#""<b>&</b>""#));
}

#[test]
fn test_escaped_output_parses_back() {
    let input = r#"[{"unMeta":{}},[{"t":"Para","c":[{"t":"Str","c":"a<b"}]}]]"#;
    let out = run(input, &FilterOptions::default(), keep).unwrap();
    assert_eq!(from_str(out.trim_end()).unwrap(), from_str(input).unwrap());
}

#[test]
fn test_deletion_in_filter() {
    let out = run(DOC, &FilterOptions::default(), |tag, _, _, _| {
        Ok(match tag {
            Tag::Space => Rewrite::Splice(vec![]),
            _ => Rewrite::Keep,
        })
    })
    .unwrap();
    let doc = from_str(out.trim_end()).unwrap();
    assert_eq!(
        to_string(&doc).unwrap(),
        r#"[{"unMeta":{}},[{"t":"Para","c":[{"t":"Str","c":"a"},{"t":"Str","c":"b"}]}]]"#
    );
}

#[test]
fn test_pretty_output() {
    let out = run(DOC, &FilterOptions::pretty(), keep).unwrap();
    assert!(out.starts_with("[\n  {\n"));
    assert_eq!(from_str(&out).unwrap(), from_str(DOC).unwrap());
}
