use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pandoc_filter::elements::{EMPH, HEADER, PARA, SPACE, STR};
use pandoc_filter::{
    from_str, stringify, to_string, Document, Error, Rewrite, Tag, Value, ValueMap,
};

fn make_document(paragraphs: usize) -> Document {
    let body = (0..paragraphs)
        .map(|i| {
            if i % 10 == 0 {
                let attr = Value::Array(vec![
                    Value::from(format!("sec-{i}")),
                    Value::Array(vec![]),
                    Value::Array(vec![]),
                ]);
                let title = Value::Array(vec![STR.value([Value::from(format!("Section {i}"))]).unwrap()]);
                return HEADER.value([Value::from(2), attr, title]).unwrap();
            }
            let inlines = (0..20)
                .flat_map(|j| {
                    let word = STR.value([Value::from(format!("word{j}"))]).unwrap();
                    let word = if j % 5 == 0 {
                        EMPH.value([Value::Array(vec![word])]).unwrap()
                    } else {
                        word
                    };
                    [word, SPACE.value([]).unwrap()]
                })
                .collect();
            PARA.value([Value::Array(inlines)]).unwrap()
        })
        .collect();
    Document::new(ValueMap::new(), body)
}

fn uppercase(_: &Tag, content: &Value, _: &str, _: &ValueMap) -> Result<Rewrite, Error> {
    Ok(content.as_str().map(str::to_uppercase).into())
}

fn benchmark_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    for size in [10, 100, 1000].iter() {
        let doc = make_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| black_box(doc).walk(&mut uppercase, "html"))
        });
    }
    group.finish();
}

fn benchmark_walk_splice(c: &mut Criterion) {
    let doc = make_document(100);
    let mut drop_spaces = |tag: &Tag, _: &Value, _: &str, _: &ValueMap| {
        Ok::<_, Error>(match tag {
            Tag::Space => Rewrite::Splice(vec![]),
            _ => Rewrite::Keep,
        })
    };
    c.bench_function("walk_splice", |b| {
        b.iter(|| black_box(&doc).walk(&mut drop_spaces, ""))
    });
}

fn benchmark_stringify(c: &mut Criterion) {
    let doc = Value::from(make_document(100));
    c.bench_function("stringify", |b| b.iter(|| stringify(black_box(&doc))));
}

fn benchmark_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("json");

    for size in [10, 100, 1000].iter() {
        let json = to_string(&make_document(*size)).unwrap();
        group.bench_with_input(BenchmarkId::new("parse", size), &json, |b, json| {
            b.iter(|| from_str(black_box(json)))
        });

        let doc = make_document(*size);
        group.bench_with_input(BenchmarkId::new("write", size), &doc, |b, doc| {
            b.iter(|| to_string(black_box(doc)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_walk,
    benchmark_walk_splice,
    benchmark_stringify,
    benchmark_json
);
criterion_main!(benches);
