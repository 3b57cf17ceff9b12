use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urlqs::{Config, EncodingMode, Location, PercentCodec, QueryMap};

const SIMPLE_QUERY: &str = "id=42&name=test_user&active";
const LATIN1_QUERY: &str = "q=cr%E8me+br%FBl%E9e&city=Z%FCrich&path=%2Fa%2Fb%40c&page=3";
const UTF8_QUERY: &str = "q=cr%C3%A8me+br%C3%BBl%C3%A9e&city=Z%C3%BCrich&path=%2Fa%2Fb%40c&page=3";

fn large_map() -> QueryMap {
    (0..100)
        .map(|i| (format!("key {i}"), format!("välue/{i}@host")))
        .collect()
}

fn encode_component(c: &mut Criterion) {
    for mode in [EncodingMode::Utf8, EncodingMode::Iso] {
        let codec = PercentCodec::new(mode);
        c.bench_function(&format!("encode_component_{mode:?}"), |b| {
            b.iter(|| codec.encode(black_box("crème brûlée / *@ 50% off")))
        });
    }
}

fn parse_simple(c: &mut Criterion) {
    let config = Config::default();
    c.bench_function("parse_simple", |b| {
        b.iter(|| config.parse_query(black_box(SIMPLE_QUERY)).unwrap())
    });
}

fn parse_encoded(c: &mut Criterion) {
    let utf8 = Config::new().use_utf8(true);
    let iso = Config::new().use_utf8(false);
    c.bench_function("parse_encoded_utf8", |b| {
        b.iter(|| utf8.parse_query(black_box(UTF8_QUERY)).unwrap())
    });
    c.bench_function("parse_encoded_iso", |b| {
        b.iter(|| iso.parse_query(black_box(LATIN1_QUERY)).unwrap())
    });
}

fn serialize_large(c: &mut Criterion) {
    let data = large_map();
    for mode in [EncodingMode::Utf8, EncodingMode::Iso] {
        let config = Config::new().encoding(mode);
        c.bench_function(&format!("serialize_large_{mode:?}"), |b| {
            b.iter(|| config.serialize_query(black_box(&data)))
        });
    }
}

fn record_to_url_string(c: &mut Criterion) {
    let current = Location::parse("https://example.com:8443/search?q=rust&page=2&debug#top", None);
    let config = Config::default();
    c.bench_function("record_to_url_string", |b| {
        b.iter(|| {
            let mut record = config.current_url(black_box(&current)).unwrap();
            record.query.insert("page", "3");
            record.to_url_string()
        })
    });
}

criterion_group!(codec, encode_component);
criterion_group!(query, parse_simple, parse_encoded, serialize_large);
criterion_group!(record, record_to_url_string);

criterion_main!(codec, query, record);
