use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use optflow_field::{FieldSize, FlowField};
use optflow_io::flo::{decode_flo, encode_flo};

fn bench_flo_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("FloCodec");

    let size = FieldSize {
        width: 640,
        height: 480,
    };
    let flow = FlowField::from_size_val(size, 0.25).unwrap();
    let bytes = encode_flo(&flow).unwrap();

    group.bench_function("encode", |b| b.iter(|| black_box(encode_flo(&flow)).unwrap()));

    group.bench_function("decode", |b| b.iter(|| black_box(decode_flo(&bytes)).unwrap()));

    group.finish();
}

criterion_group!(benches, bench_flo_codec);
criterion_main!(benches);
