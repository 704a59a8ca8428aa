use b58batch::{batched, reference, Alphabet, Batched, DoubleSha256, Encoder, Reference};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_max_160(c: &mut Criterion) {
    // 2^160 - 1
    let input = [0xffu8; 20];
    let mut scratch = vec![0u8; input.len() * 3];
    let mut group = c.benchmark_group("encode_160");
    group.bench_function("reference", |b| {
        b.iter(|| {
            reference::encode_with_scratch(black_box(&input), &mut scratch, &Alphabet::RIPPLE)
                .unwrap()
        })
    });
    group.bench_function("batched", |b| {
        b.iter(|| batched::encode(black_box(&input), &Alphabet::RIPPLE).unwrap())
    });
    group.finish();
}

fn bench_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_width");
    for len in [8usize, 20, 24, 32] {
        let input: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(37) | 1).collect();
        group.bench_with_input(BenchmarkId::new("reference", len), &input, |b, input| {
            b.iter(|| reference::encode(black_box(input), &Alphabet::BITCOIN))
        });
        group.bench_with_input(BenchmarkId::new("batched", len), &input, |b, input| {
            b.iter(|| batched::encode(black_box(input), &Alphabet::BITCOIN).unwrap())
        });
    }
    group.finish();
}

fn bench_with_checksum(c: &mut Criterion) {
    let mut buffer = [0u8; 24];
    buffer[4..].copy_from_slice(&[0xab; 20]);
    let mut group = c.benchmark_group("encode_with_checksum");
    group.bench_function("reference", |b| {
        b.iter(|| {
            Reference
                .encode_with_checksum(black_box(&buffer), &Alphabet::RIPPLE, &DoubleSha256)
                .unwrap()
        })
    });
    group.bench_function("batched", |b| {
        b.iter(|| {
            Batched
                .encode_with_checksum(black_box(&buffer), &Alphabet::RIPPLE, &DoubleSha256)
                .unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_max_160, bench_widths, bench_with_checksum);
criterion_main!(benches);
