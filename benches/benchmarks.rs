use criterion::{black_box, criterion_group, criterion_main, Criterion};

use grna_finder::guide::{self, normalize, NoopObserver, ScanOpt};
use grna_finder::util::dna;

fn make_sequence(len: usize) -> Vec<u8> {
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = 42;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(dna::BASES[(x >> 16) as usize % 4]);
    }
    seq
}

fn make_fasta(len: usize) -> String {
    let seq = make_sequence(len);
    let mut raw = String::from(">bench\n");
    for line in seq.chunks(60) {
        raw.push_str(std::str::from_utf8(line).unwrap());
        raw.push('\n');
    }
    raw
}

fn bench_normalize(c: &mut Criterion) {
    let raw = make_fasta(10_000);
    c.bench_function("normalize_10k", |b| {
        b.iter(|| {
            black_box(normalize(black_box(&raw)).unwrap());
        })
    });
}

fn bench_revcomp(c: &mut Criterion) {
    let seq = make_sequence(10_000);
    c.bench_function("revcomp_10k", |b| {
        b.iter(|| {
            black_box(dna::revcomp(black_box(&seq)));
        })
    });
}

fn bench_scan(c: &mut Criterion) {
    let raw = make_fasta(100_000);
    let seq = normalize(&raw).unwrap();
    let serial = ScanOpt::default();
    let parallel = ScanOpt { parallel: true, ..ScanOpt::default() };

    c.bench_function("scan_100k", |b| {
        b.iter(|| {
            black_box(guide::scan_sequence(black_box(&seq), &serial, &NoopObserver));
        })
    });
    c.bench_function("scan_100k_parallel", |b| {
        b.iter(|| {
            black_box(guide::scan_sequence(black_box(&seq), &parallel, &NoopObserver));
        })
    });
}

criterion_group!(benches, bench_normalize, bench_revcomp, bench_scan);
criterion_main!(benches);
