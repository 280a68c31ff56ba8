use zenith::{bit_scan_forward, initialize_popcount_table, popcount};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const BOARDS: [u64; 6] = [
    0x0000000000000001,
    0x8000000000000000,
    0xffff00000000ffff,
    0x0042001800240000,
    0xdeadbeefcafebabe,
    0xffffffffffffffff,
];

fn popcount_bench(c: &mut Criterion) {
    initialize_popcount_table();

    c.bench_function("popcount", |b| {
        b.iter(|| {
            BOARDS
                .iter()
                .map(|bb| popcount(black_box(*bb)))
                .sum::<u32>()
        })
    });
}

fn bit_scan_forward_bench(c: &mut Criterion) {
    c.bench_function("bit scan forward", |b| {
        b.iter(|| {
            BOARDS
                .iter()
                .filter_map(|bb| bit_scan_forward(black_box(*bb)).ok())
                .sum::<u32>()
        })
    });
}

fn serialize_squares(c: &mut Criterion) {
    c.bench_function("serialize set squares", |b| {
        b.iter(|| {
            let mut count = 0;
            for bb in BOARDS.iter() {
                let mut board = black_box(*bb);
                while let Ok(index) = bit_scan_forward(board) {
                    count += index;
                    board &= board - 1;
                }
            }
            count
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = popcount_bench, bit_scan_forward_bench, serialize_squares
}
criterion_main!(benches);
