use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ring_deque::RingBuffer;
use std::collections::VecDeque;

fn bench_ends(c: &mut Criterion) {
    let n = 1024;
    {
        let mut group = c.benchmark_group("VecDeque vs RingBuffer (PushBack 1024)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("RingBuffer<i32>", |b| {
            b.iter(|| {
                let mut d = RingBuffer::new();
                for i in 0..n {
                    d.push(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs RingBuffer (Rotate 1024)");
        let mut d_std: VecDeque<i32> = (0..n as i32).collect();
        let mut d_ring: RingBuffer<i32> = (0..n as i32).collect();

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for _ in 0..n {
                    if let Some(x) = d_std.pop_front() {
                        d_std.push_back(black_box(x));
                    }
                }
            })
        });

        group.bench_function("RingBuffer<i32>", |b| {
            b.iter(|| {
                for _ in 0..n {
                    if let Some(x) = d_ring.shift() {
                        d_ring.push(black_box(x));
                    }
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs RingBuffer (Get 1024)");
        let d_std: VecDeque<i32> = (0..n as i32).collect();
        let d_ring: RingBuffer<i32> = (0..n as i32).collect();

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_std.get(black_box(i)));
                }
            })
        });

        group.bench_function("RingBuffer<i32>", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_ring.get(black_box(i)));
                }
            })
        });
        group.finish();
    }
}

fn bench_edits(c: &mut Criterion) {
    let n = 1024;
    let mut group = c.benchmark_group("VecDeque vs RingBuffer (Remove near front 1024)");
    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut d: VecDeque<i32> = (0..n).collect();
            while d.len() > 8 {
                black_box(d.remove(3));
            }
            d
        })
    });

    group.bench_function("RingBuffer<i32>", |b| {
        b.iter(|| {
            let mut d: RingBuffer<i32> = (0..n).collect();
            while d.len() > 8 {
                black_box(d.remove(3));
            }
            d
        })
    });

    group.bench_function("RingBuffer<i32>::splice", |b| {
        b.iter(|| {
            let mut d: RingBuffer<i32> = (0..n).collect();
            for i in 0..64i32 {
                black_box(d.splice(black_box(i as isize * 8), 4, [i, i + 1]));
            }
            d
        })
    });
    group.finish();
}

criterion_group!(benches, bench_ends, bench_edits);
criterion_main!(benches);
