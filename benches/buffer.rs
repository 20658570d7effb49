//! Buffer benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use termbuf::{Buffer, CellAttributes};

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer");

    let text = "Hello, World! ".repeat(64);
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("write_chars", |b| {
        b.iter(|| {
            let mut buffer = Buffer::new(80, 24, 1000);
            buffer.write(&text);
            black_box(buffer)
        })
    });

    group.finish();
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer");

    // Push enough lines through a small screen to exercise eviction
    let lines: Vec<String> = (0..200)
        .map(|i| format!("Line {}: Some text content here\n", i))
        .collect();

    group.bench_function("scroll", |b| {
        b.iter(|| {
            let mut buffer = Buffer::new(80, 24, 100);
            for line in &lines {
                buffer.write(line);
            }
            black_box(buffer)
        })
    });

    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer");

    group.bench_function("insert_shift", |b| {
        b.iter(|| {
            let mut buffer = Buffer::new(80, 24, 100);
            for _ in 0..24 {
                buffer.set_cursor_pos(buffer.cursor_row(), 0);
                buffer.insert("shifted into place");
                buffer.newline();
            }
            black_box(buffer)
        })
    });

    group.finish();
}

fn bench_styled_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer");

    group.bench_function("styled_write", |b| {
        b.iter(|| {
            let mut buffer = Buffer::new(80, 24, 100);
            let mut attrs = CellAttributes::new();
            for i in 0..1000u32 {
                attrs.fg = i % 16;
                attrs.bold = i % 2 == 0;
                buffer.set_attributes(attrs);
                buffer.write("x");
            }
            black_box(buffer)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_write,
    bench_scroll,
    bench_insert,
    bench_styled_write
);
criterion_main!(benches);
