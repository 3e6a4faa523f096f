//! Benchmarks for polymesh-io operations.
//!
//! Run with: cargo bench -p polymesh-io
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p polymesh-io -- --save-baseline main
//! 2. After changes: cargo bench -p polymesh-io -- --baseline main

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use polymesh_io::{load_obj, save_stl};
use std::fmt::Write as _;
use tempfile::tempdir;

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// Generate OBJ text for an n x n grid of quads in the XY plane.
fn grid_obj(n: usize) -> String {
    let mut text = String::new();

    for y in 0..=n {
        for x in 0..=n {
            let _ = writeln!(text, "v {x} {y} 0");
        }
    }

    let stride = n + 1;
    for y in 0..n {
        for x in 0..n {
            let a = y * stride + x + 1;
            let b = a + 1;
            let c = a + stride + 1;
            let d = a + stride;
            let _ = writeln!(text, "f {a} {b} {c} {d}");
        }
    }

    text
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_load_obj(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_obj");

    for n in [16_usize, 64] {
        let text = grid_obj(n);
        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.obj");
        std::fs::write(&path, &text).unwrap();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("grid_{n}x{n}"), |b| {
            b.iter(|| {
                let mesh = load_obj(black_box(&path)).unwrap();
                black_box(mesh.face_count())
            });
        });
    }

    group.finish();
}

fn bench_save_stl(c: &mut Criterion) {
    let mut group = c.benchmark_group("save_stl");

    for n in [16_usize, 64] {
        let dir = tempdir().unwrap();
        let obj_path = dir.path().join("grid.obj");
        std::fs::write(&obj_path, grid_obj(n)).unwrap();
        let mesh = load_obj(&obj_path).unwrap();
        let stl_path = dir.path().join("grid.stl");

        group.throughput(Throughput::Elements(mesh.triangle_count() as u64));
        group.bench_function(format!("grid_{n}x{n}"), |b| {
            b.iter(|| save_stl(black_box(&mesh), black_box(&stl_path)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load_obj, bench_save_stl);
criterion_main!(benches);
