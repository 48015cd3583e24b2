use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cube_demos::mesh::{face_colored_cube, parse_obj, uv_sphere, FaceColors};
use std::fmt::Write;

/// Build OBJ text for a grid of `n * n` quads, faces written as quads
fn grid_obj(n: usize) -> String {
    let mut source = String::new();
    for z in 0..=n {
        for x in 0..=n {
            let _ = writeln!(source, "v {} 0 {}", x as f32, z as f32);
        }
    }
    source.push_str("vn 0 1 0\n");
    let row = n + 1;
    for z in 0..n {
        for x in 0..n {
            let a = z * row + x + 1;
            let _ = writeln!(
                source,
                "f {}//1 {}//1 {}//1 {}//1",
                a,
                a + row,
                a + row + 1,
                a + 1
            );
        }
    }
    source
}

fn bench_face_colored_cube(c: &mut Criterion) {
    let colors = FaceColors::uniform([1.0, 0.5, 0.25, 1.0]);
    c.bench_function("face_colored_cube", |b| {
        b.iter(|| black_box(face_colored_cube(black_box(&colors))))
    });
}

fn bench_uv_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("uv_sphere");
    for resolution in [16u32, 32, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            &resolution,
            |b, &res| b.iter(|| black_box(uv_sphere(0.5, res, res * 2, [1.0, 0.0, 0.0, 1.0]))),
        );
    }
    group.finish();
}

fn bench_parse_obj(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_obj");
    for n in [8usize, 32, 128] {
        let source = grid_obj(n);
        group.bench_with_input(BenchmarkId::new("grid", n), &source, |b, source| {
            b.iter(|| black_box(parse_obj(black_box(source), [1.0; 4])))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_face_colored_cube,
    bench_uv_sphere,
    bench_parse_obj
);
criterion_main!(benches);
