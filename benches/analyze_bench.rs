//! Performance benchmarks for analysis and highlighting
//!
//! Input sizes mirror pasted classes: a handful of dependencies and up to a
//! few hundred methods.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use respmap::analysis::analyze;
use respmap::highlight::highlight;
use std::hint::black_box;

fn generate_class(dependencies: usize, methods: usize) -> String {
    let params: Vec<String> = (0..dependencies)
        .map(|i| format!("IService{i} service{i}"))
        .collect();
    let fields: Vec<String> = (0..dependencies)
        .map(|i| format!("    private readonly IService{i} _service{i} = service{i};"))
        .collect();
    let bodies: Vec<String> = (0..methods)
        .map(|m| {
            let first = m % dependencies.max(1);
            let second = (m * 7 + 3) % dependencies.max(1);
            format!(
                "    public async Task<Result> Handle{m}(Request request)\n    {{\n        // step {{ {m} }}\n        var value = await _service{first}.Load(request.Id, \"}}\");\n        if (value is null) {{ return Result.Empty; }}\n        return await _service{second}.Save(value);\n    }}"
            )
        })
        .collect();
    format!(
        "public class Generated({})\n{{\n{}\n\n{}\n}}\n",
        params.join(", "),
        fields.join("\n"),
        bodies.join("\n\n")
    )
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    for methods in [10, 100, 500] {
        let source = generate_class(6, methods);
        group.bench_with_input(BenchmarkId::from_parameter(methods), &source, |b, source| {
            b.iter(|| analyze(black_box(source), true))
        });
    }
    group.finish();
}

fn bench_highlight(c: &mut Criterion) {
    let source = generate_class(8, 100);
    let result = analyze(&source, true);

    c.bench_function("highlight_all", |b| {
        b.iter(|| highlight(black_box(&source), black_box(&result), None))
    });
    c.bench_function("highlight_selected", |b| {
        b.iter(|| highlight(black_box(&source), black_box(&result), Some("IService3")))
    });
}

criterion_group!(benches, bench_analyze, bench_highlight);
criterion_main!(benches);
