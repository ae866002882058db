use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ragraph_lib::graph::ResourceGraph;
use std::hint::black_box;

/// A ring of `n` processes where each holds one resource and requests the next
fn ring(n: usize, closed: bool) -> ResourceGraph {
    let mut graph = ResourceGraph::with_history_limit(0);
    for i in 0..n {
        graph.add_process(&format!("P{i}")).unwrap();
        graph.add_resource(&format!("R{i}")).unwrap();
        graph.allocate_resource(&format!("P{i}"), &format!("R{i}")).unwrap();
    }
    let requests = if closed { n } else { n - 1 };
    for i in 0..requests {
        graph
            .request_resource(&format!("P{i}"), &format!("R{}", (i + 1) % n))
            .unwrap();
    }
    graph
}

fn bench_check_deadlock(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_deadlock");
    for n in [100, 1_000, 10_000] {
        let open = ring(n, false);
        let closed = ring(n, true);
        group.bench_with_input(BenchmarkId::new("no_cycle", n), &open, |b, g| {
            b.iter(|| black_box(g.check_deadlock()))
        });
        group.bench_with_input(BenchmarkId::new("ring_cycle", n), &closed, |b, g| {
            b.iter(|| black_box(g.check_deadlock()))
        });
    }
    group.finish();
}

fn bench_undo_redo(c: &mut Criterion) {
    c.bench_function("reset_undo_redo_1000", |b| {
        let mut graph = ring(1_000, true);
        b.iter(|| {
            graph.reset_graph();
            graph.undo();
            graph.redo();
            graph.undo();
        })
    });
}

criterion_group!(benches, bench_check_deadlock, bench_undo_redo);
criterion_main!(benches);
