//! Performance benchmarks for sumtree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sumtree::test_utils::TestDir;
use sumtree::{FilterConfig, OutputConfig, ScanConfig, TreeFormatter, TreeScanner, aggregate};

const RUST_SOURCE: &str = r#"//! Module documentation

use std::path::Path;

/// Main function documentation
fn main() {
    println!("Hello, world!");
}
"#;

/// Build a tree of `dirs` directories holding `files_per_dir` files each.
fn create_test_tree(dirs: usize, files_per_dir: usize) -> TestDir {
    let tree = TestDir::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            tree.add_file(&format!("dir_{}/file_{}.rs", d, f), RUST_SOURCE);
        }
    }
    tree.add_file(".git/HEAD", "ref: refs/heads/main\n");
    tree.add_file("cache/module.pyc", "bytecode");
    tree
}

fn bench_scan(c: &mut Criterion) {
    let filters = FilterConfig::defaults().to_chain().unwrap();
    let mut group = c.benchmark_group("scan");

    let small = create_test_tree(5, 10);
    group.bench_function("small_tree_50_files", |b| {
        b.iter(|| {
            TreeScanner::new(ScanConfig::default(), &filters)
                .scan(black_box(small.path()))
                .unwrap()
        })
    });

    let large = create_test_tree(20, 50);
    group.bench_function("large_tree_1000_files", |b| {
        b.iter(|| {
            TreeScanner::new(ScanConfig::default(), &filters)
                .scan(black_box(large.path()))
                .unwrap()
        })
    });

    group.finish();
}

fn bench_render_and_aggregate(c: &mut Criterion) {
    let filters = FilterConfig::defaults().to_chain().unwrap();
    let tree = create_test_tree(20, 50);
    let root = TreeScanner::new(ScanConfig::default(), &filters)
        .scan(tree.path())
        .unwrap();
    let formatter = TreeFormatter::new(OutputConfig {
        use_color: false,
        ..Default::default()
    });

    let mut group = c.benchmark_group("report");
    group.bench_function("format", |b| b.iter(|| formatter.format(black_box(&root))));
    group.bench_function("aggregate", |b| b.iter(|| aggregate(black_box(&root))));
    group.finish();
}

fn bench_filter_chain(c: &mut Criterion) {
    let mut config = FilterConfig::defaults();
    config.extend(FilterConfig {
        names: (0..20).map(|i| format!("name_{}", i)).collect(),
        paths: (0..20).map(|i| format!("dir/path_{}", i)).collect(),
        patterns: vec![r"\.log$".into(), r"^build/".into(), r"~$".into()],
    });
    let chain = config.to_chain().unwrap();

    let mut group = c.benchmark_group("filter_chain");
    group.bench_function("miss", |b| {
        b.iter(|| chain.is_excluded(black_box("main.rs"), black_box("src/main.rs")))
    });
    group.bench_function("early_hit", |b| {
        b.iter(|| chain.is_excluded(black_box("mod.pyc"), black_box("mod.pyc")))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scan,
    bench_render_and_aggregate,
    bench_filter_chain,
);
criterion_main!(benches);
