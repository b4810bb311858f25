use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pubsuffix::resolver::{ResolverConfig, SuffixResolver};

fn bench_psl_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("psl_lookup");

    // Test domains
    let domains = vec![
        "com",
        "co.uk",
        "github.io",
        "example.com",
        "google.com",
        "sub.example.com",
        "www.city.kobe.jp",
        "www.食狮.公司.cn",
    ];

    let cached = SuffixResolver::new();
    group.bench_function("cached_1000_mixed_domains", |b| {
        b.iter(|| {
            for _ in 0..125 {
                for domain in &domains {
                    black_box(cached.resolve(domain).ok());
                }
            }
        });
    });

    let uncached = SuffixResolver::with_config(ResolverConfig::default().without_cache())
        .expect("embedded list");
    group.bench_function("uncached_mixed_domains", |b| {
        b.iter(|| {
            for domain in &domains {
                black_box(uncached.resolve(domain).ok());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_psl_lookup);
criterion_main!(benches);
